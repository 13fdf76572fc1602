#![forbid(unsafe_code)]
//! Geometry capability used by search parameter validation.
//!
//! The validator only depends on [`GeometryEngine`]; [`WktEngine`] is the
//! default implementation and reads Well-Known Text through the `wkt` crate.

mod engine;
mod error;
mod model;
mod topology;

pub use engine::{GeometryEngine, WktEngine};
pub use error::{Error, Result};
pub use model::{Coord, Geometry, GeometryKind, Polygon};
pub use topology::{polygon_problem, ring_area, TopologyProblem};
