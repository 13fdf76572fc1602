use thiserror::Error;

use crate::model::GeometryKind;
use crate::topology::TopologyProblem;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    #[error("empty geometry")]
    Empty,

    #[error("cannot parse WKT: {0}")]
    Parse(String),

    #[error("unsupported geometry type {0}")]
    Unsupported(GeometryKind),

    #[error("coordinate ({x} {y}) has a latitude outside [-90, 90]")]
    OutOfBounds { x: f64, y: f64 },

    #[error("invalid geometry: {0}")]
    Invalid(String),
}

impl From<TopologyProblem> for Error {
    fn from(problem: TopologyProblem) -> Self {
        Error::Invalid(problem.to_string())
    }
}
