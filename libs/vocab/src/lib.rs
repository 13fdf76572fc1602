#![forbid(unsafe_code)]
//! Closed vocabularies used by occurrence search parameters.
//!
//! Every vocabulary is looked up the same way: the input is upper-cased and
//! stripped of spaces, dots, underscores and dashes before it is compared to
//! the equally normalized variant names. Countries and languages additionally
//! resolve ISO codes.

mod country;
mod error;
mod language;
mod lookup;
mod vocabularies;

pub use country::Country;
pub use error::{Error, Result};
pub use language::Language;
pub use lookup::{lookup, normalize, VariantSet};
pub use vocabularies::{
    BASIS_OF_RECORD, CONTINENT, ENDPOINT_TYPE, ESTABLISHMENT_MEANS, LICENSE, MEDIA_TYPE,
    TYPE_STATUS,
};
