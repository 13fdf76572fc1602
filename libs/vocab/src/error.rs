use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    #[error("cannot parse '{value}' into a known {vocabulary}")]
    UnknownVariant {
        vocabulary: &'static str,
        value: String,
    },

    #[error("unknown vocabulary '{0}'")]
    UnknownVocabulary(String),
}
