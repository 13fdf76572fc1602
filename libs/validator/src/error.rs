use std::fmt;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Why a raw value was rejected.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// The text does not satisfy the grammar of the declared type.
    #[error("{0}")]
    InvalidValue(String),

    /// Range syntax is fine but the bounds are out of order, or the range has
    /// the wrong number of parts.
    #[error("{0}")]
    InvalidRange(String),

    #[error(transparent)]
    InvalidGeometry(#[from] lichen_geometry::Error),

    #[error("unknown search parameter '{0}'")]
    UnknownParameter(String),
}

impl Error {
    pub(crate) fn value(message: impl Into<String>) -> Self {
        Error::InvalidValue(message.into())
    }

    pub(crate) fn range(message: impl Into<String>) -> Self {
        Error::InvalidRange(message.into())
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::InvalidValue(_) => ErrorKind::InvalidValue,
            Error::InvalidRange(_) => ErrorKind::InvalidRange,
            Error::InvalidGeometry(_) => ErrorKind::InvalidGeometry,
            Error::UnknownParameter(_) => ErrorKind::UnknownParameter,
        }
    }
}

impl From<lichen_vocab::Error> for Error {
    fn from(err: lichen_vocab::Error) -> Self {
        Error::InvalidValue(err.to_string())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    InvalidValue,
    InvalidRange,
    InvalidGeometry,
    UnknownParameter,
}

impl ErrorKind {
    pub fn as_str(self) -> &'static str {
        match self {
            ErrorKind::InvalidValue => "invalid-value",
            ErrorKind::InvalidRange => "invalid-range",
            ErrorKind::InvalidGeometry => "invalid-geometry",
            ErrorKind::UnknownParameter => "unknown-parameter",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A rejected `(parameter, value)` pair, ready to be reported as a bad request.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("value '{value}' invalid for search parameter {parameter}: {cause}")]
pub struct ValidationError {
    pub parameter: String,
    pub value: String,
    #[source]
    pub cause: Error,
}

impl ValidationError {
    pub fn new(parameter: impl Into<String>, value: impl Into<String>, cause: Error) -> Self {
        Self {
            parameter: parameter.into(),
            value: value.into(),
            cause,
        }
    }

    pub fn kind(&self) -> ErrorKind {
        self.cause.kind()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_error_names_parameter_and_value() {
        let err = ValidationError::new("MONTH", "13", Error::value("month must be between 1 and 12"));
        assert_eq!(err.kind(), ErrorKind::InvalidValue);
        assert_eq!(
            err.to_string(),
            "value '13' invalid for search parameter MONTH: month must be between 1 and 12"
        );
    }

    #[test]
    fn geometry_errors_keep_their_kind() {
        let err: Error = lichen_geometry::Error::Empty.into();
        assert_eq!(err.kind(), ErrorKind::InvalidGeometry);
    }
}
