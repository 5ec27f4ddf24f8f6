use crate::{catalog::AccessError, model::DatasetKind};
use std::fmt;
use thiserror::Error as ThisError;

///
/// Error
///
/// Terminal error taxonomy for one pipeline invocation. Lookup and schema
/// failures are hard errors; paging inputs never error here (they clamp in
/// the windower). Each message names the offending identifier.
///

#[remain::sorted]
#[derive(Debug, ThisError)]
pub enum Error {
    /// Underlying storage read failed; propagated unchanged, never retried.
    #[error("data access failed for dataset '{dataset}': {source}")]
    DataAccessFailure {
        dataset: String,
        #[source]
        source: AccessError,
    },

    #[error("unable to locate dataset: {0}")]
    DatasetNotFound(String),

    #[error("field does not exist on dataset '{dataset}': {field}")]
    FieldNotFound { dataset: String, field: String },

    /// Empty or missing required identifier, detected before any lookup.
    #[error("empty or null {0} provided")]
    MissingArgument(&'static str),

    #[error("dataset exposes no usable schema: {0}")]
    SchemaUnavailable(String),

    #[error("dataset '{dataset}' is not a vector dataset: {kind}")]
    UnsupportedDatasetKind { dataset: String, kind: DatasetKind },
}

impl Error {
    /// Runtime classification used by metrics and diagnostics.
    #[must_use]
    pub const fn class(&self) -> ErrorClass {
        match self {
            Self::DataAccessFailure { .. } => ErrorClass::Access,
            Self::DatasetNotFound(_) | Self::FieldNotFound { .. } => ErrorClass::NotFound,
            Self::MissingArgument(_) => ErrorClass::Invalid,
            Self::SchemaUnavailable(_) => ErrorClass::Unavailable,
            Self::UnsupportedDatasetKind { .. } => ErrorClass::Unsupported,
        }
    }

    #[must_use]
    pub fn display_with_class(&self) -> String {
        format!("{}: {self}", self.class())
    }
}

///
/// ErrorClass
/// Runtime classification taxonomy; not a stable API.
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ErrorClass {
    Access,
    Invalid,
    NotFound,
    Unavailable,
    Unsupported,
}

impl fmt::Display for ErrorClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Access => "access",
            Self::Invalid => "invalid_argument",
            Self::NotFound => "not_found",
            Self::Unavailable => "unavailable",
            Self::Unsupported => "unsupported",
        };
        write!(f, "{label}")
    }
}

///
/// TESTS
///
