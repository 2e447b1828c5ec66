use std::fmt;

/// Returned when a [`crate::RunParam`] cannot be built from its source.
#[derive(Debug)]
pub enum MalformedInputError {
    /// The source text is not valid JSON.
    Json(serde_json::Error),
    /// The source is valid JSON but not an object, e.g. `null` or a number.
    UnsupportedSource(&'static str),
    /// A known key holds a value of the wrong JSON type.
    Field {
        field: &'static str,
        error: serde_json::Error,
    },
}

impl fmt::Display for MalformedInputError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MalformedInputError::Json(error) => write!(f, "malformed run request: {}", error),
            MalformedInputError::UnsupportedSource(kind) => write!(
                f,
                "malformed run request: expected JSON text or an object, got {}",
                kind
            ),
            MalformedInputError::Field { field, error } => {
                write!(f, "malformed run request: field `{}`: {}", field, error)
            }
        }
    }
}

impl std::error::Error for MalformedInputError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            MalformedInputError::Json(error) | MalformedInputError::Field { error, .. } => {
                Some(error)
            }
            MalformedInputError::UnsupportedSource(_) => None,
        }
    }
}

impl From<serde_json::Error> for MalformedInputError {
    fn from(error: serde_json::Error) -> Self {
        MalformedInputError::Json(error)
    }
}
