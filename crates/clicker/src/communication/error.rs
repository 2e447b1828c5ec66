use std::fmt;

#[derive(Debug)]
pub enum ExtractError<T> {
    /// The extracted message was of a different method than expected.
    MethodMismatch(T),
    /// Failed to deserialize the message.
    JsonError {
        method: String,
        error: serde_json::Error,
    },
}

impl<T: fmt::Debug> std::error::Error for ExtractError<T> {}

impl<T> fmt::Display for ExtractError<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExtractError::MethodMismatch(_) => write!(f, "method mismatch"),
            ExtractError::JsonError { method, error } => {
                write!(f, "invalid params for {}: {}", method, error)
            }
        }
    }
}
