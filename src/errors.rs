use thiserror::Error;

#[derive(Debug, Error)]
pub enum GraphError {
    #[error("index out of range: {0}")]
    OutOfRange(String),
    #[error("not found: {0}")]
    NotFound(String),
    #[error("io error: {0}")]
    Io(String),
    #[error("invalid input: {0}")]
    InvalidInput(String),
}

impl GraphError {
    pub fn out_of_range<T: Into<String>>(msg: T) -> Self {
        GraphError::OutOfRange(msg.into())
    }

    pub fn not_found<T: Into<String>>(msg: T) -> Self {
        GraphError::NotFound(msg.into())
    }

    pub fn io<T: Into<String>>(msg: T) -> Self {
        GraphError::Io(msg.into())
    }

    pub fn invalid_input<T: Into<String>>(msg: T) -> Self {
        GraphError::InvalidInput(msg.into())
    }
}
