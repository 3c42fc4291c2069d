pub type EncoreResult<T> = Result<T, EncoreError>;

#[derive(thiserror::Error, Debug)]
pub enum EncoreError {
    #[error("validation error: {0}")]
    Validation(String),

    #[error("resource error: {0}")]
    Resource(String),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl EncoreError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn resource(msg: impl Into<String>) -> Self {
        Self::Resource(msg.into())
    }
}
