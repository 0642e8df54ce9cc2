use thiserror::Error;

#[derive(Error, Debug)]
pub enum ModelError {
    /// No node in the searched subtree matched the requested type or
    /// instance. Carries a description of what was searched for.
    #[error("Model not found: {0}")]
    ModelNotFound(String),
}

pub type Result<T> = std::result::Result<T, ModelError>;
