use thiserror::Error;

/// Failures the web layer branches on.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum Error {
    #[error("validation failed: {}", .0.join("; "))]
    Validation(Vec<String>),

    #[error("storage error: {0}")]
    Storage(String),

    #[error("render error: {0}")]
    Render(String),
}

impl Error {
    pub fn storage<E: ToString>(err: E) -> Self {
        Self::Storage(err.to_string())
    }

    pub fn render<E: ToString>(err: E) -> Self {
        Self::Render(err.to_string())
    }
}
