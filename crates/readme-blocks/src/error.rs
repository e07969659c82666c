//! Error types for readme-blocks

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Filesystem error: {0}")]
    Fs(#[from] readme_fs::Error),

    #[error("Invalid marker pair: {reason}")]
    InvalidMarkers { reason: String },

    #[error("Failed to build region pattern: {0}")]
    Pattern(#[from] regex::Error),

    #[error("Content generation failed: {message}")]
    Generator { message: String },
}

impl Error {
    pub fn generator(message: impl Into<String>) -> Self {
        Self::Generator {
            message: message.into(),
        }
    }
}
