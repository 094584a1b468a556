//! Error types for the dominant_colors library

use thiserror::Error;

/// Result type alias for dominant_colors operations
pub type Result<T> = std::result::Result<T, AnalysisError>;

/// Error types for color analysis operations
#[derive(Error, Debug)]
pub enum AnalysisError {
    /// Image file could not be loaded or decoded
    #[error("Failed to load image: {message}")]
    ImageLoadError {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Generic processing error
    #[error("Processing error: {message}")]
    ProcessingError { message: String },
}

impl AnalysisError {
    /// Create an image load error with context
    pub fn image_load<E>(message: impl Into<String>, source: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::ImageLoadError {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create a processing error without an underlying source
    pub fn processing(message: impl Into<String>) -> Self {
        Self::ProcessingError {
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = AnalysisError::processing("something went wrong");
        assert_eq!(err.to_string(), "Processing error: something went wrong");
    }

    #[test]
    fn test_image_load_error_preserves_source() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let err = AnalysisError::image_load("could not open file", io_err);

        assert!(err.to_string().contains("could not open file"));
        assert!(std::error::Error::source(&err).is_some());
    }
}
