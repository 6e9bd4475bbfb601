//! Error types and handling infrastructure for JSON/XML conversion

use anyhow::Error;
use std::fmt;
use std::path::PathBuf;

/// Main error type for conversion operations
#[derive(Debug, thiserror::Error)]
pub enum ConversionError {
    #[error(transparent)]
    JsonParse(#[from] JsonParseError),

    #[error(transparent)]
    XmlParse(#[from] XmlParseError),

    #[error("IO error: {message}")]
    Io {
        message: String,
        path: Option<PathBuf>,
    },

    #[error("Invalid configuration: {message}")]
    Configuration { message: String },

    #[error(transparent)]
    Other(#[from] Error),
}

impl ConversionError {
    pub fn io(message: String, path: Option<PathBuf>) -> Self {
        Self::Io { message, path }
    }

    pub fn configuration(message: String) -> Self {
        Self::Configuration { message }
    }

    /// Create a user-friendly error message
    pub fn user_message(&self) -> String {
        match self {
            Self::JsonParse(err) => {
                if let Some((line, col)) = err.location {
                    format!(
                        "JSON parse error at line {}, column {}: {}",
                        line, col, err.message
                    )
                } else {
                    format!("JSON parse error: {}", err.message)
                }
            }
            Self::XmlParse(err) => {
                format!("XML parse error: {}", err)
            }
            Self::Io { message, path } => match path {
                Some(path) => format!("IO error ({}): {}", path.display(), message),
                None => format!("IO error: {}", message),
            },
            Self::Configuration { message } => {
                format!("Invalid configuration: {}", message)
            }
            Self::Other(err) => {
                format!("Unexpected error: {}", err)
            }
        }
    }
}

/// JSON parsing errors (malformed structured data)
#[derive(Debug, Clone)]
pub struct JsonParseError {
    pub message: String,
    pub location: Option<(usize, usize)>,
}

impl JsonParseError {
    pub fn new(message: String, location: Option<(usize, usize)>) -> Self {
        Self { message, location }
    }
}

impl fmt::Display for JsonParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)?;
        if let Some((line, col)) = self.location {
            write!(f, " at line {}, column {}", line, col)?;
        }
        Ok(())
    }
}

impl std::error::Error for JsonParseError {}

/// XML parsing errors (malformed documents)
#[derive(Debug, Clone)]
pub struct XmlParseError {
    pub message: String,
    pub position: Option<usize>,
}

impl XmlParseError {
    pub fn new(message: impl Into<String>, position: Option<usize>) -> Self {
        Self {
            message: message.into(),
            position,
        }
    }
}

impl fmt::Display for XmlParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)?;
        if let Some(position) = self.position {
            write!(f, " at byte offset {}", position)?;
        }
        Ok(())
    }
}

impl std::error::Error for XmlParseError {}

/// Result type for conversion operations
pub type ConversionResult<T> = Result<T, ConversionError>;

/// Convenience result type for JSON parsing operations
pub type JsonParseResult<T> = Result<T, JsonParseError>;

/// Convenience result type for XML parsing operations
pub type XmlParseResult<T> = Result<T, XmlParseError>;
