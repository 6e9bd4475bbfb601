//! Input sources and the JSON parse/print boundary

pub mod directory;

use crate::error::{ConversionError, ConversionResult, JsonParseError, JsonParseResult};
use serde_json::Value;
use std::io::Read;
use std::path::PathBuf;

/// Where conversion input comes from
#[derive(Debug, Clone)]
pub enum Source {
    /// Raw document text passed on the command line
    Text(String),
    /// Single input file path
    File(PathBuf),
    /// Directory containing multiple input files
    Directory(PathBuf),
    /// Standard input stream
    Stdin,
}

impl Source {
    /// Get a human-readable description of the source
    pub fn description(&self) -> String {
        match self {
            Source::Text(_) => "text input".to_string(),
            Source::File(path) => format!("file: {}", path.display()),
            Source::Directory(path) => format!("directory: {}", path.display()),
            Source::Stdin => "standard input".to_string(),
        }
    }

    /// Check if the source exists and is accessible
    pub fn exists(&self) -> bool {
        match self {
            Source::Text(_) => true,
            Source::File(path) => path.exists() && path.is_file(),
            Source::Directory(path) => path.exists() && path.is_dir(),
            Source::Stdin => true,
        }
    }

    /// Read the source as document text
    pub fn read_content(&self) -> Result<String, std::io::Error> {
        match self {
            Source::Text(content) => Ok(content.clone()),
            Source::File(path) => std::fs::read_to_string(path),
            Source::Stdin => {
                let mut buffer = String::new();
                std::io::stdin().read_to_string(&mut buffer)?;
                Ok(buffer)
            }
            Source::Directory(_) => Err(std::io::Error::new(
                std::io::ErrorKind::InvalidInput,
                "Cannot read directory as content",
            )),
        }
    }

    /// Read and parse the source as a JSON document
    pub fn parse_json(&self) -> JsonParseResult<Value> {
        let content = self
            .read_content()
            .map_err(|e| JsonParseError::new(format!("Failed to read input: {}", e), None))?;
        parse_json(&content)
    }
}

/// Parse JSON text, preserving object key order.
pub fn parse_json(content: &str) -> JsonParseResult<Value> {
    let trimmed = content.trim();
    if trimmed.is_empty() {
        return Err(JsonParseError::new("Empty JSON input".to_string(), None));
    }

    serde_json::from_str(trimmed).map_err(|e| {
        JsonParseError::new(format!("Invalid JSON: {}", e), error_location(&e))
    })
}

/// Serialize a JSON value with two-space indentation.
pub fn serialize_json(value: &Value) -> ConversionResult<String> {
    serde_json::to_string_pretty(value)
        .map_err(|e| ConversionError::Other(anyhow::anyhow!("Failed to serialize JSON: {}", e)))
}

fn error_location(error: &serde_json::Error) -> Option<(usize, usize)> {
    if error.line() == 0 {
        None
    } else {
        Some((error.line(), error.column()))
    }
}
