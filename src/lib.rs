//! xmlconv - JSON/XML converter
//!
//! A Rust CLI tool for converting between JSON and XML documents, with
//! canonical formatting, deterministic key sorting, and key-name case
//! conversion.

// Allow dead code for library exports that may not be used by the binary yet
#![allow(dead_code)]

pub mod cli;
pub mod conversion;
pub mod error;
pub mod formatter;
pub mod parser;
pub mod transform;

// Re-export commonly used types
pub use conversion::{
    json_to_xml, xml_to_json, ConversionConfig, ConversionEngine, ConversionResult,
    ConvertedDocument, DEFAULT_ROOT_NAME,
};
pub use error::{ConversionError, JsonParseError, XmlParseError};
pub use formatter::{format_json, format_xml};
pub use parser::{parse_json, serialize_json, Source};
pub use transform::{convert_case, remap_keys_deep, sort_keys_deep, CaseStyle};

/// Convert a parsed JSON value to an XML document with default configuration
pub fn convert_json(value: &serde_json::Value) -> Result<String, ConversionError> {
    let engine = ConversionEngine::new(ConversionConfig::default());
    Ok(engine.convert_json(value)?.content)
}

/// Convert an XML document to pretty-printed JSON text with default configuration
pub fn convert_xml(source: &str) -> Result<String, ConversionError> {
    let engine = ConversionEngine::new(ConversionConfig::default());
    Ok(engine.convert_xml(source)?.content)
}
