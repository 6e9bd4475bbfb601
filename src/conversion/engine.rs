//! Core conversion engine wiring parsing, key transforms, and rendering

use crate::conversion::config::ConversionConfig;
use crate::conversion::json_to_xml::json_to_xml;
use crate::conversion::xml_to_json::xml_to_json;
use crate::conversion::ConversionResult;
use crate::error::ConversionError;
use crate::parser::serialize_json;
use crate::transform::{remap_keys_deep, sort_keys_deep};
use serde_json::Value;
use std::time::Instant;

/// Result of one conversion
#[derive(Debug, Clone)]
pub struct ConvertedDocument {
    pub content: String,
    pub metadata: ConversionMetadata,
}

impl ConvertedDocument {
    pub fn new(content: String, metadata: ConversionMetadata) -> Self {
        Self { content, metadata }
    }

    /// Get the converted output
    pub fn as_str(&self) -> &str {
        &self.content
    }

    /// Get the length of the output in bytes
    pub fn len(&self) -> usize {
        self.content.len()
    }

    /// Check if the output is empty
    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }
}

/// Metadata about the conversion process
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct ConversionMetadata {
    pub input_size: u64,
    pub output_size: u64,
    pub processing_time_ms: u64,
}

/// Main conversion engine
pub struct ConversionEngine {
    config: ConversionConfig,
}

impl ConversionEngine {
    /// Create a new conversion engine
    pub fn new(config: ConversionConfig) -> Self {
        Self { config }
    }

    /// Convert a parsed JSON value into an XML document.
    pub fn convert_json(&self, value: &Value) -> ConversionResult<ConvertedDocument> {
        let started = Instant::now();
        self.validate_config()?;

        let input_size = serde_json::to_string(value).map_or(0, |s| s.len() as u64);
        let value = self.apply_transforms(value);
        let content = json_to_xml(&value, &self.config.root_name);

        Ok(self.finish(content, input_size, started))
    }

    /// Convert JSON text into an XML document.
    pub fn convert_json_text(&self, source: &str) -> ConversionResult<ConvertedDocument> {
        let value = crate::parser::parse_json(source)?;
        let mut document = self.convert_json(&value)?;
        document.metadata.input_size = source.len() as u64;
        Ok(document)
    }

    /// Convert an XML document into pretty-printed JSON text.
    pub fn convert_xml(&self, source: &str) -> ConversionResult<ConvertedDocument> {
        let started = Instant::now();
        self.validate_config()?;

        let tree = xml_to_json(source)?;
        let tree = self.apply_transforms(&tree);
        let content = serialize_json(&tree)?;

        Ok(self.finish(content, source.len() as u64, started))
    }

    fn validate_config(&self) -> ConversionResult<()> {
        self.config
            .validate()
            .map_err(ConversionError::configuration)
    }

    /// Key renaming runs first so the sort order reflects the final names.
    fn apply_transforms(&self, value: &Value) -> Value {
        let mut value = value.clone();
        if let Some(style) = self.config.rename_keys {
            value = remap_keys_deep(&value, style);
        }
        if self.config.sort_keys {
            value = sort_keys_deep(&value);
        }
        value
    }

    fn finish(&self, content: String, input_size: u64, started: Instant) -> ConvertedDocument {
        let metadata = ConversionMetadata {
            input_size,
            output_size: content.len() as u64,
            processing_time_ms: started.elapsed().as_millis() as u64,
        };
        ConvertedDocument::new(content, metadata)
    }
}

/// Convert a JSON value to XML with the given configuration
pub fn convert_json_to_xml(
    value: &Value,
    config: &ConversionConfig,
) -> ConversionResult<ConvertedDocument> {
    let engine = ConversionEngine::new(config.clone());
    engine.convert_json(value)
}

/// Convert XML text to JSON with the given configuration
pub fn convert_xml_to_json(
    source: &str,
    config: &ConversionConfig,
) -> ConversionResult<ConvertedDocument> {
    let engine = ConversionEngine::new(config.clone());
    engine.convert_xml(source)
}
