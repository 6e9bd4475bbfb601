//! JSON/XML conversion module
//!
//! This module contains the two directional converters, the engine that
//! wires them to the key transforms, and the conversion configuration.

pub mod config;
pub mod engine;
pub mod json_to_xml;
pub mod xml_to_json;

pub use config::ConversionConfig;
pub use engine::{
    convert_json_to_xml, convert_xml_to_json, ConversionEngine, ConvertedDocument,
};
pub use json_to_xml::{json_to_xml, DEFAULT_ROOT_NAME};
pub use xml_to_json::xml_to_json;

use crate::error::ConversionError;

/// Result type for conversion operations
pub type ConversionResult<T> = Result<T, ConversionError>;
