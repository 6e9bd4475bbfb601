//! Configuration options for JSON/XML conversion

use crate::conversion::json_to_xml::DEFAULT_ROOT_NAME;
use crate::transform::CaseStyle;

/// Conversion configuration options
#[derive(Debug, Clone)]
pub struct ConversionConfig {
    /// Element name for the document root when converting JSON to XML
    pub root_name: String,
    /// Sort object keys recursively before serializing
    pub sort_keys: bool,
    /// Rewrite object keys into the given case style before serializing
    pub rename_keys: Option<CaseStyle>,
}

impl Default for ConversionConfig {
    fn default() -> Self {
        Self {
            root_name: DEFAULT_ROOT_NAME.to_string(),
            sort_keys: false,
            rename_keys: None,
        }
    }
}

impl ConversionConfig {
    /// Check that the configuration can produce a well-formed document.
    pub fn validate(&self) -> Result<(), String> {
        if self.root_name.trim().is_empty() {
            return Err("Root element name must not be empty".to_string());
        }
        if !is_valid_element_name(&self.root_name) {
            return Err(format!(
                "'{}' is not a valid root element name",
                self.root_name
            ));
        }
        Ok(())
    }
}

/// A usable element name: starts with a letter or underscore, continues with
/// name characters. Namespace prefixes are out of scope, so ':' is rejected.
fn is_valid_element_name(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) if first.is_alphabetic() || first == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_alphanumeric() || matches!(c, '_' | '-' | '.'))
}
