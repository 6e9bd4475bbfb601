//! Command-line interface module

use clap::{Parser, ValueEnum};
use std::path::{Path, PathBuf};

use crate::conversion::ConversionConfig;
use crate::transform::CaseStyle;

pub mod path_mapping;

/// Main CLI arguments
#[derive(Parser, Debug, Clone)]
#[command(name = "xmlconv")]
#[command(about = "Convert between JSON and XML documents")]
#[command(version = "0.1.0")]
#[command(long_about = None)]
pub struct Args {
    /// Input source (raw text, file, or directory)
    #[arg()]
    pub input: Option<String>,

    /// Output file or directory (default: stdout)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Read input from standard input
    #[arg(long)]
    pub stdin: bool,

    /// Conversion direction (inferred from the input when omitted)
    #[arg(short, long, value_enum)]
    pub direction: Option<Direction>,

    /// Root element name for JSON to XML conversion
    #[arg(long, default_value = "root")]
    pub root: String,

    /// Sort object keys recursively before converting
    #[arg(long)]
    pub sort_keys: bool,

    /// Rewrite object keys into the given case style
    #[arg(long, value_enum)]
    pub rename_keys: Option<KeyCase>,

    /// Reformat the input without converting it
    #[arg(long)]
    pub format_only: bool,

    /// Only validate the input, don't convert
    #[arg(long)]
    pub validate_only: bool,

    /// Recursively process directories
    #[arg(long)]
    pub recursive: bool,

    /// Continue converting other files when one file fails
    #[arg(long)]
    pub continue_on_error: bool,

    /// Output conversion statistics
    #[arg(long)]
    pub stats: bool,

    /// Suppress non-error output
    #[arg(long)]
    pub quiet: bool,
}

impl Args {
    /// Build the conversion configuration these arguments describe
    pub fn conversion_config(&self) -> ConversionConfig {
        ConversionConfig {
            root_name: self.root.clone(),
            sort_keys: self.sort_keys,
            rename_keys: self.rename_keys.map(Into::into),
        }
    }
}

/// Conversion direction
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// JSON input, XML output
    #[value(name = "json-to-xml", alias = "json-xml")]
    JsonToXml,
    /// XML input, JSON output
    #[value(name = "xml-to-json", alias = "xml-json")]
    XmlToJson,
}

impl Direction {
    /// File extension of the input format
    pub fn input_extension(&self) -> &'static str {
        match self {
            Direction::JsonToXml => "json",
            Direction::XmlToJson => "xml",
        }
    }

    /// File extension of the output format
    pub fn output_extension(&self) -> &'static str {
        match self {
            Direction::JsonToXml => "xml",
            Direction::XmlToJson => "json",
        }
    }
}

/// Key case styles for the CLI
#[derive(ValueEnum, Debug, Clone, Copy)]
pub enum KeyCase {
    Camel,
    Pascal,
    Snake,
    Kebab,
}

impl From<KeyCase> for CaseStyle {
    fn from(case: KeyCase) -> Self {
        match case {
            KeyCase::Camel => CaseStyle::Camel,
            KeyCase::Pascal => CaseStyle::Pascal,
            KeyCase::Snake => CaseStyle::Snake,
            KeyCase::Kebab => CaseStyle::Kebab,
        }
    }
}

/// Infer the conversion direction from a file extension, falling back to
/// the input's leading character.
pub fn infer_direction(path: Option<&Path>, content: &str) -> Direction {
    if let Some(path) = path {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => return Direction::JsonToXml,
            Some("xml") => return Direction::XmlToJson,
            _ => {}
        }
    }

    if content.trim_start().starts_with('<') {
        Direction::XmlToJson
    } else {
        Direction::JsonToXml
    }
}
