//! Rendering of a parsed JSON value as an indented XML document

use quick_xml::escape::escape;
use serde_json::Value;

/// Root element name used when the caller does not supply one
pub const DEFAULT_ROOT_NAME: &str = "root";

const XML_DECLARATION: &str = "<?xml version=\"1.0\" encoding=\"UTF-8\"?>";
const INDENT: &str = "  ";

/// Render a JSON value as an XML document rooted at `root_name`.
///
/// Objects become nested elements, arrays become repeated sibling elements
/// sharing the array's key as tag name, scalars become text content, and
/// null becomes a self-closing empty element. The output starts with an XML
/// declaration and uses two-space indentation.
///
/// The input value is not validated here; object keys are assumed to be
/// usable element names.
pub fn json_to_xml(value: &Value, root_name: &str) -> String {
    let mut out = String::new();
    out.push_str(XML_DECLARATION);
    out.push('\n');
    render(value, root_name, 0, &mut out);
    out.trim().to_string()
}

fn render(value: &Value, name: &str, depth: usize, out: &mut String) {
    let indent = INDENT.repeat(depth);

    match value {
        Value::Null => {
            out.push_str(&format!("{}<{} />\n", indent, name));
        }
        Value::Object(map) => {
            out.push_str(&format!("{}<{}>\n", indent, name));
            for (key, child) in map {
                render(child, key, depth + 1, out);
            }
            out.push_str(&format!("{}</{}>\n", indent, name));
        }
        Value::Array(items) => {
            // Repeated siblings under the parent, at the array's own depth
            for item in items {
                render(item, name, depth, out);
            }
        }
        Value::String(text) => render_scalar(text, name, &indent, out),
        Value::Number(number) => render_scalar(&number.to_string(), name, &indent, out),
        Value::Bool(flag) => render_scalar(&flag.to_string(), name, &indent, out),
    }
}

fn render_scalar(text: &str, name: &str, indent: &str, out: &mut String) {
    out.push_str(&format!("{}<{}>{}</{}>\n", indent, name, escape(text), name));
}
