//! Parsing of an XML document into a JSON tree
//!
//! quick-xml does the tokenization and well-formedness checking; this module
//! collects events into an intermediate element tree and shapes that tree
//! into a JSON value using the `@attributes` / `#text` key conventions.

use crate::error::{XmlParseError, XmlParseResult};
use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;
use serde_json::{Map, Value};

/// Attribute map key on elements that carry attributes
pub const ATTRIBUTES_KEY: &str = "@attributes";

/// Text content key on elements that carry both attributes and plain text
pub const TEXT_KEY: &str = "#text";

/// Parsed element before shaping into a JSON value.
///
/// `text` is `Some("")` when the element contained only whitespace text;
/// that distinction drives the empty-content collapse in [`shape_element`].
#[derive(Debug)]
struct Element {
    name: String,
    attributes: Vec<(String, String)>,
    text: Option<String>,
    children: Vec<Element>,
}

impl Element {
    fn new(name: String, attributes: Vec<(String, String)>) -> Self {
        Self {
            name,
            attributes,
            text: None,
            children: Vec::new(),
        }
    }
}

/// Parse an XML document into a single-entry object mapping the root
/// element's name to its recursively shaped content.
///
/// Shaping rules: a text-only element becomes a string, attributes land
/// under `@attributes`, text next to attributes lands under `#text`, and
/// repeated sibling tag names are merged into an array. Whitespace-only
/// text does not contribute content.
///
/// Fails without returning a partial tree if the document is not
/// well-formed.
pub fn xml_to_json(source: &str) -> XmlParseResult<Value> {
    let root = parse_document(source)?;

    let mut document = Map::new();
    let value = shape_element(&root);
    document.insert(root.name, value);
    Ok(Value::Object(document))
}

/// Drive the event reader and build the intermediate element tree.
fn parse_document(source: &str) -> XmlParseResult<Element> {
    let mut reader = Reader::from_str(source);

    let mut stack: Vec<Element> = Vec::new();
    let mut root: Option<Element> = None;

    loop {
        let position = reader.buffer_position();
        match reader.read_event() {
            Ok(Event::Start(start)) => {
                if root.is_some() && stack.is_empty() {
                    return Err(XmlParseError::new("multiple root elements", Some(position)));
                }
                stack.push(element_from_start(&start, position)?);
            }
            Ok(Event::Empty(start)) => {
                let element = element_from_start(&start, position)?;
                attach(element, &mut stack, &mut root, position)?;
            }
            Ok(Event::End(_)) => {
                // quick-xml has already rejected mismatched closing tags
                let element = stack.pop().ok_or_else(|| {
                    XmlParseError::new("closing tag without matching opening tag", Some(position))
                })?;
                attach(element, &mut stack, &mut root, position)?;
            }
            Ok(Event::Text(text)) => {
                let content = text
                    .unescape()
                    .map_err(|e| XmlParseError::new(e.to_string(), Some(position)))?;
                append_text(&mut stack, &content, position)?;
            }
            Ok(Event::CData(data)) => {
                let content = String::from_utf8_lossy(&data.into_inner()).into_owned();
                append_text(&mut stack, &content, position)?;
            }
            Ok(Event::Decl(_)) | Ok(Event::PI(_)) | Ok(Event::DocType(_)) => {}
            Ok(Event::Comment(_)) => {}
            Ok(Event::Eof) => break,
            Err(e) => {
                return Err(XmlParseError::new(
                    e.to_string(),
                    Some(reader.buffer_position()),
                ))
            }
        }
    }

    if let Some(open) = stack.last() {
        return Err(XmlParseError::new(
            format!("unclosed element <{}>", open.name),
            None,
        ));
    }
    root.ok_or_else(|| XmlParseError::new("document has no root element", None))
}

/// Place a finished element under its parent, or install it as the root.
fn attach(
    element: Element,
    stack: &mut Vec<Element>,
    root: &mut Option<Element>,
    position: usize,
) -> XmlParseResult<()> {
    match stack.last_mut() {
        Some(parent) => {
            parent.children.push(element);
            Ok(())
        }
        None => {
            if root.is_some() {
                return Err(XmlParseError::new("multiple root elements", Some(position)));
            }
            *root = Some(element);
            Ok(())
        }
    }
}

fn element_from_start(start: &BytesStart<'_>, position: usize) -> XmlParseResult<Element> {
    let name = name_from_bytes(start.name().as_ref(), position)?;

    let mut attributes = Vec::new();
    for attribute in start.attributes() {
        let attribute = attribute
            .map_err(|e| XmlParseError::new(format!("malformed attribute: {}", e), Some(position)))?;
        let key = name_from_bytes(attribute.key.as_ref(), position)?;
        let value = attribute
            .unescape_value()
            .map_err(|e| XmlParseError::new(e.to_string(), Some(position)))?
            .into_owned();
        attributes.push((key, value));
    }

    Ok(Element::new(name, attributes))
}

fn name_from_bytes(bytes: &[u8], position: usize) -> XmlParseResult<String> {
    std::str::from_utf8(bytes)
        .map(str::to_string)
        .map_err(|e| XmlParseError::new(format!("invalid UTF-8 in name: {}", e), Some(position)))
}

/// Record text content on the innermost open element.
///
/// Whitespace-only runs are noted but contribute no content; text outside
/// the root element is a well-formedness error.
fn append_text(stack: &mut [Element], content: &str, position: usize) -> XmlParseResult<()> {
    let trimmed = content.trim();

    match stack.last_mut() {
        Some(element) => {
            if trimmed.is_empty() {
                if element.text.is_none() {
                    element.text = Some(String::new());
                }
            } else {
                match &mut element.text {
                    Some(existing) if !existing.is_empty() => {
                        existing.push(' ');
                        existing.push_str(trimmed);
                    }
                    _ => element.text = Some(trimmed.to_string()),
                }
            }
            Ok(())
        }
        None => {
            if trimmed.is_empty() {
                Ok(())
            } else {
                Err(XmlParseError::new(
                    "text content outside of the root element",
                    Some(position),
                ))
            }
        }
    }
}

/// Shape an element into its JSON value.
fn shape_element(element: &Element) -> Value {
    let text = element.text.as_deref();

    // Plain element: no attributes, no child elements
    if element.attributes.is_empty() && element.children.is_empty() {
        return match text {
            Some("") => Value::Null,
            Some(content) => Value::String(content.to_string()),
            None => Value::Object(Map::new()),
        };
    }

    let mut object = Map::new();

    if !element.attributes.is_empty() {
        let mut attributes = Map::new();
        for (name, value) in &element.attributes {
            attributes.insert(name.clone(), Value::String(value.clone()));
        }
        object.insert(ATTRIBUTES_KEY.to_string(), Value::Object(attributes));
    }

    // Attributes plus plain text content, no element children
    if element.children.is_empty() {
        if let Some(content) = text {
            if !content.is_empty() {
                object.insert(TEXT_KEY.to_string(), Value::String(content.to_string()));
            }
        }
        return Value::Object(object);
    }

    // Repeated sibling tag names merge into an array; children override any
    // attribute keys of the same name
    let mut children = Map::new();
    for child in &element.children {
        merge_child(&mut children, &child.name, shape_element(child));
    }
    for (name, value) in children {
        object.insert(name, value);
    }

    Value::Object(object)
}

fn merge_child(children: &mut Map<String, Value>, name: &str, value: Value) {
    match children.get_mut(name) {
        Some(Value::Array(items)) => items.push(value),
        Some(existing) => {
            let first = existing.take();
            *existing = Value::Array(vec![first, value]);
        }
        None => {
            children.insert(name.to_string(), value);
        }
    }
}
