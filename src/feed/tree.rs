//! Markup to key-value tree conversion.
//!
//! Attributes are hoisted into the element's own mapping under an `@`-prefixed
//! key. Child elements are keyed by tag name: a tag that occurs once holds the
//! child directly, a repeated tag holds an ordered list. Leaf elements collapse
//! to their text, or `null` when they carry nothing at all.

use roxmltree::{Document, Node};
use serde_json::{Map, Value};

use super::error::FeedError;

pub const ATTRIBUTE_MARKER: char = '@';
pub const TEXT_KEY: &str = "#text";

/// Parse a markup document into `{ "<root>": <element> }`.
pub fn parse(raw: &str) -> Result<Value, FeedError> {
    let doc = Document::parse(raw)?;
    let root = doc.root_element();

    let mut tree = Map::new();
    tree.insert(root.tag_name().name().to_string(), element_to_value(&root));
    Ok(Value::Object(tree))
}

fn element_to_value(node: &Node) -> Value {
    let mut map = Map::new();

    for attr in node.attributes() {
        map.insert(
            format!("{}{}", ATTRIBUTE_MARKER, attr.name()),
            Value::String(attr.value().to_string()),
        );
    }

    let mut text = String::new();
    for child in node.children() {
        if child.is_element() {
            insert_child(&mut map, child.tag_name().name(), element_to_value(&child));
        } else if child.is_text() {
            if let Some(t) = child.text() {
                text.push_str(t);
            }
        }
    }

    let text = text.trim();
    if map.is_empty() {
        return if text.is_empty() {
            Value::Null
        } else {
            Value::String(text.to_string())
        };
    }

    if !text.is_empty() {
        map.insert(TEXT_KEY.to_string(), Value::String(text.to_string()));
    }
    Value::Object(map)
}

fn insert_child(map: &mut Map<String, Value>, name: &str, value: Value) {
    match map.get_mut(name) {
        None => {
            map.insert(name.to_string(), value);
        }
        Some(Value::Array(list)) => list.push(value),
        Some(existing) => {
            let first = existing.take();
            *existing = Value::Array(vec![first, value]);
        }
    }
}
