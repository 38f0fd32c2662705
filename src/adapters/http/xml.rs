//! XML rendering of documents.
//!
//! Layout: `<document><id/><tags><tag/>...</tags><data>...</data></document>`.
//! The JSON payload is converted element-wise: object keys become child
//! elements, array items repeat the parent element name (an inner array is
//! wrapped in one more element of that name), scalars become text, and `null`
//! or an empty array an empty element. Characters XML 1.0 cannot carry are
//! replaced with U+FFFD.

use serde_json::Value;
use std::fmt::Write;

use crate::domain::models::Document;

const XML_DECLARATION: &str = r#"<?xml version="1.0" encoding="utf-8"?>"#;

/// Render a document as an XML string.
pub fn document_to_xml(document: &Document) -> String {
    let mut out = String::from(XML_DECLARATION);
    out.push_str("<document>");
    write_text(&mut out, "id", &document.id);

    out.push_str("<tags>");
    for tag in &document.tags {
        write_text(&mut out, "tag", tag);
    }
    out.push_str("</tags>");

    write_value(&mut out, "data", &document.data);
    out.push_str("</document>");
    out
}

fn write_value(out: &mut String, name: &str, value: &Value) {
    match value {
        Value::Null => {
            let _ = write!(out, "<{name} />");
        }
        Value::Bool(b) => write_text(out, name, if *b { "true" } else { "false" }),
        Value::Number(n) => write_text(out, name, &n.to_string()),
        Value::String(s) => write_text(out, name, s),
        Value::Array(items) if items.is_empty() => {
            let _ = write!(out, "<{name} />");
        }
        Value::Array(items) => {
            for item in items {
                if item.is_array() {
                    // Keep inner array boundaries: wrap in an element of the same name.
                    let _ = write!(out, "<{name}>");
                    write_value(out, name, item);
                    let _ = write!(out, "</{name}>");
                } else {
                    write_value(out, name, item);
                }
            }
        }
        Value::Object(map) => {
            let _ = write!(out, "<{name}>");
            for (key, child) in map {
                write_value(out, &element_name(key), child);
            }
            let _ = write!(out, "</{name}>");
        }
    }
}

fn write_text(out: &mut String, name: &str, text: &str) {
    let _ = write!(out, "<{name}>{}</{name}>", escape(text));
}

/// Turn an arbitrary JSON key into a valid XML element name.
fn element_name(key: &str) -> String {
    let mut name: String = key
        .chars()
        .map(|c| {
            if c.is_alphanumeric() || matches!(c, '_' | '-' | '.') {
                c
            } else {
                '_'
            }
        })
        .collect();

    let starts_ok = name
        .chars()
        .next()
        .is_some_and(|c| c.is_alphabetic() || c == '_');
    if !starts_ok {
        name.insert(0, '_');
    }
    name
}

fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&apos;"),
            // Kept as a reference so parsers do not normalize it to \n.
            '\r' => escaped.push_str("&#xD;"),
            c if is_xml_char(c) => escaped.push(c),
            _ => escaped.push(char::REPLACEMENT_CHARACTER),
        }
    }
    escaped
}

/// Characters allowed in an XML 1.0 document. Not even a character
/// reference may encode the others.
fn is_xml_char(c: char) -> bool {
    matches!(c,
        '\t' | '\n' | '\r'
        | '\u{20}'..='\u{D7FF}'
        | '\u{E000}'..='\u{FFFD}'
        | '\u{10000}'..='\u{10FFFF}')
}
