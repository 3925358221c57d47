// Copyright (c) 2025 - Cowboy AI, Inc.

//! Decoded wire documents
//!
//! The remote API answers with loosely-typed JSON. These helpers read fields
//! out of a decoded object and return `None` on a missing key or a type
//! mismatch instead of failing.

use serde_json::{Map, Value};

use crate::domain::GuestId;

/// Decoded JSON object as exchanged with the remote API
pub type ApiDocument = Map<String, Value>;

/// String field
pub fn get_str<'a>(doc: &'a ApiDocument, key: &str) -> Option<&'a str> {
    doc.get(key).and_then(Value::as_str)
}

/// Numeric field, decoded as `f64` like every untyped wire number
pub fn get_f64(doc: &ApiDocument, key: &str) -> Option<f64> {
    doc.get(key).and_then(Value::as_f64)
}

/// Array field
pub fn get_array<'a>(doc: &'a ApiDocument, key: &str) -> Option<&'a Vec<Value>> {
    doc.get(key).and_then(Value::as_array)
}

/// Guest id field, truncated toward zero
///
/// Negative, non-finite and out-of-range numbers yield `None`.
pub fn get_guest_id(doc: &ApiDocument, key: &str) -> Option<GuestId> {
    get_f64(doc, key).and_then(guest_id_from_f64)
}

fn guest_id_from_f64(value: f64) -> Option<GuestId> {
    let truncated = value.trunc();
    if !truncated.is_finite() || truncated < 0.0 || truncated > f64::from(GuestId::MAX) {
        return None;
    }
    Some(truncated as GuestId)
}

/// Encode a document as an `application/x-www-form-urlencoded` body
///
/// Strings are sent verbatim, numbers and booleans through `to_string`,
/// nulls are dropped and nested values are sent as JSON text.
pub fn encode_form(doc: &ApiDocument) -> String {
    doc.iter()
        .filter_map(|(key, value)| {
            let value = match value {
                Value::Null => return None,
                Value::String(s) => s.clone(),
                Value::Bool(b) => b.to_string(),
                Value::Number(n) => n.to_string(),
                other => other.to_string(),
            };
            Some(format!(
                "{}={}",
                urlencoding::encode(key),
                urlencoding::encode(&value)
            ))
        })
        .collect::<Vec<_>>()
        .join("&")
}
