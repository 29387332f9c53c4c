//! Typed reads of captured form values.
//!
//! Every reader looks the identifier up, checks that the entry was
//! captured with the requested type and then converts the raw payload.
//! Conversions happen at read time, so the same captured form can be
//! read repeatedly with identical results.

use std::sync::LazyLock;

use regex::Regex;
use serde::de::DeserializeOwned;
use serde_json::{Number, Value};

use crate::captured::CapturedForm;
use crate::error::{FormError, Result};
use crate::kind::InputKind;
use crate::value::{TypeTag, TypedValue};

static FLOAT_SYNTAX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[+-]?(\d+(\.\d*)?|\.\d+)([eE][+-]?\d+)?$").expect("float pattern is valid")
});

fn lookup<'a>(id: &str, form: &'a CapturedForm) -> Result<&'a TypedValue> {
    match form.get(id) {
        None => Err(FormError::MissingField(id.to_string())),
        Some(TypedValue::Fail) => Err(FormError::CaptureFailed(id.to_string())),
        Some(value) => Ok(value),
    }
}

fn mismatch(id: &str, expected: TypeTag, actual: &TypedValue) -> FormError {
    FormError::TypeMismatch {
        field: id.to_string(),
        expected,
        actual: actual.tag(),
    }
}

fn parse_failure(id: &str, raw: &str) -> FormError {
    FormError::ParseFailure {
        field: id.to_string(),
        raw: raw.to_string(),
    }
}

/// Parses a base-10 integer with an optional leading sign.
pub fn parse_int(raw: &str) -> Option<i64> {
    raw.parse().ok()
}

/// Parses a decimal or scientific-notation number.
///
/// Rejects words such as `inf` or `NaN` and values too large to be finite.
pub fn parse_float(raw: &str) -> Option<f64> {
    if !FLOAT_SYNTAX.is_match(raw) {
        return None;
    }
    raw.parse::<f64>().ok().filter(|f| f.is_finite())
}

/// Reads a text field unchanged.
pub fn read_string_at(id: &str, form: &CapturedForm) -> Result<String> {
    match lookup(id, form)? {
        TypedValue::String(raw) => Ok(raw.clone()),
        other => Err(mismatch(id, TypeTag::String, other)),
    }
}

/// Reads an integer field.
pub fn read_int_at(id: &str, form: &CapturedForm) -> Result<i64> {
    match lookup(id, form)? {
        TypedValue::Int(raw) => parse_int(raw).ok_or_else(|| parse_failure(id, raw)),
        other => Err(mismatch(id, TypeTag::Int, other)),
    }
}

/// Reads a floating-point field.
pub fn read_float_at(id: &str, form: &CapturedForm) -> Result<f64> {
    match lookup(id, form)? {
        TypedValue::Float(raw) => parse_float(raw).ok_or_else(|| parse_failure(id, raw)),
        other => Err(mismatch(id, TypeTag::Float, other)),
    }
}

/// Reads a boolean field by applying its predicate to the raw text.
///
/// A predicate returning `false` is a valid read, not an error.
pub fn read_bool_at(id: &str, form: &CapturedForm) -> Result<bool> {
    match lookup(id, form)? {
        TypedValue::Bool { predicate, raw } => Ok(predicate.test(raw)),
        other => Err(mismatch(id, TypeTag::Bool, other)),
    }
}

/// Runs a custom field's decoder and returns its JSON representation.
pub fn read_custom_json_at(id: &str, form: &CapturedForm) -> Result<Value> {
    match lookup(id, form)? {
        TypedValue::Custom { decoder, raw } => {
            decoder
                .decode(raw)
                .map_err(|message| FormError::CustomDecodeFailure {
                    field: id.to_string(),
                    message,
                })
        }
        other => Err(mismatch(id, TypeTag::Custom, other)),
    }
}

/// Runs a custom field's decoder and deserializes the result into `T`.
pub fn read_custom_at<T: DeserializeOwned>(id: &str, form: &CapturedForm) -> Result<T> {
    let decoded = read_custom_json_at(id, form)?;
    serde_json::from_value(decoded).map_err(|e| FormError::CustomDecodeFailure {
        field: id.to_string(),
        message: e.to_string(),
    })
}

/// Reads any field with the reader matching its captured type and
/// encodes the result as JSON.
pub fn read_json_at(id: &str, form: &CapturedForm) -> Result<Value> {
    match lookup(id, form)? {
        TypedValue::String(_) => read_string_at(id, form).map(Value::String),
        TypedValue::Int(_) => read_int_at(id, form).map(Value::from),
        TypedValue::Float(raw) => {
            let value = read_float_at(id, form)?;
            Number::from_f64(value)
                .map(Value::Number)
                .ok_or_else(|| parse_failure(id, raw))
        }
        TypedValue::Bool { .. } => read_bool_at(id, form).map(Value::Bool),
        TypedValue::Custom { .. } => read_custom_json_at(id, form),
        TypedValue::Fail => Err(FormError::CaptureFailed(id.to_string())),
    }
}

/// Reads a field with the reader its declared kind calls for.
pub fn check_field(id: &str, kind: &InputKind, form: &CapturedForm) -> Result<()> {
    match kind {
        InputKind::String => read_string_at(id, form).map(drop),
        InputKind::Int => read_int_at(id, form).map(drop),
        InputKind::Float => read_float_at(id, form).map(drop),
        InputKind::Bool(_) => read_bool_at(id, form).map(drop),
        InputKind::Custom(_) => read_custom_json_at(id, form).map(drop),
    }
}
