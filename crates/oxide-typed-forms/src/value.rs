//! Captured values tagged with the type they are expected to satisfy.

use std::fmt;
use std::sync::Arc;

use serde::Serialize;
use serde_json::Value;

/// The expected type of a captured value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TypeTag {
    /// Text used as-is.
    String,
    /// Signed base-10 integer.
    Int,
    /// Decimal or scientific-notation number.
    Float,
    /// Boolean computed by a predicate.
    Bool,
    /// Arbitrary value produced by a caller-supplied decoder.
    Custom,
    /// Capture failed before any type could be attached.
    Fail,
}

impl TypeTag {
    /// Returns the tag name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::String => "String",
            Self::Int => "Int",
            Self::Float => "Float",
            Self::Bool => "Bool",
            Self::Custom => "Custom",
            Self::Fail => "Fail",
        }
    }

    /// Returns the text shown in place of a field whose read failed.
    pub fn fallback_message(&self) -> &'static str {
        match self {
            Self::String => "Expecting a String",
            Self::Int => "Expecting an Int",
            Self::Float => "Expecting a Float",
            Self::Bool => "Expecting a Bool",
            Self::Custom => "Expecting a custom value",
            Self::Fail => "This field could not be captured",
        }
    }
}

impl fmt::Display for TypeTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A predicate turning raw text into the captured boolean.
#[derive(Clone)]
pub struct Predicate(Arc<dyn Fn(&str) -> bool + Send + Sync>);

impl Predicate {
    /// Wraps a predicate function.
    pub fn new(f: impl Fn(&str) -> bool + Send + Sync + 'static) -> Self {
        Self(Arc::new(f))
    }

    /// Applies the predicate.
    pub fn test(&self, raw: &str) -> bool {
        (self.0)(raw)
    }
}

impl PartialEq for Predicate {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl fmt::Debug for Predicate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Predicate(..)")
    }
}

type DecodeFn = dyn Fn(&Value) -> Result<Value, String> + Send + Sync;

/// A caller-supplied decoder for custom field values.
///
/// The decoded representation is a JSON value, so it can be embedded
/// into serialized output unchanged and deserialized into any concrete
/// type at read time.
#[derive(Clone)]
pub struct CustomDecoder(Arc<DecodeFn>);

impl CustomDecoder {
    /// Wraps a decoder producing JSON values directly.
    pub fn new(f: impl Fn(&Value) -> Result<Value, String> + Send + Sync + 'static) -> Self {
        Self(Arc::new(f))
    }

    /// Wraps a decoder producing any serializable type.
    pub fn typed<T, E, F>(f: F) -> Self
    where
        T: Serialize,
        E: fmt::Display,
        F: Fn(&Value) -> Result<T, E> + Send + Sync + 'static,
    {
        Self::new(move |raw| {
            let decoded = f(raw).map_err(|e| e.to_string())?;
            serde_json::to_value(decoded).map_err(|e| e.to_string())
        })
    }

    /// Runs the decoder against a raw value.
    pub fn decode(&self, raw: &Value) -> Result<Value, String> {
        (self.0)(raw)
    }
}

impl PartialEq for CustomDecoder {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl fmt::Debug for CustomDecoder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("CustomDecoder(..)")
    }
}

/// A raw captured value annotated with the rule it is expected to satisfy.
///
/// The variant is fixed by the form's declaration, not by what the user
/// typed: an `Int` entry may hold text that does not parse.
#[derive(Debug, Clone, PartialEq)]
pub enum TypedValue {
    /// Text used as-is.
    String(String),
    /// Text expected to parse as a signed integer.
    Int(String),
    /// Text expected to parse as a floating-point number.
    Float(String),
    /// Text whose boolean value is the predicate's result.
    Bool { predicate: Predicate, raw: String },
    /// Structured value handed to a caller-supplied decoder at read time.
    Custom { decoder: CustomDecoder, raw: Value },
    /// Capture failed for this field.
    Fail,
}

impl TypedValue {
    /// Creates a boolean entry from a predicate function.
    pub fn bool(
        predicate: impl Fn(&str) -> bool + Send + Sync + 'static,
        raw: impl Into<String>,
    ) -> Self {
        Self::Bool {
            predicate: Predicate::new(predicate),
            raw: raw.into(),
        }
    }

    /// Creates a custom entry.
    pub fn custom(decoder: CustomDecoder, raw: impl Into<Value>) -> Self {
        Self::Custom {
            decoder,
            raw: raw.into(),
        }
    }

    /// Returns the expected type of this entry.
    pub fn tag(&self) -> TypeTag {
        match self {
            Self::String(_) => TypeTag::String,
            Self::Int(_) => TypeTag::Int,
            Self::Float(_) => TypeTag::Float,
            Self::Bool { .. } => TypeTag::Bool,
            Self::Custom { .. } => TypeTag::Custom,
            Self::Fail => TypeTag::Fail,
        }
    }

    /// Returns the raw text for text-backed entries.
    pub fn raw_text(&self) -> Option<&str> {
        match self {
            Self::String(raw) | Self::Int(raw) | Self::Float(raw) => Some(raw.as_str()),
            Self::Bool { raw, .. } => Some(raw.as_str()),
            Self::Custom { raw, .. } => raw.as_str(),
            Self::Fail => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_tags() {
        assert_eq!(TypedValue::String("a".into()).tag(), TypeTag::String);
        assert_eq!(TypedValue::Int("1".into()).tag(), TypeTag::Int);
        assert_eq!(TypedValue::Float("1.5".into()).tag(), TypeTag::Float);
        assert_eq!(TypedValue::bool(|_| true, "x").tag(), TypeTag::Bool);
        assert_eq!(TypedValue::Fail.tag(), TypeTag::Fail);
    }

    #[test]
    fn test_fallback_messages() {
        assert_eq!(TypeTag::String.fallback_message(), "Expecting a String");
        assert_eq!(TypeTag::Int.fallback_message(), "Expecting an Int");
    }

    #[test]
    fn test_equality_shares_functions() {
        let predicate = Predicate::new(|s| s.is_empty());
        let a = TypedValue::Bool {
            predicate: predicate.clone(),
            raw: "x".to_string(),
        };
        let b = TypedValue::Bool {
            predicate,
            raw: "x".to_string(),
        };
        assert_eq!(a, b);

        // distinct closures never compare equal
        assert_ne!(TypedValue::bool(|_| true, "x"), TypedValue::bool(|_| true, "x"));
    }

    #[test]
    fn test_typed_decoder() {
        let decoder = CustomDecoder::typed(|raw: &Value| match raw.as_str() {
            Some(s) => Ok(s.len()),
            None => Err("not text"),
        });
        assert_eq!(decoder.decode(&json!("abcd")), Ok(json!(4)));
        assert_eq!(decoder.decode(&json!(1)), Err("not text".to_string()));
    }

    #[test]
    fn test_raw_text() {
        assert_eq!(TypedValue::Int("42".into()).raw_text(), Some("42"));
        assert_eq!(TypedValue::Fail.raw_text(), None);
    }
}
