//! Per-field capture rules.

use serde_json::Value;

use crate::value::{CustomDecoder, Predicate, TypeTag, TypedValue};

/// How a field's raw control value is tagged when the form is captured.
#[derive(Debug, Clone, PartialEq)]
pub enum InputKind {
    /// Capture as text.
    String,
    /// Capture as text expected to hold an integer.
    Int,
    /// Capture as text expected to hold a float.
    Float,
    /// Capture as text whose boolean is computed by the predicate.
    Bool(Predicate),
    /// Capture the structured value for a custom decoder.
    Custom(CustomDecoder),
}

impl InputKind {
    /// Creates a boolean kind from a predicate function.
    pub fn bool(predicate: impl Fn(&str) -> bool + Send + Sync + 'static) -> Self {
        Self::Bool(Predicate::new(predicate))
    }

    /// Returns the type tag of values captured with this kind.
    pub fn tag(&self) -> TypeTag {
        match self {
            Self::String => TypeTag::String,
            Self::Int => TypeTag::Int,
            Self::Float => TypeTag::Float,
            Self::Bool(_) => TypeTag::Bool,
            Self::Custom(_) => TypeTag::Custom,
        }
    }

    /// Tags a raw control value.
    ///
    /// Text kinds only accept JSON strings, since form controls expose
    /// their value as text. Custom kinds take the value unchanged.
    pub fn capture(&self, raw: &Value) -> Result<TypedValue, String> {
        let text = || {
            raw.as_str()
                .map(str::to_string)
                .ok_or_else(|| format!("expected a text value, found {raw}"))
        };

        Ok(match self {
            Self::String => TypedValue::String(text()?),
            Self::Int => TypedValue::Int(text()?),
            Self::Float => TypedValue::Float(text()?),
            Self::Bool(predicate) => TypedValue::Bool {
                predicate: predicate.clone(),
                raw: text()?,
            },
            Self::Custom(decoder) => TypedValue::Custom {
                decoder: decoder.clone(),
                raw: raw.clone(),
            },
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_capture_text() {
        assert_eq!(
            InputKind::Int.capture(&json!("33")),
            Ok(TypedValue::Int("33".to_string()))
        );
        assert_eq!(
            InputKind::String.capture(&json!("")),
            Ok(TypedValue::String(String::new()))
        );
    }

    #[test]
    fn test_capture_rejects_non_text() {
        assert!(InputKind::Float.capture(&json!(1.5)).is_err());
        assert!(InputKind::String.capture(&Value::Null).is_err());
    }

    #[test]
    fn test_capture_bool_keeps_predicate() {
        let kind = InputKind::bool(|s| s == "on");
        let captured = kind.capture(&json!("on")).unwrap();
        match (&kind, &captured) {
            (InputKind::Bool(p), TypedValue::Bool { predicate, raw }) => {
                assert_eq!(p, predicate);
                assert_eq!(raw, "on");
            }
            _ => panic!("expected a bool capture"),
        }
    }

    #[test]
    fn test_capture_custom_takes_structured_value() {
        let kind = InputKind::Custom(CustomDecoder::new(|v| Ok(v.clone())));
        let captured = kind.capture(&json!({"a": [1, 2]})).unwrap();
        assert_eq!(captured.tag(), TypeTag::Custom);
        assert_eq!(kind.tag(), TypeTag::Custom);
    }
}
