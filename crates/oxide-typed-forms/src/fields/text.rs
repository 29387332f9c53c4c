//! Text-backed field types.

use super::labelled_field;
use crate::form::FieldDescriptor;
use crate::kind::InputKind;
use crate::widgets::{BootstrapTextInput, WidgetAttrs};

/// Creates a text field read as a string.
pub fn string_field(id: &str, label: &str) -> FieldDescriptor {
    labelled_field(
        id,
        label,
        InputKind::String,
        &BootstrapTextInput::new(),
        &WidgetAttrs::new(),
    )
}

/// Creates a number field read as an integer.
pub fn int_field(id: &str, label: &str) -> FieldDescriptor {
    labelled_field(
        id,
        label,
        InputKind::Int,
        &BootstrapTextInput::integer(),
        &WidgetAttrs::new(),
    )
}

/// Creates a number field read as a float.
pub fn float_field(id: &str, label: &str) -> FieldDescriptor {
    labelled_field(
        id,
        label,
        InputKind::Float,
        &BootstrapTextInput::decimal(),
        &WidgetAttrs::new(),
    )
}

/// Creates a text field whose boolean is `predicate` applied to the text.
pub fn bool_field(
    id: &str,
    label: &str,
    predicate: impl Fn(&str) -> bool + Send + Sync + 'static,
) -> FieldDescriptor {
    labelled_field(
        id,
        label,
        InputKind::bool(predicate),
        &BootstrapTextInput::new(),
        &WidgetAttrs::new(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::TypeTag;

    #[test]
    fn test_string_field() {
        let field = string_field("name", "Your name");
        assert_eq!(field.id, "name");
        assert_eq!(field.kind, InputKind::String);
        assert!(field.has_control());
        assert!(field.element.contains("Your name"));
    }

    #[test]
    fn test_number_fields() {
        let age = int_field("age", "Age");
        assert_eq!(age.kind.tag(), TypeTag::Int);
        assert!(age.element.contains(r#"step="1""#));

        let height = float_field("height", "Height");
        assert_eq!(height.kind.tag(), TypeTag::Float);
        assert!(height.element.contains(r#"step="any""#));
    }

    #[test]
    fn test_bool_field() {
        let field = bool_field("animal", "Favourite animal", |s| s == "platypus");
        assert_eq!(field.kind.tag(), TypeTag::Bool);
        assert!(field.has_control());
    }
}
