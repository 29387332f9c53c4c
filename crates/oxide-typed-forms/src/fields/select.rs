//! Fields captured through custom decoders.

use serde_json::Value;

use super::labelled_field;
use crate::form::FieldDescriptor;
use crate::kind::InputKind;
use crate::value::CustomDecoder;
use crate::widgets::{BootstrapSelect, Widget, WidgetAttrs};

/// Creates a field captured with a caller-supplied decoder.
pub fn custom_field(
    id: &str,
    label: &str,
    widget: &dyn Widget,
    decoder: CustomDecoder,
) -> FieldDescriptor {
    labelled_field(
        id,
        label,
        InputKind::Custom(decoder),
        widget,
        &WidgetAttrs::new(),
    )
}

/// Creates a select field that decodes to one of the choice values.
///
/// The blank option and values outside `choices` fail to decode.
pub fn choice_field(id: &str, label: &str, choices: Vec<(&str, &str)>) -> FieldDescriptor {
    let allowed: Vec<String> = choices.iter().map(|(v, _)| (*v).to_string()).collect();
    let decoder = CustomDecoder::new(move |raw| match raw.as_str() {
        Some(value) if allowed.iter().any(|a| a == value) => Ok(Value::from(value)),
        Some("") => Err("no option selected".to_string()),
        Some(value) => Err(format!("{value:?} is not one of the choices")),
        None => Err(format!("expected an option value, found {raw}")),
    });

    custom_field(id, label, &BootstrapSelect::new(choices), decoder)
}
