#![allow(dead_code)]

use oxide_typed_forms::fields::{bool_field, choice_field, float_field, int_field, string_field};
use oxide_typed_forms::{CapturedForm, FieldDescriptor, SubmitEvent};

pub fn is_platypus(s: &str) -> bool {
    s.to_lowercase() == "platypus"
}

pub fn descriptors() -> Vec<FieldDescriptor> {
    vec![
        string_field("name", "Name"),
        int_field("age", "Age"),
        float_field("height", "Height"),
        bool_field("animal", "Favourite animal", is_platypus),
        choice_field("colour", "Colour", vec![("red", "Red"), ("blue", "Blue")]),
    ]
}

pub fn submission(age: &str) -> SubmitEvent {
    SubmitEvent::from_fields([
        ("name", "Ada"),
        ("age", age),
        ("height", "1.75"),
        ("animal", "Platypus"),
        ("colour", "blue"),
    ])
}

pub fn capture(descriptors: &[FieldDescriptor], event: &SubmitEvent) -> CapturedForm {
    oxide_typed_forms::build_decoder(descriptors)
        .decode(event)
        .unwrap_or_else(|e| panic!("Failed to decode submission: {e}"))
}
