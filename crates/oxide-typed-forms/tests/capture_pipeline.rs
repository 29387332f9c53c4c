//! End-to-end tests: descriptors, decoding, typed reads and JSON output.

mod common;

use common::{capture, descriptors, is_platypus, submission};
use oxide_typed_forms::{
    build_decoder, read_bool_at, read_custom_at, read_float_at, read_int_at, read_json_at,
    read_string_at, CapturedForm, FormError, SubmitEvent, TypeTag, TypedValue,
};
use serde_json::json;

// =============================================================================
// Reads
// =============================================================================

#[test]
fn test_reads_every_declared_type() {
    let form = capture(&descriptors(), &submission("33"));

    assert_eq!(read_string_at("name", &form).unwrap(), "Ada");
    assert_eq!(read_int_at("age", &form), Ok(33));
    assert_eq!(read_float_at("height", &form), Ok(1.75));
    assert_eq!(read_bool_at("animal", &form), Ok(true));
    assert_eq!(read_custom_at::<String>("colour", &form).unwrap(), "blue");
}

#[test]
fn test_missing_identifier_fails_for_every_reader() {
    let form = capture(&descriptors(), &submission("33"));
    let missing = || FormError::MissingField("age2".to_string());

    assert_eq!(read_string_at("age2", &form), Err(missing()));
    assert_eq!(read_int_at("age2", &form), Err(missing()));
    assert_eq!(read_float_at("age2", &form), Err(missing()));
    assert_eq!(read_bool_at("age2", &form), Err(missing()));
    assert_eq!(read_custom_at::<String>("age2", &form), Err(missing()));
    assert_eq!(read_json_at("age2", &form), Err(missing()));
}

#[test]
fn test_non_matching_readers_report_mismatch() {
    let form = capture(&descriptors(), &submission("33"));

    for (id, actual) in [
        ("name", TypeTag::String),
        ("height", TypeTag::Float),
        ("animal", TypeTag::Bool),
        ("colour", TypeTag::Custom),
    ] {
        assert_eq!(
            read_int_at(id, &form),
            Err(FormError::TypeMismatch {
                field: id.to_string(),
                expected: TypeTag::Int,
                actual,
            })
        );
    }
    assert!(matches!(
        read_string_at("age", &form),
        Err(FormError::TypeMismatch { .. })
    ));
    assert!(matches!(
        read_float_at("age", &form),
        Err(FormError::TypeMismatch { .. })
    ));

    for (id, actual) in [("age", TypeTag::Int), ("height", TypeTag::Float)] {
        assert_eq!(
            read_bool_at(id, &form),
            Err(FormError::TypeMismatch {
                field: id.to_string(),
                expected: TypeTag::Bool,
                actual,
            })
        );
        assert_eq!(
            read_custom_at::<String>(id, &form),
            Err(FormError::TypeMismatch {
                field: id.to_string(),
                expected: TypeTag::Custom,
                actual,
            })
        );
    }
    assert!(matches!(
        read_string_at("height", &form),
        Err(FormError::TypeMismatch { .. })
    ));
}

#[test]
fn test_unparsable_int() {
    let form = capture(&descriptors(), &submission("abc"));
    assert_eq!(
        read_int_at("age", &form),
        Err(FormError::ParseFailure {
            field: "age".to_string(),
            raw: "abc".to_string(),
        })
    );
}

#[test]
fn test_predicate_mismatch_is_false() {
    let event = SubmitEvent::from_fields([
        ("name", "Ada"),
        ("age", "33"),
        ("height", "1.75"),
        ("animal", "giraffe"),
        ("colour", "red"),
    ]);
    let form = capture(&descriptors(), &event);
    assert_eq!(read_bool_at("animal", &form), Ok(false));
}

#[test]
fn test_rejected_choice() {
    let event = SubmitEvent::from_fields([
        ("name", "Ada"),
        ("age", "33"),
        ("height", "1.75"),
        ("animal", "cat"),
        ("colour", ""),
    ]);
    let form = capture(&descriptors(), &event);
    assert_eq!(
        read_custom_at::<String>("colour", &form),
        Err(FormError::CustomDecodeFailure {
            field: "colour".to_string(),
            message: "no option selected".to_string(),
        })
    );
}

// =============================================================================
// Decoding
// =============================================================================

#[test]
fn test_decoding_is_idempotent() {
    let decoder = build_decoder(&descriptors());
    let event = submission("33");
    assert_eq!(decoder.decode(&event), decoder.decode(&event));
}

#[test]
fn test_descriptor_order_does_not_matter() {
    let forward = descriptors();
    let mut reversed = forward.clone();
    reversed.reverse();

    let event = submission("33");
    let a = capture(&forward, &event);
    let b = capture(&reversed, &event);

    assert_eq!(a, b);
    assert_eq!(a.to_json(), b.to_json());
}

#[test]
fn test_missing_control_aborts_whole_decode() {
    let event = SubmitEvent::from_fields([("name", "Ada"), ("age", "33")]);
    let err = build_decoder(&descriptors()).decode(&event).unwrap_err();
    assert!(matches!(err, FormError::ExtractionFailure { .. }));
}

#[test]
fn test_urlencoded_submission() {
    let event = SubmitEvent::from_urlencoded(
        "name=Ada+Lovelace&age=-4&height=2e0&animal=PLATYPUS&colour=red",
    );
    let form = capture(&descriptors(), &event);

    assert_eq!(read_string_at("name", &form).unwrap(), "Ada Lovelace");
    assert_eq!(read_int_at("age", &form), Ok(-4));
    assert_eq!(read_float_at("height", &form), Ok(2.0));
    assert_eq!(read_bool_at("animal", &form), Ok(true));
}

// =============================================================================
// JSON
// =============================================================================

#[test]
fn test_to_json() {
    let form = capture(&descriptors(), &submission("33"));
    assert_eq!(
        form.to_json(),
        json!({
            "name": "Ada",
            "age": 33,
            "height": 1.75,
            "animal": true,
            "colour": "blue",
        })
    );
}

#[test]
fn test_to_json_downgrades_failures_to_null() {
    let mut form = capture(&descriptors(), &submission("not a number"));
    form.insert("lost", TypedValue::Fail);

    let encoded = form.to_json();
    assert_eq!(encoded["age"], json!(null));
    assert_eq!(encoded["lost"], json!(null));
    assert_eq!(encoded["name"], json!("Ada"));
    assert_eq!(encoded.as_object().map(|o| o.len()), Some(6));
}

#[test]
fn test_manual_capture() {
    let form: CapturedForm = [("animal", TypedValue::bool(is_platypus, "Platypus"))]
        .into_iter()
        .collect();
    assert_eq!(read_bool_at("animal", &form), Ok(true));
    assert_eq!(form.to_json(), json!({ "animal": true }));
}
