//! # oxide-typed-forms
//!
//! Typed form-input capture: read the values out of a submitted form,
//! tag each one with the type the form declared for it, and convert the
//! tagged values into typed results or descriptive errors.
//!
//! This crate provides:
//! - Field descriptors declaring each field's expected type
//! - A decoder that turns a submit event into one captured form
//! - Typed readers (`read_int_at`, `read_bool_at`, ...) over captured forms
//! - Best-effort JSON encoding of a captured form
//! - Bootstrap 5 rendering of the form and its submit button
//!
//! ## Quick Start
//!
//! ```rust
//! use oxide_typed_forms::fields::{bool_field, int_field, string_field};
//! use oxide_typed_forms::{
//!     new_form, read_bool_at, read_int_at, read_string_at, CapturedForm,
//!     FormError, RenderOptions, SubmitEvent,
//! };
//!
//! enum Msg {
//!     Submitted(CapturedForm),
//! }
//!
//! let form = new_form(
//!     Msg::Submitted,
//!     vec![
//!         string_field("name", "Name"),
//!         int_field("age", "Age"),
//!     ],
//! )
//! .add_element(bool_field("animal", "Favourite animal", |s| {
//!     s.to_lowercase() == "platypus"
//! }));
//!
//! let rendered = form.render(&RenderOptions::default());
//! assert!(rendered.html.contains(r#"type="submit""#));
//!
//! let event = SubmitEvent::from_fields([
//!     ("name", "Ada"),
//!     ("age", "33"),
//!     ("animal", "Platypus"),
//! ]);
//! let Some(Msg::Submitted(captured)) = rendered.handler.handle(&event) else {
//!     panic!("submission was dropped");
//! };
//!
//! assert_eq!(read_string_at("name", &captured).unwrap(), "Ada");
//! assert_eq!(read_int_at("age", &captured), Ok(33));
//! assert_eq!(read_bool_at("animal", &captured), Ok(true));
//! assert_eq!(
//!     read_int_at("age2", &captured),
//!     Err(FormError::MissingField("age2".to_string())),
//! );
//! ```
//!
//! ## Custom Values
//!
//! ```rust
//! use oxide_typed_forms::{read_custom_at, CapturedForm, CustomDecoder, TypedValue};
//! use serde_json::{json, Value};
//!
//! let point = CustomDecoder::typed(|raw: &Value| {
//!     let x = raw["x"].as_i64().ok_or("missing x")?;
//!     let y = raw["y"].as_i64().ok_or("missing y")?;
//!     Ok::<_, &str>((x, y))
//! });
//!
//! let mut form = CapturedForm::new();
//! form.insert("point", TypedValue::custom(point, json!({"x": 1, "y": 2})));
//!
//! assert_eq!(read_custom_at::<(i64, i64)>("point", &form), Ok((1, 2)));
//! assert_eq!(form.to_json(), json!({"point": [1, 2]}));
//! ```

mod captured;
mod decoder;
mod error;
pub mod fields;
mod form;
mod kind;
pub mod validation;
mod value;
pub mod widgets;

pub use captured::CapturedForm;
pub use decoder::{build_decoder, Decoder, SubmitEvent};
pub use error::{FormError, Result, ValidationErrors};
pub use form::{
    new_form, FieldDescriptor, FormModel, RenderOptions, RenderedForm, SubmitHandler,
};
pub use kind::InputKind;
pub use validation::{
    read_bool_at, read_custom_at, read_custom_json_at, read_float_at, read_int_at,
    read_json_at, read_string_at,
};
pub use value::{CustomDecoder, Predicate, TypeTag, TypedValue};
