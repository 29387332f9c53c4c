//! Building one submission decoder out of many field descriptors.

use serde_json::{json, Map, Value};
use tracing::debug;

use crate::captured::CapturedForm;
use crate::error::{FormError, Result};
use crate::form::FieldDescriptor;
use crate::kind::InputKind;
use crate::value::TypedValue;

/// A form submission event.
///
/// The payload mirrors a browser submit event: each control's current
/// value lives at `target.elements.<id>.value`.
#[derive(Debug, Clone, PartialEq)]
pub struct SubmitEvent(Value);

impl SubmitEvent {
    /// Wraps a raw event payload.
    pub fn new(payload: Value) -> Self {
        Self(payload)
    }

    /// Builds an event whose form holds the given controls.
    pub fn from_fields<I, K, V>(fields: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<Value>,
    {
        let elements: Map<String, Value> = fields
            .into_iter()
            .map(|(id, value)| (id.into(), json!({ "value": value.into() })))
            .collect();
        Self(json!({ "target": { "elements": elements } }))
    }

    /// Builds an event from an `application/x-www-form-urlencoded` body.
    ///
    /// Repeated keys keep the last value.
    pub fn from_urlencoded(body: &str) -> Self {
        Self::from_fields(
            body.split('&')
                .filter(|pair| !pair.is_empty())
                .map(|pair| {
                    let mut parts = pair.splitn(2, '=');
                    let key = parts.next().unwrap_or("");
                    let value = parts.next().unwrap_or("");
                    (urlencoding_decode(key), urlencoding_decode(value))
                }),
        )
    }

    /// Returns the raw payload.
    pub fn payload(&self) -> &Value {
        &self.0
    }

    /// Locates the current value of the control with the given identifier.
    pub fn control_value(&self, id: &str) -> std::result::Result<&Value, String> {
        let elements = self
            .0
            .get("target")
            .ok_or("event has no target")?
            .get("elements")
            .ok_or("event target has no elements")?;
        let control = elements
            .get(id)
            .ok_or_else(|| format!("no control with id {id:?}"))?;
        control
            .get("value")
            .ok_or_else(|| format!("control {id:?} has no value"))
    }
}

/// URL decoding for form bodies, with `+` as space.
fn urlencoding_decode(s: &str) -> String {
    let bytes = s.as_bytes();
    let mut out = Vec::with_capacity(bytes.len());
    let mut i = 0;

    while i < bytes.len() {
        match bytes[i] {
            b'+' => out.push(b' '),
            b'%' if i + 2 < bytes.len()
                && bytes[i + 1].is_ascii_hexdigit()
                && bytes[i + 2].is_ascii_hexdigit() =>
            {
                let hex = std::str::from_utf8(&bytes[i + 1..i + 3]).ok();
                if let Some(byte) = hex.and_then(|h| u8::from_str_radix(h, 16).ok()) {
                    out.push(byte);
                    i += 3;
                    continue;
                }
                out.push(b'%');
            }
            byte => out.push(byte),
        }
        i += 1;
    }

    String::from_utf8_lossy(&out).into_owned()
}

/// The combined extraction for every field of a form.
///
/// Built once from the descriptors and run against each submission.
#[derive(Debug, Clone, Default)]
pub struct Decoder {
    fields: Vec<(String, InputKind)>,
}

impl Decoder {
    /// Folds field descriptors into a single decoder.
    pub fn build(descriptors: &[FieldDescriptor]) -> Self {
        let decoder = descriptors
            .iter()
            .fold(Self::default(), |decoder, descriptor| {
                decoder.field(descriptor.id.clone(), descriptor.kind.clone())
            });
        debug!(fields = decoder.fields.len(), "built form decoder");
        decoder
    }

    /// Adds one field extraction.
    #[must_use]
    pub fn field(mut self, id: impl Into<String>, kind: InputKind) -> Self {
        self.fields.push((id.into(), kind));
        self
    }

    /// Returns the identifiers this decoder extracts, in build order.
    pub fn identifiers(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|(id, _)| id.as_str())
    }

    fn extract(id: &str, kind: &InputKind, event: &SubmitEvent) -> Result<TypedValue> {
        let raw = event
            .control_value(id)
            .map_err(|reason| FormError::ExtractionFailure {
                field: id.to_string(),
                reason,
            })?;
        kind.capture(raw)
            .map_err(|reason| FormError::ExtractionFailure {
                field: id.to_string(),
                reason,
            })
    }

    /// Decodes a submission into a captured form.
    ///
    /// Fails with [`FormError::ExtractionFailure`] for the first field
    /// that cannot be read; no partial form is produced.
    pub fn decode(&self, event: &SubmitEvent) -> Result<CapturedForm> {
        let form = self
            .fields
            .iter()
            .try_fold(CapturedForm::new(), |mut form, (id, kind)| {
                let value = Self::extract(id, kind, event)?;
                form.insert(id.clone(), value);
                Ok::<_, FormError>(form)
            })?;
        debug!(fields = form.len(), "decoded form submission");
        Ok(form)
    }

    /// Decodes a submission, recording unreadable fields as
    /// [`TypedValue::Fail`] instead of failing.
    pub fn decode_partial(&self, event: &SubmitEvent) -> CapturedForm {
        self.fields
            .iter()
            .map(|(id, kind)| {
                let value = Self::extract(id, kind, event).unwrap_or_else(|err| {
                    debug!(field = %id, error = %err, "field marked as failed");
                    TypedValue::Fail
                });
                (id.clone(), value)
            })
            .collect()
    }
}

/// Builds the combined decoder for a list of field descriptors.
pub fn build_decoder(descriptors: &[FieldDescriptor]) -> Decoder {
    Decoder::build(descriptors)
}
