//! Input controls rendered for form fields.
//!
//! Every widget writes the field identifier into both the `id` and the
//! `name` attribute of its control, which is what the submission decoder
//! looks values up by.

mod bootstrap;

pub use bootstrap::{BootstrapSelect, BootstrapTextInput};

use std::collections::BTreeMap;

/// Extra attributes applied to a widget's control.
#[derive(Debug, Clone, Default)]
pub struct WidgetAttrs {
    /// HTML attributes, rendered in key order.
    pub attrs: BTreeMap<String, String>,
}

impl WidgetAttrs {
    /// Creates new empty widget attributes.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets an attribute.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.attrs.insert(key.into(), value.into());
    }

    /// Gets an attribute.
    pub fn get(&self, key: &str) -> Option<&String> {
        self.attrs.get(key)
    }

    /// Renders the attributes, except the reserved ones, each with a
    /// leading space.
    pub fn to_html(&self) -> String {
        self.attrs
            .iter()
            .filter(|(k, _)| !matches!(k.as_str(), "id" | "name" | "class" | "type"))
            .map(|(k, v)| format!(r#" {}="{}""#, html_escape(k), html_escape(v)))
            .collect()
    }

    /// Builder method to set an attribute.
    #[must_use]
    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.set(key, value);
        self
    }
}

/// Trait for widgets that render one form control.
pub trait Widget: Send + Sync {
    /// Renders the control as HTML.
    ///
    /// # Arguments
    /// * `id` - The field identifier
    /// * `value` - The initial value (if any)
    /// * `attrs` - Additional HTML attributes
    fn render(&self, id: &str, value: Option<&str>, attrs: &WidgetAttrs) -> String;

    /// Returns the HTML input type.
    fn input_type(&self) -> &str {
        "text"
    }
}

/// Escapes HTML special characters.
pub fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#x27;")
}
