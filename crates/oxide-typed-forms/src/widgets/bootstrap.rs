//! Bootstrap 5 form controls.

use super::{html_escape, Widget, WidgetAttrs};

fn control_class(base: &str, attrs: &WidgetAttrs) -> String {
    match attrs.get("class") {
        Some(extra) => format!("{base} {extra}"),
        None => base.to_string(),
    }
}

/// Bootstrap 5 text input widget.
#[derive(Debug, Clone)]
pub struct BootstrapTextInput {
    /// The HTML input type (text, number, email, ...).
    pub input_type: String,
    /// Placeholder text.
    pub placeholder: Option<String>,
    /// Step for number inputs.
    pub step: Option<String>,
}

impl Default for BootstrapTextInput {
    fn default() -> Self {
        Self {
            input_type: "text".to_string(),
            placeholder: None,
            step: None,
        }
    }
}

impl BootstrapTextInput {
    /// Creates a new text input.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a number input accepting whole numbers.
    pub fn integer() -> Self {
        Self {
            input_type: "number".to_string(),
            step: Some("1".to_string()),
            ..Default::default()
        }
    }

    /// Creates a number input accepting any decimal.
    pub fn decimal() -> Self {
        Self {
            input_type: "number".to_string(),
            step: Some("any".to_string()),
            ..Default::default()
        }
    }

    /// Sets the placeholder text.
    #[must_use]
    pub fn placeholder(mut self, text: impl Into<String>) -> Self {
        self.placeholder = Some(text.into());
        self
    }
}

impl Widget for BootstrapTextInput {
    fn render(&self, id: &str, value: Option<&str>, attrs: &WidgetAttrs) -> String {
        let id = html_escape(id);
        let value_attr = value
            .map(|v| format!(r#" value="{}""#, html_escape(v)))
            .unwrap_or_default();
        let placeholder_attr = self
            .placeholder
            .as_ref()
            .map(|p| format!(r#" placeholder="{}""#, html_escape(p)))
            .unwrap_or_default();
        let step_attr = self
            .step
            .as_ref()
            .map(|s| format!(r#" step="{s}""#))
            .unwrap_or_default();

        format!(
            r#"<input type="{}" class="{}" id="{id}" name="{id}"{value_attr}{placeholder_attr}{step_attr}{}>"#,
            self.input_type,
            control_class("form-control", attrs),
            attrs.to_html()
        )
    }

    fn input_type(&self) -> &str {
        &self.input_type
    }
}

/// Bootstrap 5 select widget.
#[derive(Debug, Clone)]
pub struct BootstrapSelect {
    /// Available choices (value, label).
    pub choices: Vec<(String, String)>,
    /// Whether to include an empty option.
    pub include_blank: bool,
    /// Label for blank option.
    pub blank_label: String,
}

impl Default for BootstrapSelect {
    fn default() -> Self {
        Self {
            choices: Vec::new(),
            include_blank: true,
            blank_label: "---------".to_string(),
        }
    }
}

impl BootstrapSelect {
    /// Creates a new select with the given choices.
    pub fn new(choices: Vec<(impl Into<String>, impl Into<String>)>) -> Self {
        Self {
            choices: choices
                .into_iter()
                .map(|(v, l)| (v.into(), l.into()))
                .collect(),
            ..Default::default()
        }
    }

    /// Removes the empty option.
    #[must_use]
    pub fn no_blank(mut self) -> Self {
        self.include_blank = false;
        self
    }
}

impl Widget for BootstrapSelect {
    fn render(&self, id: &str, value: Option<&str>, attrs: &WidgetAttrs) -> String {
        let id = html_escape(id);
        let mut options = String::new();

        if self.include_blank {
            options.push_str(&format!(
                r#"<option value="">{}</option>"#,
                html_escape(&self.blank_label)
            ));
        }

        for (opt_value, label) in &self.choices {
            let selected = value.is_some_and(|v| v == opt_value);
            let selected_attr = if selected { " selected" } else { "" };
            options.push_str(&format!(
                r#"<option value="{}"{selected_attr}>{}</option>"#,
                html_escape(opt_value),
                html_escape(label)
            ));
        }

        format!(
            r#"<select class="{}" id="{id}" name="{id}"{}>{options}</select>"#,
            control_class("form-select", attrs),
            attrs.to_html()
        )
    }

    fn input_type(&self) -> &str {
        "select"
    }
}
