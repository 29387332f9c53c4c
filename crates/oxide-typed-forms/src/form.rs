//! Form models and the rendering boundary.

use std::sync::Arc;

use ironhtml::html;
use ironhtml_elements::Div;
use tracing::warn;

use crate::captured::CapturedForm;
use crate::decoder::{Decoder, SubmitEvent};
use crate::error::{Result, ValidationErrors};
use crate::kind::InputKind;
use crate::validation::check_field;
use crate::widgets::html_escape;

/// One field of a form: its identifier, how its value is captured and
/// the rendered HTML holding its control.
#[derive(Debug, Clone)]
pub struct FieldDescriptor {
    /// Field identifier, equal to the control's `id` attribute.
    pub id: String,
    /// Capture rule applied to the control's raw value.
    pub kind: InputKind,
    /// Rendered element containing the control.
    pub element: String,
}

impl FieldDescriptor {
    /// Creates a new field descriptor.
    pub fn new(id: impl Into<String>, kind: InputKind, element: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            kind,
            element: element.into(),
        }
    }

    /// Returns whether the rendered element carries a control with this
    /// field's identifier.
    pub fn has_control(&self) -> bool {
        let needle = format!(r#"id="{}""#, html_escape(&self.id));
        self.element.match_indices(&needle).any(|(at, _)| {
            self.element[..at]
                .chars()
                .next_back()
                .is_some_and(char::is_whitespace)
        })
    }
}

type SubmitFn<E> = dyn Fn(CapturedForm) -> E + Send + Sync;

/// A form: the event constructor run on submit and its fields in order.
pub struct FormModel<E> {
    on_submit: Arc<SubmitFn<E>>,
    elements: Vec<FieldDescriptor>,
}

impl<E> std::fmt::Debug for FormModel<E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FormModel")
            .field("elements", &self.elements)
            .finish_non_exhaustive()
    }
}

impl<E> Clone for FormModel<E> {
    fn clone(&self) -> Self {
        Self {
            on_submit: Arc::clone(&self.on_submit),
            elements: self.elements.clone(),
        }
    }
}

/// Creates a form delivering captured values through `on_submit`.
pub fn new_form<E>(
    on_submit: impl Fn(CapturedForm) -> E + Send + Sync + 'static,
    elements: Vec<FieldDescriptor>,
) -> FormModel<E> {
    FormModel::new(on_submit, elements)
}

impl<E> FormModel<E> {
    /// Creates a form delivering captured values through `on_submit`.
    pub fn new(
        on_submit: impl Fn(CapturedForm) -> E + Send + Sync + 'static,
        elements: Vec<FieldDescriptor>,
    ) -> Self {
        Self {
            on_submit: Arc::new(on_submit),
            elements,
        }
    }

    /// Appends a field.
    #[must_use]
    pub fn add_element(mut self, element: FieldDescriptor) -> Self {
        self.elements.push(element);
        self
    }

    /// Returns the fields in order.
    pub fn elements(&self) -> &[FieldDescriptor] {
        &self.elements
    }

    /// Builds the decoder for this form's fields.
    pub fn decoder(&self) -> Decoder {
        Decoder::build(&self.elements)
    }

    /// Reads every field with the reader its kind calls for and collects
    /// the failures.
    pub fn validate(&self, form: &CapturedForm) -> ValidationErrors {
        let mut errors = ValidationErrors::new();
        for field in &self.elements {
            if let Err(err) = check_field(&field.id, &field.kind, form) {
                errors.push(&err);
            }
        }
        errors
    }

    /// Renders the form and attaches its submit handler.
    pub fn render(&self, options: &RenderOptions) -> RenderedForm<E> {
        let action = options.action.as_str();
        let method = options.method.as_str();
        let mut form = html! {
            form.action(#action).method(#method)
        };

        for field in &self.elements {
            if !field.has_control() {
                warn!(field = %field.id, "rendered element has no control with the field id");
            }
            form = form.child::<Div, _>(|d| d.raw(&field.element));
        }

        let submit_class = options.submit_class.as_str();
        let submit_label = options.submit_label.clone();
        form = form.child::<Div, _>(|d| {
            let btn = html! {
                button.type_("submit").class(#submit_class) { #submit_label }
            };
            d.raw(btn.render())
        });

        RenderedForm {
            html: form.render(),
            handler: SubmitHandler {
                decoder: self.decoder(),
                on_submit: Arc::clone(&self.on_submit),
                prevent_default: true,
                stop_propagation: true,
            },
        }
    }
}

/// Options for rendering a form.
#[derive(Debug, Clone)]
pub struct RenderOptions {
    /// Form action URL.
    pub action: String,
    /// Form method.
    pub method: String,
    /// Text of the submit button.
    pub submit_label: String,
    /// CSS classes of the submit button.
    pub submit_class: String,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            action: String::new(),
            method: "post".to_string(),
            submit_label: "Submit".to_string(),
            submit_class: "btn btn-primary".to_string(),
        }
    }
}

impl RenderOptions {
    /// Creates the default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the form action.
    #[must_use]
    pub fn action(mut self, action: impl Into<String>) -> Self {
        self.action = action.into();
        self
    }

    /// Sets the form method.
    #[must_use]
    pub fn method(mut self, method: impl Into<String>) -> Self {
        self.method = method.into();
        self
    }

    /// Sets the submit button text.
    #[must_use]
    pub fn submit_label(mut self, label: impl Into<String>) -> Self {
        self.submit_label = label.into();
        self
    }

    /// Sets the submit button classes.
    #[must_use]
    pub fn submit_class(mut self, class: impl Into<String>) -> Self {
        self.submit_class = class.into();
        self
    }
}

/// A rendered form together with the handler for its submit event.
#[derive(Debug)]
pub struct RenderedForm<E> {
    /// The form markup.
    pub html: String,
    /// Handler attached to the form's submit event.
    pub handler: SubmitHandler<E>,
}

/// Turns submit events into application events.
pub struct SubmitHandler<E> {
    decoder: Decoder,
    on_submit: Arc<SubmitFn<E>>,
    /// Whether the browser's default navigation is suppressed.
    pub prevent_default: bool,
    /// Whether the event stops propagating past the form.
    pub stop_propagation: bool,
}

impl<E> std::fmt::Debug for SubmitHandler<E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SubmitHandler")
            .field("decoder", &self.decoder)
            .field("prevent_default", &self.prevent_default)
            .field("stop_propagation", &self.stop_propagation)
            .finish_non_exhaustive()
    }
}

impl<E> SubmitHandler<E> {
    /// Decodes the event and builds the application event.
    pub fn try_handle(&self, event: &SubmitEvent) -> Result<E> {
        let form = self.decoder.decode(event)?;
        Ok((self.on_submit)(form))
    }

    /// Decodes the event and builds the application event.
    ///
    /// A submission whose fields cannot all be extracted is logged and
    /// dropped.
    pub fn handle(&self, event: &SubmitEvent) -> Option<E> {
        match self.try_handle(event) {
            Ok(app_event) => Some(app_event),
            Err(err) => {
                warn!(field = %err.field(), error = %err, "dropping form submission");
                None
            }
        }
    }
}
