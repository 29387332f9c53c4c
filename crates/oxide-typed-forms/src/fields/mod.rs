//! Helpers building labelled field descriptors.

mod select;
mod text;

pub use select::{choice_field, custom_field};
pub use text::{bool_field, float_field, int_field, string_field};

use ironhtml::html;

use crate::form::FieldDescriptor;
use crate::kind::InputKind;
use crate::widgets::{Widget, WidgetAttrs};

/// Renders a widget under its label with Bootstrap 5 spacing.
pub fn render_labelled(id: &str, label: &str, widget: &dyn Widget, attrs: &WidgetAttrs) -> String {
    let for_id = id.to_string();
    let label_text = label.to_string();
    let label_el = html! {
        label.for_(#for_id).class("form-label") { #label_text }
    };

    html! { div.class("mb-3") }
        .raw(label_el.render())
        .raw(&widget.render(id, None, attrs))
        .render()
}

/// Builds a descriptor whose element is the labelled widget.
pub fn labelled_field(
    id: &str,
    label: &str,
    kind: InputKind,
    widget: &dyn Widget,
    attrs: &WidgetAttrs,
) -> FieldDescriptor {
    FieldDescriptor::new(id, kind, render_labelled(id, label, widget, attrs))
}
