//! Platypus Form Example
//!
//! Renders a small form, feeds it a few submissions and shows each field's
//! typed value, or the fallback text when the read fails.
//! Run with: cargo run --example platypus_form

use oxide_typed_forms::fields::{bool_field, choice_field, float_field, int_field, string_field};
use oxide_typed_forms::{
    new_form, read_bool_at, read_custom_at, read_float_at, read_int_at, read_string_at,
    CapturedForm, FormModel, RenderOptions, SubmitEvent, TypeTag,
};
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

enum Msg {
    FormSubmitted(CapturedForm),
}

#[derive(Default)]
struct Model {
    submitted: Option<CapturedForm>,
}

fn update(mut model: Model, msg: Msg) -> Model {
    match msg {
        Msg::FormSubmitted(form) => model.submitted = Some(form),
    }
    model
}

fn form() -> FormModel<Msg> {
    new_form(
        Msg::FormSubmitted,
        vec![
            string_field("name", "Your name"),
            int_field("age", "Your age"),
            float_field("height", "Your height in metres"),
        ],
    )
    .add_element(bool_field("animal", "Best animal?", |s| {
        s.to_lowercase() == "platypus"
    }))
    .add_element(choice_field(
        "colour",
        "Favourite colour",
        vec![("red", "Red"), ("green", "Green"), ("blue", "Blue")],
    ))
}

fn show<T: std::fmt::Debug, E>(result: Result<T, E>, tag: TypeTag) -> String {
    result.map_or_else(|_| tag.fallback_message().to_string(), |v| format!("{v:?}"))
}

fn view(model: &Model, form_model: &FormModel<Msg>) {
    let Some(form) = &model.submitted else {
        println!("Nothing submitted yet.");
        return;
    };

    println!("  name:   {}", show(read_string_at("name", form), TypeTag::String));
    println!("  age:    {}", show(read_int_at("age", form), TypeTag::Int));
    println!("  height: {}", show(read_float_at("height", form), TypeTag::Float));
    println!("  animal: {}", show(read_bool_at("animal", form), TypeTag::Bool));
    println!(
        "  colour: {}",
        show(read_custom_at::<String>("colour", form), TypeTag::Custom)
    );
    println!("  json:   {}", form.to_json());

    let errors = form_model.validate(form);
    if errors.is_empty() {
        println!("  all fields valid");
    } else {
        println!("  {} invalid field(s):", errors.len());
        print!("{errors}");
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::DEBUG)
        .with_target(false)
        .without_time()
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let form_model = form();
    let rendered = form_model.render(&RenderOptions::new().submit_label("Send"));
    println!("{}\n", rendered.html);

    let submissions = [
        SubmitEvent::from_urlencoded(
            "name=Ada&age=33&height=1.68&animal=Platypus&colour=green",
        ),
        SubmitEvent::from_urlencoded("name=Bob&age=abc&height=tall&animal=giraffe&colour="),
        // no height control: the whole submission is dropped
        SubmitEvent::from_urlencoded("name=Eve&age=40&animal=platypus&colour=red"),
    ];

    let mut model = Model::default();
    view(&model, &form_model);

    for (i, event) in submissions.iter().enumerate() {
        info!("submission {}", i + 1);
        if let Some(msg) = rendered.handler.handle(event) {
            model = update(model, msg);
        }
        view(&model, &form_model);
    }

    Ok(())
}
