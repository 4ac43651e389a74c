//! Labelled inputs with inline validation messages.

use dioxus::prelude::*;
use intake::models::MONTH_NAMES;
use intake::validation::{MAX_BIRTH_YEAR, MIN_BIRTH_YEAR};

/// `(value, label)` pairs for a select box.
pub type Options = Vec<(String, String)>;

#[component]
pub fn TextField(
    id: String,
    label: String,
    value: String,
    oninput: EventHandler<String>,
    #[props(default)] error: Option<String>,
    #[props(default)] required: bool,
    #[props(default)] disabled: bool,
    #[props(default)] uppercase: bool,
    #[props(default)] placeholder: String,
    #[props(default = "text".to_string())] input_type: String,
    #[props(default)] max_length: Option<usize>,
) -> Element {
    let class = if error.is_some() { "field field--invalid" } else { "field" };

    rsx! {
        div {
            class,
            label { r#for: "{id}",
                "{label}"
                if required {
                    span { class: "required", "*" }
                }
            }
            input {
                id: "{id}",
                name: "{id}",
                class: if uppercase { "uppercase" } else { "" },
                r#type: "{input_type}",
                value: "{value}",
                placeholder: "{placeholder}",
                disabled,
                maxlength: max_length.map(|n| n.to_string()),
                oninput: move |evt: FormEvent| oninput.call(evt.value()),
            }
            if let Some(message) = error {
                div { class: "field-error", "{message}" }
            }
        }
    }
}

#[component]
pub fn SelectField(
    id: String,
    label: String,
    value: String,
    options: Options,
    onchange: EventHandler<String>,
    #[props(default)] error: Option<String>,
    #[props(default)] required: bool,
    #[props(default)] disabled: bool,
    #[props(default = "Select...".to_string())] placeholder: String,
) -> Element {
    let class = if error.is_some() { "field field--invalid" } else { "field" };

    rsx! {
        div {
            class,
            label { r#for: "{id}",
                "{label}"
                if required {
                    span { class: "required", "*" }
                }
            }
            select {
                id: "{id}",
                name: "{id}",
                value: "{value}",
                disabled,
                onchange: move |evt: FormEvent| onchange.call(evt.value()),
                option { value: "", "{placeholder}" }
                for (option_value, option_label) in options {
                    option {
                        key: "{option_value}",
                        value: "{option_value}",
                        selected: option_value == value,
                        "{option_label}"
                    }
                }
            }
            if let Some(message) = error {
                div { class: "field-error", "{message}" }
            }
        }
    }
}

/// `"01"`..`"12"` labelled with the month name.
pub fn month_options() -> Options {
    MONTH_NAMES
        .iter()
        .enumerate()
        .map(|(i, name)| (format!("{:02}", i + 1), name.to_string()))
        .collect()
}

/// `"01"`..`"31"`.
pub fn day_options() -> Options {
    (1..=31)
        .map(|d| {
            let value = format!("{d:02}");
            (value.clone(), value)
        })
        .collect()
}

/// Accepted birth years, newest first.
pub fn year_options() -> Options {
    (MIN_BIRTH_YEAR..=MAX_BIRTH_YEAR)
        .rev()
        .map(|y| (y.to_string(), y.to_string()))
        .collect()
}

/// Options for one of the typed choice lists.
pub fn choice_options<T: Copy>(
    all: &[T],
    value: impl Fn(T) -> &'static str,
    label: impl Fn(T) -> &'static str,
) -> Options {
    all.iter()
        .map(|&choice| (value(choice).to_string(), label(choice).to_string()))
        .collect()
}
