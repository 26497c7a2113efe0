//! Labeled form field helpers shared by the form components.

use dioxus::prelude::*;

/// Render a labeled single-line text input.
pub(crate) fn render_text_input(
    id: &str,
    label: &str,
    value: &str,
    placeholder: &str,
    input_type: &'static str,
    on_input: impl Fn(String) + 'static,
) -> Element {
    let id = id.to_string();
    let label = label.to_string();
    let value = value.to_string();
    let placeholder = placeholder.to_string();

    rsx! {
        div { class: "field",
            label { r#for: "{id}", class: "field-label", "{label}" }
            input {
                r#type: input_type,
                id: "{id}",
                class: "field-input",
                value: "{value}",
                placeholder: "{placeholder}",
                oninput: move |e| on_input(e.value()),
            }
        }
    }
}

/// Render a labeled non-negative number input.
///
/// Empty or unparsable text is reported as `0`, matching what the
/// browser shows for a cleared number field.
pub(crate) fn render_number_input(
    id: &str,
    label: &str,
    value: f64,
    step: f64,
    on_input: impl Fn(f64) + 'static,
) -> Element {
    let id = id.to_string();
    let label = label.to_string();

    rsx! {
        div { class: "field",
            label { r#for: "{id}", class: "field-label", "{label}" }
            input {
                r#type: "number",
                id: "{id}",
                class: "field-input",
                min: "0",
                step: "{step}",
                value: "{value}",
                oninput: move |e| {
                    let text = e.value();
                    let parsed = parse_size(&text);
                    if parsed.is_none() && !text.trim().is_empty() {
                        web_sys::console::warn_1(
                            &format!("size parse failure from {text:?}").into(),
                        );
                    }
                    on_input(parsed.unwrap_or(0.0));
                },
            }
        }
    }
}

/// Render a labeled select dropdown.
///
/// `options` are `(value, display)` pairs.
pub(crate) fn render_select(
    id: &str,
    label: &str,
    options: &[(&str, &str)],
    selected: &str,
    on_change: impl Fn(String) + 'static,
) -> Element {
    let id = id.to_string();
    let label = label.to_string();
    let options: Vec<(String, String)> = options
        .iter()
        .map(|(v, l)| ((*v).to_string(), (*l).to_string()))
        .collect();
    let selected = selected.to_string();

    rsx! {
        div { class: "field",
            label { r#for: "{id}", class: "field-label", "{label}" }
            select {
                id: "{id}",
                class: "field-input",
                value: "{selected}",
                onchange: move |e| on_change(e.value()),

                for (value, display) in options.iter() {
                    option {
                        value: "{value}",
                        selected: value == &selected,
                        "{display}"
                    }
                }
            }
        }
    }
}

/// Parse the text of a size field.
///
/// Returns `None` for empty or non-numeric text.
pub(crate) fn parse_size(text: &str) -> Option<f64> {
    text.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}
