//! Editable list of parts.
//!
//! One card per part with its name, size, unit, and download URL, plus
//! a delete button.  Edits are reported upward as [`PartUpdate`]s that
//! carry only the changed field.

use dioxus::prelude::*;
use dioxus_free_icons::Icon;
use dioxus_free_icons::icons::ld_icons::{LdPlus, LdTrash2};
use partpage_core::{Part, PartId, PartUpdate, SizeUnit};

use super::fields::{render_number_input, render_select, render_text_input};

/// Props for the [`PartList`] component.
#[derive(Props, Clone, PartialEq)]
pub struct PartListProps {
    /// Parts in display order.
    parts: Vec<Part>,
    /// Called when the add button is clicked.
    on_add: EventHandler<()>,
    /// Called with the id of a part whose delete button was clicked.
    on_remove: EventHandler<PartId>,
    /// Called with a part id and the single field that changed.
    on_update: EventHandler<(PartId, PartUpdate)>,
}

/// Card listing every part with inline editors.
#[component]
pub fn PartList(props: PartListProps) -> Element {
    let on_add = props.on_add;

    rsx! {
        section { class: "card",
            div { class: "card-header",
                h2 { class: "card-title", "الأجزاء" }
                button {
                    class: "btn btn-primary btn-small",
                    onclick: move |_| on_add.call(()),
                    Icon { width: 16, height: 16, icon: LdPlus }
                    "إضافة جزء"
                }
            }

            if props.parts.is_empty() {
                p { class: "placeholder", "لم تضف أي أجزاء بعد" }
            } else {
                div { class: "part-list",
                    for (index, part) in props.parts.iter().enumerate() {
                        {render_part(part, index + 1, props.on_remove, props.on_update)}
                    }
                }
            }
        }
    }
}

/// Render the editor card for one part at 1-based `position`.
fn render_part(
    part: &Part,
    position: usize,
    on_remove: EventHandler<PartId>,
    on_update: EventHandler<(PartId, PartUpdate)>,
) -> Element {
    let key = part.id.to_string();
    let remove_id = part.id.clone();
    let name_id = part.id.clone();
    let size_id = part.id.clone();
    let unit_id = part.id.clone();
    let url_id = part.id.clone();
    let units: Vec<(&str, &str)> = SizeUnit::ALL
        .iter()
        .map(|unit| (unit.label(), unit.label()))
        .collect();

    rsx! {
        div { key: "{key}", class: "part-card",
            div { class: "card-header",
                h3 { class: "part-heading", "الجزء {position}" }
                button {
                    class: "btn btn-danger btn-small",
                    title: "حذف",
                    onclick: move |_| on_remove.call(remove_id.clone()),
                    Icon { width: 16, height: 16, icon: LdTrash2 }
                }
            }

            div { class: "part-grid",
                {render_text_input(
                    &format!("part_name_{key}"),
                    "اسم الجزء",
                    &part.name,
                    "مثال: Part 1",
                    "text",
                    move |v: String| on_update.call((name_id.clone(), PartUpdate::name(v))),
                )}

                div { class: "part-size-row",
                    {render_number_input(
                        &format!("part_size_{key}"),
                        "الحجم",
                        part.size,
                        0.1,
                        move |v: f64| on_update.call((size_id.clone(), PartUpdate::size(v))),
                    )}
                    {render_select(
                        &format!("part_unit_{key}"),
                        "الوحدة",
                        &units,
                        part.unit.label(),
                        move |v: String| match v.parse::<SizeUnit>() {
                            Ok(unit) => on_update.call((unit_id.clone(), PartUpdate::unit(unit))),
                            Err(err) => web_sys::console::warn_1(&err.to_string().into()),
                        },
                    )}
                }

                div { class: "part-url",
                    {render_text_input(
                        &format!("part_url_{key}"),
                        "رابط التحميل",
                        &part.download_url,
                        "https://example.com/file",
                        "url",
                        move |v: String| on_update.call((url_id.clone(), PartUpdate::download_url(v))),
                    )}
                }
            }
        }
    }
}
