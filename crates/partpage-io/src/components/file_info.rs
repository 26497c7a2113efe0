//! File details form: name, type, and the running total size.

use dioxus::prelude::*;
use partpage_core::FileType;

use super::fields::{render_select, render_text_input};

/// Props for the [`FileInfoForm`] component.
#[derive(Props, Clone, PartialEq)]
pub struct FileInfoFormProps {
    /// Current file name.
    file_name: String,
    /// Current file type.
    file_type: FileType,
    /// Formatted total size of all parts.
    total_size: String,
    /// Called with the new file name on every keystroke.
    on_file_name: EventHandler<String>,
    /// Called when a different file type is selected.
    on_file_type: EventHandler<FileType>,
}

/// Card with the file name input, file type select, and total size.
#[component]
pub fn FileInfoForm(props: FileInfoFormProps) -> Element {
    let on_file_name = props.on_file_name;
    let on_file_type = props.on_file_type;
    let options: Vec<(&str, &str)> = FileType::ALL
        .iter()
        .map(|ty| (ty.label(), ty.label()))
        .collect();

    rsx! {
        section { class: "card",
            h2 { class: "card-title", "بيانات الملف" }

            {render_text_input(
                "file_name",
                "اسم الملف",
                &props.file_name,
                "مثال: لعبة PS5",
                "text",
                move |v: String| on_file_name.call(v),
            )}

            {render_select(
                "file_type",
                "نوع الملف",
                &options,
                props.file_type.label(),
                move |v: String| match v.parse::<FileType>() {
                    Ok(ty) => on_file_type.call(ty),
                    Err(err) => web_sys::console::warn_1(&err.to_string().into()),
                },
            )}

            div { class: "total-size",
                strong { "الحجم الكلي: " }
                "{props.total_size}"
            }
        }
    }
}
