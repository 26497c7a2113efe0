//! Settings import button with a file picker.

use dioxus::html::FileData;
use dioxus::prelude::*;
use dioxus_free_icons::Icon;
use dioxus_free_icons::icons::ld_icons::LdUpload;

/// Allowed file extensions for settings imports.
const ALLOWED_EXTENSIONS: &[&str] = &["json"];

/// Check whether a filename has an allowed settings extension.
fn has_allowed_extension(name: &str) -> bool {
    name.rsplit_once('.').is_some_and(|(_, ext)| {
        ALLOWED_EXTENSIONS
            .iter()
            .any(|a| a.eq_ignore_ascii_case(ext))
    })
}

/// Props for the [`SettingsImport`] component.
#[derive(Props, Clone, PartialEq)]
pub struct SettingsImportProps {
    /// Called with the file's text once it has been read.
    on_import: EventHandler<String>,
    /// Called with a message when the file cannot be read at all.
    on_error: EventHandler<String>,
}

/// A button-styled label wrapping a hidden `.json` file input.
///
/// Reads the first selected file as UTF-8 and forwards its text to
/// `on_import`.  Parsing is left to the caller.
#[component]
pub fn SettingsImport(props: SettingsImportProps) -> Element {
    let on_import = props.on_import;
    let on_error = props.on_error;

    let process_files = move |files: Vec<FileData>| async move {
        let Some(file) = files.first() else {
            return;
        };
        let name = file.name();
        if !has_allowed_extension(&name) {
            on_error.call(format!("نوع الملف غير مدعوم: {name}"));
            return;
        }
        match file.read_bytes().await {
            Ok(bytes) => match String::from_utf8(bytes.to_vec()) {
                Ok(text) => on_import.call(text),
                Err(e) => on_error.call(format!("خطأ في قراءة الملف: {e}")),
            },
            Err(e) => on_error.call(format!("خطأ في قراءة الملف: {e}")),
        }
    };

    let handle_files = move |evt: FormEvent| async move {
        process_files(evt.files()).await;
    };

    rsx! {
        label { class: "btn btn-outline",
            Icon { width: 16, height: 16, icon: LdUpload }
            "استيراد"
            input {
                r#type: "file",
                accept: ".json",
                class: "hidden",
                onchange: handle_files,
            }
        }
    }
}
