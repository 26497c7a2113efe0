//! Output panel: generated code, live preview, copy and download.

use std::rc::Rc;

use dioxus::prelude::*;
use dioxus_free_icons::Icon;
use dioxus_free_icons::icons::ld_icons::{LdCopy, LdDownload};
use partpage_export::filename::PAGE_MIME;

use super::notice::Notice;
use crate::{clipboard, download};

/// Shown when copy or download is attempted before any page exists.
const GENERATE_FIRST: &str = "يرجى توليد الكود أولاً";

/// Which half of the panel is visible.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Tab {
    Code,
    Preview,
}

/// Props for the [`OutputPanel`] component.
#[derive(Props, Clone)]
pub struct OutputPanelProps {
    /// The most recently generated page. `None` until the first
    /// successful generation.
    /// Wrapped in `Rc` to avoid cloning the document on each render.
    document: Option<Rc<str>>,
    /// Filename the page is downloaded as.
    filename: String,
    /// Called with the outcome of copy and download actions.
    on_notice: EventHandler<Notice>,
}

impl PartialEq for OutputPanelProps {
    fn eq(&self, other: &Self) -> bool {
        let documents_eq = match (&self.document, &other.document) {
            (Some(a), Some(b)) => Rc::ptr_eq(a, b),
            (None, None) => true,
            _ => false,
        };
        documents_eq && self.filename == other.filename && self.on_notice == other.on_notice
    }
}

/// The generated document, or the "generate first" refusal.
fn require_document(document: Option<&Rc<str>>) -> Result<Rc<str>, Notice> {
    document
        .cloned()
        .ok_or_else(|| Notice::Error(GENERATE_FIRST.to_owned()))
}

/// Tabbed panel showing the generated code and a sandboxed preview.
///
/// Copy and download are refused with a notice until a page has been
/// generated.
#[component]
pub fn OutputPanel(props: OutputPanelProps) -> Element {
    let mut tab = use_signal(|| Tab::Code);
    let on_notice = props.on_notice;

    let copy_click = {
        let document = props.document.clone();
        move |_| match require_document(document.as_ref()) {
            Err(notice) => on_notice.call(notice),
            Ok(doc) => {
                spawn(async move {
                    match clipboard::write_text(&doc).await {
                        Ok(()) => {
                            on_notice.call(Notice::Success("تم نسخ الكود إلى الحافظة".into()));
                        }
                        Err(e) => on_notice.call(Notice::Error(format!("فشل النسخ: {e}"))),
                    }
                });
            }
        }
    };

    let download_click = {
        let document = props.document.clone();
        let filename = props.filename.clone();
        move |_| match require_document(document.as_ref()) {
            Err(notice) => on_notice.call(notice),
            Ok(doc) => match download::trigger_download(&doc, &filename, PAGE_MIME) {
                Ok(()) => on_notice.call(Notice::Success("تم تحميل الملف".into())),
                Err(e) => on_notice.call(Notice::Error(format!("فشل التحميل: {e}"))),
            },
        }
    };

    let tab_class = |t: Tab| {
        if tab() == t {
            "tab tab-active"
        } else {
            "tab"
        }
    };

    rsx! {
        section { class: "card",
            div { class: "tabs",
                button {
                    class: tab_class(Tab::Code),
                    onclick: move |_| tab.set(Tab::Code),
                    "الكود"
                }
                button {
                    class: tab_class(Tab::Preview),
                    onclick: move |_| tab.set(Tab::Preview),
                    "المعاينة"
                }
            }

            {match tab() {
                Tab::Code => rsx! {
                    div { class: "button-row",
                        button { class: "btn btn-outline", onclick: copy_click,
                            Icon { width: 16, height: 16, icon: LdCopy }
                            "نسخ"
                        }
                        button { class: "btn btn-outline", onclick: download_click,
                            Icon { width: 16, height: 16, icon: LdDownload }
                            "تحميل"
                        }
                    }
                    div { class: "code-view",
                        if let Some(ref doc) = props.document {
                            pre { "{doc}" }
                        } else {
                            p { class: "placeholder", "الكود سيظهر هنا بعد التوليد" }
                        }
                    }
                },
                Tab::Preview => rsx! {
                    if let Some(ref doc) = props.document {
                        iframe {
                            class: "preview-frame",
                            title: "معاينة الصفحة",
                            "sandbox": "allow-scripts",
                            srcdoc: "{doc}",
                        }
                    } else {
                        div { class: "placeholder preview-empty",
                            "المعاينة ستظهر هنا بعد التوليد"
                        }
                    }
                },
            }}
        }
    }
}
