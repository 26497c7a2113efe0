use std::rc::Rc;

use dioxus::prelude::*;
use dioxus_free_icons::Icon;
use dioxus_free_icons::icons::ld_icons::{LdDownload, LdFileCode};
use partpage_core::{FileType, PartId, PartUpdate, Restore, StateStore, StoreError};
use partpage_export::filename::SETTINGS_MIME;
use partpage_export::{
    ImportError, generate_page, import_settings, page_filename, settings_filename,
    to_settings_json,
};
use partpage_io::download;
use partpage_io::{
    BrowserStorage, FileInfoForm, Notice, NoticeBanner, OutputPanel, PartList, SettingsImport,
};

/// How long a success notice stays up before clearing itself.
const NOTICE_TIMEOUT_MS: u32 = 3000;

/// Shown once at startup when edits cannot outlive the page.
const NOT_PERSISTENT: &str = "التخزين المحلي غير متاح، لن تُحفظ التغييرات بعد إغلاق الصفحة";

fn main() {
    dioxus::launch(app);
}

/// The banner message plus a counter that lets a pending auto-dismiss
/// tell whether its notice has since been replaced.
#[derive(Clone, Copy)]
struct Notices {
    current: Signal<Option<Notice>>,
    generation: Signal<u64>,
}

impl Notices {
    fn show(mut self, notice: Notice) {
        self.generation += 1;
        let my_generation = *self.generation.peek();
        let auto_dismiss = matches!(notice, Notice::Success(_));
        self.current.set(Some(notice));

        if auto_dismiss {
            spawn(async move {
                gloo_timers::future::TimeoutFuture::new(NOTICE_TIMEOUT_MS).await;
                if *self.generation.peek() == my_generation {
                    self.current.set(None);
                }
            });
        }
    }

    fn dismiss(mut self) {
        self.generation += 1;
        self.current.set(None);
    }

    /// Report a failed save.  The edit itself stays applied.
    fn unsaved(self, result: Result<(), StoreError>) {
        if let Err(e) = result {
            web_sys::console::warn_1(&format!("state not saved: {e}").into());
            self.show(Notice::Error(format!("تعذر حفظ التغييرات: {e}")));
        }
    }
}

/// Open the persisted state, falling back to defaults when it is
/// unreadable and to memory when localStorage is missing.
fn open_store() -> StateStore<BrowserStorage> {
    let storage = BrowserStorage::open();
    if !storage.is_persistent() {
        web_sys::console::warn_1(&"localStorage unavailable; keeping state in memory".into());
    }
    let (store, restore) = StateStore::open(storage);
    if let Restore::Discarded(e) = restore {
        web_sys::console::warn_1(&format!("discarding unreadable saved state: {e}").into());
    }
    store
}

/// Root application component.
///
/// Owns the generator state (mirrored to `localStorage` on every edit),
/// the last generated page, and the notice banner, and wires them to
/// the form, part list, and output components.
#[allow(clippy::too_many_lines)]
fn app() -> Element {
    // --- Application state ---
    let mut store = use_signal(open_store);
    let mut generated = use_signal(|| Option::<Rc<str>>::None);
    let notices = Notices {
        current: use_signal(|| {
            (!store.peek().storage().is_persistent())
                .then(|| Notice::Error(NOT_PERSISTENT.to_owned()))
        }),
        generation: use_signal(|| 0u64),
    };

    // --- File info handlers ---
    let on_file_name = move |name: String| {
        let saved = store.write().set_file_name(name);
        notices.unsaved(saved);
    };
    let on_file_type = move |ty: FileType| {
        let saved = store.write().set_file_type(ty);
        notices.unsaved(saved);
    };

    // --- Part handlers ---
    let on_add = move |()| {
        let saved = store.write().add_part().map(|_| ());
        notices.unsaved(saved);
    };
    let on_remove = move |id: PartId| {
        let saved = store.write().remove_part(&id);
        notices.unsaved(saved);
    };
    let on_update = move |(id, update): (PartId, PartUpdate)| {
        let saved = store.write().update_part(&id, update);
        notices.unsaved(saved);
    };

    // --- Generate ---
    // A failed generation leaves the previous page in place.
    let on_generate = move |_| {
        let outcome = generate_page(store.read().state());
        match outcome {
            Ok(html) => {
                generated.set(Some(Rc::from(html)));
                notices.show(Notice::Success("تم توليد الكود بنجاح!".into()));
            }
            Err(e) => notices.show(Notice::Error(e.to_string())),
        }
    };

    // --- Settings export / import ---
    let on_export = move |_| {
        let state = store.read().state().clone();
        let outcome = to_settings_json(&state)
            .map_err(|e| e.to_string())
            .and_then(|json| {
                download::trigger_download(&json, &settings_filename(&state), SETTINGS_MIME)
                    .map_err(|e| e.to_string())
            });
        match outcome {
            Ok(()) => notices.show(Notice::Success("تم تصدير الإعدادات".into())),
            Err(e) => notices.show(Notice::Error(format!("فشل التصدير: {e}"))),
        }
    };

    let on_import = move |text: String| {
        let outcome = import_settings(&mut *store.write(), &text);
        match outcome {
            Ok(()) => notices.show(Notice::Success("تم استيراد الإعدادات بنجاح".into())),
            Err(ImportError::Store(e)) => notices.unsaved(Err(e)),
            Err(e @ ImportError::Settings(_)) => notices.show(Notice::Error(e.to_string())),
        }
    };
    let on_import_error = move |message: String| notices.show(Notice::Error(message));

    // --- Derived view data ---
    let current = store.read();
    let state = current.state();
    let total_size = current.total_size();
    let filename = page_filename(state);

    // --- Layout ---
    rsx! {
        style { dangerous_inner_html: include_str!("../assets/app.css") }

        div { class: "app", dir: "rtl", lang: "ar",
            header { class: "app-header",
                h1 { "🎮 مولد صفحات التحميل 4GAMER" }
                p { class: "app-tagline", "أنشئ صفحة تحميل احترافية لملفاتك المقسمة إلى أجزاء" }
            }

            NoticeBanner {
                notice: notices.current.cloned(),
                on_dismiss: move |()| notices.dismiss(),
            }

            main { class: "app-main",
                // Editing column
                div { class: "app-column",
                    FileInfoForm {
                        file_name: state.file_name.clone(),
                        file_type: state.file_type,
                        total_size: total_size,
                        on_file_name: on_file_name,
                        on_file_type: on_file_type,
                    }

                    PartList {
                        parts: state.parts.clone(),
                        on_add: on_add,
                        on_remove: on_remove,
                        on_update: on_update,
                    }

                    div { class: "button-row",
                        button { class: "btn btn-primary", onclick: on_generate,
                            Icon { width: 16, height: 16, icon: LdFileCode }
                            "توليد الصفحة"
                        }
                        button { class: "btn btn-outline", onclick: on_export,
                            Icon { width: 16, height: 16, icon: LdDownload }
                            "تصدير"
                        }
                        SettingsImport {
                            on_import: on_import,
                            on_error: on_import_error,
                        }
                    }
                }

                // Output column
                div { class: "app-column",
                    OutputPanel {
                        document: generated(),
                        filename: filename,
                        on_notice: move |notice: Notice| notices.show(notice),
                    }
                }
            }
        }
    }
}
