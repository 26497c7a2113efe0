//! One-line status message shown after user actions.

use dioxus::prelude::*;

/// A message for the user, tagged with how it should be styled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    /// The action completed.
    Success(String),
    /// The action was refused or failed; nothing changed.
    Error(String),
}

impl Notice {
    /// The message text.
    #[must_use]
    pub fn message(&self) -> &str {
        match self {
            Self::Success(m) | Self::Error(m) => m,
        }
    }

    const fn class(&self) -> &'static str {
        match self {
            Self::Success(_) => "notice notice-success",
            Self::Error(_) => "notice notice-error",
        }
    }
}

/// Props for the [`NoticeBanner`] component.
#[derive(Props, Clone, PartialEq)]
pub struct NoticeBannerProps {
    /// The message to show. `None` renders nothing.
    notice: Option<Notice>,
    /// Called when the dismiss button is clicked.
    on_dismiss: EventHandler<()>,
}

/// Banner for the latest [`Notice`].
#[component]
pub fn NoticeBanner(props: NoticeBannerProps) -> Element {
    let Some(notice) = props.notice else {
        return rsx! {};
    };
    let on_dismiss = props.on_dismiss;

    rsx! {
        div { class: notice.class(), role: "status",
            span { "{notice.message()}" }
            button {
                class: "notice-dismiss",
                aria_label: "إغلاق",
                onclick: move |_| on_dismiss.call(()),
                "×"
            }
        }
    }
}
