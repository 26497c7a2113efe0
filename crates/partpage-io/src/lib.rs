//! partpage-io: Browser I/O and Dioxus component library.
//!
//! Handles localStorage persistence, Blob downloads, clipboard writes,
//! and settings-file reads, and provides the form and output components
//! for the partpage web application.

pub mod clipboard;
pub mod components;
pub mod download;
pub mod storage;

pub use components::{FileInfoForm, Notice, NoticeBanner, OutputPanel, PartList, SettingsImport};
pub use storage::{BrowserStorage, LocalStorage};
