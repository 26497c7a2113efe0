//! Dioxus UI components for partpage.
//!
//! Provides the file details form, the part editor list, the settings
//! import button, the code/preview output panel, and the notice banner.

mod fields;
mod file_info;
mod notice;
mod output;
mod part_list;
mod settings_import;

pub use file_info::FileInfoForm;
pub use notice::{Notice, NoticeBanner};
pub use output::OutputPanel;
pub use part_list::PartList;
pub use settings_import::SettingsImport;
