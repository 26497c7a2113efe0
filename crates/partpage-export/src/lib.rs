//! partpage-export: Pure serializers (sans-IO)
//!
//! Turns a [`GeneratorState`](partpage_core::GeneratorState) into the
//! standalone download page, reads and writes settings files, and
//! derives the filenames both are offered under.

pub mod filename;
pub mod page;
pub mod settings;
mod text;

pub use filename::{page_filename, settings_filename};
pub use page::{GenerateError, generate_page, validate};
pub use settings::{ImportError, SettingsError, import_settings, parse_settings, to_settings_json};
