//! Download filenames for exported pages and settings.

use partpage_core::GeneratorState;

use crate::text::js_trim;

/// Extension of exported download pages.
pub const PAGE_EXTENSION: &str = "html";
/// MIME type of exported download pages.
pub const PAGE_MIME: &str = "text/html";
/// Stem used for pages when the file name is blank.
pub const DEFAULT_PAGE_STEM: &str = "download";

/// Extension of exported settings files.
pub const SETTINGS_EXTENSION: &str = "json";
/// MIME type of exported settings files.
pub const SETTINGS_MIME: &str = "application/json";
/// Stem used for settings when the file name is blank.
pub const DEFAULT_SETTINGS_STEM: &str = "settings";

/// Characters that are not allowed in filenames on common platforms.
const RESERVED: &[char] = &['/', '\\', ':', '*', '?', '"', '<', '>', '|'];

/// Filename for the generated page, e.g. `"Game.html"`.
#[must_use]
pub fn page_filename(state: &GeneratorState) -> String {
    format!(
        "{}.{PAGE_EXTENSION}",
        stem(&state.file_name, DEFAULT_PAGE_STEM)
    )
}

/// Filename for exported settings, e.g. `"Game.json"`.
#[must_use]
pub fn settings_filename(state: &GeneratorState) -> String {
    format!(
        "{}.{SETTINGS_EXTENSION}",
        stem(&state.file_name, DEFAULT_SETTINGS_STEM)
    )
}

/// The trimmed file name with reserved characters replaced by `_`, or
/// `default` if nothing is left.
fn stem(file_name: &str, default: &str) -> String {
    let trimmed = js_trim(file_name);
    if trimmed.is_empty() {
        return default.to_owned();
    }
    trimmed
        .chars()
        .map(|c| if RESERVED.contains(&c) { '_' } else { c })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn named(name: &str) -> GeneratorState {
        GeneratorState {
            file_name: name.into(),
            ..GeneratorState::default()
        }
    }

    #[test]
    fn uses_file_name() {
        assert_eq!(page_filename(&named("Game")), "Game.html");
        assert_eq!(settings_filename(&named("Game")), "Game.json");
    }

    #[test]
    fn blank_name_uses_defaults() {
        assert_eq!(page_filename(&named("")), "download.html");
        assert_eq!(settings_filename(&named("   ")), "settings.json");
    }

    #[test]
    fn trims_and_replaces_reserved_characters() {
        assert_eq!(page_filename(&named("  a/b:c  ")), "a_b_c.html");
        assert_eq!(settings_filename(&named("لعبة PS5")), "لعبة PS5.json");
    }

    #[test]
    fn byte_order_mark_alone_is_blank() {
        assert_eq!(page_filename(&named("\u{FEFF}")), "download.html");
    }
}
