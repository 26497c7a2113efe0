//! Download page generator.
//!
//! Renders a [`GeneratorState`] into a self-contained HTML document:
//! a summary of the file (name, type, part count, total size) followed
//! by one download block per part.  The stylesheet and the progress
//! simulation script are fixed assets embedded verbatim; only the
//! summary fields and the part blocks depend on the input.
//!
//! All interpolated user text is HTML-escaped.
//!
//! This is a pure function with no I/O -- it returns a `String`.

use std::fmt::Write;

use partpage_core::{GeneratorState, Part};

use crate::text::{js_number, js_trim};

/// Stylesheet embedded in every generated page.
const STYLESHEET: &str = include_str!("../assets/page.css");

/// Progress simulation script embedded in every generated page.
///
/// Reads and writes its own localStorage key (`downloadStates`), keyed
/// by the `data-part-id` attribute of each download block.
const SCRIPT: &str = include_str!("../assets/page.js");

const TITLE_SUFFIX: &str = "صفحة التحميل";
const HEADER_TAGLINE: &str = "صفحة التحميل الرسمية";
const LABEL_FILE_TYPE: &str = "نوع الملف";
const LABEL_PART_COUNT: &str = "عدد الأجزاء";
const LABEL_TOTAL_SIZE: &str = "الحجم الكلي";
const SECTION_TITLE: &str = "تحميل الأجزاء";
const STATUS_READY: &str = "جاهز للتحميل";
const DOWNLOAD_LABEL: &str = "تحميل الجزء";
const RESET_LABEL: &str = "إعادة تعيين التقدم";
const SIMULATION_NOTE: &str = "شريط التقدم للعرض فقط ولا يمثل التحميل الفعلي";
const COPYRIGHT: &str = "© جميع الحقوق محفوظة";

/// Reasons a page cannot be generated from the current state.
///
/// The messages are shown to the user as-is.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GenerateError {
    /// The file name is empty or whitespace-only.
    #[error("يرجى إدخال اسم الملف")]
    MissingFileName,

    /// There are no parts.
    #[error("يرجى إضافة جزء واحد على الأقل")]
    NoParts,

    /// A part has an empty or whitespace-only download URL.
    ///
    /// `position` is the 1-based index of the first such part.
    #[error("يرجى ملء رابط التحميل لجميع الأجزاء")]
    MissingDownloadUrl { position: usize },
}

/// Check that `state` can be turned into a page.
///
/// Checks run in a fixed order and the first failure is reported:
/// file name, then part count, then download URLs.
///
/// # Errors
///
/// Returns the [`GenerateError`] for the first violated precondition.
pub fn validate(state: &GeneratorState) -> Result<(), GenerateError> {
    if js_trim(&state.file_name).is_empty() {
        return Err(GenerateError::MissingFileName);
    }
    if state.parts.is_empty() {
        return Err(GenerateError::NoParts);
    }
    if let Some(index) = state
        .parts
        .iter()
        .position(|p| js_trim(&p.download_url).is_empty())
    {
        return Err(GenerateError::MissingDownloadUrl {
            position: index + 1,
        });
    }
    Ok(())
}

/// Generate the standalone download page for `state`.
///
/// Output is deterministic for a given state.
///
/// # Errors
///
/// Returns a [`GenerateError`] if [`validate`] rejects the state.
pub fn generate_page(state: &GeneratorState) -> Result<String, GenerateError> {
    validate(state)?;

    let file_name = html_escape(&state.file_name);
    let mut out = String::with_capacity(STYLESHEET.len() + SCRIPT.len() + 4096);

    let _ = writeln!(out, "<!DOCTYPE html>");
    let _ = writeln!(out, r#"<html lang="ar" dir="rtl">"#);
    let _ = writeln!(out, "<head>");
    let _ = writeln!(out, r#"    <meta charset="UTF-8">"#);
    let _ = writeln!(
        out,
        r#"    <meta name="viewport" content="width=device-width, initial-scale=1.0">"#
    );
    let _ = writeln!(out, "    <title>{file_name} - {TITLE_SUFFIX}</title>");
    let _ = writeln!(out, "    <style>");
    out.push_str(STYLESHEET);
    let _ = writeln!(out, "    </style>");
    let _ = writeln!(out, "</head>");
    let _ = writeln!(out, "<body>");
    let _ = writeln!(out, r#"    <div class="container">"#);

    // Header
    let _ = writeln!(out, r#"        <div class="header">"#);
    let _ = writeln!(out, "            <h1>{file_name}</h1>");
    let _ = writeln!(out, "            <p>{HEADER_TAGLINE}</p>");
    let _ = writeln!(out, "        </div>");

    // Summary cards
    let _ = writeln!(out, r#"        <div class="file-info">"#);
    write_info_card(&mut out, LABEL_FILE_TYPE, state.file_type.label());
    write_info_card(&mut out, LABEL_PART_COUNT, &state.parts.len().to_string());
    write_info_card(&mut out, LABEL_TOTAL_SIZE, &state.total_size());
    let _ = writeln!(out, "        </div>");

    // Part blocks
    let _ = writeln!(out, r#"        <div class="downloads-section">"#);
    let _ = writeln!(out, r#"            <h2 class="section-title">{SECTION_TITLE}</h2>"#);
    let _ = writeln!(out, r#"            <div class="downloads-list">"#);
    for (index, part) in state.parts.iter().enumerate() {
        write_part_block(&mut out, part, index + 1);
    }
    let _ = writeln!(out, "            </div>");
    let _ = writeln!(out, "        </div>");

    // Footer
    let _ = writeln!(out, r#"        <div class="footer">"#);
    let _ = writeln!(
        out,
        r#"            <button class="reset-btn" type="button">{RESET_LABEL}</button>"#
    );
    let _ = writeln!(out, r#"            <p class="note">{SIMULATION_NOTE}</p>"#);
    let _ = writeln!(out, "            <p>{COPYRIGHT}</p>");
    let _ = writeln!(out, "        </div>");
    let _ = writeln!(out, "    </div>");

    let _ = writeln!(out, "    <script>");
    out.push_str(SCRIPT);
    let _ = writeln!(out, "    </script>");
    let _ = writeln!(out, "</body>");
    let _ = writeln!(out, "</html>");

    Ok(out)
}

/// Write one label/value summary card.  `value` is escaped here.
fn write_info_card(out: &mut String, label: &str, value: &str) {
    let _ = writeln!(out, r#"            <div class="info-card">"#);
    let _ = writeln!(out, r#"                <div class="info-label">{label}</div>"#);
    let _ = writeln!(
        out,
        r#"                <div class="info-value">{}</div>"#,
        html_escape(value)
    );
    let _ = writeln!(out, "            </div>");
}

/// Write the download block for `part`, labeled with its 1-based
/// `position`.
fn write_part_block(out: &mut String, part: &Part, position: usize) {
    let _ = writeln!(
        out,
        r#"                <div class="download-part" data-part-id="{}">"#,
        html_escape(part.id.as_str())
    );
    let _ = writeln!(out, r#"                    <div class="part-header">"#);
    let _ = writeln!(out, r#"                        <div class="part-info">"#);
    let _ = writeln!(
        out,
        r#"                            <span class="part-name">{}</span>"#,
        html_escape(&part.name)
    );
    let _ = writeln!(
        out,
        r#"                            <span class="part-size">{} {}</span>"#,
        js_number(part.size),
        part.unit
    );
    let _ = writeln!(out, "                        </div>");
    let _ = writeln!(out, r#"                        <div class="part-status">"#);
    let _ = writeln!(
        out,
        r#"                            <span class="status-text">{STATUS_READY}</span>"#
    );
    let _ = writeln!(out, "                        </div>");
    let _ = writeln!(out, "                    </div>");
    let _ = writeln!(out, r#"                    <div class="part-progress">"#);
    let _ = writeln!(
        out,
        r#"                        <div class="progress-bar" style="width: 0%"></div>"#
    );
    let _ = writeln!(out, "                    </div>");
    let _ = writeln!(
        out,
        r#"                    <a href="{}" class="download-btn" download>"#,
        html_escape(&part.download_url)
    );
    let _ = writeln!(
        out,
        "                        <span>{DOWNLOAD_LABEL} {position}</span>"
    );
    let _ = writeln!(out, "                    </a>");
    let _ = writeln!(out, "                </div>");
}

/// Escape the five HTML special characters for safe embedding in
/// element text content and attribute values.
///
/// Handles `&` (must be first), `<`, `>`, `"`, and `'`.
fn html_escape(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for ch in input.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            other => out.push(other),
        }
    }
    out
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use partpage_core::{FileType, PartId, SizeUnit};

    use super::*;

    fn part(id: &str, name: &str, size: f64, unit: SizeUnit, url: &str) -> Part {
        Part {
            id: PartId::from(id),
            name: name.into(),
            size,
            unit,
            download_url: url.into(),
        }
    }

    fn game_state() -> GeneratorState {
        GeneratorState {
            file_name: "Game".into(),
            file_type: FileType::Iso,
            parts: vec![
                part("a", "Part 1", 1.5, SizeUnit::Gb, "https://x/1"),
                part("b", "Part 2", 500.0, SizeUnit::Mb, "https://x/2"),
            ],
        }
    }

    // --- Validation ---

    #[test]
    fn empty_file_name_is_rejected() {
        let mut state = game_state();
        state.file_name = String::new();
        assert_eq!(validate(&state), Err(GenerateError::MissingFileName));
    }

    #[test]
    fn whitespace_file_name_is_rejected() {
        let mut state = game_state();
        state.file_name = " \t\n".into();
        assert_eq!(generate_page(&state), Err(GenerateError::MissingFileName));
    }

    #[test]
    fn byte_order_mark_counts_as_blank() {
        let mut state = game_state();
        state.file_name = "\u{FEFF}".into();
        assert_eq!(validate(&state), Err(GenerateError::MissingFileName));

        let mut state = game_state();
        state.parts[1].download_url = "\u{FEFF} ".into();
        assert_eq!(
            validate(&state),
            Err(GenerateError::MissingDownloadUrl { position: 2 })
        );
    }

    #[test]
    fn next_line_is_not_blank() {
        let mut state = game_state();
        state.file_name = "\u{85}".into();
        assert_eq!(validate(&state), Ok(()));
    }

    #[test]
    fn extreme_sizes_print_like_the_browser() {
        let mut state = game_state();
        state.parts[0].size = 1e21;
        state.parts[1].size = 1e-7;
        let html = generate_page(&state).unwrap();
        assert!(html.contains(r#"<span class="part-size">1e+21 GB</span>"#));
        assert!(html.contains(r#"<span class="part-size">1e-7 MB</span>"#));
    }

    #[test]
    fn no_parts_is_rejected() {
        let mut state = game_state();
        state.parts.clear();
        assert_eq!(validate(&state), Err(GenerateError::NoParts));
    }

    #[test]
    fn blank_download_url_is_rejected_with_position() {
        let mut state = game_state();
        state.parts[1].download_url = "   ".into();
        assert_eq!(
            validate(&state),
            Err(GenerateError::MissingDownloadUrl { position: 2 })
        );
    }

    #[test]
    fn first_blank_url_is_reported() {
        let mut state = game_state();
        state.parts[0].download_url = String::new();
        state.parts[1].download_url = String::new();
        assert_eq!(
            validate(&state),
            Err(GenerateError::MissingDownloadUrl { position: 1 })
        );
    }

    #[test]
    fn file_name_is_checked_before_parts() {
        let state = GeneratorState::default();
        assert_eq!(validate(&state), Err(GenerateError::MissingFileName));
    }

    #[test]
    fn file_name_is_checked_before_urls() {
        let mut state = game_state();
        state.file_name = String::new();
        state.parts[0].download_url = String::new();
        assert_eq!(validate(&state), Err(GenerateError::MissingFileName));
    }

    #[test]
    fn error_messages_are_distinct() {
        let messages = [
            GenerateError::MissingFileName.to_string(),
            GenerateError::NoParts.to_string(),
            GenerateError::MissingDownloadUrl { position: 1 }.to_string(),
        ];
        assert_ne!(messages[0], messages[1]);
        assert_ne!(messages[1], messages[2]);
        assert_ne!(messages[0], messages[2]);
    }

    // --- Document content ---

    #[test]
    fn document_is_complete() {
        let html = generate_page(&game_state()).unwrap();
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains(r#"<html lang="ar" dir="rtl">"#));
        assert!(html.trim_end().ends_with("</html>"));
        assert!(html.contains(STYLESHEET));
        assert!(html.contains(SCRIPT));
    }

    #[test]
    fn summary_fields_are_interpolated() {
        let html = generate_page(&game_state()).unwrap();
        assert!(html.contains("<title>Game - صفحة التحميل</title>"));
        assert!(html.contains("<h1>Game</h1>"));
        assert!(html.contains(r#"<div class="info-value">ISO</div>"#));
        assert!(html.contains(r#"<div class="info-value">2</div>"#));
        assert!(html.contains(r#"<div class="info-value">1.99 GB</div>"#));
    }

    #[test]
    fn part_blocks_follow_part_order() {
        let html = generate_page(&game_state()).unwrap();
        let first = html.find("تحميل الجزء 1").unwrap();
        let second = html.find("تحميل الجزء 2").unwrap();
        assert!(first < second);
        assert!(!html.contains("تحميل الجزء 3"));

        let a = html.find(r#"data-part-id="a""#).unwrap();
        let b = html.find(r#"data-part-id="b""#).unwrap();
        assert!(a < b);
        assert_eq!(html.matches(r#"class="download-part""#).count(), 2);
    }

    #[test]
    fn part_block_contents() {
        let html = generate_page(&game_state()).unwrap();
        assert!(html.contains(r#"<span class="part-name">Part 1</span>"#));
        assert!(html.contains(r#"<span class="part-size">1.5 GB</span>"#));
        assert!(html.contains(r#"<span class="part-size">500 MB</span>"#));
        assert!(html.contains(r#"<a href="https://x/2" class="download-btn" download>"#));
        assert_eq!(html.matches("جاهز للتحميل").count(), 2);
        assert_eq!(html.matches(r#"style="width: 0%""#).count(), 2);
    }

    #[test]
    fn output_is_deterministic() {
        let state = game_state();
        assert_eq!(generate_page(&state), generate_page(&state));
    }

    #[test]
    fn user_text_is_escaped() {
        let mut state = game_state();
        state.file_name = "<b>Tom & Jerry</b>".into();
        state.parts[0].name = r#""quoted""#.into();
        state.parts[0].download_url = r#"https://x/?a=1&b="2""#.into();
        let html = generate_page(&state).unwrap();

        assert!(html.contains("<h1>&lt;b&gt;Tom &amp; Jerry&lt;/b&gt;</h1>"));
        assert!(html.contains("&quot;quoted&quot;"));
        assert!(html.contains(r#"href="https://x/?a=1&amp;b=&quot;2&quot;""#));
        assert!(!html.contains("<b>Tom"));
    }

    #[test]
    fn script_cannot_close_its_own_tag() {
        // The script is inlined in a <script> element.
        assert!(!SCRIPT.contains("</script"));
        assert!(!STYLESHEET.contains("</style"));
    }

    #[test]
    fn script_uses_its_own_storage_key() {
        assert!(SCRIPT.contains("'downloadStates'"));
        assert!(!SCRIPT.contains(partpage_core::STATE_KEY));
    }

    #[test]
    fn html_escape_handles_all_specials() {
        assert_eq!(html_escape(r#"&<>"'"#), "&amp;&lt;&gt;&quot;&#39;");
        assert_eq!(html_escape("plain عربي"), "plain عربي");
    }
}
