//! Text rules the generated page shares with the browser.
//!
//! The form runs in a browser, so "blank" and "how a number prints" follow
//! the ECMAScript definitions rather than Rust's.

/// ECMAScript `WhiteSpace` or `LineTerminator`.
///
/// Same as Unicode `White_Space` except that U+0085 (NEL) is not
/// whitespace and U+FEFF (BOM) is.
const fn is_js_whitespace(c: char) -> bool {
    matches!(
        c,
        '\t' | '\n'
            | '\u{000B}'
            | '\u{000C}'
            | '\r'
            | ' '
            | '\u{00A0}'
            | '\u{1680}'
            | '\u{2000}'..='\u{200A}'
            | '\u{2028}'
            | '\u{2029}'
            | '\u{202F}'
            | '\u{205F}'
            | '\u{3000}'
            | '\u{FEFF}'
    )
}

/// `s` with leading and trailing whitespace removed, as `String.prototype.trim`.
pub(crate) fn js_trim(s: &str) -> &str {
    s.trim_matches(is_js_whitespace)
}

/// Format `value` as `Number.prototype.toString` does.
///
/// Shortest round-trip digits; plain decimal for exponents in
/// `-7 < e < 21`, otherwise `d.ddde±x`.
#[allow(clippy::float_cmp)] // -0 prints as "0"
pub(crate) fn js_number(value: f64) -> String {
    if value == 0.0 {
        return "0".to_owned();
    }
    if value.is_nan() {
        return "NaN".to_owned();
    }
    if value.is_infinite() {
        return if value > 0.0 { "Infinity" } else { "-Infinity" }.to_owned();
    }

    let scientific = format!("{value:e}");
    let Some((mantissa, exponent)) = scientific.split_once('e') else {
        return value.to_string();
    };
    match exponent.parse::<i32>() {
        Ok(e) if (-6..21).contains(&e) => value.to_string(),
        Ok(e) if e < 0 => format!("{mantissa}e{e}"),
        Ok(e) => format!("{mantissa}e+{e}"),
        Err(_) => value.to_string(),
    }
}
