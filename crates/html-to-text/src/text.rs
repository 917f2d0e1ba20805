//! Text processing: whitespace normalization of converter output and entity decoding.

use std::borrow::Cow;

use once_cell::sync::Lazy;
use regex::Regex;

static HORIZONTAL_RUN: Lazy<Regex> = Lazy::new(|| Regex::new(r"[ \t]+").expect("valid regex pattern"));
static AFTER_NEWLINE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\n[ \t]+").expect("valid regex pattern"));
static BEFORE_NEWLINE: Lazy<Regex> = Lazy::new(|| Regex::new(r"[ \t]+\n").expect("valid regex pattern"));
static BLANK_RUN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\n{3,}").expect("valid regex pattern"));

/// Normalize whitespace in converted text.
///
/// Applied in order:
/// 1. runs of spaces/tabs collapse to one space
/// 2. spaces/tabs right after a newline are removed
/// 3. spaces/tabs right before a newline are removed
/// 4. three or more consecutive newlines collapse to two
/// 5. leading and trailing whitespace is trimmed
///
/// The function is idempotent. Nothing else is touched: no case changes,
/// no entity decoding, no escaping.
#[must_use]
pub fn normalize(text: &str) -> String {
    let collapsed = HORIZONTAL_RUN.replace_all(text, " ");
    let collapsed = AFTER_NEWLINE.replace_all(&collapsed, "\n");
    let collapsed = BEFORE_NEWLINE.replace_all(&collapsed, "\n");
    let collapsed = BLANK_RUN.replace_all(&collapsed, "\n\n");
    collapsed.trim().to_string()
}

/// Decode HTML character references, borrowing when there is nothing to decode.
pub(crate) fn decode_html_entities_cow(text: &str) -> Cow<'_, str> {
    if text.contains('&') {
        html_escape::decode_html_entities(text)
    } else {
        Cow::Borrowed(text)
    }
}
