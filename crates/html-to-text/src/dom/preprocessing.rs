//! HTML preprocessing before handing input to `tl`.
//!
//! `tl` has no raw-text mode, so a `<` inside `<script>` or `<style>` would open
//! a bogus element that swallows the rest of the document. Dropped raw-text
//! elements are removed outright; kept ones get their content escaped so the
//! parser sees plain text.

use std::borrow::Cow;

use once_cell::sync::Lazy;
use regex::{Captures, Regex};

use crate::options::ConversionOptions;

static SCRIPT_ELEMENT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?is)(<script\b[^>]*>)(.*?)(</script\s*>|\z)").expect("valid regex pattern"));
static STYLE_ELEMENT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?is)(<style\b[^>]*>)(.*?)(</style\s*>|\z)").expect("valid regex pattern"));

/// Remove or neutralize `<script>`/`<style>` elements according to `options.drop_tags`.
pub(crate) fn prepare_raw_text_elements<'a>(html: &'a str, options: &ConversionOptions) -> Cow<'a, str> {
    let html = rewrite_raw_text(html, &SCRIPT_ELEMENT, options.drops("script"));
    match html {
        Cow::Borrowed(borrowed) => rewrite_raw_text(borrowed, &STYLE_ELEMENT, options.drops("style")),
        Cow::Owned(owned) => Cow::Owned(rewrite_raw_text(&owned, &STYLE_ELEMENT, options.drops("style")).into_owned()),
    }
}

fn rewrite_raw_text<'a>(html: &'a str, pattern: &Regex, drop: bool) -> Cow<'a, str> {
    if drop {
        pattern.replace_all(html, "")
    } else {
        pattern.replace_all(html, |caps: &Captures<'_>| {
            format!("{}{}{}", &caps[1], escape_raw_text(&caps[2]), &caps[3])
        })
    }
}

fn escape_raw_text(text: &str) -> String {
    text.replace('&', "&amp;").replace('<', "&lt;")
}
