//! Repair of markup that `tl` cannot structure on its own.
//!
//! `tl` does not apply the HTML tree-construction rules, so omitted end tags
//! (`<td>1<td>2`, `<li>a<li>b`, `<p>a<p>b`) nest each element inside the
//! previous one. Such documents are re-serialized through html5ever first.

use once_cell::sync::Lazy;
use regex::Regex;

/// Elements whose end tag may be omitted.
const OPTIONAL_END_TAGS: [&str; 7] = ["p", "li", "td", "th", "tr", "dt", "dd"];

static OPTIONAL_END_TAG: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)<(/?)(p|li|td|th|tr|dt|dd)\b[^>]*>").expect("valid regex pattern"));

/// Returns `true` if some element with an optional end tag is opened more often than closed.
pub(crate) fn has_omitted_end_tags(html: &str) -> bool {
    let mut balance = [0isize; OPTIONAL_END_TAGS.len()];
    for caps in OPTIONAL_END_TAG.captures_iter(html) {
        let name = caps[2].to_ascii_lowercase();
        let Some(idx) = OPTIONAL_END_TAGS.iter().position(|tag| *tag == name) else {
            continue;
        };
        if caps[1].is_empty() {
            balance[idx] += 1;
        } else {
            balance[idx] -= 1;
        }
    }
    balance.iter().any(|count| *count > 0)
}

/// Try to repair HTML using html5ever parser.
///
/// Returns `Some(repaired_html)` if repair was successful, `None` otherwise.
pub(crate) fn repair_with_html5ever(input: &str) -> Option<String> {
    use html5ever::serialize::{SerializeOpts, serialize};
    use html5ever::tendril::TendrilSink;
    use markup5ever_rcdom::{RcDom, SerializableHandle};

    let dom = html5ever::parse_document(RcDom::default(), Default::default())
        .from_utf8()
        .read_from(&mut input.as_bytes())
        .ok()?;

    let mut buf = Vec::with_capacity(input.len());
    let handle = SerializableHandle::from(dom.document);
    serialize(&mut buf, &handle, SerializeOpts::default()).ok()?;
    String::from_utf8(buf).ok()
}
