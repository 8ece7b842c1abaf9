//! Inline markup translation
//!
//! The analysis service writes prose in a restricted pseudo-markdown dialect:
//! bold via `**`, inline code via backticks, and simple numbered or dashed
//! lists. [`translate`] turns that dialect into the crate's markup vocabulary.
//!
//! Rule order matters and is fixed; later rules operate on the output of
//! earlier ones and must never re-match markup those earlier rules emitted:
//!
//! 1. Raw text is entity-escaped (see [`crate::escape`]), so a rule can never
//!    be fooled by tag-shaped input.
//! 2. Line breaks become `<br>` between adjacent prose lines.
//! 3. `**X**` becomes `<strong>X</strong>` (X is lazy, within one line).
//! 4. `` `X` `` becomes `<code>X</code>` (X excludes a backtick).
//! 5. A line starting with `<digits>. ` or `- ` becomes a list item; the
//!    marker itself is dropped.
//! 6. Maximal runs of adjacent list items merge into a single `<ul>`;
//!    non-adjacent runs produce separate lists.
//!
//! The translation is total: malformed dialect never fails, it just renders
//! oddly (an unpaired `**` stays literal text, for instance). List containers
//! always balance: a `<ul>` simply takes the place of the line breaks of the
//! lines it absorbed.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::escape::escape_text;
use crate::fragment::MarkupFragment;

static BOLD: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\*\*(.+?)\*\*").expect("invalid bold regex"));
static INLINE_CODE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"`([^`]+)`").expect("invalid inline code regex"));
static LIST_MARKER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(?:\d+\.|-)\s").expect("invalid list marker regex"));

/// Translate pseudo-markdown prose into a markup fragment.
pub fn translate(text: &str) -> MarkupFragment {
    if text.is_empty() {
        return MarkupFragment::empty();
    }

    let escaped = escape_text(text);
    let mut out = String::new();
    let mut items: Vec<String> = Vec::new();
    let mut prev_was_prose = false;

    for line in escaped.split('\n') {
        if let Some(marker) = LIST_MARKER.find(line) {
            items.push(apply_spans(&line[marker.end()..]));
            prev_was_prose = false;
        } else {
            flush_items(&mut out, &mut items);
            if prev_was_prose {
                out.push_str("<br>");
            }
            out.push_str(&apply_spans(line));
            prev_was_prose = true;
        }
    }
    flush_items(&mut out, &mut items);

    MarkupFragment::from_markup(out)
}

/// Bold first, then inline code; both operate within a single line.
fn apply_spans(line: &str) -> String {
    let bolded = BOLD.replace_all(line, "<strong>${1}</strong>");
    INLINE_CODE
        .replace_all(&bolded, "<code>${1}</code>")
        .into_owned()
}

/// Close out a pending run of list items as one list container.
fn flush_items(out: &mut String, items: &mut Vec<String>) {
    if items.is_empty() {
        return;
    }
    out.push_str("<ul>");
    for item in items.drain(..) {
        out.push_str("<li>");
        out.push_str(&item);
        out.push_str("</li>");
    }
    out.push_str("</ul>");
}
