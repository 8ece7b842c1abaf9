//! HTML escaping for raw service text
//!
//! Every piece of text that enters the pipeline comes from a free-form model
//! response, so it can contain anything, including strings shaped like HTML
//! tags. Escaping happens exactly once, at the raw boundary, before any of the
//! markup-producing transforms layer their own vocabulary on top. The
//! transforms only ever insert markup themselves; they never un-escape.
//!
//! Note that [`escape_text`] is deliberately not idempotent: escaping an
//! already escaped string double-escapes the ampersands. Callers own the
//! "escape once" discipline; inside this crate that is the first step of the
//! inline translator and of the highlight renderer.

/// Replace HTML-significant characters with their entity spellings.
pub fn escape_text(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for ch in raw.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            c => out.push(c),
        }
    }
    out
}
