//! Syntax highlighting
//!
//! Cosmetic, best-effort highlighting for the "optimized code" field. This is
//! not a real lexer for any particular language: the grammar covers the
//! overlap of a few common language families and everything it does not
//! recognize passes through as plain text, so prose highlights harmlessly.
//!
//! The pipeline is layered the usual way:
//!
//! 1. [`grammar`]: the ordered recognizer table, the only place that knows
//!    what a keyword or a string looks like;
//! 2. [`scanner`]: a single pass over the text producing non-overlapping
//!    classified tokens;
//! 3. rendering here: each token's text is entity-escaped and non-plain
//!    kinds are wrapped in a classification `<span>`.
//!
//! Callers normally go through [`highlight`]; [`highlight_with`] takes a
//! caller-assembled table for per-language tuning.

pub mod grammar;
pub mod scanner;
pub mod token;

pub use grammar::{GrammarError, HighlightGrammar, Recognizer};
pub use scanner::scan;
pub use token::{Token, TokenKind};

use once_cell::sync::Lazy;

use crate::escape::escape_text;
use crate::fragment::MarkupFragment;

static STANDARD_GRAMMAR: Lazy<HighlightGrammar> = Lazy::new(HighlightGrammar::standard);

/// Highlight code with the standard grammar.
pub fn highlight(code: &str) -> MarkupFragment {
    highlight_with(&STANDARD_GRAMMAR, code)
}

/// Highlight code with a caller-supplied recognizer table.
pub fn highlight_with(grammar: &HighlightGrammar, code: &str) -> MarkupFragment {
    let mut out = String::new();
    for token in scan(grammar, code) {
        let text = escape_text(&token.text);
        match token.kind.css_class() {
            Some(class) => {
                out.push_str("<span class=\"");
                out.push_str(class);
                out.push_str("\">");
                out.push_str(&text);
                out.push_str("</span>");
            }
            None => out.push_str(&text),
        }
    }
    MarkupFragment::from_markup(out)
}
