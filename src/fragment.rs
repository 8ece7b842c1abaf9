//! Markup fragment type
//!
//! A [`MarkupFragment`] is an HTML string that is safe to insert directly into
//! a rendered view. The invariant is that a fragment only ever contains the
//! crate's own markup vocabulary (`<br>`, `<strong>`, `<code>`, `<ul>`,
//! `<li>`, highlight `<span>`s) plus entity-escaped text; raw input never
//! passes through verbatim.
//!
//! The invariant is enforced by construction: the only constructors are
//! crate-private, and the producers (the inline translator, the section
//! splitter, the syntax highlighter) all escape raw text before emitting any
//! markup around it.

use std::fmt;

/// An HTML string produced by this crate's own transforms.
#[derive(Debug, Clone, PartialEq, Eq, Default, serde::Serialize)]
pub struct MarkupFragment(String);

impl MarkupFragment {
    /// Crate-private constructor; callers must only pass markup they built
    /// from escaped text.
    pub(crate) fn from_markup(markup: String) -> Self {
        MarkupFragment(markup)
    }

    /// The empty fragment, used for absent input.
    pub fn empty() -> Self {
        MarkupFragment(String::new())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for MarkupFragment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
