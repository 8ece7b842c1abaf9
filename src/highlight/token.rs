//! Highlight token types
//!
//! Tokens are the output of the single-pass scanner: each one owns a
//! non-overlapping slice of the input and a classification. They are
//! transient values, consumed straight into a markup fragment by the
//! renderer; nothing retains them across calls.

/// The classification of one scanned span.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TokenKind {
    /// Reserved word from the closed keyword vocabulary.
    Keyword,
    /// Single- or double-quoted run, backslash escapes allowed inside.
    Str,
    /// Line (`//`, `#`) or block (`/* */`, triple-quote) comment.
    Comment,
    /// Digit run with an optional decimal point.
    Number,
    /// Identifier immediately followed by an opening parenthesis.
    Callable,
    /// Anything the recognizers did not claim.
    Plain,
}

impl TokenKind {
    /// CSS class the renderer wraps this kind in; plain text gets no span.
    /// The class names are the ones the consuming stylesheets target.
    pub fn css_class(&self) -> Option<&'static str> {
        match self {
            TokenKind::Keyword => Some("keyword"),
            TokenKind::Str => Some("string"),
            TokenKind::Comment => Some("comment"),
            TokenKind::Number => Some("number"),
            TokenKind::Callable => Some("function"),
            TokenKind::Plain => None,
        }
    }
}

impl std::fmt::Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TokenKind::Keyword => write!(f, "keyword"),
            TokenKind::Str => write!(f, "string"),
            TokenKind::Comment => write!(f, "comment"),
            TokenKind::Number => write!(f, "number"),
            TokenKind::Callable => write!(f, "function"),
            TokenKind::Plain => write!(f, "plain"),
        }
    }
}

/// One classified, non-overlapping span of the scanned text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub text: String,
}

impl Token {
    pub fn new(kind: TokenKind, text: impl Into<String>) -> Self {
        Token {
            kind,
            text: text.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_kind_display() {
        assert_eq!(format!("{}", TokenKind::Keyword), "keyword");
        assert_eq!(format!("{}", TokenKind::Str), "string");
        assert_eq!(format!("{}", TokenKind::Callable), "function");
        assert_eq!(format!("{}", TokenKind::Plain), "plain");
    }

    #[test]
    fn test_plain_has_no_css_class() {
        assert_eq!(TokenKind::Plain.css_class(), None);
        assert_eq!(TokenKind::Number.css_class(), Some("number"));
    }
}
