//! Highlight grammar: the recognizer table
//!
//! The scanner itself knows nothing about any language. What it recognizes is
//! driven entirely by a [`HighlightGrammar`]: an ordered list of
//! [`Recognizer`]s, tried at each position in table order. Order is the
//! priority (comment > string > number > keyword > callable in the standard
//! table), which is what keeps overlapping categories honest: a keyword
//! spelled inside a string never escapes the string, because the string
//! recognizer claims the span first and the scanner never re-examines it.
//!
//! The standard table covers the keyword vocabulary of a handful of common
//! language families (JS/TS, Python, C-family), grouped by family below so a
//! caller can assemble a narrower or different table with
//! [`keyword_pattern`] and [`Recognizer::new`] without touching the scanner.

use regex::Regex;

use crate::highlight::token::TokenKind;

/// Control-flow reserved words.
pub const CONTROL_FLOW_KEYWORDS: &[&str] = &[
    "if", "else", "elif", "for", "while", "return", "try", "catch", "finally", "switch", "case",
    "default", "do", "break", "continue", "goto", "yield", "await", "with", "in", "of",
];

/// Declaration and binding reserved words.
pub const DECLARATION_KEYWORDS: &[&str] = &[
    "function", "def", "class", "var", "let", "const", "import", "export", "from", "async",
    "static", "extern", "register", "auto", "volatile", "typedef", "struct", "union", "enum",
    "new", "delete", "this", "super", "typeof", "instanceof",
];

/// Primitive and collection type names.
pub const TYPE_KEYWORDS: &[&str] = &[
    "int", "char", "float", "double", "void", "bool", "string", "signed", "unsigned", "short",
    "long", "list", "dict", "tuple", "set",
];

/// Boolean and null literal spellings.
pub const LITERAL_KEYWORDS: &[&str] = &["True", "False", "None", "null", "undefined"];

/// Builtins highlighted like keywords.
pub const BUILTIN_KEYWORDS: &[&str] = &["print"];

/// Error building a recognizer from a caller-supplied pattern.
#[derive(Debug, Clone, PartialEq)]
pub enum GrammarError {
    InvalidPattern { pattern: String, detail: String },
}

impl std::fmt::Display for GrammarError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GrammarError::InvalidPattern { pattern, detail } => {
                write!(f, "Invalid recognizer pattern '{}': {}", pattern, detail)
            }
        }
    }
}

impl std::error::Error for GrammarError {}

/// One pattern-matching rule classifying a single token category.
#[derive(Debug, Clone)]
pub struct Recognizer {
    kind: TokenKind,
    pattern: Regex,
    token_group: usize,
    needs_boundary: bool,
}

impl Recognizer {
    /// Compile a recognizer from a regex pattern. The pattern is anchored to
    /// the scan position; it does not need a leading `^`.
    pub fn new(kind: TokenKind, pattern: &str) -> Result<Self, GrammarError> {
        let anchored = format!("^(?:{})", pattern);
        let compiled = Regex::new(&anchored).map_err(|e| GrammarError::InvalidPattern {
            pattern: pattern.to_string(),
            detail: e.to_string(),
        })?;
        Ok(Recognizer {
            kind,
            pattern: compiled,
            token_group: 0,
            needs_boundary: false,
        })
    }

    /// Consume only the given capture group as the token, leaving the rest of
    /// the match unconsumed. Used by the callable recognizer, which matches
    /// the trailing parenthesis but must not swallow it.
    pub fn token_group(mut self, group: usize) -> Self {
        self.token_group = group;
        self
    }

    /// Only fire when the previous scanned character is not part of an
    /// identifier. Keeps word-shaped recognizers from matching mid-word.
    pub fn needs_boundary(mut self) -> Self {
        self.needs_boundary = true;
        self
    }

    pub fn kind(&self) -> TokenKind {
        self.kind
    }

    pub(crate) fn pattern(&self) -> &Regex {
        &self.pattern
    }

    pub(crate) fn group(&self) -> usize {
        self.token_group
    }

    pub(crate) fn boundary_required(&self) -> bool {
        self.needs_boundary
    }
}

/// Ordered recognizer table passed into the scanner.
#[derive(Debug, Clone)]
pub struct HighlightGrammar {
    recognizers: Vec<Recognizer>,
}

impl HighlightGrammar {
    /// An empty table; every span comes back plain.
    pub fn new() -> Self {
        HighlightGrammar {
            recognizers: Vec::new(),
        }
    }

    /// Append a recognizer; earlier entries have higher priority.
    pub fn push(&mut self, recognizer: Recognizer) {
        self.recognizers.push(recognizer);
    }

    pub fn recognizers(&self) -> &[Recognizer] {
        &self.recognizers
    }

    /// The standard table: comments, strings, numbers, the full keyword
    /// vocabulary, then callables.
    pub fn standard() -> Self {
        let keywords = keyword_pattern(
            [
                CONTROL_FLOW_KEYWORDS,
                DECLARATION_KEYWORDS,
                TYPE_KEYWORDS,
                LITERAL_KEYWORDS,
                BUILTIN_KEYWORDS,
            ]
            .iter()
            .flat_map(|family| family.iter().copied()),
        );

        let rules = [
            Recognizer::new(TokenKind::Comment, r"//[^\n]*"),
            Recognizer::new(TokenKind::Comment, r"#[^\n]*"),
            Recognizer::new(TokenKind::Comment, r"(?s)/\*.*?\*/"),
            Recognizer::new(TokenKind::Comment, r"(?s)'''.*?'''"),
            Recognizer::new(TokenKind::Comment, "(?s)\"\"\".*?\"\"\""),
            Recognizer::new(TokenKind::Str, "\"(?:\\\\.|[^\"\\\\])*\""),
            Recognizer::new(TokenKind::Str, r"'(?:\\.|[^'\\])*'"),
            Recognizer::new(TokenKind::Number, r"\d+\.?\d*").map(Recognizer::needs_boundary),
            Recognizer::new(TokenKind::Keyword, &keywords).map(Recognizer::needs_boundary),
            Recognizer::new(TokenKind::Callable, r"([A-Za-z_$][A-Za-z0-9_$]*)\s*\(")
                .map(|r| r.token_group(1).needs_boundary()),
        ];

        let mut grammar = HighlightGrammar::new();
        for rule in rules {
            grammar.push(rule.expect("standard grammar pattern failed to compile"));
        }
        grammar
    }
}

impl Default for HighlightGrammar {
    fn default() -> Self {
        HighlightGrammar::standard()
    }
}

/// Build a whole-word alternation pattern from a keyword vocabulary.
/// Longer spellings are listed first so `int` wins over `in`.
pub fn keyword_pattern<'a>(words: impl IntoIterator<Item = &'a str>) -> String {
    let mut sorted: Vec<&str> = words.into_iter().collect();
    sorted.sort_by(|a, b| b.len().cmp(&a.len()).then(a.cmp(b)));
    format!(r"(?:{})\b", sorted.join("|"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_table_priority_order() {
        let grammar = HighlightGrammar::standard();
        let kinds: Vec<TokenKind> = grammar.recognizers().iter().map(|r| r.kind()).collect();
        // Comments first, callables last.
        assert_eq!(kinds[0], TokenKind::Comment);
        assert_eq!(kinds[kinds.len() - 1], TokenKind::Callable);
        let first_string = kinds.iter().position(|k| *k == TokenKind::Str).unwrap();
        let first_keyword = kinds.iter().position(|k| *k == TokenKind::Keyword).unwrap();
        assert!(first_string < first_keyword);
    }

    #[test]
    fn test_keyword_pattern_prefers_longer_spellings() {
        let pattern = keyword_pattern(["in", "int"]);
        assert_eq!(pattern, r"(?:int|in)\b");
    }

    #[test]
    fn test_invalid_pattern_is_reported() {
        let err = Recognizer::new(TokenKind::Plain, "(unclosed").unwrap_err();
        match err {
            GrammarError::InvalidPattern { pattern, .. } => assert_eq!(pattern, "(unclosed"),
        }
    }

    #[test]
    fn test_custom_table_builds() {
        let mut grammar = HighlightGrammar::new();
        grammar.push(
            Recognizer::new(TokenKind::Keyword, &keyword_pattern(["fn", "let"]))
                .unwrap()
                .needs_boundary(),
        );
        assert_eq!(grammar.recognizers().len(), 1);
    }
}
