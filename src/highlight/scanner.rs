//! Single-pass classifying scanner
//!
//! The scanner walks the input exactly once. At each position it tries the
//! grammar's recognizers in table order and consumes the first match whole,
//! emitting one token and advancing past it. Text no recognizer claims is
//! gathered into plain tokens. Because a consumed span is never revisited,
//! tokens are non-overlapping by construction: a keyword spelled inside a
//! string literal stays inside the string token, and a number inside a
//! comment stays comment text.
//!
//! The scanner works on raw text and leaves all rendering to the caller;
//! classification and markup never mix, so no recognizer can ever match
//! inside markup another one produced.

use crate::highlight::grammar::HighlightGrammar;
use crate::highlight::token::{Token, TokenKind};

/// Tokenize `code` against the grammar. Total: any input yields a token
/// sequence whose concatenated text equals the input.
pub fn scan(grammar: &HighlightGrammar, code: &str) -> Vec<Token> {
    let mut tokens: Vec<Token> = Vec::new();
    let mut plain = String::new();
    let mut pos = 0;
    // Last scanned character; word-shaped recognizers only fire after a
    // non-identifier character (or at the start of input).
    let mut prev: Option<char> = None;

    while pos < code.len() {
        let rest = &code[pos..];
        let at_boundary = !prev.map_or(false, |c| c.is_alphanumeric() || c == '_');

        let mut matched: Option<(TokenKind, &str)> = None;
        for recognizer in grammar.recognizers() {
            if recognizer.boundary_required() && !at_boundary {
                continue;
            }
            let captures = match recognizer.pattern().captures(rest) {
                Some(captures) => captures,
                None => continue,
            };
            let span = match captures.get(recognizer.group()) {
                Some(span) if !span.as_str().is_empty() && span.start() == 0 => span,
                _ => continue,
            };
            matched = Some((recognizer.kind(), span.as_str()));
            break;
        }

        match matched {
            Some((kind, text)) => {
                if !plain.is_empty() {
                    tokens.push(Token::new(TokenKind::Plain, std::mem::take(&mut plain)));
                }
                prev = text.chars().last();
                pos += text.len();
                tokens.push(Token::new(kind, text));
            }
            None => {
                if let Some(ch) = rest.chars().next() {
                    plain.push(ch);
                    prev = Some(ch);
                    pos += ch.len_utf8();
                } else {
                    break;
                }
            }
        }
    }

    if !plain.is_empty() {
        tokens.push(Token::new(TokenKind::Plain, plain));
    }
    tokens
}
