//! Code fence stripping
//!
//! The analysis service wraps its "optimized code" field in markdown-style
//! fenced code blocks more often than not, sometimes with a language tag
//! (```` ```python ````), sometimes with stray indentation around the fence,
//! and occasionally with fences in the middle of the text when the model
//! emits several blocks. The highlighter wants none of that: stripping drops
//! every line that is exactly a fence, wherever it appears, and trims the
//! remainder.
//!
//! Stripping is idempotent: a stripped text contains no fence lines, so a
//! second pass only re-trims an already trimmed string. The property is pinned
//! by the tests in `tests/fence_proptest.rs`.

use once_cell::sync::Lazy;
use regex::Regex;

/// A line that is a ``` fence, optionally followed by a language tag,
/// with surrounding whitespace tolerated.
static FENCE_LINE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\s*```\w*\s*$").expect("invalid fence line regex"));

/// Remove fence delimiter lines anywhere in the text and trim the result.
pub fn strip(code: &str) -> String {
    let kept: Vec<&str> = code
        .lines()
        .filter(|line| !FENCE_LINE.is_match(line))
        .collect();
    kept.join("\n").trim().to_string()
}
