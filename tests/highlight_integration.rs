//! Integration tests for the fence → highlight path
//!
//! These exercise the two components together the way the report pipeline
//! uses them, including the classification properties the single-pass
//! scanner guarantees and the escaping invariant on the rendered spans.

use once_cell::sync::Lazy;
use proptest::prelude::*;
use regex::Regex;
use revmark::fence::strip;
use revmark::highlight::highlight;

static SPAN_OPEN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"<span class="(keyword|string|comment|number|function)">"#).unwrap()
});

/// Remove the highlighter's own spans, then check nothing markup-significant
/// remains un-escaped.
fn assert_sealed(html: &str) {
    let stripped = SPAN_OPEN.replace_all(html, "").replace("</span>", "");
    assert!(
        !stripped.contains('<') && !stripped.contains('>'),
        "unescaped angle bracket in fragment: {:?}",
        html
    );
    for (i, _) in stripped.match_indices('&') {
        let rest = &stripped[i..];
        assert!(
            ["&amp;", "&lt;", "&gt;", "&quot;", "&#39;"]
                .iter()
                .any(|entity| rest.starts_with(entity)),
            "bare ampersand in fragment: {:?}",
            html
        );
    }
}

#[test]
fn fenced_python_sample_end_to_end() {
    let stripped = strip("```python\nprint(\"hi\")\n```");
    assert_eq!(stripped, "print(\"hi\")");
    assert_eq!(
        highlight(&stripped).as_str(),
        "<span class=\"keyword\">print</span>(<span class=\"string\">&quot;hi&quot;</span>)"
    );
}

#[test]
fn string_spans_shield_their_contents() {
    // The parenthesis inside the literal must not trigger the callable
    // recognizer, and the keywords outside must still be classified.
    let html = highlight(r#"if (x > 1) { return "a(b)"; }"#);
    let html = html.as_str();
    assert!(html.contains("<span class=\"keyword\">if</span>"));
    assert!(html.contains("<span class=\"keyword\">return</span>"));
    assert!(html.contains("<span class=\"string\">&quot;a(b)&quot;</span>"));
    assert!(html.contains("<span class=\"number\">1</span>"));
    assert!(!html.contains("<span class=\"function\">"));
    assert_sealed(html);
}

#[test]
fn comments_shield_numbers_and_keywords() {
    let html = highlight("total = 0  # return 42 if done");
    let html = html.as_str();
    assert!(html.contains("<span class=\"comment\"># return 42 if done</span>"));
    // The keyword and number inside the comment must not get their own spans.
    assert!(!html.contains("<span class=\"keyword\">"));
    assert!(html.contains("<span class=\"number\">0</span>"));
}

#[test]
fn multi_language_snippet() {
    let code = "def add(a, b):\n    '''sum two values'''\n    return a + b";
    let html = highlight(code);
    let html = html.as_str();
    assert!(html.contains("<span class=\"keyword\">def</span>"));
    assert!(html.contains("<span class=\"function\">add</span>"));
    // Apostrophes render as entities like everything else inside a span.
    assert!(html.contains(
        "<span class=\"comment\">&#39;&#39;&#39;sum two values&#39;&#39;&#39;</span>"
    ));
    assert!(html.contains("<span class=\"keyword\">return</span>"));
    assert_sealed(html);
}

proptest! {
    #[test]
    fn highlighted_fragments_never_leak_raw_markup(code in ".*") {
        assert_sealed(highlight(&code).as_str());
    }

    #[test]
    fn highlighting_preserves_visible_text(code in "[a-zA-Z0-9 =+(){};.\n]*") {
        // With span markup removed and entities folded back, the text content
        // must be exactly the input.
        let html = highlight(&code).into_string();
        let text = SPAN_OPEN.replace_all(&html, "").replace("</span>", "");
        let unescaped = text
            .replace("&lt;", "<")
            .replace("&gt;", ">")
            .replace("&quot;", "\"")
            .replace("&#39;", "'")
            .replace("&amp;", "&");
        prop_assert_eq!(unescaped, code);
    }
}
