//! Property-based tests for the code fence stripper
//!
//! The stripper's contract is small but strict: fence delimiter lines vanish
//! wherever they appear, everything else survives, and a second pass never
//! changes anything. Idempotence is the property the rest of the pipeline
//! leans on, so it gets the widest input coverage here.

use proptest::prelude::*;
use revmark::fence::strip;

/// Generate code-shaped text with fences sprinkled in arbitrary positions
fn fenced_text_strategy() -> impl Strategy<Value = String> {
    prop::collection::vec(
        prop_oneof![
            // Fence lines in all tolerated spellings
            Just("```".to_string()),
            Just("```python".to_string()),
            Just("```rust".to_string()),
            Just("   ``` ".to_string()),
            Just("\t```js\t".to_string()),
            // Ordinary lines
            "[a-zA-Z0-9 =+();.]{0,30}",
            // Lines with backticks that are not fences
            Just("x = `a` + `b`".to_string()),
            Just("``` not a fence".to_string()),
            // Blank-ish lines
            Just(String::new()),
            Just("   ".to_string()),
        ],
        0..12,
    )
    .prop_map(|lines| lines.join("\n"))
}

proptest! {
    #[test]
    fn strip_is_idempotent(text in fenced_text_strategy()) {
        let once = strip(&text);
        prop_assert_eq!(strip(&once), once);
    }

    #[test]
    fn strip_is_idempotent_on_arbitrary_text(text in ".*") {
        let once = strip(&text);
        prop_assert_eq!(strip(&once), once);
    }

    #[test]
    fn stripped_output_contains_no_fence_lines(text in fenced_text_strategy()) {
        let stripped = strip(&text);
        for line in stripped.lines() {
            let trimmed = line.trim();
            let is_fence = trimmed.starts_with("```")
                && trimmed[3..].chars().all(|c| c.is_alphanumeric() || c == '_');
            prop_assert!(!is_fence, "fence line survived stripping: {:?}", line);
        }
    }

    #[test]
    fn stripped_output_is_trimmed(text in fenced_text_strategy()) {
        let stripped = strip(&text);
        prop_assert_eq!(stripped.trim(), &stripped);
    }

    #[test]
    fn non_fence_lines_survive(text in "[a-zA-Z0-9 =+();.]{1,30}") {
        // A single line with no fence in it comes back trimmed but intact.
        prop_assert_eq!(strip(&text), text.trim());
    }
}
