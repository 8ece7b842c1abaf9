//! Section splitting for the details blob
//!
//! The "details" field of an analysis response is free-form prose, but the
//! service is prompted to talk about usage, advantages, and disadvantages, so
//! the text almost always contains those keyword families. Splitting runs
//! three ordered category probes over the text and labels whatever they find.
//!
//! The probes are a heuristic, not a grammar:
//!
//! - Each probe is an independent, case-insensitive substring scan of the
//!   whole input. Keywords are not word-bounded, so "concurrency" starts a
//!   cons span and "probe" starts a pros span. That is inherited behavior,
//!   kept on purpose and pinned by tests.
//! - Probes do not consume text from each other, so spans can overlap: a
//!   cons keyword early in the text produces a cons span that swallows a
//!   later pros span's text too. Overlap is not de-duplicated.
//!
//! When no probe matches, the whole text becomes a single general section;
//! when the input is empty there are no sections at all. Splitting never
//! fails.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::fragment::MarkupFragment;
use crate::inline;

static USAGE_START: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)use|usage|purpose|application").expect("invalid usage probe"));
static PROS_START: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)advantage|benefit|pro").expect("invalid pros probe"));
static CONS_START: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)disadvantage|drawback|con").expect("invalid cons probe"));
/// A usage span ends where either of the other families begins.
static USAGE_STOP: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)advantage|benefit|pro|disadvantage|drawback|con")
        .expect("invalid usage stop probe")
});

/// The semantic label of a details section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SectionKind {
    Usage,
    Pros,
    Cons,
    /// Fallback when no keyword family was detected.
    General,
}

impl SectionKind {
    /// Display title used by the view layer.
    pub fn title(&self) -> &'static str {
        match self {
            SectionKind::Usage => "Usage & Purpose",
            SectionKind::Pros => "Advantages & Benefits",
            SectionKind::Cons => "Disadvantages & Drawbacks",
            SectionKind::General => "Analysis Details",
        }
    }
}

impl std::fmt::Display for SectionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SectionKind::Usage => write!(f, "usage"),
            SectionKind::Pros => write!(f, "pros"),
            SectionKind::Cons => write!(f, "cons"),
            SectionKind::General => write!(f, "general"),
        }
    }
}

/// One labeled slice of the details text, with its rendered markup.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct Section {
    pub title: String,
    pub kind: SectionKind,
    pub body: String,
    pub rendered: MarkupFragment,
}

impl Section {
    fn new(kind: SectionKind, body: &str) -> Self {
        Section {
            title: kind.title().to_string(),
            kind,
            body: body.to_string(),
            rendered: inline::translate(body),
        }
    }
}

/// Split a details blob into labeled sections, in display order
/// (usage, pros, cons), falling back to one general section.
pub fn split(details: &str) -> Vec<Section> {
    if details.is_empty() {
        return Vec::new();
    }

    let mut sections = Vec::new();
    if let Some(body) = probe(details, &USAGE_START, Some(&USAGE_STOP)) {
        sections.push(Section::new(SectionKind::Usage, body));
    }
    if let Some(body) = probe(details, &PROS_START, Some(&CONS_START)) {
        sections.push(Section::new(SectionKind::Pros, body));
    }
    if let Some(body) = probe(details, &CONS_START, None) {
        sections.push(Section::new(SectionKind::Cons, body));
    }

    if sections.is_empty() {
        sections.push(Section::new(SectionKind::General, details));
    }
    sections
}

/// Best-effort span match: from the first start-keyword occurrence up to
/// (excluding) the next stop-keyword occurrence after it, or end of text.
fn probe<'t>(text: &'t str, start: &Regex, stop: Option<&Regex>) -> Option<&'t str> {
    let opening = start.find(text)?;
    let end = match stop {
        Some(stop) => stop
            .find(&text[opening.end()..])
            .map(|m| opening.end() + m.start())
            .unwrap_or(text.len()),
        None => text.len(),
    };
    Some(&text[opening.start()..end])
}
