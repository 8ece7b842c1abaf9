//! Analysis report pipeline
//!
//! The analysis service answers with three free-text fields (capitalized
//! names on the wire): `Errors` holds prose about problems found, `Code` an
//! optimized rewrite, usually fenced, and `Details` a discussion of usage,
//! advantages, and disadvantages. [`render`] wires each field through its
//! formatter:
//!
//! - errors → inline translation,
//! - code → fence stripping, then highlighting,
//! - details → section splitting.
//!
//! A missing or blank field is the "no data" state, not an error; the only
//! fallible step anywhere near this pipeline is parsing the response JSON.

use serde::{Deserialize, Serialize};

use crate::fragment::MarkupFragment;
use crate::sections::Section;
use crate::{fence, highlight, inline, sections};

/// Errors from handling a raw service response.
#[derive(Debug, Clone, PartialEq)]
pub enum ReportError {
    MalformedResponse(String),
}

impl std::fmt::Display for ReportError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ReportError::MalformedResponse(detail) => {
                write!(f, "Malformed analysis response: {}", detail)
            }
        }
    }
}

impl std::error::Error for ReportError {}

/// The raw service response. Fields are optional: an absent field renders
/// as "no data", never as a failure.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct AnalysisResponse {
    #[serde(rename = "Errors", default)]
    pub errors: Option<String>,
    #[serde(rename = "Code", default)]
    pub code: Option<String>,
    #[serde(rename = "Details", default)]
    pub details: Option<String>,
}

impl AnalysisResponse {
    /// Parse a raw response body.
    pub fn from_json(raw: &str) -> Result<Self, ReportError> {
        serde_json::from_str(raw).map_err(|e| ReportError::MalformedResponse(e.to_string()))
    }
}

/// Everything the view layer needs, rendered.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RenderedReport {
    pub errors: Option<MarkupFragment>,
    pub code: Option<MarkupFragment>,
    pub sections: Vec<Section>,
}

/// Render a response into markup fragments. Pure and total; identical input
/// always produces identical output.
pub fn render(response: &AnalysisResponse) -> RenderedReport {
    let errors = present(&response.errors).map(inline::translate);
    let code = present(&response.code).map(|c| highlight::highlight(&fence::strip(c)));
    let sections = present(&response.details)
        .map(sections::split)
        .unwrap_or_default();
    RenderedReport {
        errors,
        code,
        sections,
    }
}

/// Treat blank text the same as an absent field.
fn present(field: &Option<String>) -> Option<&str> {
    field.as_deref().filter(|text| !text.trim().is_empty())
}
