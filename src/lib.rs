//! # revmark
//!
//! A markup-rendering pipeline for free-form code-review analysis text.
//!
//! An external analysis service answers a review request with three blobs of
//! prose: errors found, an optimized rewrite of the code, and a discussion of
//! usage, advantages, and disadvantages. This crate turns those blobs into
//! HTML fragments a view layer can insert directly:
//!
//! - [`sections::split`] divides the details blob into labeled sections;
//! - [`inline::translate`] renders the service's pseudo-markdown dialect
//!   (bold, inline code, simple lists);
//! - [`fence::strip`] removes markdown code fences from the code blob;
//! - [`highlight::highlight`] tokenizes the stripped code for cosmetic
//!   syntax highlighting;
//! - [`report::render`] wires the three paths together.
//!
//! Every component is a pure, total function: absent input produces empty
//! output, unstructured input degrades to a labeled fallback, and nothing
//! panics on any input. All raw text is entity-escaped before markup is
//! layered on, so tag-shaped input can never inject structure into the
//! rendered output (see [`fragment::MarkupFragment`] for the invariant).

pub mod escape;
pub mod fence;
pub mod fragment;
pub mod highlight;
pub mod inline;
pub mod report;
pub mod sections;

pub use fragment::MarkupFragment;
pub use report::{render, AnalysisResponse, RenderedReport, ReportError};
pub use sections::{Section, SectionKind};
