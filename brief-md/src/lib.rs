//! `brief-md`: render AI-generated answers for the document tools.
//!
//! The model replies in a small markdown dialect: bold, italic, inline code,
//! fenced code blocks, ordered and unordered lists, pipe tables, and
//! paragraphs. This crate turns that text into escaped HTML for the page and
//! into plain prose for the narrator. Both transforms accept any string.
//!
//! # Quick start
//!
//! ```
//! let html = brief_md::render("**Document Type:** Court Order");
//! assert!(html.contains("<strong>Document Type:</strong> Court Order"));
//!
//! let spoken = brief_md::clean("* Exchange at **6:00 PM**");
//! assert_eq!(spoken, "Exchange at 6:00 PM");
//! ```

pub mod blocks;
pub mod error;
pub mod inline;
pub mod render_html;
pub mod report;
pub mod speech;
pub mod styles;

pub use error::*;
pub use inline::{escape_html, format_inline};
pub use render_html::{Renderer, render};
pub use report::{AnalysisReport, LegalInsight};
pub use speech::{NarrationLabels, clean, narrate, narrate_report};
pub use styles::Styles;

impl AnalysisReport {
    /// Narrate this report with the default section labels.
    pub fn to_speech(&self) -> String {
        speech::narrate(self)
    }
}
