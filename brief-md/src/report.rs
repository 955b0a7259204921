//! Structured case-analysis report returned by the model as JSON.
//!
//! Model output is never trusted to match the expected shape: it is
//! extracted, deserialized, and then validated before anything uses it.

use serde::{Deserialize, Serialize};

use crate::error::ReportError;

/// Summary, key points, and legal insights for one analysed document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisReport {
    pub summary: String,
    #[serde(default, alias = "items")]
    pub key_points: Vec<String>,
    #[serde(default, alias = "legalInsights")]
    pub insights: Vec<LegalInsight>,
}

/// One insight and the legislation it relies on.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LegalInsight {
    pub insight: String,
    #[serde(default)]
    pub legislation: String,
}

impl AnalysisReport {
    /// Parse and validate a raw model response.
    ///
    /// Accepts bare JSON, JSON wrapped in a ```` ```json ```` fence, or JSON
    /// surrounded by stray prose; the outermost `{ ... }` is used.
    pub fn from_model_output(raw: &str) -> Result<Self, ReportError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(ReportError::Empty);
        }

        let json = extract_object(strip_fence(trimmed)).ok_or(ReportError::NoJsonObject)?;
        let report: AnalysisReport = serde_json::from_str(json)?;
        report.validate()?;
        Ok(report)
    }

    /// Check the invariants serde cannot express.
    pub fn validate(&self) -> Result<(), ReportError> {
        if self.summary.trim().is_empty() {
            return Err(ReportError::Invalid {
                reason: "summary is empty".into(),
            });
        }
        if let Some(pos) = self.insights.iter().position(|i| i.insight.trim().is_empty()) {
            return Err(ReportError::Invalid {
                reason: format!("insight {} has no text", pos + 1),
            });
        }
        Ok(())
    }
}

fn strip_fence(text: &str) -> &str {
    let Some(rest) = text.strip_prefix("```") else {
        return text;
    };
    // Drop the info string (`json`) on the opening line.
    let body = rest.split_once('\n').map_or("", |(_, body)| body);
    body.trim_end().strip_suffix("```").unwrap_or(body).trim()
}

fn extract_object(text: &str) -> Option<&str> {
    let start = text.find('{')?;
    let end = text.rfind('}')?;
    (end > start).then(|| &text[start..=end])
}
