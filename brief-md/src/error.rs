/// Errors returned when an AI response cannot be turned into an
/// [`AnalysisReport`](crate::report::AnalysisReport).
///
/// Rendering and speech cleaning have no error type: they accept any text.
#[derive(Debug, thiserror::Error)]
pub enum ReportError {
    #[error("Model response is empty")]
    Empty,

    #[error("Model response contains no JSON object")]
    NoJsonObject,

    #[error("Model response is not valid report JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid report: {reason}")]
    Invalid { reason: String },
}
