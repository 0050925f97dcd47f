/// Failures of an expiration analysis. Both abort the whole call.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SuggestionError {
    #[error("suggestion.analysis_request_failed")]
    AnalysisRequestFailed,
    #[error("suggestion.analysis_output_invalid")]
    AnalysisOutputInvalid,
}
