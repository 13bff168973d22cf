/// Prediction request errors: transport, status, and decode failures.
/// A failed call produces no partial outcome; the caller's measurement
/// set is preserved for resubmission.
#[derive(Debug, Clone, thiserror::Error)]
pub enum RequestError {
    #[error("network error: {reason}")]
    Network { reason: String },

    #[error("prediction service returned HTTP {status}")]
    HttpStatus { status: u16 },

    #[error("malformed prediction response: {reason}")]
    MalformedResponse { reason: String },
}
