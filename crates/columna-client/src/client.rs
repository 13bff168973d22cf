//! The prediction client: one request out, one outcome (or error) back.

use columna_core::errors::RequestError;
use columna_core::{MeasurementSet, PredictionOutcome, ServerAddress};

use crate::protocol::{predict_url, PredictRequest, PredictResponse};
use crate::transport::{HttpTransport, Transport, TransportConfig};

/// Sends measurement sets to the external prediction service and
/// interprets the reply. Borrows the address per call; never mutates the
/// connection store or the measurement set.
pub struct PredictionClient<T: Transport = HttpTransport> {
    transport: T,
}

impl PredictionClient<HttpTransport> {
    /// Client over the production HTTP transport with default settings.
    pub fn new() -> Result<Self, RequestError> {
        Ok(Self {
            transport: HttpTransport::new(TransportConfig::default())?,
        })
    }
}

impl<T: Transport> PredictionClient<T> {
    /// Client over a caller-supplied transport (tests inject mocks here).
    pub fn with_transport(transport: T) -> Self {
        Self { transport }
    }

    /// Submit `measurements` to the service at `address`. Sends exactly
    /// once; any transport failure, non-2xx status, or undecodable body is
    /// a `RequestError` and no outcome is produced.
    pub fn predict(
        &self,
        address: &ServerAddress,
        measurements: &MeasurementSet,
    ) -> Result<PredictionOutcome, RequestError> {
        let url = predict_url(address);
        let request = PredictRequest::from(measurements);

        let reply = self.transport.post_json(&url, &request)?;
        if !reply.is_success() {
            return Err(RequestError::HttpStatus {
                status: reply.status,
            });
        }

        let response: PredictResponse =
            serde_json::from_str(&reply.body).map_err(|e| RequestError::MalformedResponse {
                reason: e.to_string(),
            })?;

        let outcome = PredictionOutcome::from_class(response.prediccion);
        tracing::info!("prediction class {} -> {:?}", response.prediccion, outcome);
        Ok(outcome)
    }
}
