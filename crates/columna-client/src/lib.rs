//! # columna-client
//!
//! The prediction client: owns the outgoing request shape, the endpoint
//! construction, and the response interpretation. Sends exactly one HTTP
//! request per submission; every failure surfaces as a `RequestError`
//! with no partial outcome.

pub mod client;
pub mod protocol;
pub mod session;
pub mod transport;

pub use client::PredictionClient;
pub use protocol::{predict_url, PredictRequest, PredictResponse};
pub use session::{SubmissionFlow, SubmissionState};
pub use transport::{HttpTransport, Transport, TransportConfig, TransportReply};
