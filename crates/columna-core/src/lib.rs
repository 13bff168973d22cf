//! # columna-core
//!
//! Foundation crate for the Columna spinal-posture prediction front-end.
//! Defines all types, traits, errors, and constants.
//! Every other crate in the workspace depends on this.

pub mod address;
pub mod constants;
pub mod errors;
pub mod measurement;
pub mod outcome;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use address::ServerAddress;
pub use errors::{ColumnaError, ColumnaResult, RequestError, StoreError, ValidationError};
pub use measurement::{MeasurementField, MeasurementSet};
pub use outcome::PredictionOutcome;
pub use traits::KeyValueStore;
