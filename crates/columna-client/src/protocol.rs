//! Wire protocol for the external prediction service.
//!
//! The request body maps each measurement to its documented external key;
//! the struct fields are the wire keys themselves. The response is a JSON
//! object with a single integer field `prediccion`.

use serde::{Deserialize, Serialize};

use columna_core::constants::{PREDICT_PATH, PREDICT_PORT};
use columna_core::{MeasurementSet, ServerAddress};

/// JSON body of a `POST /predict` request. Numeric identity with the
/// measurement set: no unit conversion, no scaling.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PredictRequest {
    pub incidencia_pelvica: i32,
    pub inclinacion_pelvica: i32,
    pub angulo_lordosis_lumbar: i32,
    pub pendiente_sacra: i32,
    pub radio_pelvico: i32,
    pub grado_espondilolistesis: i32,
}

impl From<&MeasurementSet> for PredictRequest {
    fn from(set: &MeasurementSet) -> Self {
        Self {
            incidencia_pelvica: set.pelvic_incidence,
            inclinacion_pelvica: set.pelvic_tilt,
            angulo_lordosis_lumbar: set.lumbar_lordosis_angle,
            pendiente_sacra: set.sacral_slope,
            radio_pelvico: set.pelvic_radius,
            grado_espondilolistesis: set.degree_of_spondylolisthesis,
        }
    }
}

/// Expected response body. Any other shape is a `RequestError`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PredictResponse {
    pub prediccion: i64,
}

/// Endpoint for the prediction service at `address`.
pub fn predict_url(address: &ServerAddress) -> String {
    format!("http://{}:{}{}", address.as_str(), PREDICT_PORT, PREDICT_PATH)
}
