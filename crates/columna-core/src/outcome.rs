//! Binary classification outcome returned by the prediction service.

use serde::{Deserialize, Serialize};

/// The two presentation states a successful prediction resolves to.
/// A failed call produces no outcome at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PredictionOutcome {
    Normal,
    Abnormal,
}

impl PredictionOutcome {
    /// Map the service's integer class to an outcome: `0` means a spinal
    /// problem was predicted, anything else means normal.
    pub fn from_class(class: i64) -> Self {
        if class == 0 {
            PredictionOutcome::Abnormal
        } else {
            PredictionOutcome::Normal
        }
    }

    /// Short headline shown to the user.
    pub fn title(self) -> &'static str {
        match self {
            PredictionOutcome::Normal => "Todo normal",
            PredictionOutcome::Abnormal => "¡Atención!",
        }
    }

    /// Full description shown to the user.
    pub fn detail(self) -> &'static str {
        match self {
            PredictionOutcome::Normal => "Tu estado se encuentra normal.",
            PredictionOutcome::Abnormal => {
                "El sistema predijo que tienes problemas de columna."
            }
        }
    }
}
