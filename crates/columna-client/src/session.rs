//! Submission state machine.
//!
//! `Idle -> Submitting -> Done(outcome) | Failed(error)`, then back to
//! `Idle` on user acknowledgement. Fields are only editable in `Idle`;
//! `Done` resets the measurements to defaults, `Failed` preserves them for
//! resubmission. `begin` refuses to start outside `Idle`, which is what
//! keeps a single request in flight.

use columna_core::errors::{ColumnaResult, RequestError, ValidationError};
use columna_core::{MeasurementField, MeasurementSet, PredictionOutcome, ServerAddress};

use crate::client::PredictionClient;
use crate::transport::Transport;

/// Where the flow currently is. Passed to the presentation layer as data,
/// never as ad hoc flags.
#[derive(Debug, Clone)]
pub enum SubmissionState {
    Idle,
    Submitting,
    Done(PredictionOutcome),
    Failed(RequestError),
}

impl SubmissionState {
    fn name(&self) -> &'static str {
        match self {
            SubmissionState::Idle => "Idle",
            SubmissionState::Submitting => "Submitting",
            SubmissionState::Done(_) => "Done",
            SubmissionState::Failed(_) => "Failed",
        }
    }
}

/// The state machine plus the measurement set it guards.
#[derive(Debug)]
pub struct SubmissionFlow {
    state: SubmissionState,
    measurements: MeasurementSet,
}

impl SubmissionFlow {
    /// A fresh flow: `Idle`, defaults in every field.
    pub fn new() -> Self {
        Self {
            state: SubmissionState::Idle,
            measurements: MeasurementSet::default(),
        }
    }

    pub fn state(&self) -> &SubmissionState {
        &self.state
    }

    pub fn measurements(&self) -> &MeasurementSet {
        &self.measurements
    }

    fn invalid(&self, action: &str) -> ValidationError {
        ValidationError::InvalidTransition {
            reason: format!("{action} is not allowed in state {}", self.state.name()),
        }
    }

    /// Edit one field. Only legal in `Idle`; the stored (clamped) value is
    /// returned.
    pub fn set_field(&mut self, field: MeasurementField, value: i32) -> ColumnaResult<i32> {
        if !matches!(self.state, SubmissionState::Idle) {
            return Err(self.invalid("editing fields").into());
        }
        Ok(self.measurements.set(field, value))
    }

    /// `Idle -> Submitting`. Returns a snapshot of the measurements to
    /// send, so the in-flight request is immune to later edits.
    pub fn begin(&mut self) -> ColumnaResult<MeasurementSet> {
        if !matches!(self.state, SubmissionState::Idle) {
            return Err(self.invalid("submitting").into());
        }
        self.state = SubmissionState::Submitting;
        Ok(self.measurements.clone())
    }

    /// `Submitting -> Done`.
    pub fn complete(&mut self, outcome: PredictionOutcome) -> ColumnaResult<()> {
        if !matches!(self.state, SubmissionState::Submitting) {
            return Err(self.invalid("completing").into());
        }
        self.state = SubmissionState::Done(outcome);
        Ok(())
    }

    /// `Submitting -> Failed`.
    pub fn fail(&mut self, error: RequestError) -> ColumnaResult<()> {
        if !matches!(self.state, SubmissionState::Submitting) {
            return Err(self.invalid("failing").into());
        }
        self.state = SubmissionState::Failed(error);
        Ok(())
    }

    /// User acknowledgement. From `Done` the measurements reset to their
    /// defaults; from `Failed` they are left unchanged since no outcome
    /// was produced. Either way the flow returns to `Idle`.
    pub fn acknowledge(&mut self) -> ColumnaResult<()> {
        match self.state {
            SubmissionState::Done(_) => {
                self.measurements.reset();
                self.state = SubmissionState::Idle;
                Ok(())
            }
            SubmissionState::Failed(_) => {
                self.state = SubmissionState::Idle;
                Ok(())
            }
            _ => Err(self.invalid("acknowledging").into()),
        }
    }

    /// Drive one full submission: `begin`, predict, then `complete` or
    /// `fail`. The returned result mirrors the terminal state.
    pub fn submit<T: Transport>(
        &mut self,
        client: &PredictionClient<T>,
        address: &ServerAddress,
    ) -> ColumnaResult<PredictionOutcome> {
        let snapshot = self.begin()?;
        match client.predict(address, &snapshot) {
            Ok(outcome) => {
                self.complete(outcome)?;
                Ok(outcome)
            }
            Err(error) => {
                self.fail(error.clone())?;
                Err(error.into())
            }
        }
    }
}

impl Default for SubmissionFlow {
    fn default() -> Self {
        Self::new()
    }
}
