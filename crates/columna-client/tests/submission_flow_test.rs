//! Submission state machine tests: transition legality, reset-on-done,
//! preserve-on-failure.

use columna_core::errors::{ColumnaError, RequestError, ValidationError};
use columna_core::{MeasurementField, MeasurementSet, PredictionOutcome, ServerAddress};

use columna_client::{
    PredictRequest, PredictionClient, SubmissionFlow, SubmissionState, Transport, TransportReply,
};

struct CannedTransport(Result<TransportReply, RequestError>);

impl Transport for CannedTransport {
    fn post_json(&self, _url: &str, _body: &PredictRequest) -> Result<TransportReply, RequestError> {
        self.0.clone()
    }
}

fn ok_client(body: &str) -> PredictionClient<CannedTransport> {
    PredictionClient::with_transport(CannedTransport(Ok(TransportReply {
        status: 200,
        body: body.to_string(),
    })))
}

fn failing_client() -> PredictionClient<CannedTransport> {
    PredictionClient::with_transport(CannedTransport(Err(RequestError::Network {
        reason: "timeout".to_string(),
    })))
}

fn addr() -> ServerAddress {
    ServerAddress::parse("10.0.0.1").unwrap()
}

fn is_invalid_transition(err: &ColumnaError) -> bool {
    matches!(
        err,
        ColumnaError::Validation(ValidationError::InvalidTransition { .. })
    )
}

#[test]
fn fresh_flow_is_idle_with_defaults() {
    let flow = SubmissionFlow::new();
    assert!(matches!(flow.state(), SubmissionState::Idle));
    assert_eq!(*flow.measurements(), MeasurementSet::default());
}

#[test]
fn fields_are_editable_only_in_idle() {
    let mut flow = SubmissionFlow::new();
    assert_eq!(
        flow.set_field(MeasurementField::SacralSlope, 90).unwrap(),
        90
    );

    flow.begin().unwrap();
    let err = flow
        .set_field(MeasurementField::SacralSlope, 10)
        .unwrap_err();
    assert!(is_invalid_transition(&err));
    assert_eq!(flow.measurements().sacral_slope, 90);
}

#[test]
fn begin_refuses_reentry_while_submitting() {
    let mut flow = SubmissionFlow::new();
    flow.begin().unwrap();
    let err = flow.begin().unwrap_err();
    assert!(is_invalid_transition(&err));
}

#[test]
fn successful_submission_ends_done_and_acknowledge_resets() {
    let mut flow = SubmissionFlow::new();
    flow.set_field(MeasurementField::PelvicIncidence, 80).unwrap();

    let outcome = flow.submit(&ok_client(r#"{"prediccion": 0}"#), &addr()).unwrap();
    assert_eq!(outcome, PredictionOutcome::Abnormal);
    assert!(matches!(
        flow.state(),
        SubmissionState::Done(PredictionOutcome::Abnormal)
    ));
    // Measurements are untouched until the user acknowledges the outcome.
    assert_eq!(flow.measurements().pelvic_incidence, 80);

    flow.acknowledge().unwrap();
    assert!(matches!(flow.state(), SubmissionState::Idle));
    assert_eq!(*flow.measurements(), MeasurementSet::default());
}

#[test]
fn failed_submission_ends_failed_and_acknowledge_preserves() {
    let mut flow = SubmissionFlow::new();
    flow.set_field(MeasurementField::PelvicRadius, 140).unwrap();

    let err = flow.submit(&failing_client(), &addr()).unwrap_err();
    assert!(matches!(
        err,
        ColumnaError::Request(RequestError::Network { .. })
    ));
    assert!(matches!(flow.state(), SubmissionState::Failed(_)));

    flow.acknowledge().unwrap();
    assert!(matches!(flow.state(), SubmissionState::Idle));
    assert_eq!(flow.measurements().pelvic_radius, 140);
}

#[test]
fn acknowledge_is_illegal_in_idle_and_submitting() {
    let mut flow = SubmissionFlow::new();
    assert!(is_invalid_transition(&flow.acknowledge().unwrap_err()));

    flow.begin().unwrap();
    assert!(is_invalid_transition(&flow.acknowledge().unwrap_err()));
}

#[test]
fn flow_can_repeat_after_acknowledge() {
    let mut flow = SubmissionFlow::new();
    flow.submit(&ok_client(r#"{"prediccion": 1}"#), &addr()).unwrap();
    flow.acknowledge().unwrap();

    let outcome = flow.submit(&ok_client(r#"{"prediccion": 1}"#), &addr()).unwrap();
    assert_eq!(outcome, PredictionOutcome::Normal);
}
