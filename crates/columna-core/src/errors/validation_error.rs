/// Local validation errors: malformed server addresses and illegal
/// submission-flow transitions. Prior persisted state is always left
/// untouched when one of these is returned.
#[derive(Debug, Clone, thiserror::Error)]
pub enum ValidationError {
    #[error("malformed server address '{candidate}': expected four dot-separated groups, found {groups}")]
    WrongGroupCount { candidate: String, groups: usize },

    #[error("malformed server address '{candidate}': group '{group}' is not a decimal number")]
    NotNumeric { candidate: String, group: String },

    #[error("malformed server address '{candidate}': octet {octet} is out of range 0-255")]
    OctetOutOfRange { candidate: String, octet: u64 },

    #[error("no server address configured")]
    NoAddressConfigured,

    #[error("invalid submission transition: {reason}")]
    InvalidTransition { reason: String },
}
