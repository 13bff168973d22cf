//! Workspace-wide constants.

/// TCP port the external prediction service listens on.
pub const PREDICT_PORT: u16 = 8080;

/// Path component of the prediction endpoint.
pub const PREDICT_PATH: &str = "/predict";

/// Key under which the server address is persisted.
pub const SERVER_IP_KEY: &str = "serverIp";

/// Default request timeout in seconds (transport default, never overridden per call).
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;
