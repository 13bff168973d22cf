//! # columna-cli
//!
//! Headless command-line surface for the Columna prediction front-end:
//!
//! ```bash
//! # Configure the prediction server once
//! columna set-address 192.168.1.10
//!
//! # Inspect or drop the stored address
//! columna get-address
//! columna clear-address
//!
//! # Submit a measurement set (omitted flags use the documented defaults)
//! columna predict --incidencia 72 --grado 40
//! ```
//!
//! Exit codes: `0` on success, `1` on validation error (including "no
//! address configured"), `2` on request/transport error.

pub mod commands;
pub mod tracing_setup;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use columna_core::ColumnaError;

pub use commands::{ClearAddressCommand, GetAddressCommand, PredictCommand, SetAddressCommand};

/// Columna - headless client for the spinal-posture prediction service.
#[derive(Parser, Debug)]
#[command(name = "columna")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Database file holding the persisted server address.
    /// Defaults to `$COLUMNA_DB`, then `$HOME/.columna/columna.db`.
    #[arg(long, global = true)]
    pub db: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available CLI commands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Validate and persist the prediction server address
    SetAddress(SetAddressCommand),

    /// Print the stored server address
    GetAddress(GetAddressCommand),

    /// Remove the stored server address
    ClearAddress(ClearAddressCommand),

    /// Submit a measurement set and print the classification
    Predict(PredictCommand),
}

impl Cli {
    /// Resolve the settings database path: `--db` flag, then `$COLUMNA_DB`,
    /// then `$HOME/.columna/columna.db`, falling back to the working
    /// directory when no home is available.
    pub fn db_path(&self) -> PathBuf {
        if let Some(path) = &self.db {
            return path.clone();
        }
        if let Some(path) = std::env::var_os("COLUMNA_DB") {
            return PathBuf::from(path);
        }
        match std::env::var_os("HOME") {
            Some(home) => PathBuf::from(home).join(".columna").join("columna.db"),
            None => PathBuf::from("columna.db"),
        }
    }
}

/// Process exit code for an error, per the CLI contract.
pub fn exit_code(err: &ColumnaError) -> i32 {
    match err {
        ColumnaError::Validation(_) => 1,
        ColumnaError::Request(_) => 2,
        // Local persistence failures are not the remote's fault; treat them
        // like validation problems the user can fix (path, permissions).
        ColumnaError::Store(_) => 1,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use columna_core::errors::{RequestError, StoreError, ValidationError};

    #[test]
    fn parses_predict_with_partial_flags() {
        let cli = Cli::try_parse_from(["columna", "predict", "--incidencia", "72"]).unwrap();
        match cli.command {
            Commands::Predict(cmd) => {
                assert_eq!(cmd.incidencia, Some(72));
                assert_eq!(cmd.inclinacion, None);
            }
            other => panic!("expected predict, got {other:?}"),
        }
    }

    #[test]
    fn parses_set_address() {
        let cli = Cli::try_parse_from(["columna", "set-address", "10.0.0.1"]).unwrap();
        match cli.command {
            Commands::SetAddress(cmd) => assert_eq!(cmd.ip, "10.0.0.1"),
            other => panic!("expected set-address, got {other:?}"),
        }
    }

    #[test]
    fn db_flag_overrides_environment() {
        let cli = Cli::try_parse_from(["columna", "--db", "/tmp/x.db", "get-address"]).unwrap();
        assert_eq!(cli.db_path(), PathBuf::from("/tmp/x.db"));
    }

    #[test]
    fn exit_codes_follow_the_contract() {
        assert_eq!(
            exit_code(&ValidationError::NoAddressConfigured.into()),
            1
        );
        assert_eq!(
            exit_code(
                &RequestError::Network {
                    reason: "down".to_string()
                }
                .into()
            ),
            2
        );
        assert_eq!(
            exit_code(
                &StoreError::Sqlite {
                    message: "locked".to_string()
                }
                .into()
            ),
            1
        );
    }
}
