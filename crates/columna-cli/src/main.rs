//! Columna CLI - headless front-end for the spinal-posture prediction
//! service: persist a server address, submit measurement sets, print the
//! classification.

use std::process::ExitCode;

use clap::Parser;

use columna_cli::{exit_code, tracing_setup, Cli, Commands};
use columna_client::PredictionClient;
use columna_core::errors::ColumnaResult;
use columna_store::{ConnectionStore, SqliteStore};

fn main() -> ExitCode {
    tracing_setup::init_tracing();

    let cli = Cli::parse();

    match run(&cli) {
        Ok(text) => {
            println!("{text}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::from(exit_code(&err) as u8)
        }
    }
}

fn run(cli: &Cli) -> ColumnaResult<String> {
    let store = ConnectionStore::new(SqliteStore::open(&cli.db_path())?);

    match &cli.command {
        Commands::SetAddress(cmd) => cmd.run(&store),
        Commands::GetAddress(cmd) => cmd.run(&store),
        Commands::ClearAddress(cmd) => cmd.run(&store),
        Commands::Predict(cmd) => {
            let client = PredictionClient::new()?;
            cmd.run(&store, &client)
        }
    }
}
