//! Command implementations.
//!
//! Each command returns the text to print so the commands stay testable
//! without capturing stdout; `main` does the printing and exit-code
//! mapping.

use clap::Args;

use columna_client::{PredictionClient, Transport};
use columna_core::errors::{ColumnaResult, ValidationError};
use columna_core::{KeyValueStore, MeasurementField, MeasurementSet};
use columna_store::ConnectionStore;

/// Validate and persist the prediction server address.
#[derive(Args, Debug)]
pub struct SetAddressCommand {
    /// IPv4 dotted-quad address of the prediction server
    pub ip: String,
}

impl SetAddressCommand {
    pub fn run<S: KeyValueStore>(&self, store: &ConnectionStore<S>) -> ColumnaResult<String> {
        let addr = store.save(&self.ip)?;
        Ok(format!("server address saved: {addr}"))
    }
}

/// Print the stored server address.
#[derive(Args, Debug)]
pub struct GetAddressCommand {}

impl GetAddressCommand {
    pub fn run<S: KeyValueStore>(&self, store: &ConnectionStore<S>) -> ColumnaResult<String> {
        match store.load()? {
            Some(addr) => Ok(addr.to_string()),
            None => Ok("no address configured".to_string()),
        }
    }
}

/// Remove the stored server address.
#[derive(Args, Debug)]
pub struct ClearAddressCommand {}

impl ClearAddressCommand {
    pub fn run<S: KeyValueStore>(&self, store: &ConnectionStore<S>) -> ColumnaResult<String> {
        store.clear()?;
        Ok("server address cleared".to_string())
    }
}

/// Submit a measurement set and print the classification.
#[derive(Args, Debug)]
pub struct PredictCommand {
    /// Pelvic incidence (0-100, default 60)
    #[arg(long)]
    pub incidencia: Option<i32>,

    /// Pelvic tilt (-10-60, default 20)
    #[arg(long, allow_negative_numbers = true)]
    pub inclinacion: Option<i32>,

    /// Lumbar lordosis angle (0-180, default 55)
    #[arg(long)]
    pub lordosis: Option<i32>,

    /// Sacral slope (0-180, default 45)
    #[arg(long)]
    pub pendiente: Option<i32>,

    /// Pelvic radius (0-180, default 100)
    #[arg(long)]
    pub radio: Option<i32>,

    /// Degree of spondylolisthesis (0-160, default 25)
    #[arg(long)]
    pub grado: Option<i32>,
}

impl PredictCommand {
    /// Build the measurement set: omitted flags keep their defaults,
    /// supplied values clamp into bounds.
    pub fn measurement_set(&self) -> MeasurementSet {
        let mut set = MeasurementSet::default();
        let flags = [
            (MeasurementField::PelvicIncidence, self.incidencia),
            (MeasurementField::PelvicTilt, self.inclinacion),
            (MeasurementField::LumbarLordosisAngle, self.lordosis),
            (MeasurementField::SacralSlope, self.pendiente),
            (MeasurementField::PelvicRadius, self.radio),
            (MeasurementField::DegreeOfSpondylolisthesis, self.grado),
        ];
        for (field, value) in flags {
            if let Some(value) = value {
                set.set(field, value);
            }
        }
        set
    }

    pub fn run<S: KeyValueStore, T: Transport>(
        &self,
        store: &ConnectionStore<S>,
        client: &PredictionClient<T>,
    ) -> ColumnaResult<String> {
        let Some(addr) = store.load()? else {
            return Err(ValidationError::NoAddressConfigured.into());
        };

        let measurements = self.measurement_set();
        let outcome = client.predict(&addr, &measurements)?;
        Ok(format!("{}\n{}", outcome.title(), outcome.detail()))
    }
}
