//! The six bounded spinal-posture measurements.
//!
//! Each field is integer-valued with an inclusive [min, max] bound; values
//! are clamped on construction and mutation so a populated set always
//! satisfies its bounds. A fresh set is the table of defaults.

use serde::{Deserialize, Serialize};

/// One of the six measurement fields, with per-field metadata.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MeasurementField {
    PelvicIncidence,
    PelvicTilt,
    LumbarLordosisAngle,
    SacralSlope,
    PelvicRadius,
    DegreeOfSpondylolisthesis,
}

impl MeasurementField {
    /// All six fields, in submission order.
    pub const ALL: [MeasurementField; 6] = [
        MeasurementField::PelvicIncidence,
        MeasurementField::PelvicTilt,
        MeasurementField::LumbarLordosisAngle,
        MeasurementField::SacralSlope,
        MeasurementField::PelvicRadius,
        MeasurementField::DegreeOfSpondylolisthesis,
    ];

    /// Inclusive (min, max) bound for this field.
    pub fn bounds(self) -> (i32, i32) {
        match self {
            MeasurementField::PelvicIncidence => (0, 100),
            MeasurementField::PelvicTilt => (-10, 60),
            MeasurementField::LumbarLordosisAngle => (0, 180),
            MeasurementField::SacralSlope => (0, 180),
            MeasurementField::PelvicRadius => (0, 180),
            MeasurementField::DegreeOfSpondylolisthesis => (0, 160),
        }
    }

    /// Default value for a fresh measurement set.
    pub fn default_value(self) -> i32 {
        match self {
            MeasurementField::PelvicIncidence => 60,
            MeasurementField::PelvicTilt => 20,
            MeasurementField::LumbarLordosisAngle => 55,
            MeasurementField::SacralSlope => 45,
            MeasurementField::PelvicRadius => 100,
            MeasurementField::DegreeOfSpondylolisthesis => 25,
        }
    }

    /// Key used in the prediction request body.
    pub fn wire_key(self) -> &'static str {
        match self {
            MeasurementField::PelvicIncidence => "incidencia_pelvica",
            MeasurementField::PelvicTilt => "inclinacion_pelvica",
            MeasurementField::LumbarLordosisAngle => "angulo_lordosis_lumbar",
            MeasurementField::SacralSlope => "pendiente_sacra",
            MeasurementField::PelvicRadius => "radio_pelvico",
            MeasurementField::DegreeOfSpondylolisthesis => "grado_espondilolistesis",
        }
    }

    /// Human-readable label.
    pub fn label(self) -> &'static str {
        match self {
            MeasurementField::PelvicIncidence => "pelvic incidence",
            MeasurementField::PelvicTilt => "pelvic tilt",
            MeasurementField::LumbarLordosisAngle => "lumbar lordosis angle",
            MeasurementField::SacralSlope => "sacral slope",
            MeasurementField::PelvicRadius => "pelvic radius",
            MeasurementField::DegreeOfSpondylolisthesis => "degree of spondylolisthesis",
        }
    }

    /// Clamp `value` into this field's bounds.
    pub fn clamp(self, value: i32) -> i32 {
        let (min, max) = self.bounds();
        value.clamp(min, max)
    }
}

/// The fully populated set of six measurements. There is no partial state:
/// every field always holds an in-bounds value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MeasurementSet {
    pub pelvic_incidence: i32,
    pub pelvic_tilt: i32,
    pub lumbar_lordosis_angle: i32,
    pub sacral_slope: i32,
    pub pelvic_radius: i32,
    pub degree_of_spondylolisthesis: i32,
}

impl MeasurementSet {
    /// Get the value of one field.
    pub fn get(&self, field: MeasurementField) -> i32 {
        match field {
            MeasurementField::PelvicIncidence => self.pelvic_incidence,
            MeasurementField::PelvicTilt => self.pelvic_tilt,
            MeasurementField::LumbarLordosisAngle => self.lumbar_lordosis_angle,
            MeasurementField::SacralSlope => self.sacral_slope,
            MeasurementField::PelvicRadius => self.pelvic_radius,
            MeasurementField::DegreeOfSpondylolisthesis => self.degree_of_spondylolisthesis,
        }
    }

    /// Set one field, clamping into its bounds. Returns the stored value.
    pub fn set(&mut self, field: MeasurementField, value: i32) -> i32 {
        let clamped = field.clamp(value);
        let slot = match field {
            MeasurementField::PelvicIncidence => &mut self.pelvic_incidence,
            MeasurementField::PelvicTilt => &mut self.pelvic_tilt,
            MeasurementField::LumbarLordosisAngle => &mut self.lumbar_lordosis_angle,
            MeasurementField::SacralSlope => &mut self.sacral_slope,
            MeasurementField::PelvicRadius => &mut self.pelvic_radius,
            MeasurementField::DegreeOfSpondylolisthesis => &mut self.degree_of_spondylolisthesis,
        };
        *slot = clamped;
        clamped
    }

    /// Restore every field to its documented default.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

impl Default for MeasurementSet {
    fn default() -> Self {
        Self {
            pelvic_incidence: MeasurementField::PelvicIncidence.default_value(),
            pelvic_tilt: MeasurementField::PelvicTilt.default_value(),
            lumbar_lordosis_angle: MeasurementField::LumbarLordosisAngle.default_value(),
            sacral_slope: MeasurementField::SacralSlope.default_value(),
            pelvic_radius: MeasurementField::PelvicRadius.default_value(),
            degree_of_spondylolisthesis: MeasurementField::DegreeOfSpondylolisthesis
                .default_value(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn defaults_are_within_bounds() {
        for field in MeasurementField::ALL {
            let (min, max) = field.bounds();
            let value = field.default_value();
            assert!(
                (min..=max).contains(&value),
                "{} default {value} outside [{min}, {max}]",
                field.label()
            );
        }
    }

    #[test]
    fn default_set_matches_table() {
        let set = MeasurementSet::default();
        assert_eq!(set.pelvic_incidence, 60);
        assert_eq!(set.pelvic_tilt, 20);
        assert_eq!(set.lumbar_lordosis_angle, 55);
        assert_eq!(set.sacral_slope, 45);
        assert_eq!(set.pelvic_radius, 100);
        assert_eq!(set.degree_of_spondylolisthesis, 25);
    }

    #[test]
    fn set_clamps_to_bounds() {
        let mut set = MeasurementSet::default();
        assert_eq!(set.set(MeasurementField::PelvicIncidence, 500), 100);
        assert_eq!(set.set(MeasurementField::PelvicTilt, -50), -10);
        assert_eq!(set.set(MeasurementField::SacralSlope, 90), 90);
    }

    #[test]
    fn reset_restores_defaults() {
        let mut set = MeasurementSet::default();
        for field in MeasurementField::ALL {
            set.set(field, 1);
        }
        set.reset();
        assert_eq!(set, MeasurementSet::default());
    }

    proptest! {
        #[test]
        fn stored_values_always_in_bounds(raw in any::<i32>(), idx in 0usize..6) {
            let field = MeasurementField::ALL[idx];
            let mut set = MeasurementSet::default();
            let stored = set.set(field, raw);
            let (min, max) = field.bounds();
            prop_assert!(stored >= min && stored <= max);
            prop_assert_eq!(set.get(field), stored);
        }

        #[test]
        fn in_range_values_stored_exactly(idx in 0usize..6, frac in 0.0f64..=1.0) {
            let field = MeasurementField::ALL[idx];
            let (min, max) = field.bounds();
            let value = min + ((max - min) as f64 * frac) as i32;
            let mut set = MeasurementSet::default();
            prop_assert_eq!(set.set(field, value), value);
        }
    }
}
