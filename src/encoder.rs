use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::schema::{column_index, FEATURE_COUNT, FEATURE_NAMES};

/// Patient age expressed as one of the ten decade bands offered by the
/// intake form. The classifier only ever sees the band's midpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AgeBand {
    #[serde(rename = "0-10")]
    Under10,
    #[serde(rename = "10-20")]
    Teens,
    #[serde(rename = "20-30")]
    Twenties,
    #[serde(rename = "30-40")]
    Thirties,
    #[serde(rename = "40-50")]
    Forties,
    #[serde(rename = "50-60")]
    Fifties,
    #[serde(rename = "60-70")]
    Sixties,
    #[serde(rename = "70-80")]
    Seventies,
    #[serde(rename = "80-90")]
    Eighties,
    #[serde(rename = "90-100")]
    Nineties,
}

impl AgeBand {
    pub const ALL: [AgeBand; 10] = [
        AgeBand::Under10,
        AgeBand::Teens,
        AgeBand::Twenties,
        AgeBand::Thirties,
        AgeBand::Forties,
        AgeBand::Fifties,
        AgeBand::Sixties,
        AgeBand::Seventies,
        AgeBand::Eighties,
        AgeBand::Nineties,
    ];

    /// Midpoint of the decade band, the value the training pipeline one-hot
    /// encoded on (e.g. 65.0 for "60-70").
    pub fn midpoint(&self) -> f32 {
        match self {
            AgeBand::Under10 => 5.0,
            AgeBand::Teens => 15.0,
            AgeBand::Twenties => 25.0,
            AgeBand::Thirties => 35.0,
            AgeBand::Forties => 45.0,
            AgeBand::Fifties => 55.0,
            AgeBand::Sixties => 65.0,
            AgeBand::Seventies => 75.0,
            AgeBand::Eighties => 85.0,
            AgeBand::Nineties => 95.0,
        }
    }

    /// The label shown on the intake form, e.g. "60-70".
    pub fn label(&self) -> &'static str {
        match self {
            AgeBand::Under10 => "0-10",
            AgeBand::Teens => "10-20",
            AgeBand::Twenties => "20-30",
            AgeBand::Thirties => "30-40",
            AgeBand::Forties => "40-50",
            AgeBand::Fifties => "50-60",
            AgeBand::Sixties => "60-70",
            AgeBand::Seventies => "70-80",
            AgeBand::Eighties => "80-90",
            AgeBand::Nineties => "90-100",
        }
    }

    /// Parses a form label such as "60-70".
    pub fn from_label(label: &str) -> Option<AgeBand> {
        Self::ALL.iter().copied().find(|band| band.label() == label)
    }
}

/// The eight level-1 diagnosis groups of the training data, shared by all
/// three diagnosis slots on the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DiagnosisGroup {
    Circulatory = 1,
    Respiratory = 2,
    Digestive = 3,
    Diabetes = 4,
    Injury = 5,
    Musculoskeletal = 6,
    Genitourinary = 7,
    Neoplasms = 8,
}

impl DiagnosisGroup {
    pub const ALL: [DiagnosisGroup; 8] = [
        DiagnosisGroup::Circulatory,
        DiagnosisGroup::Respiratory,
        DiagnosisGroup::Digestive,
        DiagnosisGroup::Diabetes,
        DiagnosisGroup::Injury,
        DiagnosisGroup::Musculoskeletal,
        DiagnosisGroup::Genitourinary,
        DiagnosisGroup::Neoplasms,
    ];

    /// Numeric group code as used in the schema column names (1.0 .. 8.0).
    pub fn code(&self) -> f32 {
        *self as u8 as f32
    }

    /// Parses the numeric group code offered by the form (1 through 8).
    pub fn from_code(code: u8) -> Option<DiagnosisGroup> {
        Self::ALL.iter().copied().find(|g| *g as u8 == code)
    }

    /// The description shown on the intake form.
    pub fn description(&self) -> &'static str {
        match self {
            DiagnosisGroup::Circulatory => "Circulatory problems (like heart issues)",
            DiagnosisGroup::Respiratory => "Respiratory (lungs)",
            DiagnosisGroup::Digestive => "Digestive (stomach)",
            DiagnosisGroup::Diabetes => "Diabetes",
            DiagnosisGroup::Injury => "Injuries",
            DiagnosisGroup::Musculoskeletal => "Bones/joints",
            DiagnosisGroup::Genitourinary => "Kidney/bladder",
            DiagnosisGroup::Neoplasms => "Cancer/tumors",
        }
    }
}

/// One form submission's raw clinical attributes, as collected and validated
/// by the intake surface. The encoder assumes the record is well-formed;
/// range and enumeration checks live in [`crate::form`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PatientRecord {
    pub time_in_hospital: u8,
    pub num_lab_procedures: u8,
    pub num_procedures: u8,
    pub num_medications: u8,
    pub number_diagnoses: u8,
    pub age_band: AgeBand,
    /// Raw discharge disposition code as it appears on the form (1..28).
    pub discharge_disposition: u8,
    pub diabetes_medication: bool,
    pub diag1: DiagnosisGroup,
    pub diag2: DiagnosisGroup,
    pub diag3: DiagnosisGroup,
}

/// A dense feature row over the fixed 48-column training schema, ready to
/// hand to the classifier. Produced exclusively by [`encode`].
#[derive(Debug, Clone, PartialEq)]
pub struct FeatureVector {
    values: [f32; FEATURE_COUNT],
}

impl FeatureVector {
    fn zeroed() -> Self {
        Self {
            values: [0.0; FEATURE_COUNT],
        }
    }

    /// Sets a column by name. A name outside the training schema is dropped
    /// silently, which is exactly the behavior the model was trained with.
    fn set(&mut self, name: &str, value: f32) {
        if let Some(i) = column_index(name) {
            self.values[i] = value;
        }
    }

    /// Value of a named column, `None` for names outside the schema.
    pub fn get(&self, name: &str) -> Option<f32> {
        column_index(name).map(|i| self.values[i])
    }

    /// The values in schema order.
    pub fn as_slice(&self) -> &[f32] {
        &self.values
    }

    /// Iterates `(column name, value)` pairs in schema order.
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, f32)> + '_ {
        FEATURE_NAMES.iter().zip(self.values.iter()).map(|(&n, &v)| (n, v))
    }

    /// The single-row matrix the inference session consumes.
    pub(crate) fn to_row_matrix(&self) -> Array2<f32> {
        Array2::from_shape_fn((1, FEATURE_COUNT), |(_, j)| self.values[j])
    }
}

/// Encodes a patient record into the classifier's feature row.
///
/// Pure function: the five continuous fields pass through unchanged, each
/// categorical field turns into at most one indicator within its one-hot
/// group, and every other column stays zero. Categories without a schema
/// column (see [`crate::schema::FEATURE_NAMES`]) set no indicator at all,
/// so their whole group stays zero for that submission.
pub fn encode(patient: &PatientRecord) -> FeatureVector {
    let mut features = FeatureVector::zeroed();

    features.set("time_in_hospital", f32::from(patient.time_in_hospital));
    features.set("num_lab_procedures", f32::from(patient.num_lab_procedures));
    features.set("num_procedures", f32::from(patient.num_procedures));
    features.set("num_medications", f32::from(patient.num_medications));
    features.set("number_diagnoses", f32::from(patient.number_diagnoses));

    features.set(&format!("age_{:.1}", patient.age_band.midpoint()), 1.0);
    features.set(
        &format!("discharge_disposition_id_{}", patient.discharge_disposition),
        1.0,
    );
    if patient.diabetes_medication {
        features.set("diabetesMed_Yes", 1.0);
    }
    features.set(&format!("level1_diag1_{:.1}", patient.diag1.code()), 1.0);
    features.set(&format!("level1_diag2_{:.1}", patient.diag2.code()), 1.0);
    features.set(&format!("level1_diag3_{:.1}", patient.diag3.code()), 1.0);

    features
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_patient() -> PatientRecord {
        PatientRecord {
            time_in_hospital: 5,
            num_lab_procedures: 40,
            num_procedures: 1,
            num_medications: 20,
            number_diagnoses: 5,
            age_band: AgeBand::Sixties,
            discharge_disposition: 2,
            diabetes_medication: true,
            diag1: DiagnosisGroup::Diabetes,
            diag2: DiagnosisGroup::Diabetes,
            diag3: DiagnosisGroup::Diabetes,
        }
    }

    #[test]
    fn test_continuous_fields_pass_through() {
        let features = encode(&sample_patient());
        assert_eq!(features.get("time_in_hospital"), Some(5.0));
        assert_eq!(features.get("num_lab_procedures"), Some(40.0));
        assert_eq!(features.get("num_procedures"), Some(1.0));
        assert_eq!(features.get("num_medications"), Some(20.0));
        assert_eq!(features.get("number_diagnoses"), Some(5.0));
    }

    #[test]
    fn test_exactly_one_age_indicator_for_in_schema_bands() {
        for band in AgeBand::ALL.iter().skip(1) {
            let patient = PatientRecord {
                age_band: *band,
                ..sample_patient()
            };
            let features = encode(&patient);
            let set: Vec<_> = features
                .iter()
                .filter(|(name, v)| name.starts_with("age_") && *v == 1.0)
                .collect();
            assert_eq!(set.len(), 1, "band {}", band.label());
            assert_eq!(set[0].0, format!("age_{:.1}", band.midpoint()));
        }
    }

    #[test]
    fn test_under_10_band_sets_no_age_indicator() {
        let patient = PatientRecord {
            age_band: AgeBand::Under10,
            ..sample_patient()
        };
        let features = encode(&patient);
        assert!(features
            .iter()
            .filter(|(name, _)| name.starts_with("age_"))
            .all(|(_, v)| v == 0.0));
    }

    #[test]
    fn test_out_of_schema_discharge_codes_drop_silently() {
        for code in [1, 3, 4, 5, 6, 8, 13, 14, 15, 21, 23, 24] {
            let patient = PatientRecord {
                discharge_disposition: code,
                ..sample_patient()
            };
            let features = encode(&patient);
            assert!(
                features
                    .iter()
                    .filter(|(name, _)| name.starts_with("discharge_disposition_id_"))
                    .all(|(_, v)| v == 0.0),
                "code {} should have no indicator column",
                code
            );
        }
    }

    #[test]
    fn test_medication_flag() {
        let on_meds = encode(&sample_patient());
        assert_eq!(on_meds.get("diabetesMed_Yes"), Some(1.0));

        let off_meds = encode(&PatientRecord {
            diabetes_medication: false,
            ..sample_patient()
        });
        assert_eq!(off_meds.get("diabetesMed_Yes"), Some(0.0));
    }

    #[test]
    fn test_encode_is_idempotent() {
        let patient = sample_patient();
        assert_eq!(encode(&patient), encode(&patient));
    }

    #[test]
    fn test_row_matrix_shape() {
        let row = encode(&sample_patient()).to_row_matrix();
        assert_eq!(row.shape(), &[1, crate::schema::FEATURE_COUNT]);
        assert_eq!(row[[0, 0]], 5.0);
    }

    #[test]
    fn test_age_band_labels_round_trip() {
        for band in AgeBand::ALL {
            assert_eq!(AgeBand::from_label(band.label()), Some(band));
        }
        assert_eq!(AgeBand::from_label("100-110"), None);
    }

    #[test]
    fn test_diagnosis_codes_round_trip() {
        for group in DiagnosisGroup::ALL {
            assert_eq!(DiagnosisGroup::from_code(group as u8), Some(group));
        }
        assert_eq!(DiagnosisGroup::from_code(0), None);
        assert_eq!(DiagnosisGroup::from_code(9), None);
    }
}
