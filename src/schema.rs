use lazy_static::lazy_static;
use std::collections::HashMap;

/// Number of columns in the classifier's training schema.
pub const FEATURE_COUNT: usize = 48;

/// The classifier's feature schema: every column name, in training order.
///
/// The model was trained on exactly these columns and this order, so any
/// change here silently breaks inference. Indicator columns exist only for
/// the categories present in the training data; categories the form offers
/// but the training data never produced (discharge codes 1, 3, 4, 5, 6, 8,
/// 13, 14, 15, 21, 23, 24 and the 0-10 age band) have no column at all.
pub const FEATURE_NAMES: [&str; FEATURE_COUNT] = [
    // Continuous fields, passed through unchanged
    "time_in_hospital",
    "num_lab_procedures",
    "num_procedures",
    "num_medications",
    "number_diagnoses",
    // Age band indicators (decade midpoints)
    "age_15.0",
    "age_25.0",
    "age_35.0",
    "age_45.0",
    "age_55.0",
    "age_65.0",
    "age_75.0",
    "age_85.0",
    "age_95.0",
    // Discharge disposition indicators
    "discharge_disposition_id_2",
    "discharge_disposition_id_7",
    "discharge_disposition_id_10",
    "discharge_disposition_id_11",
    "discharge_disposition_id_18",
    "discharge_disposition_id_19",
    "discharge_disposition_id_20",
    "discharge_disposition_id_27",
    "discharge_disposition_id_28",
    // Medication flag (no "No" column exists)
    "diabetesMed_Yes",
    // Level-1 diagnosis group indicators, three slots
    "level1_diag1_1.0",
    "level1_diag1_2.0",
    "level1_diag1_3.0",
    "level1_diag1_4.0",
    "level1_diag1_5.0",
    "level1_diag1_6.0",
    "level1_diag1_7.0",
    "level1_diag1_8.0",
    "level1_diag2_1.0",
    "level1_diag2_2.0",
    "level1_diag2_3.0",
    "level1_diag2_4.0",
    "level1_diag2_5.0",
    "level1_diag2_6.0",
    "level1_diag2_7.0",
    "level1_diag2_8.0",
    "level1_diag3_1.0",
    "level1_diag3_2.0",
    "level1_diag3_3.0",
    "level1_diag3_4.0",
    "level1_diag3_5.0",
    "level1_diag3_6.0",
    "level1_diag3_7.0",
    "level1_diag3_8.0",
];

lazy_static! {
    static ref COLUMN_INDEX: HashMap<&'static str, usize> = FEATURE_NAMES
        .iter()
        .enumerate()
        .map(|(i, &name)| (name, i))
        .collect();
}

/// Looks up a column's position in the schema, `None` when the name is not
/// part of the training schema.
pub fn column_index(name: &str) -> Option<usize> {
    COLUMN_INDEX.get(name).copied()
}
