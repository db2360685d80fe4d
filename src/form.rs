//! The operator intake surface: the option lists shown on the form and the
//! range/enumeration checks applied before a record ever reaches the
//! encoder. The encoder itself trusts its input, so everything invalid must
//! be rejected here.

use thiserror::Error;

use crate::encoder::PatientRecord;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum FormError {
    #[error("{field} must be between {min} and {max}, got {value}")]
    OutOfRange {
        field: &'static str,
        min: u8,
        max: u8,
        value: u8,
    },
    #[error("Unknown discharge disposition code: {0}")]
    UnknownDisposition(u8),
    #[error("Unknown age range: {0}")]
    UnknownAgeRange(String),
    #[error("Unknown diagnosis group code: {0}")]
    UnknownDiagnosis(u8),
}

/// Every discharge disposition the form offers, code and label.
///
/// This is the form's option list, not the schema's indicator set: several
/// of these codes have no column in the training schema and encode to an
/// all-zero disposition group. The mismatch is inherited from the training
/// pipeline and deliberately not corrected here.
pub const DISCHARGE_DISPOSITIONS: [(u8, &str); 19] = [
    (1, "Discharged to home"),
    (2, "To another short term hospital"),
    (3, "To SNF (Skilled Nursing Facility)"),
    (4, "To ICF (Intermediate Care Facility)"),
    (5, "To another inpatient care"),
    (6, "Home with health service"),
    (7, "Left AMA"),
    (8, "Home under IV care"),
    (10, "To short term general hospital"),
    (13, "To psychiatric hospital"),
    (14, "To rehab facility"),
    (15, "Long-term care hospital"),
    (18, "Hospice (home)"),
    (19, "Hospice (medical)"),
    (21, "Still patient / outpatient return"),
    (23, "Long term acute care hospital"),
    (24, "Nursing facility"),
    (27, "Federal facility"),
    (28, "Cancer/Children hospital"),
];

/// The form label for a discharge code, `None` when the form does not offer
/// the code.
pub fn disposition_label(code: u8) -> Option<&'static str> {
    DISCHARGE_DISPOSITIONS
        .iter()
        .find(|(c, _)| *c == code)
        .map(|(_, label)| *label)
}

fn check_range(field: &'static str, value: u8, min: u8, max: u8) -> Result<(), FormError> {
    if value < min || value > max {
        return Err(FormError::OutOfRange {
            field,
            min,
            max,
            value,
        });
    }
    Ok(())
}

/// Validates a patient record against the form's ranges and option lists.
pub fn validate(record: &PatientRecord) -> Result<(), FormError> {
    check_range("time_in_hospital", record.time_in_hospital, 0, 30)?;
    check_range("num_lab_procedures", record.num_lab_procedures, 0, 150)?;
    check_range("num_procedures", record.num_procedures, 0, 10)?;
    check_range("num_medications", record.num_medications, 0, 100)?;
    check_range("number_diagnoses", record.number_diagnoses, 0, 20)?;

    if disposition_label(record.discharge_disposition).is_none() {
        return Err(FormError::UnknownDisposition(record.discharge_disposition));
    }

    Ok(())
}
