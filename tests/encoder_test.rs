use readmit::{encode, AgeBand, DiagnosisGroup, PatientRecord, FEATURE_COUNT, FEATURE_NAMES};

fn scenario_patient() -> PatientRecord {
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
fn test_every_schema_column_is_present_exactly_once() {
    let features = encode(&scenario_patient());
    let names: Vec<_> = features.iter().map(|(name, _)| name).collect();
    assert_eq!(names.len(), FEATURE_COUNT);
    assert_eq!(names, FEATURE_NAMES.to_vec());
}

#[test]
fn test_typical_submission_end_to_end() {
    let features = encode(&scenario_patient());

    assert_eq!(features.get("time_in_hospital"), Some(5.0));
    assert_eq!(features.get("num_lab_procedures"), Some(40.0));
    assert_eq!(features.get("num_procedures"), Some(1.0));
    assert_eq!(features.get("num_medications"), Some(20.0));
    assert_eq!(features.get("number_diagnoses"), Some(5.0));

    assert_eq!(features.get("age_65.0"), Some(1.0));
    assert_eq!(features.get("discharge_disposition_id_2"), Some(1.0));
    assert_eq!(features.get("diabetesMed_Yes"), Some(1.0));
    assert_eq!(features.get("level1_diag1_4.0"), Some(1.0));
    assert_eq!(features.get("level1_diag2_4.0"), Some(1.0));
    assert_eq!(features.get("level1_diag3_4.0"), Some(1.0));

    // Every other indicator stays zero
    let expected_ones = [
        "age_65.0",
        "discharge_disposition_id_2",
        "diabetesMed_Yes",
        "level1_diag1_4.0",
        "level1_diag2_4.0",
        "level1_diag3_4.0",
    ];
    for (name, value) in features.iter().skip(5) {
        if expected_ones.contains(&name) {
            assert_eq!(value, 1.0, "{}", name);
        } else {
            assert_eq!(value, 0.0, "{}", name);
        }
    }
}

#[test]
fn test_discharged_to_home_has_no_disposition_signal() {
    // Code 1 (discharged to home) is on the form but not in the schema, so
    // the whole disposition group encodes to zero.
    let features = encode(&PatientRecord {
        discharge_disposition: 1,
        ..scenario_patient()
    });
    for (name, value) in features.iter() {
        if name.starts_with("discharge_disposition_id_") {
            assert_eq!(value, 0.0, "{}", name);
        }
    }
}

#[test]
fn test_each_diagnosis_slot_encodes_independently() {
    let features = encode(&PatientRecord {
        diag1: DiagnosisGroup::Circulatory,
        diag2: DiagnosisGroup::Respiratory,
        diag3: DiagnosisGroup::Neoplasms,
        ..scenario_patient()
    });
    assert_eq!(features.get("level1_diag1_1.0"), Some(1.0));
    assert_eq!(features.get("level1_diag2_2.0"), Some(1.0));
    assert_eq!(features.get("level1_diag3_8.0"), Some(1.0));
    assert_eq!(features.get("level1_diag1_4.0"), Some(0.0));

    for slot in 1..=3 {
        let set: usize = features
            .iter()
            .filter(|(name, v)| name.starts_with(&format!("level1_diag{}_", slot)) && *v == 1.0)
            .count();
        assert_eq!(set, 1, "slot {}", slot);
    }
}

#[test]
fn test_encode_has_no_hidden_state() {
    let patient = scenario_patient();
    let first = encode(&patient);
    let second = encode(&patient);
    assert_eq!(first.as_slice(), second.as_slice());

    // A different record in between must not affect the next encoding
    let _ = encode(&PatientRecord {
        discharge_disposition: 28,
        ..scenario_patient()
    });
    assert_eq!(encode(&patient).as_slice(), first.as_slice());
}

#[test]
fn test_zero_continuous_inputs_pass_through() {
    let features = encode(&PatientRecord {
        time_in_hospital: 0,
        num_lab_procedures: 0,
        num_procedures: 0,
        num_medications: 0,
        number_diagnoses: 0,
        ..scenario_patient()
    });
    for name in &FEATURE_NAMES[..5] {
        assert_eq!(features.get(name), Some(0.0), "{}", name);
    }
}

#[test]
fn test_patient_record_json_round_trip() {
    let patient = scenario_patient();
    let json = serde_json::to_string(&patient).unwrap();
    let parsed: PatientRecord = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed, patient);
    assert!(json.contains("\"60-70\""));
}
