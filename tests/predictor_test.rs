use readmit::{ModelArtifact, Predictor, PredictorBuilder, PredictorError};
use std::env;
use std::fs;

#[test]
fn test_missing_artifact_fails_at_build() {
    let result = Predictor::builder().with_model_file("/nonexistent/readmit-model.onnx");
    match result {
        Err(PredictorError::ArtifactError(msg)) => {
            assert!(msg.contains("not found"), "unexpected message: {}", msg)
        }
        other => panic!("expected ArtifactError, got {:?}", other.err()),
    }
}

#[test]
fn test_empty_artifact_fails_at_build() {
    let path = env::temp_dir().join(format!("readmit-predictor-{}-empty.onnx", std::process::id()));
    fs::write(&path, b"").unwrap();

    let result = Predictor::builder().with_model_file(&path);
    assert!(matches!(result, Err(PredictorError::ArtifactError(_))));

    fs::remove_file(path).unwrap();
}

#[test]
fn test_build_without_model_fails() {
    let result = PredictorBuilder::new().build();
    assert!(matches!(result, Err(PredictorError::BuildError(_))));
}

#[test]
fn test_garbage_artifact_is_rejected_by_session_load() {
    // Passes the artifact checks (present, non-empty) but is not a valid
    // ONNX graph, so session creation must fail.
    let path = env::temp_dir().join(format!("readmit-predictor-{}-garbage.onnx", std::process::id()));
    fs::write(&path, b"definitely not an onnx protobuf").unwrap();

    // Confirm the artifact layer itself accepts the file
    assert!(ModelArtifact::open(&path).is_ok());

    let result = Predictor::builder().with_model_file(&path);
    assert!(matches!(result, Err(PredictorError::BuildError(_))));

    fs::remove_file(path).unwrap();
}
