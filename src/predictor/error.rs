use crate::artifact::ArtifactError;
use ort::Error as OrtError;
use std::fmt;

/// Represents the different types of errors that can occur around the
/// readmission classifier.
#[derive(Debug)]
pub enum PredictorError {
    /// Error occurred while locating or verifying the model artifact
    ArtifactError(String),
    /// Error occurred while loading or inspecting the ONNX model
    ModelError(String),
    /// Error occurred during the build phase
    BuildError(String),
    /// Error occurred while making predictions
    PredictionError(String),
}

impl fmt::Display for PredictorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ArtifactError(msg) => write!(f, "Artifact error: {}", msg),
            Self::ModelError(msg) => write!(f, "Model error: {}", msg),
            Self::BuildError(msg) => write!(f, "Build error: {}", msg),
            Self::PredictionError(msg) => write!(f, "Prediction error: {}", msg),
        }
    }
}

impl std::error::Error for PredictorError {}

impl From<OrtError> for PredictorError {
    fn from(err: OrtError) -> Self {
        PredictorError::BuildError(err.to_string())
    }
}

impl From<ArtifactError> for PredictorError {
    fn from(err: ArtifactError) -> Self {
        PredictorError::ArtifactError(err.to_string())
    }
}
