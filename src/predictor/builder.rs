use log::{error, info};
use ort::session::Session;
use std::path::Path;

use super::error::PredictorError;
use super::model::Predictor;
use crate::artifact::ModelArtifact;
use crate::runtime::{create_session_builder, RuntimeConfig};
use crate::schema::FEATURE_COUNT;

/// A builder for constructing a Predictor with a fluent interface.
#[derive(Default, Debug)]
pub struct PredictorBuilder {
    model_path: Option<String>,
    fingerprint: Option<String>,
    session: Option<Session>,
    runtime_config: RuntimeConfig,
}

impl PredictorBuilder {
    pub fn new() -> Self {
        Self {
            model_path: None,
            fingerprint: None,
            session: None,
            runtime_config: RuntimeConfig::default(),
        }
    }

    /// Sets the runtime configuration for ONNX model execution.
    ///
    /// Must be called before [`with_model_file`](Self::with_model_file) to
    /// take effect, since the session is created when the model is loaded.
    pub fn with_runtime_config(mut self, config: RuntimeConfig) -> Self {
        self.runtime_config = config;
        self
    }

    /// Loads the trained classifier from an ONNX file.
    ///
    /// # Returns
    /// * `Result<Self, PredictorError>` - The builder instance if successful, or an error if:
    ///   - A model is already set
    ///   - The artifact is missing, empty, or fails checksum verification
    ///   - The session could not be created
    ///   - The model graph does not look like the trained readmission classifier
    pub fn with_model_file<P: AsRef<Path>>(mut self, model_path: P) -> Result<Self, PredictorError> {
        if self.model_path.is_some() {
            return Err(PredictorError::BuildError("Model path already set".to_string()));
        }

        let artifact = ModelArtifact::open(model_path).map_err(|e| {
            error!("Failed to open model artifact: {}", e);
            PredictorError::from(e)
        })?;

        // Create session using the singleton environment
        let session = create_session_builder(&self.runtime_config)?
            .commit_from_file(artifact.path())?;

        Self::validate_model(&session)?;
        info!("Model graph validated successfully");

        self.model_path = Some(artifact.path().to_string_lossy().to_string());
        self.fingerprint = Some(artifact.fingerprint().to_string());
        self.session = Some(session);
        Ok(self)
    }

    /// Checks that the loaded graph has the shape of the trained classifier:
    /// a single feature-row input and at least one output. The input width
    /// is checked against the schema when the graph declares it.
    fn validate_model(session: &Session) -> Result<(), PredictorError> {
        let inputs = &session.inputs;
        if inputs.len() != 1 {
            return Err(PredictorError::ModelError(format!(
                "Model must have exactly 1 input (the feature row), found {}",
                inputs.len()
            )));
        }

        if let ort::value::ValueType::Tensor { dimensions, .. } = &inputs[0].input_type {
            if let Some(&width) = dimensions.last() {
                if width > 0 && width as usize != FEATURE_COUNT {
                    return Err(PredictorError::ModelError(format!(
                        "Model expects {} features per row, schema has {}",
                        width, FEATURE_COUNT
                    )));
                }
            }
        }

        if session.outputs.is_empty() {
            return Err(PredictorError::ModelError(
                "Model must have at least 1 output for the class label".to_string(),
            ));
        }

        Ok(())
    }

    /// Builds and returns the final Predictor instance.
    pub fn build(self) -> Result<Predictor, PredictorError> {
        let model_path = self
            .model_path
            .ok_or_else(|| PredictorError::BuildError("Model path must be set".to_string()))?;
        let fingerprint = self
            .fingerprint
            .ok_or_else(|| PredictorError::BuildError("Model fingerprint not set".to_string()))?;
        let session = self
            .session
            .ok_or_else(|| PredictorError::BuildError("Session not initialized".to_string()))?;

        let input_name = session.inputs[0].name.clone();
        info!("Predictor ready (input tensor: {})", input_name);

        Ok(Predictor::new(model_path, fingerprint, input_name, session))
    }
}
