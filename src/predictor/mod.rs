mod error;
mod model;
pub mod builder;

pub use builder::PredictorBuilder;
pub use error::PredictorError;
pub use model::Predictor;

/// Information about the current state and configuration of a predictor
#[derive(Debug, Clone)]
pub struct PredictorInfo {
    /// Path to the ONNX model file
    pub model_path: String,
    /// Hex SHA-256 digest of the model artifact
    pub fingerprint: String,
    /// Name of the model graph's input tensor
    pub input_name: String,
    /// Width of the feature row the model consumes
    pub feature_count: usize,
}
