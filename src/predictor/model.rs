use std::collections::HashMap;
use std::sync::Arc;

use ort::session::Session;
use ort::value::Tensor;

use super::error::PredictorError;
use crate::encoder::FeatureVector;
use crate::schema::FEATURE_COUNT;
use crate::verdict::Verdict;

/// A thread-safe handle to the trained readmission classifier.
///
/// The classifier is loaded once at startup from an immutable artifact and
/// never mutated afterwards; every prediction is a single synchronous run
/// of the session. The handle is `Send + Sync`, so independent operator
/// sessions can share it behind `Arc` without locking.
///
/// ```no_run
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// use readmit::{encode, AgeBand, DiagnosisGroup, PatientRecord, Predictor};
///
/// let predictor = Predictor::builder()
///     .with_model_file("model.onnx")?
///     .build()?;
///
/// let patient = PatientRecord {
///     time_in_hospital: 5,
///     num_lab_procedures: 40,
///     num_procedures: 1,
///     num_medications: 20,
///     number_diagnoses: 5,
///     age_band: AgeBand::Sixties,
///     discharge_disposition: 2,
///     diabetes_medication: true,
///     diag1: DiagnosisGroup::Diabetes,
///     diag2: DiagnosisGroup::Diabetes,
///     diag3: DiagnosisGroup::Diabetes,
/// };
/// let verdict = predictor.predict(&encode(&patient))?;
/// println!("{}", verdict);
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct Predictor {
    pub model_path: String,
    pub fingerprint: String,
    input_name: String,
    session: Arc<Session>,
}

// Compile-time verification of thread-safety
const _: () = {
    fn assert_send_sync<T: Send + Sync>() {}
    fn verify_thread_safety() {
        assert_send_sync::<Predictor>();
    }
};

impl Predictor {
    /// Creates a new PredictorBuilder for fluent construction
    pub fn builder() -> super::builder::PredictorBuilder {
        super::builder::PredictorBuilder::new()
    }

    pub(crate) fn new(
        model_path: String,
        fingerprint: String,
        input_name: String,
        session: Session,
    ) -> Self {
        Self {
            model_path,
            fingerprint,
            input_name,
            session: Arc::new(session),
        }
    }

    /// Returns information about the predictor's current state
    pub fn info(&self) -> super::PredictorInfo {
        super::PredictorInfo {
            model_path: self.model_path.clone(),
            fingerprint: self.fingerprint.clone(),
            input_name: self.input_name.clone(),
            feature_count: FEATURE_COUNT,
        }
    }

    /// Classifies one encoded feature row.
    ///
    /// Deterministic and side-effect free: the same feature vector always
    /// yields the same verdict. There is no retry path; a failed run is a
    /// hard stop for that submission.
    pub fn predict(&self, features: &FeatureVector) -> Result<Verdict, PredictorError> {
        let row = features.to_row_matrix().into_dyn();
        let row = row.as_standard_layout();
        let tensor = Tensor::from_array(&row)
            .map_err(|e| PredictorError::PredictionError(format!("Failed to create input tensor: {}", e)))?;

        let mut input_tensors = HashMap::new();
        input_tensors.insert(self.input_name.as_str(), tensor);

        let outputs = self
            .session
            .run(input_tensors)
            .map_err(|e| PredictorError::PredictionError(format!("Failed to run model: {}", e)))?;

        // Converted tree classifiers emit an int64 label tensor as the first
        // output. Some exports emit a float score instead; threshold at 0.5.
        if let Ok(labels) = outputs[0].try_extract_tensor::<i64>() {
            let label = labels.iter().next().copied().ok_or_else(|| {
                PredictorError::PredictionError("Model returned an empty label tensor".to_string())
            })?;
            return Ok(Verdict::from_label(label));
        }

        let scores = outputs[0]
            .try_extract_tensor::<f32>()
            .map_err(|e| PredictorError::PredictionError(format!("Failed to extract output tensor: {}", e)))?;
        let score = scores.iter().next().copied().ok_or_else(|| {
            PredictorError::PredictionError("Model returned an empty output tensor".to_string())
        })?;

        Ok(Verdict::from_label(i64::from(score >= 0.5)))
    }
}
