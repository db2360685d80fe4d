//! Hospital 30-day readmission risk prediction.
//!
//! A patient's clinical attributes are one-hot encoded into the fixed
//! feature row the classifier was trained on, and a pre-trained binary
//! classifier (an ONNX artifact, loaded once at startup) turns that row
//! into a readmission verdict.
//!
//! # Basic Usage
//!
//! ```no_run
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! use readmit::{encode, AgeBand, DiagnosisGroup, PatientRecord, Predictor};
//!
//! let predictor = Predictor::builder()
//!     .with_model_file("model.onnx")?
//!     .build()?;
//!
//! let patient = PatientRecord {
//!     time_in_hospital: 5,
//!     num_lab_procedures: 40,
//!     num_procedures: 1,
//!     num_medications: 20,
//!     number_diagnoses: 5,
//!     age_band: AgeBand::Sixties,
//!     discharge_disposition: 2,
//!     diabetes_medication: true,
//!     diag1: DiagnosisGroup::Diabetes,
//!     diag2: DiagnosisGroup::Diabetes,
//!     diag3: DiagnosisGroup::Diabetes,
//! };
//!
//! let verdict = predictor.predict(&encode(&patient))?;
//! println!("{}", verdict);
//! # Ok(())
//! # }
//! ```
//!
//! # Thread Safety
//!
//! The predictor is immutable after construction and `Send + Sync`;
//! independent operator sessions can share it through `Arc` without
//! locking. Each submission is one synchronous encode-then-predict call.

pub mod artifact;
pub mod encoder;
pub mod form;
pub mod predictor;
mod runtime;
pub mod schema;
pub mod verdict;

pub use artifact::{default_model_path, ArtifactError, ModelArtifact};
pub use encoder::{encode, AgeBand, DiagnosisGroup, FeatureVector, PatientRecord};
pub use form::{disposition_label, validate, FormError, DISCHARGE_DISPOSITIONS};
pub use predictor::{Predictor, PredictorBuilder, PredictorError, PredictorInfo};
pub use runtime::{create_session_builder, OptLevel, RuntimeConfig};
pub use schema::{column_index, FEATURE_COUNT, FEATURE_NAMES};
pub use verdict::{Urgency, Verdict};

pub fn init_logger() {
    env_logger::init();
}
