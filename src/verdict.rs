use serde::{Deserialize, Serialize};
use std::fmt;

/// How urgently the verdict should be surfaced to the operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Urgency {
    /// Flag the patient for follow-up planning.
    Elevated,
    /// No elevated readmission signal.
    Low,
}

/// The classifier's binary readmission verdict for one submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Verdict {
    LikelyReadmission,
    UnlikelyReadmission,
}

impl Verdict {
    /// Maps the classifier's raw class label: any non-zero label means the
    /// patient is flagged as likely to be readmitted.
    pub fn from_label(label: i64) -> Verdict {
        if label != 0 {
            Verdict::LikelyReadmission
        } else {
            Verdict::UnlikelyReadmission
        }
    }

    /// The operator-facing verdict sentence.
    pub fn message(&self) -> &'static str {
        match self {
            Verdict::LikelyReadmission => {
                "The patient is likely to be readmitted within 30 days."
            }
            Verdict::UnlikelyReadmission => {
                "The patient is not likely to be readmitted within 30 days."
            }
        }
    }

    pub fn urgency(&self) -> Urgency {
        match self {
            Verdict::LikelyReadmission => Urgency::Elevated,
            Verdict::UnlikelyReadmission => Urgency::Low,
        }
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}
