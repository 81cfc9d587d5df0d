use serde::{Deserialize, Serialize};

use crate::error::{EvalError, Result};

/// Weight given to the decision-maker's own welfare; everyone else gets
/// `1 - scale`. Always within `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(into = "f64", try_from = "f64")]
pub struct SelfInterestScale(f64);

impl SelfInterestScale {
    /// Only the decision-maker counts.
    pub const EGOISTIC: Self = Self(1.0);
    /// Only the other parties count.
    pub const ALTRUISTIC: Self = Self(0.0);

    pub fn new(scale: f64) -> Result<Self> {
        if (0.0..=1.0).contains(&scale) {
            Ok(Self(scale))
        } else {
            Err(EvalError::ScaleOutOfRange(scale))
        }
    }

    pub fn value(self) -> f64 {
        self.0
    }

    pub fn decision_maker_weight(self) -> f64 {
        self.0
    }

    pub fn others_weight(self) -> f64 {
        1.0 - self.0
    }
}

impl From<SelfInterestScale> for f64 {
    fn from(scale: SelfInterestScale) -> Self {
        scale.0
    }
}

impl TryFrom<f64> for SelfInterestScale {
    type Error = EvalError;

    fn try_from(scale: f64) -> Result<Self> {
        Self::new(scale)
    }
}
