//! Wire DTOs for the prediction endpoint.
//!
//! DESIGN
//! ======
//! These types mirror the inference service's JSON response exactly so serde
//! does the shape checking; anything that fails to parse or carries an
//! out-of-range confidence is treated as a malformed response upstream.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// Classification returned by `POST /predict`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Prediction {
    /// Class label, e.g. `"Late Blight"` or `"Healthy"`.
    pub disease: String,
    /// Model confidence in the unit interval.
    pub confidence: f64,
}

impl Prediction {
    /// Whether the confidence is a finite value in `0..=1`. Responses that
    /// parse but fail this are rejected as malformed.
    #[must_use]
    pub fn is_well_formed(&self) -> bool {
        self.confidence.is_finite() && (0.0..=1.0).contains(&self.confidence)
    }
}
