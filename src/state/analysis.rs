//! Analysis domain state — staged image, findings, and the loading flag.
//!
//! DESIGN
//! ======
//! The home page owns one `AnalysisState` as the single source of truth and
//! drives both the upload surface and the results view from it. Transitions
//! that drop a staged image return its preview URL instead of revoking it
//! here: object-URL release is a browser concern and stays with the caller,
//! which keeps every transition natively testable.

#[cfg(test)]
#[path = "analysis_test.rs"]
mod analysis_test;

use crate::net::types::Prediction;

/// Class label the external model uses for a disease-free leaf.
pub const HEALTHY_LABEL: &str = "Healthy";

const HEALTHY_DESCRIPTION: &str =
    "The leaf appears to be healthy with no visible signs of disease.";
const HEALTHY_TREATMENT: &str =
    "Continue current care practices and monitor regularly for any changes.";
const DISEASE_DESCRIPTION: &str = "Symptoms consistent with a foliar disease were detected \
     on this leaf. Lesions of this kind can spread quickly across the plant under warm, \
     humid conditions.";
const DISEASE_TREATMENT: &str = "Apply an appropriate fungicide promptly, remove infected \
     plant material, and improve air circulation around the plants.";

/// How serious a finding is, driving icon and badge presentation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Severity {
    Low,
    Medium,
    High,
}

/// One disease classification with confidence and advisory text.
#[derive(Clone, Debug, PartialEq)]
pub struct DiseaseFinding {
    /// Class label as returned by the model (e.g. `"Late Blight"`).
    pub name: String,
    /// Confidence as a percentage in `0..=100`. Rounding to a whole number
    /// happens at render time only.
    pub confidence: f64,
    pub severity: Severity,
    pub description: String,
    pub treatment: Option<String>,
}

/// Ranked findings, highest confidence first; the first element is the
/// primary diagnosis.
pub type AnalysisResult = Vec<DiseaseFinding>;

/// Metadata for the image staged for analysis, plus its object-URL preview.
///
/// The raw `web_sys::File` is handed to the prediction request when the
/// image is staged and is not retained here.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SelectedImage {
    pub file_name: String,
    pub mime_type: String,
    /// Browser object URL for the preview `<img>`. Must be revoked when the
    /// image is replaced or removed; transitions return it for that purpose.
    pub preview_url: String,
}

/// Upload / analyze / render state for the home page.
///
/// Invariant: entering `loading` clears any prior result, and every request
/// completion clears `loading`, so a stale result is never shown as current.
#[derive(Clone, Debug, Default)]
pub struct AnalysisState {
    pub selected: Option<SelectedImage>,
    pub result: Option<AnalysisResult>,
    pub loading: bool,
}

impl AnalysisState {
    /// Whether a new submission may start. Submissions are refused while a
    /// request is outstanding, so overlapping responses cannot race.
    #[must_use]
    pub fn can_submit(&self) -> bool {
        !self.loading
    }

    /// Stage a new image and enter the loading state, clearing any previous
    /// result. Returns the superseded preview URL, which the caller must
    /// revoke.
    #[must_use]
    pub fn begin_analysis(&mut self, image: SelectedImage) -> Option<String> {
        let stale = self.selected.replace(image).map(|prev| prev.preview_url);
        self.result = None;
        self.loading = true;
        stale
    }

    /// Record a completed analysis, ordering findings by descending
    /// confidence so the primary diagnosis is first.
    pub fn finish_success(&mut self, mut findings: AnalysisResult) {
        findings.sort_by(|a, b| b.confidence.total_cmp(&a.confidence));
        self.result = Some(findings);
        self.loading = false;
    }

    /// Record a failed analysis: no partial result is ever shown.
    pub fn finish_failure(&mut self) {
        self.result = None;
        self.loading = false;
    }

    /// Clear the staged image and any result. Leaves `loading` untouched.
    /// Returns the stale preview URL, which the caller must revoke.
    #[must_use]
    pub fn remove_image(&mut self) -> Option<String> {
        self.result = None;
        self.selected.take().map(|prev| prev.preview_url)
    }
}

/// Map a wire prediction into the single finding the UI renders.
///
/// `"Healthy"` maps to low severity with the healthy advisory texts; every
/// other label maps to high severity with the generic disease texts. The
/// model's unit-interval confidence becomes a whole-number percentage.
#[must_use]
pub fn finding_from_prediction(prediction: &Prediction) -> DiseaseFinding {
    let healthy = prediction.disease == HEALTHY_LABEL;
    let (description, treatment) = if healthy {
        (HEALTHY_DESCRIPTION, HEALTHY_TREATMENT)
    } else {
        (DISEASE_DESCRIPTION, DISEASE_TREATMENT)
    };
    DiseaseFinding {
        name: prediction.disease.clone(),
        confidence: (prediction.confidence * 100.0).round(),
        severity: if healthy { Severity::Low } else { Severity::High },
        description: description.to_owned(),
        treatment: Some(treatment.to_owned()),
    }
}
