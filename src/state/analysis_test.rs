use super::*;

// =============================================================
// Helpers
// =============================================================

fn staged(name: &str, url: &str) -> SelectedImage {
    SelectedImage {
        file_name: name.to_owned(),
        mime_type: "image/jpeg".to_owned(),
        preview_url: url.to_owned(),
    }
}

fn finding(name: &str, confidence: f64) -> DiseaseFinding {
    DiseaseFinding {
        name: name.to_owned(),
        confidence,
        severity: Severity::High,
        description: "desc".to_owned(),
        treatment: None,
    }
}

fn prediction(disease: &str, confidence: f64) -> Prediction {
    Prediction {
        disease: disease.to_owned(),
        confidence,
    }
}

// =============================================================
// Default state
// =============================================================

#[test]
fn default_state_is_idle_and_empty() {
    let state = AnalysisState::default();
    assert!(state.selected.is_none());
    assert!(state.result.is_none());
    assert!(!state.loading);
    assert!(state.can_submit());
}

// =============================================================
// begin_analysis
// =============================================================

#[test]
fn begin_analysis_stages_image_and_enters_loading() {
    let mut state = AnalysisState::default();
    let stale = state.begin_analysis(staged("leaf.jpg", "blob:a"));
    assert_eq!(stale, None);
    assert_eq!(state.selected.as_ref().unwrap().file_name, "leaf.jpg");
    assert!(state.result.is_none());
    assert!(state.loading);
    assert!(!state.can_submit());
}

#[test]
fn begin_analysis_clears_prior_result() {
    let mut state = AnalysisState::default();
    state.finish_success(vec![finding("Late Blight", 87.0)]);
    let _ = state.begin_analysis(staged("leaf.jpg", "blob:a"));
    assert!(state.result.is_none());
    assert!(state.loading);
}

#[test]
fn begin_analysis_returns_superseded_preview_url() {
    let mut state = AnalysisState::default();
    let _ = state.begin_analysis(staged("first.jpg", "blob:a"));
    state.finish_failure();

    let stale = state.begin_analysis(staged("second.jpg", "blob:b"));
    assert_eq!(stale.as_deref(), Some("blob:a"));
    assert_eq!(state.selected.as_ref().unwrap().preview_url, "blob:b");
}

// =============================================================
// finish_success / finish_failure
// =============================================================

#[test]
fn finish_success_clears_loading_and_sets_result() {
    let mut state = AnalysisState::default();
    let _ = state.begin_analysis(staged("leaf.jpg", "blob:a"));
    state.finish_success(vec![finding("Late Blight", 87.0)]);
    assert!(!state.loading);
    assert_eq!(state.result.as_ref().unwrap().len(), 1);
    assert!(state.can_submit());
}

#[test]
fn finish_success_orders_findings_by_descending_confidence() {
    let mut state = AnalysisState::default();
    state.finish_success(vec![
        finding("Healthy", 12.0),
        finding("Late Blight", 87.0),
        finding("Early Blight", 23.0),
    ]);
    let names: Vec<&str> = state
        .result
        .as_ref()
        .unwrap()
        .iter()
        .map(|f| f.name.as_str())
        .collect();
    assert_eq!(names, vec!["Late Blight", "Early Blight", "Healthy"]);
}

#[test]
fn finish_failure_clears_loading_and_result() {
    let mut state = AnalysisState::default();
    let _ = state.begin_analysis(staged("leaf.jpg", "blob:a"));
    state.finish_failure();
    assert!(!state.loading);
    assert!(state.result.is_none());
    // The staged image is kept so the user can retry from the preview.
    assert!(state.selected.is_some());
}

// =============================================================
// remove_image
// =============================================================

#[test]
fn remove_image_clears_selection_and_result() {
    let mut state = AnalysisState::default();
    let _ = state.begin_analysis(staged("leaf.jpg", "blob:a"));
    state.finish_success(vec![finding("Late Blight", 87.0)]);

    let stale = state.remove_image();
    assert_eq!(stale.as_deref(), Some("blob:a"));
    assert!(state.selected.is_none());
    assert!(state.result.is_none());
}

#[test]
fn remove_image_does_not_touch_loading() {
    let mut state = AnalysisState::default();
    let _ = state.begin_analysis(staged("leaf.jpg", "blob:a"));
    let _ = state.remove_image();
    assert!(state.loading);
}

#[test]
fn remove_image_without_selection_is_noop() {
    let mut state = AnalysisState::default();
    assert_eq!(state.remove_image(), None);
    assert!(state.result.is_none());
}

// =============================================================
// finding_from_prediction
// =============================================================

#[test]
fn disease_prediction_maps_to_high_severity() {
    let found = finding_from_prediction(&prediction("Late Blight", 0.87));
    assert_eq!(found.name, "Late Blight");
    assert!((found.confidence - 87.0).abs() < f64::EPSILON);
    assert_eq!(found.severity, Severity::High);
    assert!(found.treatment.is_some());
}

#[test]
fn healthy_prediction_maps_to_low_severity_with_healthy_texts() {
    let found = finding_from_prediction(&prediction("Healthy", 0.95));
    assert_eq!(found.severity, Severity::Low);
    assert!((found.confidence - 95.0).abs() < f64::EPSILON);
    assert_eq!(found.description, HEALTHY_DESCRIPTION);
    assert_eq!(found.treatment.as_deref(), Some(HEALTHY_TREATMENT));
}

#[test]
fn any_non_healthy_label_gets_the_same_generic_texts() {
    let a = finding_from_prediction(&prediction("Late Blight", 0.5));
    let b = finding_from_prediction(&prediction("Early Blight", 0.5));
    assert_eq!(a.description, b.description);
    assert_eq!(a.treatment, b.treatment);
    assert_ne!(a.description, HEALTHY_DESCRIPTION);
}

#[test]
fn confidence_rounds_half_up_at_the_boundary() {
    let found = finding_from_prediction(&prediction("Late Blight", 0.865));
    assert!((found.confidence - 87.0).abs() < f64::EPSILON);
}

#[test]
fn confidence_rounds_down_below_the_midpoint() {
    let found = finding_from_prediction(&prediction("Late Blight", 0.8649));
    assert!((found.confidence - 86.0).abs() < f64::EPSILON);
}
