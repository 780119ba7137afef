use super::*;

// =============================================================
// Parsing
// =============================================================

#[test]
fn parses_expected_response_body() {
    let body = r#"{"disease": "Late Blight", "confidence": 0.87}"#;
    let prediction: Prediction = serde_json::from_str(body).unwrap();
    assert_eq!(prediction.disease, "Late Blight");
    assert!((prediction.confidence - 0.87).abs() < f64::EPSILON);
}

#[test]
fn missing_fields_fail_to_parse() {
    assert!(serde_json::from_str::<Prediction>(r#"{"disease": "Healthy"}"#).is_err());
    assert!(serde_json::from_str::<Prediction>(r#"{"confidence": 0.5}"#).is_err());
    assert!(serde_json::from_str::<Prediction>("{}").is_err());
}

#[test]
fn non_numeric_confidence_fails_to_parse() {
    let body = r#"{"disease": "Healthy", "confidence": "high"}"#;
    assert!(serde_json::from_str::<Prediction>(body).is_err());
}

// =============================================================
// Well-formedness
// =============================================================

#[test]
fn unit_interval_confidence_is_well_formed() {
    for confidence in [0.0, 0.5, 1.0] {
        let prediction = Prediction {
            disease: "Healthy".to_owned(),
            confidence,
        };
        assert!(prediction.is_well_formed(), "confidence {confidence}");
    }
}

#[test]
fn out_of_range_confidence_is_malformed() {
    for confidence in [-0.01, 1.01, f64::NAN, f64::INFINITY] {
        let prediction = Prediction {
            disease: "Healthy".to_owned(),
            confidence,
        };
        assert!(!prediction.is_well_formed(), "confidence {confidence}");
    }
}
