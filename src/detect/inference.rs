use anyhow::{Context, Result};
use base64::{engine::general_purpose::STANDARD, Engine as _};
use url::Url;

use crate::{config::DetectConfig, domain::DetectResponse};

// Detection thresholds sent with every request.
pub const CONFIDENCE_THRESHOLD: f32 = 0.3;
pub const OVERLAP_THRESHOLD: f32 = 0.5;

/// Base64 payload for the form-urlencoded request body.
pub fn encode_image(image: &[u8]) -> String {
    STANDARD.encode(image)
}

pub fn detect_url(config: &DetectConfig, api_key: &str) -> Result<Url> {
    let endpoint = format!(
        "{}/{}",
        config.base_url.trim_end_matches('/'),
        config.model
    );
    let confidence = CONFIDENCE_THRESHOLD.to_string();
    let overlap = OVERLAP_THRESHOLD.to_string();
    Url::parse_with_params(
        &endpoint,
        &[
            ("api_key", api_key),
            ("confidence", confidence.as_str()),
            ("overlap", overlap.as_str()),
        ],
    )
    .with_context(|| format!("invalid detection endpoint: {endpoint}"))
}

/// An empty `predictions` array is a valid response, not an error.
pub fn parse_body(body: &str) -> Result<DetectResponse> {
    serde_json::from_str(body).context("malformed detection response")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> DetectConfig {
        DetectConfig {
            api_key: Some("test-key".to_string()),
            model: "waste-segregation-jbite/1".to_string(),
            base_url: "https://detect.roboflow.com".to_string(),
            max_image_bytes: 10 * 1024 * 1024,
        }
    }

    #[test]
    fn detect_url_carries_model_and_thresholds() {
        let url = detect_url(&config(), "test-key").unwrap();
        assert_eq!(url.host_str(), Some("detect.roboflow.com"));
        assert_eq!(url.path(), "/waste-segregation-jbite/1");
        let query = url.query().unwrap();
        assert!(query.contains("api_key=test-key"));
        assert!(query.contains("confidence=0.3"));
        assert!(query.contains("overlap=0.5"));
    }

    #[test]
    fn empty_prediction_list_parses_as_success() {
        let parsed = parse_body(r#"{"predictions": [], "inference_id": "abc"}"#).unwrap();
        assert!(parsed.predictions.is_empty());
        assert_eq!(parsed.inference_id.as_deref(), Some("abc"));
    }

    #[test]
    fn predictions_deserialize_with_boxes() {
        let body = r#"{
            "predictions": [
                {"class": "plastic_bottle", "confidence": 0.87,
                 "x": 120.0, "y": 80.5, "width": 64.0, "height": 130.0}
            ],
            "inference_id": "xyz"
        }"#;
        let parsed = parse_body(body).unwrap();
        assert_eq!(parsed.predictions.len(), 1);
        let p = &parsed.predictions[0];
        assert_eq!(p.class, "plastic_bottle");
        assert!((p.confidence - 0.87).abs() < 1e-6);
        assert!((p.height - 130.0).abs() < 1e-6);
    }

    #[test]
    fn malformed_payload_is_an_error() {
        assert!(parse_body("not json").is_err());
        assert!(parse_body(r#"{"predictions": "nope"}"#).is_err());
    }

    #[test]
    fn encode_image_produces_standard_base64() {
        assert_eq!(encode_image(b"waste"), "d2FzdGU=");
    }
}
