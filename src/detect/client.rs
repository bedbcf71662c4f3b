use reqwest::{header::CONTENT_TYPE, Client};

use crate::{config::DetectConfig, domain::Prediction};

use super::{
    error::DetectError,
    inference::{detect_url, encode_image, parse_body},
};

#[derive(Clone)]
pub struct DetectClient {
    http: Client,
    config: DetectConfig,
}

impl DetectClient {
    pub fn new(http: Client, config: DetectConfig) -> Self {
        Self { http, config }
    }

    pub fn is_configured(&self) -> bool {
        self.config.api_key.is_some()
    }

    pub fn max_image_bytes(&self) -> u64 {
        self.config.max_image_bytes
    }

    /// Submits one image to the hosted detection endpoint. Oversized input
    /// fails before any network I/O; zero predictions is a valid outcome.
    pub async fn classify(&self, image: &[u8]) -> Result<Vec<Prediction>, DetectError> {
        let size = image.len() as u64;
        if size > self.config.max_image_bytes {
            return Err(DetectError::TooLarge {
                size,
                limit: self.config.max_image_bytes,
            });
        }

        let api_key = self
            .config
            .api_key
            .as_deref()
            .ok_or(DetectError::NotConfigured)?;

        let url = detect_url(&self.config, api_key).map_err(DetectError::Failed)?;
        let payload = encode_image(image);

        tracing::debug!(
            target: "detect",
            bytes = size,
            model = %self.config.model,
            "submitting image for detection"
        );

        let response = self
            .http
            .post(url)
            .header(CONTENT_TYPE, "application/x-www-form-urlencoded")
            .body(payload)
            .send()
            .await
            .and_then(|resp| resp.error_for_status())
            .map_err(|err| DetectError::Failed(err.into()))?;

        let body = response
            .text()
            .await
            .map_err(|err| DetectError::Failed(err.into()))?;
        let parsed = parse_body(&body).map_err(DetectError::Failed)?;

        tracing::debug!(
            target: "detect",
            predictions = parsed.predictions.len(),
            inference_id = parsed.inference_id.as_deref().unwrap_or("-"),
            "detection complete"
        );
        Ok(parsed.predictions)
    }
}
