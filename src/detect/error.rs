use thiserror::Error;

/// Failure modes of the image identification flow. Everything that goes
/// wrong past the local size check collapses into `Failed`; the cause is
/// kept for logging but never distinguished to the user.
#[derive(Debug, Error)]
pub enum DetectError {
    #[error("image is {size} bytes, over the {limit} byte limit")]
    TooLarge { size: u64, limit: u64 },
    #[error("detection API key is not configured")]
    NotConfigured,
    #[error("detection request failed")]
    Failed(#[source] anyhow::Error),
}

impl DetectError {
    /// Single user-facing line for each failure class.
    pub fn user_notice(&self) -> String {
        match self {
            DetectError::TooLarge { limit, .. } => format!(
                "File too large. Please select an image smaller than {}MB.",
                limit / (1024 * 1024)
            ),
            DetectError::NotConfigured => {
                "Image identification is not configured. Set ROBOFLOW_API_KEY and restart."
                    .to_string()
            }
            DetectError::Failed(_) => {
                "Analysis failed. Please try again with a different image.".to_string()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_failure_cause_shares_one_generic_notice() {
        let timeout = DetectError::Failed(anyhow::anyhow!("connection timed out"));
        let decode = DetectError::Failed(anyhow::anyhow!("invalid JSON at byte 12"));
        assert_eq!(timeout.user_notice(), decode.user_notice());
        assert_eq!(
            timeout.user_notice(),
            "Analysis failed. Please try again with a different image."
        );
    }

    #[test]
    fn oversize_notice_reports_the_limit_in_megabytes() {
        let err = DetectError::TooLarge {
            size: 11 * 1024 * 1024,
            limit: 10 * 1024 * 1024,
        };
        assert!(err.user_notice().contains("10MB"));
    }
}
