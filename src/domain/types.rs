use serde::Deserialize;

/// One detected object as returned by the remote detection service.
/// The shape is taken on trust; confidence is 0..1 and the box is in
/// pixel coordinates of the submitted image.
#[derive(Debug, Clone, Deserialize)]
pub struct Prediction {
    pub class: String,
    pub confidence: f32,
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

#[derive(Debug, Deserialize)]
pub struct DetectResponse {
    #[serde(default)]
    pub predictions: Vec<Prediction>,
    pub inference_id: Option<String>,
}
