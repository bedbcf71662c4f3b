pub mod message;
pub mod types;

pub use message::{Category, ChatMessage};
pub use types::{DetectResponse, Prediction};
