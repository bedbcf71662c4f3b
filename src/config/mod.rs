pub mod env;
mod loader;

pub use env::{AppConfig, ChatConfig, DetectConfig, DirectoryConfig};
pub use loader::load_config;
