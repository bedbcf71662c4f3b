pub mod client;
mod error;
mod inference;

pub use client::DetectClient;
pub use error::DetectError;
