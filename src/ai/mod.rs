pub mod http;
pub mod prompt;
pub mod provider;

pub use provider::{GenerationParams, GroqProvider};
