pub mod http;
pub mod provider;

pub use http::HttpSpeechClient;
pub use provider::{SpeechService, TtsError};
