use async_trait::async_trait;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum TtsError {
    #[error("synthesis request timed out")]
    Timeout,

    #[error("network error: {0}")]
    Network(String),

    #[error("speech service error: {0}")]
    Service(String),

    #[error("invalid response: {0}")]
    InvalidResponse(String),
}

#[async_trait]
pub trait SpeechService: Send + Sync {
    fn name(&self) -> &str;

    /// Synthesizes `text` with the given voice identifier and returns the
    /// audio bytes as produced by the service.
    async fn synthesize(&self, text: &str, voice: &str) -> Result<Vec<u8>, TtsError>;
}
