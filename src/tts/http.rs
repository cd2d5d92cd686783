use async_trait::async_trait;
use reqwest::Client;
use serde::Serialize;
use std::time::Duration;

use crate::config::SpeechConfig;

use super::provider::{SpeechService, TtsError};

#[derive(Debug, Serialize)]
struct SynthesizeRequest<'a> {
    text: &'a str,
    voice: &'a str,
}

/// Client for an HTTP speech endpoint: POST /api/speech/synthesize with
/// `{"text", "voice"}`, response body is the audio bytes.
pub struct HttpSpeechClient {
    client: Client,
    endpoint: String,
}

impl HttpSpeechClient {
    pub fn new(config: &SpeechConfig) -> Result<Self, TtsError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .build()
            .map_err(|e| TtsError::Network(e.to_string()))?;

        Ok(Self {
            client,
            endpoint: config.endpoint.trim_end_matches('/').to_string(),
        })
    }

    fn synthesize_url(&self) -> String {
        format!("{}/api/speech/synthesize", self.endpoint)
    }
}

#[async_trait]
impl SpeechService for HttpSpeechClient {
    fn name(&self) -> &str {
        "http"
    }

    async fn synthesize(&self, text: &str, voice: &str) -> Result<Vec<u8>, TtsError> {
        let request = SynthesizeRequest { text, voice };

        tracing::debug!(
            url = %self.synthesize_url(),
            text_len = text.len(),
            voice = %voice,
            "sending synthesis request"
        );

        let response = self
            .client
            .post(self.synthesize_url())
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    TtsError::Timeout
                } else if e.is_connect() {
                    TtsError::Network(format!("cannot connect to speech service: {e}"))
                } else {
                    TtsError::Network(e.to_string())
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(TtsError::Service(format!("HTTP {status}: {body}")));
        }

        let audio = response
            .bytes()
            .await
            .map_err(|e| TtsError::InvalidResponse(format!("failed to read audio: {e}")))?
            .to_vec();

        if audio.is_empty() {
            return Err(TtsError::InvalidResponse("empty audio body".to_string()));
        }

        Ok(audio)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoint_is_normalized() {
        let config = SpeechConfig {
            endpoint: "http://example.com:9000/".to_string(),
            timeout_seconds: 30,
        };
        let client = HttpSpeechClient::new(&config).unwrap();
        assert_eq!(
            client.synthesize_url(),
            "http://example.com:9000/api/speech/synthesize"
        );
    }
}
