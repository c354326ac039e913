use serde::{Deserialize, Serialize};

pub mod backend;
pub mod chat;
pub mod config;
pub mod error;
pub mod notice;
pub mod prediction;
pub mod preview;

pub use backend::{AudioPlayer, Backend};
pub use config::UiConfig;
pub use error::{ClientError, ErrorKind};

/// Body returned by the prediction endpoint.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct PredictionResult {
    pub label: String,
    pub confidence: f64,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ChatRequest {
    pub message: String,
}

/// Body returned by the chat endpoint. Older deployments answer with `reply`;
/// when both fields are present `response` wins.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(try_from = "RawChatResponse")]
pub struct ChatResponse {
    pub response: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub audio: Option<String>,
}

#[derive(Deserialize)]
struct RawChatResponse {
    #[serde(default)]
    response: Option<String>,
    #[serde(default)]
    reply: Option<String>,
    #[serde(default)]
    audio: Option<String>,
}

impl TryFrom<RawChatResponse> for ChatResponse {
    type Error = String;

    fn try_from(raw: RawChatResponse) -> Result<Self, Self::Error> {
        let response = raw
            .response
            .or(raw.reply)
            .ok_or_else(|| "missing field `response`".to_string())?;
        Ok(Self { response, audio: raw.audio })
    }
}

impl ChatResponse {
    pub fn audio_source(&self) -> Option<&str> {
        self.audio.as_deref().filter(|src| !src.is_empty())
    }
}
