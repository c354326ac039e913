//! Transport seams between the UI state and the remote services.
//!
//! The browser build talks to the services through `gloo-net`; tests plug in
//! in-memory fakes. Everything runs on the page's single thread, hence `?Send`.

use async_trait::async_trait;
use serde::de::DeserializeOwned;

use crate::error::ClientError;
use crate::{ChatRequest, ChatResponse, PredictionResult};

#[async_trait(?Send)]
pub trait Backend {
    /// File handle the prediction endpoint receives as multipart field `image`.
    type Upload;

    async fn predict(&self, image: &Self::Upload) -> Result<PredictionResult, ClientError>;

    async fn chat(&self, request: &ChatRequest) -> Result<ChatResponse, ClientError>;
}

#[async_trait(?Send)]
pub trait AudioPlayer {
    async fn play(&self, source: &str) -> Result<(), ClientError>;
}

/// Turns a raw HTTP outcome into a typed body. Anything outside 2xx is a
/// transport failure, an unparseable body is a malformed response.
pub fn decode_response<T: DeserializeOwned>(status: u16, body: &str) -> Result<T, ClientError> {
    if !(200..300).contains(&status) {
        return Err(ClientError::Status { status, body: body.to_string() });
    }
    serde_json::from_str(body).map_err(|e| ClientError::MalformedResponse(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ErrorKind;

    #[test]
    fn decodes_prediction_body() {
        let result: PredictionResult =
            decode_response(200, r#"{"label":"No Tumor","confidence":0.95}"#).unwrap();
        assert_eq!(result.label, "No Tumor");
        assert_eq!(result.confidence, 0.95);
    }

    #[test]
    fn non_success_status_is_transport_failure() {
        let err = decode_response::<PredictionResult>(500, "boom").unwrap_err();
        assert_eq!(err, ClientError::Status { status: 500, body: "boom".into() });
        assert_eq!(err.kind(), ErrorKind::TransportFailure);
    }

    #[test]
    fn missing_field_is_malformed() {
        let err = decode_response::<PredictionResult>(200, r#"{"label":"No Tumor"}"#).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MalformedResponse);

        let err = decode_response::<ChatResponse>(200, "<html>").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MalformedResponse);
    }
}
