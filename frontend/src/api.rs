use async_trait::async_trait;
use gloo_file::File as GlooFile;
use gloo_net::http::{Request, Response};
use serde::Serialize;
use serde::de::DeserializeOwned;
use shared::backend::decode_response;
use shared::{AudioPlayer, Backend, ChatRequest, ChatResponse, ClientError, PredictionResult, UiConfig};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{FormData, HtmlAudioElement};

fn js_error_message(value: &JsValue) -> String {
    value
        .dyn_ref::<js_sys::Error>()
        .map(|e| String::from(e.message()))
        .or_else(|| value.as_string())
        .unwrap_or_else(|| format!("{:?}", value))
}

async fn read_body<T: DeserializeOwned>(response: Response) -> Result<T, ClientError> {
    let status = response.status();
    let body = response
        .text()
        .await
        .map_err(|e| ClientError::Network(format!("Failed to read response: {}", e)))?;
    decode_response(status, &body)
}

/// Talks to the prediction and chat services over `fetch`.
#[derive(Clone, Debug)]
pub struct HttpBackend {
    predict_endpoint: String,
    chat_endpoint: String,
}

impl HttpBackend {
    pub fn new(config: &UiConfig) -> Self {
        Self {
            predict_endpoint: config.predict_endpoint.clone(),
            chat_endpoint: config.chat_endpoint.clone(),
        }
    }

    async fn post_json<B: Serialize, T: DeserializeOwned>(
        &self,
        url: &str,
        body: &B,
    ) -> Result<T, ClientError> {
        let request = Request::post(url)
            .json(body)
            .map_err(|e| ClientError::Network(format!("Failed to build request: {}", e)))?;
        let response = request
            .send()
            .await
            .map_err(|e| ClientError::Network(e.to_string()))?;
        read_body(response).await
    }
}

#[async_trait(?Send)]
impl Backend for HttpBackend {
    type Upload = GlooFile;

    async fn predict(&self, image: &GlooFile) -> Result<PredictionResult, ClientError> {
        let form_data = FormData::new().map_err(|e| ClientError::Network(js_error_message(&e)))?;
        let blob: &web_sys::Blob = image.as_ref();
        form_data
            .append_with_blob("image", blob)
            .map_err(|e| ClientError::Network(js_error_message(&e)))?;

        let request = Request::post(&self.predict_endpoint)
            .body(form_data)
            .map_err(|e| ClientError::Network(format!("Failed to build request: {}", e)))?;

        log::debug!("Uploading {} ({} bytes) for prediction", image.name(), image.size());
        let response = request
            .send()
            .await
            .map_err(|e| ClientError::Network(e.to_string()))?;
        read_body(response).await
    }

    async fn chat(&self, request: &ChatRequest) -> Result<ChatResponse, ClientError> {
        self.post_json(&self.chat_endpoint, request).await
    }
}

/// Plays reply audio through a detached `<audio>` element.
#[derive(Clone, Debug, Default)]
pub struct WebAudioPlayer;

#[async_trait(?Send)]
impl AudioPlayer for WebAudioPlayer {
    async fn play(&self, source: &str) -> Result<(), ClientError> {
        let audio = HtmlAudioElement::new_with_src(source)
            .map_err(|e| ClientError::Playback(js_error_message(&e)))?;
        let promise = audio.play().map_err(|e| ClientError::Playback(js_error_message(&e)))?;
        JsFuture::from(promise)
            .await
            .map(|_| ())
            .map_err(|e| ClientError::Playback(js_error_message(&e)))
    }
}
