use async_trait::async_trait;
use gloo_net::http::Request;
use log::error;

use portfolio_chat::{
    ApiErrorBody, AssistantClient, ChatError, ChatRequest, ChatResponse, ContactRequest,
    ContactResponse,
};

/// Base URL of the portfolio API, overridable at build time.
const API_BASE: &str = match option_env!("PORTFOLIO_API_BASE") {
    Some(url) => url,
    None => "http://localhost:8000",
};

/// Assistant client over the portfolio backend's chat endpoint.
///
/// Gateway statuses keep their meaning from the deployment: 503 means the
/// backend cannot reach the model service, 504 means it accepted the request
/// but gave up waiting. Anything else non-2xx is an explicit rejection when
/// it carries a `detail` body.
pub struct HttpAssistant;

#[async_trait(?Send)]
impl AssistantClient for HttpAssistant {
    async fn send(
        &self,
        utterance: &str,
        session_id: Option<&str>,
    ) -> Result<ChatResponse, ChatError> {
        let body = ChatRequest {
            message: utterance.to_string(),
            session_id: session_id.map(str::to_string),
        };

        let resp = Request::post(&format!("{API_BASE}/api/chat"))
            .json(&body)
            .map_err(|e| ChatError::Unknown(format!("failed to encode request: {e}")))?
            .send()
            .await
            .map_err(|e| {
                error!("chat request failed: {e}");
                ChatError::Unavailable
            })?;

        match resp.status() {
            200..=299 => resp
                .json::<ChatResponse>()
                .await
                .map_err(|e| ChatError::Unknown(format!("unreadable reply: {e}"))),
            503 => Err(ChatError::Unavailable),
            504 => Err(ChatError::Timeout),
            status => match resp.json::<ApiErrorBody>().await {
                Ok(body) => Err(ChatError::rejected(body.detail)),
                Err(_) => Err(ChatError::Unknown(format!("server error: {status}"))),
            },
        }
    }
}

/// Submits the contact form. Single request/response, no retry.
pub async fn send_contact(form: &ContactRequest) -> Result<ContactResponse, String> {
    let resp = Request::post(&format!("{API_BASE}/api/contact"))
        .json(form)
        .map_err(|e| format!("Serialize error: {e}"))?
        .send()
        .await
        .map_err(|e| format!("Network error: {e}"))?;

    if !resp.ok() {
        return Err(format!("Server error: {}", resp.status()));
    }

    resp.json::<ContactResponse>()
        .await
        .map_err(|e| format!("Parse error: {e}"))
}
