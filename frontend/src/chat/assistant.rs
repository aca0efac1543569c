use gloo_net::http::Request;
use log::info;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::session::{PendingRequest, RequestId};
use crate::config;

#[derive(Debug, Error)]
pub enum AssistantError {
    #[error("assistant is not configured")]
    Unconfigured,
    #[error("request failed: {0}")]
    Transport(String),
    #[error("assistant responded with status {0}")]
    Status(u16),
    #[error("could not decode assistant response: {0}")]
    Decode(String),
    #[error("assistant returned an empty reply")]
    EmptyReply,
}

/// Text in, text out. Any failure is reported the same way to the user.
#[allow(async_fn_in_trait)]
pub trait Assistant {
    async fn send_message(&self, text: &str) -> Result<String, AssistantError>;
}

/// Sends one accepted chat request and pairs the outcome with its id.
pub async fn dispatch<A: Assistant>(
    assistant: &A,
    request: PendingRequest,
) -> (RequestId, Result<String, AssistantError>) {
    let outcome = assistant.send_message(&request.text).await;
    (request.id, outcome)
}

#[derive(Serialize)]
struct Part<'a> {
    text: &'a str,
}

#[derive(Serialize)]
struct Content<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    role: Option<&'a str>,
    parts: Vec<Part<'a>>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentRequest<'a> {
    system_instruction: Content<'a>,
    contents: Vec<Content<'a>>,
}

impl<'a> GenerateContentRequest<'a> {
    fn new(system_instruction: &'a str, message: &'a str) -> Self {
        Self {
            system_instruction: Content {
                role: None,
                parts: vec![Part { text: system_instruction }],
            },
            contents: vec![Content {
                role: Some("user"),
                parts: vec![Part { text: message }],
            }],
        }
    }
}

#[derive(Deserialize, Debug)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Deserialize, Debug)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Deserialize, Debug)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<ReplyPart>,
}

#[derive(Deserialize, Debug)]
struct ReplyPart {
    #[serde(default)]
    text: String,
}

impl GenerateContentResponse {
    fn reply(&self) -> Option<String> {
        let content = self.candidates.first()?.content.as_ref()?;
        let text: String = content.parts.iter().map(|p| p.text.as_str()).collect();
        let text = text.trim();
        (!text.is_empty()).then(|| text.to_string())
    }
}

/// Gemini `generateContent` client primed with the clinic's instructions.
#[derive(Clone, Debug, PartialEq)]
pub struct GeminiAssistant {
    api_key: Option<String>,
    model: String,
    base_url: String,
}

impl GeminiAssistant {
    pub fn new(api_key: Option<String>, model: &str, base_url: &str) -> Self {
        Self {
            api_key,
            model: model.to_string(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn from_config() -> Self {
        let assistant = Self::new(
            config::get_assistant_api_key().map(str::to_string),
            config::get_assistant_model(),
            config::get_assistant_base_url(),
        );
        if !assistant.is_configured() {
            info!("No assistant API key configured, chat replies will use the fallback message");
        }
        assistant
    }

    pub fn is_configured(&self) -> bool {
        self.api_key.is_some()
    }

    fn endpoint(&self, api_key: &str) -> String {
        format!(
            "{}/models/{}:generateContent?key={}",
            self.base_url,
            self.model,
            urlencoding::encode(api_key)
        )
    }
}

impl Assistant for GeminiAssistant {
    async fn send_message(&self, text: &str) -> Result<String, AssistantError> {
        let Some(api_key) = self.api_key.as_deref() else {
            return Err(AssistantError::Unconfigured);
        };

        let body = GenerateContentRequest::new(config::ASSISTANT_SYSTEM_INSTRUCTION, text);
        let response = Request::post(&self.endpoint(api_key))
            .header("Content-Type", "application/json")
            .json(&body)
            .map_err(|e| AssistantError::Transport(e.to_string()))?
            .send()
            .await
            .map_err(|e| AssistantError::Transport(e.to_string()))?;

        if !response.ok() {
            return Err(AssistantError::Status(response.status()));
        }

        let payload: GenerateContentResponse = response
            .json()
            .await
            .map_err(|e| AssistantError::Decode(e.to_string()))?;
        payload.reply().ok_or(AssistantError::EmptyReply)
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use futures::executor::block_on;
    use serde_json::json;

    use super::*;
    use crate::chat::session::{ChatSession, ChatState, FALLBACK_MESSAGE};

    struct ScriptedAssistant {
        reply: Option<&'static str>,
        calls: Cell<usize>,
    }

    impl Assistant for ScriptedAssistant {
        async fn send_message(&self, _text: &str) -> Result<String, AssistantError> {
            self.calls.set(self.calls.get() + 1);
            self.reply
                .map(str::to_string)
                .ok_or_else(|| AssistantError::Transport("connection reset".to_string()))
        }
    }

    #[test]
    fn request_body_matches_generate_content_shape() {
        let body = GenerateContentRequest::new("be brief", "Do you accept insurance?");
        assert_eq!(
            serde_json::to_value(&body).unwrap(),
            json!({
                "systemInstruction": { "parts": [{ "text": "be brief" }] },
                "contents": [{ "role": "user", "parts": [{ "text": "Do you accept insurance?" }] }]
            })
        );
    }

    #[test]
    fn reply_joins_parts_of_first_candidate() {
        let payload: GenerateContentResponse = serde_json::from_value(json!({
            "candidates": [
                { "content": { "parts": [{ "text": "Yes, " }, { "text": "we do. " }] } },
                { "content": { "parts": [{ "text": "ignored" }] } }
            ]
        }))
        .unwrap();
        assert_eq!(payload.reply().as_deref(), Some("Yes, we do."));

        let blocked: GenerateContentResponse =
            serde_json::from_value(json!({ "promptFeedback": { "blockReason": "SAFETY" } })).unwrap();
        assert_eq!(blocked.reply(), None);
    }

    #[test]
    fn endpoint_escapes_the_key() {
        let assistant = GeminiAssistant::new(Some("a b".to_string()), "gemini-2.5-flash", "https://host/v1beta/");
        assert_eq!(
            assistant.endpoint("a b"),
            "https://host/v1beta/models/gemini-2.5-flash:generateContent?key=a%20b"
        );
    }

    #[test]
    fn unconfigured_assistant_fails_without_a_request() {
        let assistant = GeminiAssistant::new(None, "gemini-2.5-flash", "https://host");
        assert!(!assistant.is_configured());
        let outcome = block_on(assistant.send_message("hello"));
        assert!(matches!(outcome, Err(AssistantError::Unconfigured)));
    }

    #[test]
    fn dispatch_feeds_the_session_once_per_submit() {
        let assistant = ScriptedAssistant {
            reply: Some("We open at 9."),
            calls: Cell::new(0),
        };
        let mut session = ChatSession::new();
        session.toggle_open();

        let request = session.submit("When do you open?").unwrap();
        assert!(session.submit("Hello?").is_none());
        let (id, outcome) = block_on(dispatch(&assistant, request));
        session.complete(id, outcome);

        assert_eq!(assistant.calls.get(), 1);
        assert_eq!(session.transcript().len(), 3);
        assert_eq!(session.transcript()[2].text, "We open at 9.");
        assert_eq!(session.state(), ChatState::OpenIdle);
    }

    #[test]
    fn transport_failure_becomes_fallback() {
        let assistant = ScriptedAssistant {
            reply: None,
            calls: Cell::new(0),
        };
        let mut session = ChatSession::new();
        session.toggle_open();

        let request = session.submit("Are you open Sunday?").unwrap();
        let (id, outcome) = block_on(dispatch(&assistant, request));
        session.complete(id, outcome);

        assert_eq!(session.transcript().last().unwrap().text, FALLBACK_MESSAGE);
        assert_eq!(session.state(), ChatState::OpenError);
    }
}
