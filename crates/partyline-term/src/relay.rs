//! HTTP client for the relay endpoint and the fallback-line policy.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::ui;

/// Shown when the relay answered but the reply was unusable.
pub const TROUBLE_PARTYING: &str = "Hmm, I'm having trouble partying right now.";
/// Shown when the relay could not be reached or its response could not be read.
pub const TROUBLE_CONNECTING: &str = "Sorry, I'm having trouble connecting to the party.";

/// Something that can answer a chat message.
///
/// Infallible on purpose: every failure mode has already been mapped to one of
/// the fixed fallback lines by the time a string comes back.
#[async_trait]
pub trait BotResponder: Send + Sync {
    async fn bot_response(&self, message: &str) -> String;
}

#[derive(Debug, Serialize)]
struct RelayRequest<'a> {
    message: &'a str,
}

#[derive(Debug, Deserialize)]
struct RelayReply {
    #[serde(default)]
    reply: Option<String>,
}

#[derive(Debug, Deserialize)]
struct RelayError {
    #[serde(default)]
    message: Option<String>,
}

pub struct RelayClient {
    client: reqwest::Client,
    endpoint: String,
}

impl RelayClient {
    pub fn new(server_url: &str) -> Self {
        Self {
            client: reqwest::Client::new(),
            endpoint: endpoint_url(server_url),
        }
    }
}

#[async_trait]
impl BotResponder for RelayClient {
    async fn bot_response(&self, message: &str) -> String {
        let response = match self
            .client
            .post(&self.endpoint)
            .json(&RelayRequest { message })
            .send()
            .await
        {
            Ok(response) => response,
            Err(e) => {
                ui::print_error(&format!("could not reach the relay: {e}"));
                return TROUBLE_CONNECTING.to_string();
            }
        };

        let ok = response.status().is_success();
        let body = match response.text().await {
            Ok(body) => body,
            Err(e) => {
                ui::print_error(&format!("could not read the relay response: {e}"));
                return TROUBLE_CONNECTING.to_string();
            }
        };

        if ok {
            success_reply(&body)
        } else {
            error_reply(&body)
        }
    }
}

fn endpoint_url(server_url: &str) -> String {
    format!("{}/api/getBotResponse", server_url.trim_end_matches('/'))
}

/// 2xx path: a missing or empty `reply` field still gets a themed line.
fn success_reply(body: &str) -> String {
    match serde_json::from_str::<RelayReply>(body) {
        Ok(RelayReply { reply: Some(reply) }) if !reply.is_empty() => reply,
        Ok(_) => TROUBLE_PARTYING.to_string(),
        Err(_) => TROUBLE_CONNECTING.to_string(),
    }
}

/// Non-2xx path: a parseable error body is reported to stderr, never into the
/// transcript.
fn error_reply(body: &str) -> String {
    match serde_json::from_str::<RelayError>(body) {
        Ok(err) => {
            ui::print_error(&format!(
                "relay error: {}",
                err.message.as_deref().unwrap_or("unknown")
            ));
            TROUBLE_PARTYING.to_string()
        }
        Err(_) => TROUBLE_CONNECTING.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_url_joins_path() {
        assert_eq!(
            endpoint_url("http://127.0.0.1:3000"),
            "http://127.0.0.1:3000/api/getBotResponse"
        );
    }

    #[test]
    fn test_endpoint_url_strips_trailing_slash() {
        assert_eq!(
            endpoint_url("http://localhost:3000/"),
            "http://localhost:3000/api/getBotResponse"
        );
    }

    #[test]
    fn test_success_reply_present() {
        assert_eq!(success_reply(r#"{"reply":"Let's dance!"}"#), "Let's dance!");
    }

    #[test]
    fn test_success_reply_missing_field_falls_back() {
        assert_eq!(success_reply("{}"), TROUBLE_PARTYING);
    }

    #[test]
    fn test_success_reply_empty_string_falls_back() {
        assert_eq!(success_reply(r#"{"reply":""}"#), TROUBLE_PARTYING);
    }

    #[test]
    fn test_success_reply_unparseable_falls_back_to_connecting() {
        assert_eq!(success_reply("<html>oops</html>"), TROUBLE_CONNECTING);
    }

    #[test]
    fn test_error_reply_with_body() {
        assert_eq!(
            error_reply(r#"{"message":"Internal Server Error","error":"boom"}"#),
            TROUBLE_PARTYING
        );
    }

    #[test]
    fn test_error_reply_unparseable_falls_back_to_connecting() {
        assert_eq!(error_reply("gateway timeout"), TROUBLE_CONNECTING);
    }
}
