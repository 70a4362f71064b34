use axum::{
    body::Body,
    extract::{Request, State},
    Json,
};
use futures::StreamExt;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use utoipa::ToSchema;

use partyline_llm::{CompletionOptions, CompletionRequest};

use crate::error::{ApiError, ApiResult, ErrorBody};
use crate::persona;
use crate::state::AppState;

#[derive(Debug, Deserialize, ToSchema)]
pub struct BotPrompt {
    /// The user's chat message. Required and non-empty.
    #[serde(default)]
    pub message: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct BotReply {
    pub reply: String,
}

/// Relay a chat message to the completion API under the party persona
#[utoipa::path(
    post,
    path = "/api/getBotResponse",
    request_body = BotPrompt,
    responses(
        (status = 200, description = "Bot reply", body = BotReply),
        (status = 400, description = "Missing or malformed message", body = ErrorBody),
        (status = 405, description = "Non-POST method", body = ErrorBody),
        (status = 500, description = "Transport or upstream failure", body = ErrorBody)
    ),
    tag = "chat"
)]
pub async fn get_bot_response(
    State(state): State<Arc<AppState>>,
    request: Request,
) -> ApiResult<Json<BotReply>> {
    // The transport may deliver the body in fragments; interpret it only once
    // the stream ends.
    let body = collect_body(request.into_body()).await?;

    let prompt: BotPrompt = serde_json::from_slice(&body)
        .map_err(|_| ApiError::BadRequest("malformed JSON body".to_string()))?;

    let message = match prompt.message {
        Some(m) if !m.is_empty() => m,
        _ => {
            return Err(ApiError::BadRequest(
                "Missing \"message\" in request body".to_string(),
            ))
        }
    };

    let llm = &state.config.llm;
    let completion_request =
        CompletionRequest::new(llm.model.clone(), persona::conversation(&message)).with_options(
            CompletionOptions::new()
                .temperature(llm.temperature)
                .max_tokens(llm.max_tokens),
        );

    // Exactly one outbound call, no retries.
    let completion = state
        .llm_client
        .complete(completion_request)
        .await
        .map_err(ApiError::Upstream)?;

    let reply = completion.content.ok_or_else(|| {
        ApiError::Upstream(anyhow::anyhow!("completion response contained no text content"))
    })?;

    Ok(Json(BotReply {
        reply: reply.trim().to_string(),
    }))
}

/// Fallback for every non-POST verb on the route.
pub async fn method_not_allowed() -> ApiError {
    ApiError::MethodNotAllowed
}

/// Accumulate the request body into a scoped buffer, frame by frame. A read
/// error anywhere surfaces as a transport failure for the whole request.
async fn collect_body(body: Body) -> Result<Vec<u8>, ApiError> {
    let mut stream = body.into_data_stream();
    let mut buf = Vec::new();

    while let Some(frame) = stream.next().await {
        let frame = frame.map_err(|e| ApiError::Transport(e.to_string()))?;
        buf.extend_from_slice(&frame);
    }

    Ok(buf)
}
