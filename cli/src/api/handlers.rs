//! Route handlers for the chat API and the index page.

use super::error::ApiError;
use super::state::AppState;
use crate::conversation::{ConversationSummary, ConversationTurn};
use crate::core::error::FaqbotError;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::response::Html;
use axum::Json;
use serde::{Deserialize, Serialize};
use tracing::{debug, error, info};

/// Request body for POST /api/chat.
#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    /// Missing and `null` are both treated as an empty message.
    #[serde(default)]
    pub message: Option<String>,
}

/// Response body for POST /api/chat. `intent_id` is `null` on fallback.
#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct ChatResponse {
    pub response: String,
    pub intent_id: Option<String>,
}

/// Response body for GET /api/quick-action/{intent_id}.
#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct QuickActionResponse {
    pub response: String,
    pub intent_name: String,
}

/// Response body for GET /api/welcome.
#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct WelcomeResponse {
    pub message: String,
}

/// One entry of GET /api/intents.
#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct IntentSummary {
    pub id: String,
    pub name: String,
}

/// GET / - the chat page, re-read from disk on each request.
pub async fn index(State(state): State<AppState>) -> Result<Html<String>, ApiError> {
    match tokio::fs::read_to_string(&state.index_page).await {
        Ok(html) => Ok(Html(html)),
        Err(e) => {
            error!(
                "Failed to read index page {}: {}",
                state.index_page.display(),
                e
            );
            Err(FaqbotError::StaticPage {
                path: state.index_page.display().to_string(),
                reason: e.to_string(),
            }
            .into())
        }
    }
}

/// POST /api/chat - match a message and log the turn.
pub async fn chat(
    State(state): State<AppState>,
    payload: Result<Json<ChatRequest>, JsonRejection>,
) -> Result<Json<ChatResponse>, ApiError> {
    let Json(request) = payload.map_err(|rejection| {
        debug!("Rejected chat body: {}", rejection.body_text());
        ApiError::BadRequest(rejection.body_text())
    })?;

    // Missing, null and whitespace-only messages are all "empty".
    let message = request.message.as_deref().unwrap_or_default().trim();
    if message.is_empty() {
        return Err(ApiError::empty_message());
    }

    let (response, intent_id) = match state.catalog.match_message(message) {
        Some(intent) => (intent.response.clone(), Some(intent.id.clone())),
        None => (state.messages.fallback.clone(), None),
    };
    info!(
        intent_id = intent_id.as_deref().unwrap_or("none"),
        "Chat message matched"
    );

    // Record the turn, matched or not, before replying.
    state.log.append(ConversationTurn::new(
        message,
        response.clone(),
        intent_id.clone(),
    ));

    Ok(Json(ChatResponse {
        response,
        intent_id,
    }))
}

/// GET /api/quick-action/{intent_id} - canned response by id.
pub async fn quick_action(
    State(state): State<AppState>,
    Path(intent_id): Path<String>,
) -> Result<Json<QuickActionResponse>, ApiError> {
    let intent = state
        .catalog
        .find_by_id(&intent_id)
        .ok_or_else(ApiError::intent_not_found)?;

    Ok(Json(QuickActionResponse {
        response: intent.response.clone(),
        intent_name: intent.name.clone(),
    }))
}

/// GET /api/welcome
pub async fn welcome(State(state): State<AppState>) -> Json<WelcomeResponse> {
    Json(WelcomeResponse {
        message: state.messages.welcome.clone(),
    })
}

/// GET /api/intents - ids and names in catalog order, for quick-action buttons.
pub async fn list_intents(State(state): State<AppState>) -> Json<Vec<IntentSummary>> {
    let intents = state
        .catalog
        .intents()
        .iter()
        .map(|intent| IntentSummary {
            id: intent.id.clone(),
            name: intent.name.clone(),
        })
        .collect();
    Json(intents)
}

/// GET /api/analytics
pub async fn analytics(State(state): State<AppState>) -> Json<ConversationSummary> {
    Json(state.log.summary())
}
