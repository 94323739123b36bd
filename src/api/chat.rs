//! Chat endpoints
//!
//! The chat widget overlay is independent of the active view. The
//! submit handler runs the whole turn: admission check and user-turn
//! append under the session lock, the gateway call outside it, and
//! the completion append back under the lock. The pending flag set in
//! the first step is what makes a concurrent second submission a
//! no-op.

use axum::extract::State;
use axum::response::Json;
use axum::routing::{get, post};
use axum::Router;
use serde::Deserialize;

use crate::api::dto::ChatState;
use crate::session::Submission;
use crate::AppState;

pub fn chat_router() -> Router<AppState> {
    Router::new()
        .route("/chat", get(chat_state))
        .route("/chat/messages", post(submit_message))
        .route("/chat/open", post(open_widget))
        .route("/chat/close", post(close_widget))
}

#[derive(Debug, Deserialize)]
struct SubmitRequest {
    text: String,
}

/// GET /api/chat
async fn chat_state(State(state): State<AppState>) -> Json<ChatState> {
    let chat = state.chat.lock().await;
    Json(ChatState::from_session(&chat))
}

/// POST /api/chat/messages
///
/// Submits a visitor message. Blank input or a pending request leaves
/// the transcript untouched; gateway failures become the fixed
/// connectivity reply. Either way the response is the session state
/// after the turn settled, so this handler never errors.
async fn submit_message(
    State(state): State<AppState>,
    Json(request): Json<SubmitRequest>,
) -> Json<ChatState> {
    let submission = {
        let mut chat = state.chat.lock().await;
        chat.begin_submission(&request.text)
    };

    if let Submission::Accepted {
        message,
        prior_transcript,
    } = submission
    {
        // The lock is released during the call; the pending flag keeps
        // other submissions out.
        let result = state.gateway.respond(&message, &prior_transcript).await;

        let mut chat = state.chat.lock().await;
        match result {
            Ok(reply) => chat.complete(&reply),
            Err(error) => {
                tracing::warn!(%error, "assistant gateway call failed");
                chat.fail();
            }
        }
    }

    let chat = state.chat.lock().await;
    Json(ChatState::from_session(&chat))
}

/// POST /api/chat/open
async fn open_widget(State(state): State<AppState>) -> Json<ChatState> {
    let mut chat = state.chat.lock().await;
    chat.set_open(true);
    Json(ChatState::from_session(&chat))
}

/// POST /api/chat/close
async fn close_widget(State(state): State<AppState>) -> Json<ChatState> {
    let mut chat = state.chat.lock().await;
    chat.set_open(false);
    Json(ChatState::from_session(&chat))
}
