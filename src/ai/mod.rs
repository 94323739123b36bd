//! AI gateway
//!
//! Thin adapter between the chat session and the hosted model API.
//! The gateway trait is the seam the chat handlers call through; the
//! HTTP implementation talks to a Gemini-style `generateContent`
//! endpoint, and the mock implementations back the test suites.

mod gateway;
pub mod mock;

pub use gateway::{build_preamble, GatewayError, HttpAssistantGateway};

use async_trait::async_trait;

use crate::session::ChatMessage;

/// Outbound call to the hosted model
///
/// `history` is the transcript as it stood before the new message.
/// The HTTP implementation does not replay it upstream; it is part of
/// the signature so the omission is visible at the seam rather than
/// buried in the transport code.
#[async_trait]
pub trait AssistantGateway: Send + Sync {
    async fn respond(
        &self,
        message: &str,
        history: &[ChatMessage],
    ) -> Result<String, GatewayError>;
}
