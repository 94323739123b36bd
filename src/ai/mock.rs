//! Mock gateways for tests

use async_trait::async_trait;

use crate::ai::{AssistantGateway, GatewayError};
use crate::session::ChatMessage;

/// A gateway that always returns the same reply
#[derive(Debug, Clone)]
pub struct ScriptedGateway {
    reply: String,
}

impl ScriptedGateway {
    pub fn replying(reply: impl Into<String>) -> Self {
        Self {
            reply: reply.into(),
        }
    }

    /// A gateway that returns an empty reply, exercising the
    /// fallback-literal path
    pub fn silent() -> Self {
        Self {
            reply: String::new(),
        }
    }
}

#[async_trait]
impl AssistantGateway for ScriptedGateway {
    async fn respond(
        &self,
        _message: &str,
        _history: &[ChatMessage],
    ) -> Result<String, GatewayError> {
        Ok(self.reply.clone())
    }
}

/// A gateway that always fails
#[derive(Debug, Clone)]
pub struct FailingGateway {
    message: String,
}

impl FailingGateway {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

#[async_trait]
impl AssistantGateway for FailingGateway {
    async fn respond(
        &self,
        _message: &str,
        _history: &[ChatMessage],
    ) -> Result<String, GatewayError> {
        Err(GatewayError::Api(self.message.clone()))
    }
}
