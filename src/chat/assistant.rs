use std::sync::Arc;
use std::time::Duration;
use tokio::time::timeout;
use tracing::{error, info};

use crate::chat::session::SessionRegistry;
use crate::db::models::ChatExchange;
use crate::db::repository::Repository;
use crate::error::ServiceError;
use crate::llm::models::{ChatOptions, Message};
use crate::llm::{LlmError, LlmProvider};

/// Drives one request/response exchange with the generative provider.
/// Exactly one provider call per caller-visible request, never retried.
pub struct ChatService {
    pub(crate) registry: SessionRegistry,
    provider: Option<Arc<dyn LlmProvider>>,
    pub(crate) repo: Repository,
    pub(crate) request_timeout: Duration,
}

impl ChatService {
    pub fn new(
        registry: SessionRegistry,
        provider: Option<Arc<dyn LlmProvider>>,
        repo: Repository,
        request_timeout: Duration,
    ) -> Self {
        Self {
            registry,
            provider,
            repo,
            request_timeout,
        }
    }

    pub fn registry(&self) -> &SessionRegistry {
        &self.registry
    }

    pub fn repo(&self) -> &Repository {
        &self.repo
    }

    pub(crate) fn provider(&self) -> Result<&Arc<dyn LlmProvider>, ServiceError> {
        self.provider.as_ref().ok_or_else(|| {
            ServiceError::Configuration("LLM provider credential not configured".to_string())
        })
    }

    /// Call the provider with the running history plus the pending user
    /// message, bounded by the configured timeout. The registry lock is not
    /// held while the call is in flight.
    pub(crate) async fn converse(
        &self,
        session_id: &str,
        user_message: &str,
    ) -> Result<String, ServiceError> {
        let provider = self.provider()?;

        let conversation = self.registry.resolve(session_id);
        let mut messages = conversation.history;
        messages.push(Message::user(user_message));

        let options = ChatOptions {
            system_prompt: Some(conversation.system_prompt),
            ..Default::default()
        };

        let reply = match timeout(self.request_timeout, provider.chat(&messages, options)).await {
            Ok(Ok(response)) => response.content,
            Ok(Err(e)) => {
                error!("Provider call failed for session {}: {}", session_id, e);
                return Err(ServiceError::Provider(e));
            }
            Err(_) => {
                error!("Provider call timed out for session {}", session_id);
                return Err(ServiceError::Provider(LlmError::Timeout));
            }
        };

        self.registry.commit(session_id, user_message, &reply);
        Ok(reply)
    }

    /// One assistant exchange: resolve the session, call the provider once,
    /// then append to history and persist exactly one ChatExchange. On any
    /// provider failure nothing is persisted and history is unchanged.
    pub async fn send(&self, session_id: &str, user_message: &str) -> Result<String, ServiceError> {
        let reply = self.converse(session_id, user_message).await?;

        let exchange = ChatExchange::new(session_id, user_message, &reply);
        self.repo.insert(&exchange).await?;

        info!("Completed exchange for session {}", session_id);
        Ok(reply)
    }
}
