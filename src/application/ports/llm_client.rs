use async_trait::async_trait;

/// Chat-completion backend behind the live content generator.
#[async_trait]
pub trait LlmClient: Send + Sync {
    /// Sends `instructions` as the system turn and `source_text` as the user
    /// turn and returns the raw reply text.
    async fn complete(&self, instructions: &str, source_text: &str)
    -> Result<String, LlmClientError>;
}

#[derive(Debug, thiserror::Error)]
pub enum LlmClientError {
    #[error("completion request failed: {0}")]
    RequestFailed(String),
    #[error("rate limited by completion backend")]
    RateLimited,
    #[error("completion reply had no content")]
    EmptyReply,
    #[error("malformed completion reply: {0}")]
    MalformedReply(String),
}
