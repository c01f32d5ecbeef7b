//! Trait definitions for external interactions
//!
//! These traits define the boundaries between domain logic and infrastructure.
//! Infrastructure implementations live in other crates.

use std::fmt::Display;

/// Trait for LLM provider operations
///
/// Implemented by the infrastructure layer (digest-llm). Calls are issued
/// one at a time; implementations are not required to be shareable across
/// tasks.
#[allow(async_fn_in_trait)]
pub trait LlmProvider {
    /// Error type for LLM operations
    type Error: Display;

    /// Generate a completion for `prompt` in a single attempt
    async fn generate(&self, prompt: &str) -> Result<String, Self::Error>;

    /// Lightweight reachability probe against the service
    async fn health_check(&self) -> Result<(), Self::Error>;

    /// Name of the model requests are sent to
    fn model_name(&self) -> &str;
}
