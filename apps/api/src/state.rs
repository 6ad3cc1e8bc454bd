use std::sync::Arc;

use crate::config::Config;
use crate::llm_client::CompletionProvider;

/// Shared application state injected into all route handlers via Axum extractors.
///
/// Nothing here is mutable: requests are fully independent and the service
/// persists no candidate facts or generated resumes between calls.
#[derive(Clone)]
pub struct AppState {
    /// Completion provider, `None` when no credential was configured at
    /// startup. Handlers refuse analyze requests in that case; `/health`
    /// reports it. Trait object so tests can substitute a mock provider.
    pub llm: Option<Arc<dyn CompletionProvider>>,
    pub config: Config,
}
