use std::sync::Arc;

use crate::assist::ops::TextAssist;
use crate::config::Config;
use crate::wizard::session::SessionStore;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// In-memory wizard sessions. Records live and die with the process.
    pub sessions: SessionStore,
    /// Pluggable assist backend. Production: `GeminiAssist`; tests swap in
    /// stubs to exercise the fallback paths.
    pub assist: Arc<dyn TextAssist>,
    pub config: Config,
}
