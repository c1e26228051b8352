/// Shared application state
use crate::i18n::Language;
use hamal_core::ReportLifecycle;
use std::sync::Arc;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub lifecycle: Arc<ReportLifecycle>,
    pub default_language: Language,
    pub admin_requires_auth: bool,
}

impl AppState {
    pub fn new(
        lifecycle: Arc<ReportLifecycle>,
        default_language: Language,
        admin_requires_auth: bool,
    ) -> Self {
        Self {
            lifecycle,
            default_language,
            admin_requires_auth,
        }
    }
}
