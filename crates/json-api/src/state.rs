//! State

use std::sync::Arc;

use otomax_app::{context::AppContext, domain::sync::models::SyncOptions};

#[derive(Clone)]
pub(crate) struct State {
    pub(crate) app: AppContext,

    /// Applied to every sync run started over HTTP.
    pub(crate) sync_options: SyncOptions,
}

impl State {
    #[must_use]
    pub(crate) fn new(app: AppContext, sync_options: SyncOptions) -> Self {
        Self { app, sync_options }
    }

    #[must_use]
    pub(crate) fn from_app_context(app: AppContext, sync_options: SyncOptions) -> Arc<Self> {
        Arc::new(Self::new(app, sync_options))
    }
}
