//! Shared application state injected into handlers.

use std::sync::Arc;

use crate::application::services::{LinkService, RedirectResolver, StatsService};

/// Services wired to a single store handle, constructed once at startup
/// and cloned into every handler.
#[derive(Clone)]
pub struct AppState {
    pub link_service: Arc<LinkService>,
    pub redirect_resolver: Arc<RedirectResolver>,
    pub stats_service: Arc<StatsService>,
}

impl AppState {
    pub fn new(
        link_service: Arc<LinkService>,
        redirect_resolver: Arc<RedirectResolver>,
        stats_service: Arc<StatsService>,
    ) -> Self {
        Self {
            link_service,
            redirect_resolver,
            stats_service,
        }
    }
}
