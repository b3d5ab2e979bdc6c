use std::sync::Arc;

use tokio::task::JoinHandle;

use super::debounce::Debouncer;
use super::service::{SearchOutcome, SearchService};
use super::view::SearchView;
use super::{DisplayMode, MIN_QUERY_LEN};
use crate::config::SearchConfig;

/// One page session of search: a service, its view, the debounce timer
/// and the periodic cache flush
pub struct SearchSession {
    service: Arc<SearchService>,
    view: Arc<dyn SearchView>,
    debouncer: Debouncer,
    flush: JoinHandle<()>,
}

impl SearchSession {
    /// Start a session and its cache flush timer
    pub fn init(
        service: Arc<SearchService>,
        view: Arc<dyn SearchView>,
        settings: &SearchConfig,
    ) -> Self {
        let flush = service.spawn_cache_flush(settings.cache_flush_interval());
        tracing::debug!(
            debounce_ms = settings.debounce_ms,
            flush_secs = settings.cache_flush_secs,
            "search session started"
        );

        Self {
            service,
            view,
            debouncer: Debouncer::new(settings.debounce()),
            flush,
        }
    }

    /// Debounced search for the current contents of a search box
    pub fn schedule(&self, input: &str, mode: DisplayMode) -> JoinHandle<()> {
        let query = input.trim().to_string();
        let service = Arc::clone(&self.service);
        let view = Arc::clone(&self.view);

        tracing::debug!(query = %query, ?mode, "search scheduled");
        self.debouncer.schedule(async move {
            let outcome = service.run(&query, mode, view.as_ref()).await;
            tracing::debug!(query = %query, ?outcome, "debounced search finished");
        })
    }

    /// Search box gained focus: search right away if the query is long enough
    pub async fn focus(&self, input: &str, mode: DisplayMode) -> Option<SearchOutcome> {
        let query = input.trim();
        if query.chars().count() < MIN_QUERY_LEN {
            return None;
        }
        Some(self.service.run(query, mode, self.view.as_ref()).await)
    }

    /// Hide a results panel, as when the user clicks elsewhere
    pub fn dismiss(&self, mode: DisplayMode) {
        self.view.hide_results(mode);
    }

    pub fn service(&self) -> &Arc<SearchService> {
        &self.service
    }

    /// Cancel the pending search, stop in-flight loading and the flush timer
    pub async fn teardown(self) {
        self.debouncer.cancel();
        self.service.shutdown();
        if let Err(e) = self.flush.await {
            tracing::warn!(error = %e, "cache flush task ended abnormally");
        }
        tracing::debug!("search session torn down");
    }
}
