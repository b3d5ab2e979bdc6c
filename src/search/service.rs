use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use serde::Serialize;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time::Instant;

use super::cache::{CacheStatus, SearchCache};
use super::render::{render, ResultsView};
use super::view::SearchView;
use super::{DisplayMode, MIN_QUERY_LEN};
use crate::catalog::{Item, LocalDataset, SearchProvider};

/// Where a rendered result list came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ResultSource {
    Cache,
    Remote,
    Fallback,
}

/// How a single search invocation ended
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "lowercase")]
pub enum SearchOutcome {
    /// Query too short; the results panel was hidden
    Hidden,
    /// The view has no targets for the display mode
    Skipped,
    /// The session shut down while the search was loading
    Cancelled,
    /// A newer search for the same display mode was issued meanwhile
    Stale,
    /// Results were rendered
    Rendered {
        source: ResultSource,
        view: ResultsView,
    },
}

/// Resolves queries cache first, remote second, local dataset last
pub struct SearchService {
    remote: Arc<dyn SearchProvider>,
    fallback: LocalDataset,
    cache: Mutex<SearchCache>,
    next_seq: AtomicU64,
    latest_desktop: AtomicU64,
    latest_mobile: AtomicU64,
    hidden_desktop: AtomicU64,
    hidden_mobile: AtomicU64,
    loading_delay: Duration,
    shutdown: watch::Sender<bool>,
}

impl SearchService {
    pub fn new(
        remote: Arc<dyn SearchProvider>,
        fallback: LocalDataset,
        loading_delay: Duration,
    ) -> Self {
        let (shutdown, _) = watch::channel(false);
        Self {
            remote,
            fallback,
            cache: Mutex::new(SearchCache::new()),
            next_seq: AtomicU64::new(0),
            latest_desktop: AtomicU64::new(0),
            latest_mobile: AtomicU64::new(0),
            hidden_desktop: AtomicU64::new(0),
            hidden_mobile: AtomicU64::new(0),
            loading_delay,
            shutdown,
        }
    }

    /// Run one search invocation and drive the view through it
    pub async fn run(&self, query: &str, mode: DisplayMode, view: &dyn SearchView) -> SearchOutcome {
        if query.chars().count() < MIN_QUERY_LEN {
            // A hidden panel is the newest state; in-flight searches must not refill it
            let seq = self.issue(mode);
            self.hidden(mode).store(seq, Ordering::SeqCst);
            view.hide_results(mode);
            return SearchOutcome::Hidden;
        }

        if !view.has_targets(mode) {
            tracing::debug!(?mode, "search targets missing, skipping");
            return SearchOutcome::Skipped;
        }

        let seq = self.issue(mode);

        let cached = self.cache().get(query);
        if let Some(items) = cached {
            tracing::debug!(query, seq, "search cache hit");
            return self.finish(seq, mode, view, &items, ResultSource::Cache);
        }

        view.show_loading(mode);
        if !self.wait(self.loading_delay).await {
            view.hide_loading(mode);
            return SearchOutcome::Cancelled;
        }

        let (items, source) = match self.remote.search(query).await {
            Ok(items) => {
                self.cache().insert(query, items.clone());
                (items, ResultSource::Remote)
            }
            Err(e) => {
                tracing::warn!(query, error = %e, "remote search failed, using local dataset");
                (self.fallback.filter(query), ResultSource::Fallback)
            }
        };

        self.finish(seq, mode, view, &items, source)
    }

    /// Drop every cached result
    pub fn clear_cache(&self) {
        let mut cache = self.cache();
        tracing::debug!(entries = cache.len(), "clearing search cache");
        cache.clear();
    }

    pub fn cache_status(&self) -> CacheStatus {
        self.cache().status()
    }

    /// Clear the cache every `interval` until shutdown
    pub fn spawn_cache_flush(self: &Arc<Self>, interval: Duration) -> JoinHandle<()> {
        let service = Arc::clone(self);
        let mut shutdown = self.shutdown.subscribe();

        tokio::spawn(async move {
            let mut ticker = tokio::time::interval_at(Instant::now() + interval, interval);
            loop {
                tokio::select! {
                    _ = ticker.tick() => service.clear_cache(),
                    _ = shutdown.wait_for(|stopped| *stopped) => break,
                }
            }
        })
    }

    /// Cancel in-progress loading delays and stop the flush task
    pub fn shutdown(&self) {
        self.shutdown.send_replace(true);
    }

    pub fn is_shut_down(&self) -> bool {
        *self.shutdown.borrow()
    }

    fn cache(&self) -> MutexGuard<'_, SearchCache> {
        self.cache.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn latest(&self, mode: DisplayMode) -> &AtomicU64 {
        match mode {
            DisplayMode::Desktop => &self.latest_desktop,
            DisplayMode::Mobile => &self.latest_mobile,
        }
    }

    /// Sequence number of the last invocation that hid the mode's results
    fn hidden(&self, mode: DisplayMode) -> &AtomicU64 {
        match mode {
            DisplayMode::Desktop => &self.hidden_desktop,
            DisplayMode::Mobile => &self.hidden_mobile,
        }
    }

    /// Allocate a sequence number and mark it as the newest for the mode
    fn issue(&self, mode: DisplayMode) -> u64 {
        let seq = self.next_seq.fetch_add(1, Ordering::SeqCst) + 1;
        self.latest(mode).fetch_max(seq, Ordering::SeqCst);
        seq
    }

    /// Sleep for `delay`; false if shutdown arrived first
    async fn wait(&self, delay: Duration) -> bool {
        let mut shutdown = self.shutdown.subscribe();
        if *shutdown.borrow() {
            return false;
        }
        tokio::select! {
            () = tokio::time::sleep(delay) => true,
            _ = shutdown.wait_for(|stopped| *stopped) => false,
        }
    }

    fn finish(
        &self,
        seq: u64,
        mode: DisplayMode,
        view: &dyn SearchView,
        items: &[Item],
        source: ResultSource,
    ) -> SearchOutcome {
        let latest = self.latest(mode).load(Ordering::SeqCst);
        if latest != seq {
            tracing::debug!(seq, ?mode, "discarding stale search result");
            // Nothing newer will clear the indicator once the panel was hidden
            if self.hidden(mode).load(Ordering::SeqCst) == latest {
                view.hide_loading(mode);
            }
            return SearchOutcome::Stale;
        }

        let rendered = render(items);
        view.hide_loading(mode);
        view.show_results(mode, &rendered);
        SearchOutcome::Rendered {
            source,
            view: rendered,
        }
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::error::{AktaraError, Result};
    use async_trait::async_trait;
    use std::sync::atomic::AtomicUsize;

    /// Provider that answers from a fixed script and counts calls
    pub(crate) struct ScriptedProvider {
        pub(crate) calls: AtomicUsize,
        results: Option<Vec<Item>>,
        slow_queries: Vec<(String, Duration)>,
    }

    impl ScriptedProvider {
        pub(crate) fn returning(results: Vec<Item>) -> Self {
            Self {
                calls: AtomicUsize::new(0),
                results: Some(results),
                slow_queries: Vec::new(),
            }
        }

        pub(crate) fn failing() -> Self {
            Self {
                calls: AtomicUsize::new(0),
                results: None,
                slow_queries: Vec::new(),
            }
        }

        fn slow_for(mut self, query: &str, delay: Duration) -> Self {
            self.slow_queries.push((query.to_string(), delay));
            self
        }

        pub(crate) fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl SearchProvider for ScriptedProvider {
        async fn search(&self, query: &str) -> Result<Vec<Item>> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            if let Some((_, delay)) = self.slow_queries.iter().find(|(slow, _)| slow == query) {
                tokio::time::sleep(*delay).await;
            }
            self.results
                .clone()
                .ok_or_else(|| AktaraError::api(503, "unavailable"))
        }
    }

    #[derive(Debug, Clone, PartialEq, Eq)]
    pub(crate) enum ViewEvent {
        ShowLoading(DisplayMode),
        HideLoading(DisplayMode),
        HideResults(DisplayMode),
        Show(DisplayMode, ResultsView),
    }

    /// View that records every call
    #[derive(Default)]
    pub(crate) struct RecordingView {
        pub(crate) events: Mutex<Vec<ViewEvent>>,
        missing_targets: bool,
    }

    impl RecordingView {
        pub(crate) fn events(&self) -> Vec<ViewEvent> {
            self.events.lock().unwrap().clone()
        }

        fn push(&self, event: ViewEvent) {
            self.events.lock().unwrap().push(event);
        }
    }

    impl SearchView for RecordingView {
        fn has_targets(&self, _mode: DisplayMode) -> bool {
            !self.missing_targets
        }

        fn show_loading(&self, mode: DisplayMode) {
            self.push(ViewEvent::ShowLoading(mode));
        }

        fn hide_loading(&self, mode: DisplayMode) {
            self.push(ViewEvent::HideLoading(mode));
        }

        fn hide_results(&self, mode: DisplayMode) {
            self.push(ViewEvent::HideResults(mode));
        }

        fn show_results(&self, mode: DisplayMode, view: &ResultsView) {
            self.push(ViewEvent::Show(mode, view.clone()));
        }
    }

    pub(crate) fn item(id: u64, name: &str, category: &str) -> Item {
        Item {
            id,
            name: name.to_string(),
            category: category.to_string(),
            image_url: format!("https://img.example/{id}.jpg"),
        }
    }

    fn service_with(provider: Arc<ScriptedProvider>) -> SearchService {
        SearchService::new(provider, LocalDataset::new(), Duration::from_millis(300))
    }

    fn rendered_ids(outcome: &SearchOutcome) -> Vec<u64> {
        match outcome {
            SearchOutcome::Rendered { view, .. } => view.rows().iter().map(|r| r.id).collect(),
            other => panic!("expected rendered outcome, got {other:?}"),
        }
    }

    fn source(outcome: &SearchOutcome) -> ResultSource {
        match outcome {
            SearchOutcome::Rendered { source, .. } => *source,
            other => panic!("expected rendered outcome, got {other:?}"),
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Validation
    // ─────────────────────────────────────────────────────────────────────────

    #[tokio::test(start_paused = true)]
    async fn test_short_query_hides_and_skips_providers() {
        let provider = Arc::new(ScriptedProvider::failing());
        let service = service_with(Arc::clone(&provider));
        let view = RecordingView::default();

        for query in ["", "a", "é"] {
            let outcome = service.run(query, DisplayMode::Desktop, &view).await;
            assert_eq!(outcome, SearchOutcome::Hidden);
        }

        assert_eq!(provider.calls(), 0);
        assert!(service.cache_status().entries == 0);
        assert_eq!(
            view.events(),
            vec![ViewEvent::HideResults(DisplayMode::Desktop); 3]
        );
    }

    #[tokio::test(start_paused = true)]
    async fn test_two_character_query_is_searched() {
        let provider = Arc::new(ScriptedProvider::returning(vec![]));
        let service = service_with(Arc::clone(&provider));

        service
            .run("ab", DisplayMode::Desktop, &RecordingView::default())
            .await;
        assert_eq!(provider.calls(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_missing_targets_is_a_silent_no_op() {
        let provider = Arc::new(ScriptedProvider::returning(vec![]));
        let service = service_with(Arc::clone(&provider));
        let view = RecordingView {
            missing_targets: true,
            ..Default::default()
        };

        let outcome = service.run("silk", DisplayMode::Mobile, &view).await;

        assert_eq!(outcome, SearchOutcome::Skipped);
        assert_eq!(provider.calls(), 0);
        assert!(view.events().is_empty());
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Cache
    // ─────────────────────────────────────────────────────────────────────────

    #[tokio::test(start_paused = true)]
    async fn test_repeated_query_is_served_from_cache() {
        let provider = Arc::new(ScriptedProvider::returning(vec![
            item(7, "Maroon Silk Traditional", "Silk"),
            item(1, "Royal Red Silk Saree", "Silk"),
        ]));
        let service = service_with(Arc::clone(&provider));
        let view = RecordingView::default();

        let first = service.run("silk", DisplayMode::Desktop, &view).await;
        let second = service.run("silk", DisplayMode::Desktop, &view).await;

        assert_eq!(provider.calls(), 1);
        assert_eq!(source(&first), ResultSource::Remote);
        assert_eq!(source(&second), ResultSource::Cache);
        assert_eq!(rendered_ids(&first), rendered_ids(&second));
        assert_eq!(rendered_ids(&second), vec![7, 1]);
    }

    #[tokio::test(start_paused = true)]
    async fn test_cache_is_keyed_by_exact_query() {
        let provider = Arc::new(ScriptedProvider::returning(vec![]));
        let service = service_with(Arc::clone(&provider));
        let view = RecordingView::default();

        service.run("Silk", DisplayMode::Desktop, &view).await;
        service.run("silk", DisplayMode::Desktop, &view).await;

        assert_eq!(provider.calls(), 2);
    }

    #[tokio::test(start_paused = true)]
    async fn test_clear_forces_remote_again() {
        let provider = Arc::new(ScriptedProvider::returning(vec![item(2, "Blue", "Cotton")]));
        let service = service_with(Arc::clone(&provider));
        let view = RecordingView::default();

        service.run("cotton", DisplayMode::Desktop, &view).await;
        service.clear_cache();
        assert_eq!(service.cache_status().entries, 0);

        let outcome = service.run("cotton", DisplayMode::Desktop, &view).await;
        assert_eq!(provider.calls(), 2);
        assert_eq!(source(&outcome), ResultSource::Remote);
    }

    #[tokio::test(start_paused = true)]
    async fn test_periodic_flush_clears_cache() {
        let provider = Arc::new(ScriptedProvider::returning(vec![item(2, "Blue", "Cotton")]));
        let service = Arc::new(service_with(Arc::clone(&provider)));
        let flush = service.spawn_cache_flush(Duration::from_secs(300));
        let view = RecordingView::default();

        service.run("cotton", DisplayMode::Desktop, &view).await;
        assert_eq!(service.cache_status().entries, 1);

        tokio::time::sleep(Duration::from_secs(301)).await;
        tokio::task::yield_now().await;
        assert_eq!(service.cache_status().entries, 0);

        service.run("cotton", DisplayMode::Desktop, &view).await;
        assert_eq!(provider.calls(), 2);

        service.shutdown();
        flush.await.unwrap();
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Fallback
    // ─────────────────────────────────────────────────────────────────────────

    #[tokio::test(start_paused = true)]
    async fn test_silk_falls_back_to_local_dataset() {
        let provider = Arc::new(ScriptedProvider::failing());
        let service = service_with(Arc::clone(&provider));
        let view = RecordingView::default();

        let outcome = service.run("Silk", DisplayMode::Desktop, &view).await;

        assert_eq!(source(&outcome), ResultSource::Fallback);
        assert_eq!(rendered_ids(&outcome), vec![1, 7]);
    }

    #[tokio::test(start_paused = true)]
    async fn test_fallback_matches_local_filter_and_is_not_cached() {
        let provider = Arc::new(ScriptedProvider::failing());
        let service = service_with(Arc::clone(&provider));
        let view = RecordingView::default();
        let expected: Vec<u64> = LocalDataset::new().filter("SAREE").iter().map(|i| i.id).collect();

        let outcome = service.run("SAREE", DisplayMode::Desktop, &view).await;
        assert_eq!(rendered_ids(&outcome), expected);
        assert_eq!(service.cache_status().entries, 0);

        service.run("SAREE", DisplayMode::Desktop, &view).await;
        assert_eq!(provider.calls(), 2);
    }

    #[tokio::test(start_paused = true)]
    async fn test_fallback_with_no_matches_renders_empty_state() {
        let provider = Arc::new(ScriptedProvider::failing());
        let service = service_with(provider);
        let view = RecordingView::default();

        let outcome = service.run("velvet", DisplayMode::Desktop, &view).await;
        match outcome {
            SearchOutcome::Rendered { view, .. } => assert!(view.is_empty()),
            other => panic!("unexpected outcome {other:?}"),
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_empty_remote_result_is_cached() {
        let provider = Arc::new(ScriptedProvider::returning(vec![]));
        let service = service_with(Arc::clone(&provider));
        let view = RecordingView::default();

        let first = service.run("zz", DisplayMode::Desktop, &view).await;
        assert_eq!(
            first,
            SearchOutcome::Rendered {
                source: ResultSource::Remote,
                view: render(&[]),
            }
        );

        let second = service.run("zz", DisplayMode::Desktop, &view).await;
        assert_eq!(source(&second), ResultSource::Cache);
        assert_eq!(provider.calls(), 1);
    }

    // ─────────────────────────────────────────────────────────────────────────
    // View protocol
    // ─────────────────────────────────────────────────────────────────────────

    #[tokio::test(start_paused = true)]
    async fn test_cache_miss_shows_then_hides_loading() {
        let provider = Arc::new(ScriptedProvider::returning(vec![]));
        let service = service_with(provider);
        let view = RecordingView::default();

        service.run("zz", DisplayMode::Mobile, &view).await;
        service.run("zz", DisplayMode::Mobile, &view).await;

        assert_eq!(
            view.events(),
            vec![
                ViewEvent::ShowLoading(DisplayMode::Mobile),
                ViewEvent::HideLoading(DisplayMode::Mobile),
                ViewEvent::Show(DisplayMode::Mobile, render(&[])),
                ViewEvent::HideLoading(DisplayMode::Mobile),
                ViewEvent::Show(DisplayMode::Mobile, render(&[])),
            ]
        );
    }

    #[tokio::test(start_paused = true)]
    async fn test_shutdown_cancels_loading_delay() {
        let provider = Arc::new(ScriptedProvider::returning(vec![]));
        let service = Arc::new(service_with(Arc::clone(&provider)));
        let view = Arc::new(RecordingView::default());

        let task = {
            let service = Arc::clone(&service);
            let view = Arc::clone(&view);
            tokio::spawn(async move { service.run("silk", DisplayMode::Desktop, view.as_ref()).await })
        };
        tokio::time::sleep(Duration::from_millis(100)).await;
        service.shutdown();

        assert_eq!(task.await.unwrap(), SearchOutcome::Cancelled);
        assert_eq!(provider.calls(), 0);
        assert!(service.is_shut_down());
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Stale results
    // ─────────────────────────────────────────────────────────────────────────

    #[tokio::test(start_paused = true)]
    async fn test_slow_older_result_does_not_overwrite_newer() {
        let provider = Arc::new(
            ScriptedProvider::returning(vec![item(3, "Green Designer Saree", "Designer")])
                .slow_for("sar", Duration::from_secs(2)),
        );
        let service = Arc::new(service_with(provider));
        let view = Arc::new(RecordingView::default());

        let older = {
            let service = Arc::clone(&service);
            let view = Arc::clone(&view);
            tokio::spawn(async move { service.run("sar", DisplayMode::Desktop, view.as_ref()).await })
        };
        // Let the older request reach the provider before the newer one starts
        tokio::time::sleep(Duration::from_millis(400)).await;
        let newer = service.run("saree", DisplayMode::Desktop, view.as_ref()).await;

        assert_eq!(source(&newer), ResultSource::Remote);
        assert_eq!(older.await.unwrap(), SearchOutcome::Stale);

        let shows = view
            .events()
            .into_iter()
            .filter(|e| matches!(e, ViewEvent::Show(..)))
            .count();
        assert_eq!(shows, 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_hiding_results_supersedes_in_flight_search() {
        let provider = Arc::new(
            ScriptedProvider::returning(vec![item(1, "Red Silk Saree", "Silk")])
                .slow_for("silk", Duration::from_secs(2)),
        );
        let service = Arc::new(service_with(provider));
        let view = Arc::new(RecordingView::default());

        let older = {
            let service = Arc::clone(&service);
            let view = Arc::clone(&view);
            tokio::spawn(async move { service.run("silk", DisplayMode::Desktop, view.as_ref()).await })
        };
        tokio::time::sleep(Duration::from_millis(400)).await;
        let newer = service.run("s", DisplayMode::Desktop, view.as_ref()).await;

        assert_eq!(newer, SearchOutcome::Hidden);
        assert_eq!(older.await.unwrap(), SearchOutcome::Stale);
        assert_eq!(
            view.events(),
            vec![
                ViewEvent::ShowLoading(DisplayMode::Desktop),
                ViewEvent::HideResults(DisplayMode::Desktop),
                ViewEvent::HideLoading(DisplayMode::Desktop),
            ]
        );
    }

    #[tokio::test(start_paused = true)]
    async fn test_stale_result_leaves_newer_loading_indicator() {
        let provider = Arc::new(
            ScriptedProvider::returning(vec![])
                .slow_for("sar", Duration::from_secs(1))
                .slow_for("saree", Duration::from_secs(3)),
        );
        let service = Arc::new(service_with(provider));
        let view = Arc::new(RecordingView::default());

        let older = {
            let service = Arc::clone(&service);
            let view = Arc::clone(&view);
            tokio::spawn(async move { service.run("sar", DisplayMode::Desktop, view.as_ref()).await })
        };
        tokio::time::sleep(Duration::from_millis(400)).await;
        let newer = {
            let service = Arc::clone(&service);
            let view = Arc::clone(&view);
            tokio::spawn(async move { service.run("saree", DisplayMode::Desktop, view.as_ref()).await })
        };

        assert_eq!(older.await.unwrap(), SearchOutcome::Stale);
        assert_eq!(
            view.events(),
            vec![
                ViewEvent::ShowLoading(DisplayMode::Desktop),
                ViewEvent::ShowLoading(DisplayMode::Desktop),
            ]
        );
        assert!(matches!(newer.await.unwrap(), SearchOutcome::Rendered { .. }));
    }

    #[tokio::test(start_paused = true)]
    async fn test_modes_do_not_make_each_other_stale() {
        let provider = Arc::new(
            ScriptedProvider::returning(vec![]).slow_for("silk", Duration::from_secs(1)),
        );
        let service = Arc::new(service_with(provider));
        let view = Arc::new(RecordingView::default());

        let desktop = {
            let service = Arc::clone(&service);
            let view = Arc::clone(&view);
            tokio::spawn(async move { service.run("silk", DisplayMode::Desktop, view.as_ref()).await })
        };
        tokio::time::sleep(Duration::from_millis(400)).await;
        let mobile = service.run("cotton", DisplayMode::Mobile, view.as_ref()).await;

        assert!(matches!(mobile, SearchOutcome::Rendered { .. }));
        assert!(matches!(desktop.await.unwrap(), SearchOutcome::Rendered { .. }));
    }
}
