use super::render::ResultsView;
use super::DisplayMode;

/// UI binding for the search results panel
///
/// Each display mode has its own loading indicator and results panel.
pub trait SearchView: Send + Sync {
    /// Whether the loading and results targets for this mode exist.
    /// Searches against a mode without targets do nothing.
    fn has_targets(&self, _mode: DisplayMode) -> bool {
        true
    }

    fn show_loading(&self, mode: DisplayMode);

    fn hide_loading(&self, mode: DisplayMode);

    /// Hide the results panel entirely
    fn hide_results(&self, mode: DisplayMode);

    /// Replace the panel contents and make it visible
    fn show_results(&self, mode: DisplayMode, view: &ResultsView);
}
