//! Debounced, cached catalog search
//!
//! Typed queries go through a [`Debouncer`], then the [`SearchService`]
//! resolves them cache first, remote second and local dataset last. Results
//! are turned into a [`ResultsView`] and handed to a [`SearchView`].

mod cache;
mod debounce;
mod render;
mod service;
mod session;
mod view;

use serde::Serialize;

pub use cache::{CacheStatus, SearchCache};
pub use debounce::Debouncer;
pub use render::{render, ResultRow, ResultsView, EMPTY_MESSAGE};
pub use service::{ResultSource, SearchOutcome, SearchService};
pub use session::SearchSession;
pub use view::SearchView;

/// Queries shorter than this many characters are not searched
pub const MIN_QUERY_LEN: usize = 2;

/// Which search box a query came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DisplayMode {
    Desktop,
    Mobile,
}

impl DisplayMode {
    pub fn from_mobile_flag(mobile: bool) -> Self {
        if mobile {
            Self::Mobile
        } else {
            Self::Desktop
        }
    }
}
