use serde::Serialize;

use crate::catalog::{Item, Page};

/// Message shown when a search has no results
pub const EMPTY_MESSAGE: &str = "No results found";

/// One clickable result row
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResultRow {
    pub id: u64,
    pub name: String,
    pub category: String,
    pub image_url: String,
    /// Product detail page relative to the storefront root
    pub href: String,
}

/// What the results panel should show
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum ResultsView {
    Empty { message: String },
    Rows { rows: Vec<ResultRow> },
}

impl ResultsView {
    pub fn rows(&self) -> &[ResultRow] {
        match self {
            ResultsView::Empty { .. } => &[],
            ResultsView::Rows { rows } => rows,
        }
    }

    pub fn len(&self) -> usize {
        self.rows().len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows().is_empty()
    }
}

/// Build the presentation model for a result list, keeping provider order
pub fn render(results: &[Item]) -> ResultsView {
    if results.is_empty() {
        return ResultsView::Empty {
            message: EMPTY_MESSAGE.to_string(),
        };
    }

    let rows = results
        .iter()
        .map(|item| ResultRow {
            id: item.id,
            name: item.name.clone(),
            category: item.category.clone(),
            image_url: item.image_url.clone(),
            href: Page::Product { id: item.id }.href(),
        })
        .collect();

    ResultsView::Rows { rows }
}
