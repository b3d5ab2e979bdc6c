use serde::{Deserialize, Serialize};

/// A product as returned by catalog search
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub id: u64,
    pub name: String,
    pub category: String,
    #[serde(rename = "image", alias = "imageUrl")]
    pub image_url: String,
}

impl Item {
    /// Case-insensitive substring match against name or category
    pub fn matches(&self, query: &str) -> bool {
        let needle = query.to_lowercase();
        self.name.to_lowercase().contains(&needle) || self.category.to_lowercase().contains(&needle)
    }
}

/// Response body of the search endpoint
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SearchResponse {
    #[serde(default)]
    pub results: Vec<Item>,
}
