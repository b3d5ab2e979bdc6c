//! Built-in sample catalog
//!
//! Serves search when the remote endpoint fails, and backs product lookups
//! for pages that have no endpoint of their own.

use super::types::Item;

const SAMPLE_ITEMS: &[(u64, &str, &str, &str)] = &[
    (
        1,
        "Royal Red Silk Saree",
        "Silk",
        "https://lajreedesigner.com/cdn/shop/files/KP-Karishma-Red_5_900x1350_crop_center@2x.jpg?v=1745495600",
    ),
    (
        2,
        "Blue Cotton Saree",
        "Cotton",
        "https://encrypted-tbn2.gstatic.com/shopping?q=tbn:ANd9GcSOasMiGNdg35aA_gedyxtQrTdiqiD9CkOB84MO-PfrA5jT7KywRbaBYaYv3K-aai2hUUjG0ds8hdgSliDfV8Tcmp20v_5yjWRTYM_PqL8HyPN2-MbhLUqG",
    ),
    (
        3,
        "Green Designer Saree",
        "Designer",
        "https://encrypted-tbn1.gstatic.com/shopping?q=tbn:ANd9GcSxsA-rILRGxU6gC2sCdj0FcqyLFgQRUWS_ISaaYzN_j1rSF5kjNUkIV6VD9fwF6dHHY6ZkCjsUKRp97x5E4Dg_WrIWbNWV0BSzSC9b1wk",
    ),
    (
        4,
        "Pink Bridal Saree",
        "Bridal",
        "https://www.banarasee.in/cdn/shop/files/IMG_9630_940x.jpg?v=1683428505",
    ),
    (
        5,
        "Yellow Chiffon Saree",
        "Chiffon",
        "https://www.lavanyathelabel.com/cdn/shop/files/lbl101ks886_1_700x.jpg?v=1752668380",
    ),
    (
        6,
        "Purple Georgette Saree",
        "Georgette",
        "https://diwalistyle.com/wp-content/uploads/2024/03/Madhuri-Dixit-Purple-Color-60-Gram-Georgette-Sequins-Work-Saree-4.jpeg",
    ),
    (
        7,
        "Maroon Silk Traditional",
        "Silk",
        "https://resources.indianclothstore.com/productimages/Maroon-Silk-Saree-With-Blouse-18710418042024.jpg",
    ),
    (
        8,
        "Orange Festival Cotton",
        "Cotton",
        "https://arvisaa.com/cdn/shop/products/KP-Kalyani-Orange_1_720x.jpg?v=1737618305",
    ),
];

/// Fixed in-memory list of sample items
#[derive(Debug, Clone)]
pub struct LocalDataset {
    items: Vec<Item>,
}

impl LocalDataset {
    /// The built-in sample catalog
    pub fn new() -> Self {
        let items = SAMPLE_ITEMS
            .iter()
            .map(|&(id, name, category, image_url)| Item {
                id,
                name: name.to_string(),
                category: category.to_string(),
                image_url: image_url.to_string(),
            })
            .collect();
        Self { items }
    }

    /// A dataset over arbitrary items
    pub fn from_items(items: Vec<Item>) -> Self {
        Self { items }
    }

    /// Items whose name or category contains the query, case-insensitively
    pub fn filter(&self, query: &str) -> Vec<Item> {
        self.items
            .iter()
            .filter(|item| item.matches(query))
            .cloned()
            .collect()
    }

    /// Look up an item by id
    pub fn get(&self, id: u64) -> Option<&Item> {
        self.items.iter().find(|item| item.id == id)
    }

    /// Items sharing a category with the given one, itself first
    pub fn same_category<'a>(&'a self, item: &'a Item) -> Vec<&'a Item> {
        std::iter::once(item)
            .chain(
                self.items
                    .iter()
                    .filter(|other| other.category == item.category && other.id != item.id),
            )
            .collect()
    }

    pub fn all(&self) -> &[Item] {
        &self.items
    }
}

impl Default for LocalDataset {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(items: &[Item]) -> Vec<u64> {
        items.iter().map(|i| i.id).collect()
    }

    #[test]
    fn test_dataset_has_eight_items() {
        assert_eq!(LocalDataset::new().all().len(), 8);
    }

    #[test]
    fn test_filter_silk() {
        let results = LocalDataset::new().filter("Silk");
        assert_eq!(ids(&results), vec![1, 7]);
    }

    #[test]
    fn test_filter_is_case_insensitive() {
        let results = LocalDataset::new().filter("cOTTON");
        assert_eq!(ids(&results), vec![2, 8]);
    }

    #[test]
    fn test_filter_matches_name_only_terms() {
        let results = LocalDataset::new().filter("festival");
        assert_eq!(ids(&results), vec![8]);
    }

    #[test]
    fn test_filter_no_matches() {
        assert!(LocalDataset::new().filter("zz").is_empty());
    }

    #[test]
    fn test_get_by_id() {
        let dataset = LocalDataset::new();
        assert_eq!(dataset.get(4).unwrap().name, "Pink Bridal Saree");
        assert!(dataset.get(99).is_none());
    }

    #[test]
    fn test_same_category_puts_item_first() {
        let dataset = LocalDataset::new();
        let maroon = dataset.get(7).unwrap().clone();
        let related = dataset.same_category(&maroon);
        assert_eq!(related.iter().map(|i| i.id).collect::<Vec<_>>(), vec![7, 1]);
    }
}
