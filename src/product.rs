//! Product page widgets: quantity selector, image gallery, add to cart and
//! buy now.

use serde::Serialize;
use url::Url;

use crate::cart::CartCounter;
use crate::catalog::{Item, LocalDataset, Page, StorefrontLinks};
use crate::error::{AktaraError, Result};
use crate::notify::Toast;
use crate::storage::KeyValueStore;

pub const MIN_QUANTITY: u32 = 1;
pub const MAX_QUANTITY: u32 = 10;

/// Quantity selector bounded to `MIN_QUANTITY..=MAX_QUANTITY`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Quantity(u32);

impl Quantity {
    pub fn new(value: u32) -> Result<Self> {
        if !(MIN_QUANTITY..=MAX_QUANTITY).contains(&value) {
            return Err(AktaraError::InvalidArgument(format!(
                "quantity must be between {MIN_QUANTITY} and {MAX_QUANTITY}, got {value}"
            )));
        }
        Ok(Self(value))
    }

    pub fn value(self) -> u32 {
        self.0
    }

    /// Step up, stopping at the maximum
    pub fn increase(&mut self) -> u32 {
        if self.0 < MAX_QUANTITY {
            self.0 += 1;
        }
        self.0
    }

    /// Step down, stopping at the minimum
    pub fn decrease(&mut self) -> u32 {
        if self.0 > MIN_QUANTITY {
            self.0 -= 1;
        }
        self.0
    }
}

impl Default for Quantity {
    fn default() -> Self {
        Self(MIN_QUANTITY)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GalleryImage {
    pub src: String,
    pub alt: String,
}

/// Thumbnails with exactly one active image shown as the main image
#[derive(Debug, Clone, Serialize)]
pub struct Gallery {
    images: Vec<GalleryImage>,
    active: usize,
}

impl Gallery {
    pub fn new(images: Vec<GalleryImage>) -> Result<Self> {
        if images.is_empty() {
            return Err(AktaraError::InvalidArgument(
                "a gallery needs at least one image".to_string(),
            ));
        }
        Ok(Self { images, active: 0 })
    }

    /// Make the thumbnail at `index` the main image
    pub fn select(&mut self, index: usize) -> Result<&GalleryImage> {
        if index >= self.images.len() {
            return Err(AktaraError::InvalidArgument(format!(
                "no image {} (gallery has {})",
                index + 1,
                self.images.len()
            )));
        }
        self.active = index;
        Ok(&self.images[index])
    }

    pub fn main_image(&self) -> &GalleryImage {
        &self.images[self.active]
    }

    pub fn active_index(&self) -> usize {
        self.active
    }

    /// Thumbnails paired with whether each is the active one
    pub fn thumbnails(&self) -> impl Iterator<Item = (&GalleryImage, bool)> {
        self.images
            .iter()
            .enumerate()
            .map(move |(i, image)| (image, i == self.active))
    }
}

/// A product detail view
#[derive(Debug, Clone, Serialize)]
pub struct ProductPage {
    pub item: Item,
    pub gallery: Gallery,
    pub quantity: Quantity,
}

impl ProductPage {
    /// Open the page for a product; the gallery shows the product first,
    /// then others from its category
    pub fn open(catalog: &LocalDataset, id: u64) -> Result<Self> {
        let item = catalog.get(id).ok_or(AktaraError::ProductNotFound(id))?;
        let images = catalog
            .same_category(item)
            .into_iter()
            .map(|related| GalleryImage {
                src: related.image_url.clone(),
                alt: related.name.clone(),
            })
            .collect();

        Ok(Self {
            item: item.clone(),
            gallery: Gallery::new(images)?,
            quantity: Quantity::default(),
        })
    }

    /// Add the selected quantity to the cart
    pub fn add_to_cart<S: KeyValueStore>(&self, cart: &CartCounter<S>) -> Result<(u32, Toast)> {
        let count = cart.add(self.quantity.value())?;
        tracing::debug!(id = self.item.id, quantity = self.quantity.value(), count, "added to cart");
        Ok((count, Toast::success("Product added to cart!")))
    }

    /// Checkout URL for buying this product now
    pub fn buy_now(&self, links: &StorefrontLinks) -> Result<Url> {
        links.url(Page::Checkout {
            id: Some(self.item.id),
        })
    }
}
