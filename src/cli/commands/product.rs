use serde_json::json;

use super::common::Context;
use crate::cart::CartCounter;
use crate::catalog::{parse_product_ref, LocalDataset};
use crate::cli::args::{BuyArgs, CartArgs, CartCommands, ProductArgs};
use crate::cli::OutputFormat;
use crate::error::{AktaraError, Result};
use crate::output;
use crate::product::{ProductPage, Quantity};
use crate::wishlist::Wishlist;

/// Open a product page with the given gallery image (1-based) and quantity
pub(super) fn open_page(reference: &str, image: Option<usize>, quantity: u32) -> Result<ProductPage> {
    let id = parse_product_ref(reference)?;
    let mut page = ProductPage::open(&LocalDataset::new(), id)?;
    page.quantity = Quantity::new(quantity)?;

    if let Some(image) = image {
        let index = image
            .checked_sub(1)
            .ok_or_else(|| AktaraError::InvalidArgument("images are numbered from 1".to_string()))?;
        page.gallery.select(index)?;
    }

    Ok(page)
}

/// Open and format a product page
pub(super) fn render_product(
    ctx: &Context,
    reference: &str,
    image: Option<usize>,
    quantity: u32,
) -> Result<(ProductPage, String)> {
    let page = open_page(reference, image, quantity)?;
    let wishlisted = Wishlist::load(ctx.store()).is_member(page.item.id);
    let formatted = output::format_product(&page, &ctx.links()?, wishlisted, ctx.format)?;
    Ok((page, formatted))
}

/// Handle the product command
pub fn product(ctx: &Context, args: &ProductArgs) -> Result<String> {
    let (page, formatted) = render_product(ctx, &args.product, args.image, args.quantity)?;
    if !args.add_to_cart {
        return Ok(formatted);
    }

    let (count, toast) = page.add_to_cart(&CartCounter::new(ctx.store()))?;
    ctx.announce(&toast);

    match ctx.format {
        OutputFormat::Pretty => Ok(format!(
            "{formatted}\n\n{}",
            output::format_cart(count, Some(&toast), ctx.format)?
        )),
        OutputFormat::Json => output::json::format_json(&json!({
            "product": page,
            "cart": { "count": count, "toast": toast },
        })),
    }
}

/// Handle the buy command
pub fn buy(ctx: &Context, args: &BuyArgs) -> Result<String> {
    let page = open_page(&args.product, None, 1)?;
    let url = page.buy_now(&ctx.links()?)?;
    tracing::info!(id = page.item.id, %url, "buy now");
    output::format_checkout(&url, ctx.format)
}

/// Handle the cart command
pub fn cart(ctx: &Context, args: &CartArgs) -> Result<String> {
    let counter = CartCounter::new(ctx.store());

    match &args.command {
        Some(CartCommands::Add { product, quantity }) => {
            let page = open_page(product, None, *quantity)?;
            let (count, toast) = page.add_to_cart(&counter)?;
            ctx.announce(&toast);
            output::format_cart(count, Some(&toast), ctx.format)
        }
        None | Some(CartCommands::Show) => output::format_cart(counter.count(), None, ctx.format),
    }
}
