use super::common::Context;
use crate::catalog::{parse_product_ref, LocalDataset};
use crate::cli::args::{WishlistArgs, WishlistCommands};
use crate::error::Result;
use crate::output;
use crate::wishlist::Wishlist;

/// Toggle a product in the wishlist and format the result
pub(super) fn toggle_product(ctx: &Context, reference: &str) -> Result<String> {
    let id = parse_product_ref(reference)?;
    let mut wishlist = Wishlist::load(ctx.store());
    let toggle = wishlist.toggle(id)?;
    tracing::debug!(id, ?toggle, "wishlist toggled");
    output::format_toggle(id, toggle, wishlist.count(), ctx.format)
}

/// Handle the wishlist command
pub fn wishlist(ctx: &Context, args: &WishlistArgs) -> Result<String> {
    match &args.command {
        Some(WishlistCommands::Toggle { product }) => toggle_product(ctx, product),
        Some(WishlistCommands::Count) => {
            output::format_count(Wishlist::load(ctx.store()).count(), ctx.format)
        }
        None | Some(WishlistCommands::Show) => {
            let entries = Wishlist::load(ctx.store()).entries(&LocalDataset::new());
            output::format_wishlist(&entries, ctx.format)
        }
    }
}
