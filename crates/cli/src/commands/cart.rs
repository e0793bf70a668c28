//! Cart commands.

use sweet_slac_core::ItemId;
use sweet_slac_storefront::models::QuantityChange;
use sweet_slac_storefront::routes::Page;

use super::{App, CommandResult, ensure_allowed};

/// Open the cart panel.
pub fn show(app: &mut App) -> CommandResult {
    app.open_cart();
    Ok(())
}

/// Add one unit of a product.
pub fn add(app: &mut App, id: &ItemId) -> CommandResult {
    ensure_allowed(app, Page::Products)?;
    if app.add_to_cart(id)? == 0 {
        tracing::warn!(item = %id, "no such product");
    }
    Ok(())
}

/// Change a line's quantity by `delta`.
pub fn change(app: &mut App, id: &ItemId, delta: i64) -> CommandResult {
    report_missing(id, app.change_quantity(id, delta)?);
    Ok(())
}

/// Remove a line.
pub fn remove(app: &mut App, id: &ItemId) -> CommandResult {
    report_missing(id, app.remove_from_cart(id)?);
    Ok(())
}

/// Check out the cart.
pub fn checkout(app: &mut App) -> CommandResult {
    let receipt = app.checkout()?;
    tracing::info!(
        units = receipt.item_count,
        total = %receipt.subtotal,
        "order placed"
    );
    Ok(())
}

fn report_missing(id: &ItemId, change: QuantityChange) {
    if change == QuantityChange::NotInCart {
        tracing::warn!(item = %id, "not in cart");
    }
}
