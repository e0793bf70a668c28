//! Product listing and admin catalog commands.

use std::io::{self, Write};

use sweet_slac_core::{ItemId, SortOrder};
use sweet_slac_storefront::models::ProductForm;
use sweet_slac_storefront::routes::Page;
use sweet_slac_storefront::ui::View;

use super::{App, CommandResult, ensure_admin, show};
use crate::console;

/// Show the products page in the requested order.
pub fn list(app: &mut App, sort: SortOrder) -> CommandResult {
    show(app, Page::Products)?;
    console::flush(app)?;

    let mut out = io::stdout().lock();
    console::write_products(&mut out, "Products", &app.products(sort))?;
    out.flush()?;
    Ok(())
}

/// Show the admin product list.
pub fn admin_list(app: &mut App) -> CommandResult {
    ensure_admin(app)?;
    show(app, Page::Admin)?;
    app.renderer_mut().request(View::AdminProducts);
    Ok(())
}

/// Add a product.
pub fn add(app: &mut App, name: String, image_ref: String, price: String) -> CommandResult {
    ensure_admin(app)?;
    let item = app.add_product(&ProductForm {
        name,
        image_ref,
        price,
    })?;
    tracing::info!(id = %item.id, price = %item.price, "new product");
    Ok(())
}

/// Delete a product.
pub fn delete(app: &mut App, id: &ItemId) -> CommandResult {
    ensure_admin(app)?;
    app.delete_product(id)?;
    Ok(())
}
