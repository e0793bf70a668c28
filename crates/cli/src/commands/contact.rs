//! Contact form and admin inbox commands.

use sweet_slac_storefront::models::ContactForm;
use sweet_slac_storefront::routes::Page;
use sweet_slac_storefront::ui::View;

use super::{App, CommandResult, ensure_admin, ensure_allowed, show};

/// Send a contact message.
pub fn submit(app: &mut App, name: String, email: String, message: String) -> CommandResult {
    ensure_allowed(app, Page::Contact)?;
    app.submit_contact(&ContactForm {
        name,
        email,
        message,
    })?;
    Ok(())
}

/// Show the admin inbox.
pub fn messages(app: &mut App) -> CommandResult {
    ensure_admin(app)?;
    show(app, Page::Admin)?;
    app.renderer_mut().request(View::AdminMessages);
    Ok(())
}
