//! Page navigation and maintenance.

use sweet_slac_storefront::routes::Page;

use super::{App, CliError, CommandResult, session};

/// Link that signs out instead of navigating.
const SIGN_OUT_LINK: &str = "nav-signout";

/// Show a page by key, or follow a navigation link by ID.
pub fn open(app: &mut App, target: &str) -> CommandResult {
    if let Ok(page) = target.parse::<Page>() {
        app.navigate(page);
        return Ok(());
    }
    if target == SIGN_OUT_LINK {
        return session::sign_out(app);
    }
    app.follow_link(target)
        .map(|_| ())
        .ok_or_else(|| CliError::UnknownTarget(target.to_owned()).into())
}

/// Wipe saved state.
pub fn reset(app: &mut App) -> CommandResult {
    app.reset()?;
    tracing::info!("saved state cleared");
    Ok(())
}
