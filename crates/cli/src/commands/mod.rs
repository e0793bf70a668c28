//! One module per area of the storefront.

pub mod cart;
pub mod catalog;
pub mod contact;
pub mod navigation;
pub mod session;

use std::error::Error;

use sweet_slac_storefront::routes::{self, Page};
use sweet_slac_storefront::store::KeyValueStore;
use sweet_slac_storefront::ui::TracingNotifier;
use sweet_slac_storefront::{Storefront, StorefrontConfig};
use thiserror::Error;

use crate::console::ConsoleRenderer;

/// The storefront as the CLI runs it.
pub type App = Storefront<Box<dyn KeyValueStore>, TracingNotifier, ConsoleRenderer>;

/// Result of a command.
pub type CommandResult = Result<(), Box<dyn Error>>;

/// Errors raised by the CLI itself rather than the storefront.
#[derive(Debug, Error)]
pub enum CliError {
    #[error("sign in to use the {0} page")]
    SignInRequired(Page),
    #[error("log in as admin to use this command")]
    AdminRequired,
    #[error("unknown page or link: {0}")]
    UnknownTarget(String),
}

/// Open the storefront described by the environment.
///
/// # Errors
///
/// Returns an error if the configuration is invalid or the store cannot be
/// opened.
pub fn open() -> Result<App, Box<dyn Error>> {
    let config = StorefrontConfig::from_env()?;
    let store = config.open_store()?;
    let app = Storefront::open(
        store,
        config.store_keys(),
        TracingNotifier,
        ConsoleRenderer::default(),
    )?;
    Ok(app)
}

/// Fail unless the current session may see `page`.
fn ensure_allowed(app: &App, page: Page) -> CommandResult {
    if routes::resolve(page, app.session()) == page {
        Ok(())
    } else {
        Err(CliError::SignInRequired(page).into())
    }
}

/// Fail unless the admin is signed in.
fn ensure_admin(app: &App) -> CommandResult {
    if app.session().is_admin() {
        Ok(())
    } else {
        Err(CliError::AdminRequired.into())
    }
}

/// Show `page`, failing if the router sends us elsewhere.
fn show(app: &mut App, page: Page) -> CommandResult {
    if app.navigate(page) == page {
        Ok(())
    } else {
        Err(CliError::SignInRequired(page).into())
    }
}
