//! Session commands.

use secrecy::SecretString;
use sweet_slac_core::AdminCredential;
use sweet_slac_storefront::services::{RegistrationForm, SignInForm};

use super::{App, CommandResult};

/// Register a customer.
pub fn register(app: &mut App, name: String, email: String, password: String) -> CommandResult {
    app.register(&RegistrationForm {
        name,
        email,
        password: SecretString::from(password),
    })?;
    Ok(())
}

/// Sign a customer in.
pub fn sign_in(app: &mut App, email: String, password: String) -> CommandResult {
    app.sign_in(&SignInForm {
        email,
        password: SecretString::from(password),
    })?;
    Ok(())
}

/// Sign the admin in.
pub fn admin_login(app: &mut App, password: String) -> CommandResult {
    app.admin_login(&AdminCredential::new(password))?;
    Ok(())
}

/// Sign out.
pub fn sign_out(app: &mut App) -> CommandResult {
    app.sign_out()?;
    Ok(())
}
