//! Page routing.
//!
//! Exactly one page is visible at a time. Without a session only the three
//! pre-auth pages can be shown; any other request lands on sign-in. This is
//! the only access control in the storefront and it is UI-level only.
//!
//! # Pages
//!
//! ```text
//! signin      - Customer sign-in          (pre-auth)
//! register    - Customer registration     (pre-auth)
//! adminLogin  - Admin password form       (pre-auth)
//! dashboard   - Home with carousel
//! products    - Catalog with sort
//! admin       - Product management and inbox
//! contact     - Contact form
//! ```

pub mod links;

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use crate::models::Session;

pub use links::{NAV_LINKS, page_for_link};

/// A page of the storefront.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Page {
    SignIn,
    Register,
    AdminLogin,
    Dashboard,
    Products,
    Admin,
    Contact,
}

impl Page {
    /// Every page, in navigation order.
    pub const ALL: [Self; 7] = [
        Self::SignIn,
        Self::Register,
        Self::AdminLogin,
        Self::Dashboard,
        Self::Products,
        Self::Admin,
        Self::Contact,
    ];

    /// Stable key of the page.
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::SignIn => "signin",
            Self::Register => "register",
            Self::AdminLogin => "adminLogin",
            Self::Dashboard => "dashboard",
            Self::Products => "products",
            Self::Admin => "admin",
            Self::Contact => "contact",
        }
    }

    /// Whether the page can be shown without a session.
    #[must_use]
    pub const fn is_pre_auth(self) -> bool {
        matches!(self, Self::SignIn | Self::Register | Self::AdminLogin)
    }
}

impl fmt::Display for Page {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// No page has the given key.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown page: {0}")]
pub struct UnknownPage(pub String);

impl FromStr for Page {
    type Err = UnknownPage;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|page| page.key() == s)
            .ok_or_else(|| UnknownPage(s.to_owned()))
    }
}

/// The page actually shown when `requested` is asked for.
#[must_use]
pub const fn resolve(requested: Page, session: &Session) -> Page {
    match session {
        Session::Absent if !requested.is_pre_auth() => Page::SignIn,
        _ => requested,
    }
}

/// The page shown at startup.
#[must_use]
pub const fn landing(session: &Session) -> Page {
    if session.is_authenticated() {
        Page::Dashboard
    } else {
        Page::SignIn
    }
}

/// Visibility of the header and its session links.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Chrome {
    pub header_visible: bool,
    pub show_sign_in: bool,
    pub show_sign_up: bool,
    pub show_sign_out: bool,
}

impl Chrome {
    /// Chrome for a resolved page. The header is hidden on pre-auth pages.
    #[must_use]
    pub const fn for_page(page: Page, session: &Session) -> Self {
        let signed_in = session.is_authenticated();
        Self {
            header_visible: !page.is_pre_auth(),
            show_sign_in: !signed_in,
            show_sign_up: !signed_in,
            show_sign_out: signed_in,
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::models::Customer;

    fn sessions() -> [Session; 3] {
        [
            Session::Absent,
            Session::Customer(Customer {
                name: "a".to_string(),
                email: "a@b.c".to_string(),
            }),
            Session::Admin,
        ]
    }

    #[test]
    fn test_resolve_without_session() {
        for page in Page::ALL {
            let expected = if page.is_pre_auth() { page } else { Page::SignIn };
            assert_eq!(resolve(page, &Session::Absent), expected);
        }
    }

    #[test]
    fn test_resolve_with_session_is_identity() {
        for session in sessions().iter().skip(1) {
            for page in Page::ALL {
                assert_eq!(resolve(page, session), page);
            }
        }
    }

    #[test]
    fn test_keys_round_trip() {
        for page in Page::ALL {
            assert_eq!(page.key().parse::<Page>().unwrap(), page);
        }
        assert!("checkout".parse::<Page>().is_err());
    }

    #[test]
    fn test_landing() {
        assert_eq!(landing(&Session::Absent), Page::SignIn);
        assert_eq!(landing(&Session::Admin), Page::Dashboard);
    }

    #[test]
    fn test_chrome() {
        let chrome = Chrome::for_page(Page::SignIn, &Session::Absent);
        assert!(!chrome.header_visible);
        assert!(chrome.show_sign_in && chrome.show_sign_up);
        assert!(!chrome.show_sign_out);

        let chrome = Chrome::for_page(Page::Products, &Session::Admin);
        assert!(chrome.header_visible);
        assert!(chrome.show_sign_out);
        assert!(!chrome.show_sign_in);
    }
}
