//! Navigation link targets.

use super::Page;

/// Link IDs and the page each one asks for.
///
/// The target still goes through [`super::resolve`].
pub const NAV_LINKS: [(&str, Page); 13] = [
    ("to-register", Page::Register),
    ("to-signin", Page::SignIn),
    ("nav-signin", Page::SignIn),
    ("nav-signup", Page::Register),
    ("nav-home", Page::Dashboard),
    ("link-home", Page::Dashboard),
    ("link-products", Page::Products),
    ("link-contact", Page::Contact),
    ("hero-shop", Page::Products),
    ("footer-link-products", Page::Products),
    ("footer-link-contact", Page::Contact),
    ("to-admin-login-page", Page::AdminLogin),
    ("to-signin-from-admin", Page::SignIn),
];

/// Page requested by a link, if the ID is a navigation link.
#[must_use]
pub fn page_for_link(link_id: &str) -> Option<Page> {
    NAV_LINKS
        .iter()
        .find(|(id, _)| *id == link_id)
        .map(|&(_, page)| page)
}
