//! Integration tests for session transitions and page routing.

#![allow(clippy::unwrap_used)]

use sweet_slac_core::{AdminCredential, ItemId, Severity};
use sweet_slac_integration_tests::{
    TestStorefront, admin_password, admin_storefront, customer_storefront, product_form,
    registration_form, sign_in_form, storefront,
};
use sweet_slac_storefront::StorefrontError;
use sweet_slac_storefront::models::{ContactForm, Customer, Session};
use sweet_slac_storefront::routes::{self, NAV_LINKS, Page};

fn all_sessions() -> Vec<Session> {
    vec![
        Session::Absent,
        Session::Customer(Customer {
            name: "asha".to_string(),
            email: "asha@example.com".to_string(),
        }),
        Session::Admin,
    ]
}

// =============================================================================
// Router
// =============================================================================

#[test]
fn test_router_is_total() {
    for session in all_sessions() {
        for page in Page::ALL {
            let shown = routes::resolve(page, &session);
            if session == Session::Absent && !page.is_pre_auth() {
                assert_eq!(shown, Page::SignIn);
            } else {
                assert_eq!(shown, page);
            }
        }
    }
}

#[test]
fn test_navigation_without_session_lands_on_sign_in() {
    let mut app = storefront();
    assert_eq!(app.navigate(Page::Products), Page::SignIn);
    assert_eq!(app.navigate(Page::AdminLogin), Page::AdminLogin);
    assert!(!app.chrome().header_visible);
    assert_eq!(app.follow_link("hero-shop"), Some(Page::SignIn));
    assert_eq!(app.follow_link("to-register"), Some(Page::Register));
}

#[test]
fn test_every_link_resolves_with_session() {
    let mut app = customer_storefront();
    for (link, page) in NAV_LINKS {
        assert_eq!(app.follow_link(link), Some(page));
        assert_eq!(app.page(), page);
        assert_eq!(app.chrome().header_visible, !page.is_pre_auth());
    }
    assert_eq!(app.follow_link("btn-checkout"), None);
}

#[test]
fn test_admin_page_shows_nothing_to_a_customer() {
    let mut app = customer_storefront();
    app.submit_contact(&ContactForm {
        name: "Asha".to_string(),
        email: "asha@example.com".to_string(),
        message: "Hello".to_string(),
    })
    .unwrap();

    // Routing only looks at whether a session exists.
    assert_eq!(app.navigate(Page::Admin), Page::Admin);
    assert!(app.admin_messages().is_empty());

    let err = app.delete_product(&ItemId::from("a1")).unwrap_err();
    assert!(matches!(err, StorefrontError::AdminRequired));
    let err = app
        .add_product(&product_form("Soap", "soap.png", "99"))
        .unwrap_err();
    assert!(matches!(err, StorefrontError::AdminRequired));
    assert_eq!(app.catalog().len(), 4);
    assert_eq!(app.inbox().len(), 1);
}

#[test]
fn test_catalog_changes_refused_without_session() {
    let mut app = storefront();
    assert!(app.delete_product(&ItemId::from("a1")).is_err());
    assert!(app.add_product(&product_form("Soap", "soap.png", "99")).is_err());
    assert_eq!(app.catalog().len(), 4);
    assert_eq!(
        app.notifier().last(),
        Some(("Please log in as admin.", Severity::Error))
    );
}

#[test]
fn test_admin_reads_the_inbox() {
    let mut app = customer_storefront();
    app.submit_contact(&ContactForm {
        name: "Asha".to_string(),
        email: "asha@example.com".to_string(),
        message: "Hello".to_string(),
    })
    .unwrap();
    app.sign_out().unwrap();
    app.admin_login(&admin_password()).unwrap();

    let messages = app.admin_messages();
    assert_eq!(messages.len(), 1);
    assert_eq!(messages.first().unwrap().from, "Asha");
}

// =============================================================================
// Customer
// =============================================================================

#[test]
fn test_register_starts_with_empty_cart() {
    let mut app = customer_storefront();
    app.add_to_cart(&ItemId::from("a1")).unwrap();
    app.sign_out().unwrap();

    app.sign_in(&sign_in_form("asha@example.com", "pw")).unwrap();
    app.add_to_cart(&ItemId::from("a2")).unwrap();

    // A registration replaces the session and starts a fresh cart.
    let customer = app
        .register(&registration_form("Ravi", "ravi@example.com", "secret"))
        .unwrap();
    assert_eq!(customer.name, "Ravi");
    assert!(app.cart().is_empty());
    assert_eq!(app.page(), Page::Dashboard);
    assert_eq!(
        app.notifier().last(),
        Some(("Welcome, Ravi!", Severity::Success))
    );
}

#[test]
fn test_register_rejects_bad_email() {
    let mut app = storefront();
    let err = app
        .register(&registration_form("Ravi", "ravi@localhost", "secret"))
        .unwrap_err();
    assert_eq!(err.user_message(), "Please enter a valid email.");
    assert_eq!(app.session(), &Session::Absent);
    assert_eq!(app.page(), Page::SignIn);
}

#[test]
fn test_sign_in_keeps_cart() {
    let mut app = customer_storefront();
    app.add_to_cart(&ItemId::from("a3")).unwrap();

    let customer = app
        .sign_in(&sign_in_form("meera.k@example.com", "x"))
        .unwrap();
    assert_eq!(customer.name, "meera.k");
    assert_eq!(app.cart().quantity_of(&ItemId::from("a3")), Some(1));
    assert_eq!(
        app.notifier().last(),
        Some(("Welcome back, meera.k!", Severity::Success))
    );
}

// =============================================================================
// Admin
// =============================================================================

#[test]
fn test_wrong_admin_password_changes_nothing() {
    for mut app in [storefront(), customer_storefront()] {
        let before = app.session().clone();
        let page = app.page();
        let err = app.admin_login(&AdminCredential::new("wrong")).unwrap_err();
        assert!(matches!(err, StorefrontError::InvalidCredentials));
        assert_eq!(app.session(), &before);
        assert_eq!(app.page(), page);
        assert_eq!(
            app.notifier().last(),
            Some(("Incorrect password.", Severity::Error))
        );
    }
}

#[test]
fn test_admin_login_opens_admin_page() {
    let app = admin_storefront();
    assert!(app.session().is_admin());
    assert_eq!(app.page(), Page::Admin);
    assert_eq!(app.session().display_name(), Some("Admin"));
}

#[test]
fn test_no_direct_role_switch() {
    let mut app = customer_storefront();
    let err = app.admin_login(&admin_password()).unwrap_err();
    assert_eq!(err.user_message(), "Please sign out first.");
    assert!(app.session().customer().is_some());

    let mut app = admin_storefront();
    let err = app.sign_in(&sign_in_form("a@b.c", "x")).unwrap_err();
    assert!(matches!(err, StorefrontError::SessionConflict { .. }));
    assert!(app.session().is_admin());
}

// =============================================================================
// Sign-out
// =============================================================================

#[test]
fn test_sign_out_clears_cart_for_every_session() {
    let starts: [fn() -> TestStorefront; 3] = [storefront, customer_storefront, admin_storefront];
    for start in starts {
        let mut app = start();
        app.add_to_cart(&ItemId::from("a1")).unwrap();
        app.add_to_cart(&ItemId::from("a4")).unwrap();
        assert!(!app.cart().is_empty());

        app.sign_out().unwrap();
        assert!(app.cart().lines().is_empty());
        assert_eq!(app.session(), &Session::Absent);
        assert_eq!(app.page(), Page::SignIn);
        assert!(app.chrome().show_sign_in);
    }
}

#[test]
fn test_landing_page_follows_session() {
    assert_eq!(storefront().page(), Page::SignIn);
    assert_eq!(routes::landing(customer_storefront().session()), Page::Dashboard);
}
