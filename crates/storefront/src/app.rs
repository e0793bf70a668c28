//! The storefront controller.
//!
//! [`Storefront`] owns the snapshot and every collaborator. Each action runs
//! to completion: it applies its change to a copy of the snapshot, prunes the
//! cart, persists the copy and only then swaps it in. A failed action leaves
//! memory and the store exactly as they were, and the user hears about it
//! through the [`Notifier`].

use sweet_slac_core::{AdminCredential, ItemId, Severity, SortOrder, SubmissionId};
use tracing::instrument;

use crate::clock::{Clock, IdSequence, SystemClock};
use crate::error::{Result, StorefrontError};
use crate::models::{
    Cart, Catalog, ContactForm, ContactSubmission, Customer, Inbox, Item, ProductForm,
    QuantityChange, Receipt, Session,
};
use crate::routes::{self, Chrome, Page};
use crate::services::{AuthService, RegistrationForm, SignInForm};
use crate::state::AppState;
use crate::store::{KeyValueStore, StoreKeys};
use crate::ui::{
    AdminProductView, CartView, MessageView, Notifier, ProductCardView, Renderer, View,
};

/// Key that opens the cart panel when the user is not typing.
pub const CART_HOTKEY: char = 'c';

/// Notification texts for successful actions.
pub mod messages {
    pub const ADMIN_LOGIN: &str = "Admin login successful.";
    pub const PRODUCT_ADDED: &str = "Product added successfully.";
    pub const PRODUCT_DELETED: &str = "Product deleted successfully.";
    pub const PRODUCT_MISSING: &str = "Product no longer exists.";
    pub const CHECKOUT: &str = "Checkout successful! Thank you for your order.";
    pub const CONTACT_SENT: &str = "Thank you for your message!";

    #[must_use]
    pub fn welcome(name: &str) -> String {
        format!("Welcome, {name}!")
    }

    #[must_use]
    pub fn welcome_back(name: &str) -> String {
        format!("Welcome back, {name}!")
    }
}

/// A running storefront.
pub struct Storefront<S, N, R, C = SystemClock> {
    store: S,
    keys: StoreKeys,
    state: AppState,
    notifier: N,
    renderer: R,
    clock: C,
    ids: IdSequence,
    page: Page,
    cart_open: bool,
}

impl<S, N, R> Storefront<S, N, R>
where
    S: KeyValueStore,
    N: Notifier,
    R: Renderer,
{
    /// Open a storefront on the system clock.
    ///
    /// # Errors
    ///
    /// Returns `StorefrontError::Store` if the snapshot cannot be read or
    /// written back.
    pub fn open(store: S, keys: StoreKeys, notifier: N, renderer: R) -> Result<Self> {
        Self::open_with_clock(store, keys, notifier, renderer, SystemClock)
    }
}

impl<S, N, R, C> Storefront<S, N, R, C>
where
    S: KeyValueStore,
    N: Notifier,
    R: Renderer,
    C: Clock,
{
    /// Open a storefront with an explicit clock.
    ///
    /// Loads the snapshot, repairs the cart and writes the result back so the
    /// store holds the seed catalog from the first run on.
    ///
    /// # Errors
    ///
    /// Returns `StorefrontError::Store` if the snapshot cannot be read or
    /// written back.
    pub fn open_with_clock(
        mut store: S,
        keys: StoreKeys,
        notifier: N,
        renderer: R,
        clock: C,
    ) -> Result<Self> {
        let mut state = AppState::load(&store, &keys)?;
        state.prune_cart();
        state.persist(&mut store, &keys)?;

        let mut ids = IdSequence::new();
        if let Some(max) = state.catalog.max_generated_id() {
            ids.observe(max);
        }
        if let Some(max) = state.inbox.max_id() {
            ids.observe(max.into());
        }

        let page = routes::landing(&state.session);
        tracing::info!(
            items = state.catalog.len(),
            session = state.session.role(),
            page = %page,
            "storefront opened"
        );

        Ok(Self {
            store,
            keys,
            state,
            notifier,
            renderer,
            clock,
            ids,
            page,
            cart_open: false,
        })
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    #[must_use]
    pub const fn state(&self) -> &AppState {
        &self.state
    }

    #[must_use]
    pub const fn session(&self) -> &Session {
        &self.state.session
    }

    #[must_use]
    pub const fn catalog(&self) -> &Catalog {
        &self.state.catalog
    }

    #[must_use]
    pub const fn cart(&self) -> &Cart {
        &self.state.cart
    }

    #[must_use]
    pub const fn inbox(&self) -> &Inbox {
        &self.state.inbox
    }

    /// The visible page.
    #[must_use]
    pub const fn page(&self) -> Page {
        self.page
    }

    /// Header visibility for the visible page.
    #[must_use]
    pub const fn chrome(&self) -> Chrome {
        Chrome::for_page(self.page, &self.state.session)
    }

    #[must_use]
    pub const fn is_cart_open(&self) -> bool {
        self.cart_open
    }

    #[must_use]
    pub const fn notifier(&self) -> &N {
        &self.notifier
    }

    #[must_use]
    pub const fn renderer(&self) -> &R {
        &self.renderer
    }

    pub const fn renderer_mut(&mut self) -> &mut R {
        &mut self.renderer
    }

    #[must_use]
    pub const fn store(&self) -> &S {
        &self.store
    }

    // =========================================================================
    // Views
    // =========================================================================

    /// Customer product grid in the requested order.
    #[must_use]
    pub fn products(&self, order: SortOrder) -> Vec<ProductCardView> {
        self.state
            .catalog
            .list(order)
            .into_iter()
            .map(ProductCardView::from)
            .collect()
    }

    /// Cart panel contents.
    #[must_use]
    pub fn cart_view(&self) -> CartView {
        CartView::build(&self.state.cart, &self.state.catalog)
    }

    /// Admin product list, in storage order.
    #[must_use]
    pub fn admin_products(&self) -> Vec<AdminProductView> {
        self.state
            .catalog
            .items()
            .iter()
            .map(AdminProductView::from)
            .collect()
    }

    /// Admin inbox, most recent first.
    ///
    /// Empty unless the admin is signed in.
    #[must_use]
    pub fn admin_messages(&self) -> Vec<MessageView> {
        if !self.state.session.is_admin() {
            return Vec::new();
        }
        self.state
            .inbox
            .list()
            .into_iter()
            .map(MessageView::from)
            .collect()
    }

    // =========================================================================
    // Navigation
    // =========================================================================

    /// Show a page, or sign-in if the page needs a session.
    ///
    /// Returns the page actually shown.
    #[instrument(skip(self))]
    pub fn navigate(&mut self, requested: Page) -> Page {
        let page = routes::resolve(requested, &self.state.session);
        if page != requested {
            tracing::debug!(%requested, %page, "redirected without session");
        }
        self.page = page;
        self.renderer.refresh(View::Page);
        page
    }

    /// Follow a navigation link by ID.
    ///
    /// Returns `None` and does nothing if the ID is not a navigation link.
    pub fn follow_link(&mut self, link_id: &str) -> Option<Page> {
        let requested = routes::page_for_link(link_id)?;
        Some(self.navigate(requested))
    }

    // =========================================================================
    // Cart
    // =========================================================================

    /// Add one unit of an item to the cart and open the panel.
    ///
    /// Returns the quantity now held. An ID that is not in the catalog is
    /// pruned straight away and yields 0.
    ///
    /// # Errors
    ///
    /// Returns `StorefrontError::Store` if the change cannot be saved.
    #[instrument(skip(self, id), fields(item = %id))]
    pub fn add_to_cart(&mut self, id: &ItemId) -> Result<u32> {
        let result = self.transact(|state| {
            state.cart.add(id);
            Ok(())
        });
        self.report(result)?;

        let quantity = self.state.cart.quantity_of(id).unwrap_or(0);
        tracing::info!(quantity, "added to cart");
        self.renderer.refresh(View::Cart);
        self.cart_open = true;
        self.renderer.pulse_cart_badge();
        Ok(quantity)
    }

    /// Add `delta` to a line's quantity; zero or below removes the line.
    ///
    /// # Errors
    ///
    /// Returns `StorefrontError::Store` if the change cannot be saved.
    #[instrument(skip(self, id), fields(item = %id))]
    pub fn change_quantity(&mut self, id: &ItemId, delta: i64) -> Result<QuantityChange> {
        let result = self.transact(|state| Ok(state.cart.change_quantity(id, delta)));
        let change = self.report(result)?;
        self.after_quantity_change(change);
        Ok(change)
    }

    /// Add one unit to a line.
    ///
    /// # Errors
    ///
    /// Returns `StorefrontError::Store` if the change cannot be saved.
    pub fn increment(&mut self, id: &ItemId) -> Result<QuantityChange> {
        self.change_quantity(id, 1)
    }

    /// Take one unit off a line, removing it at zero.
    ///
    /// # Errors
    ///
    /// Returns `StorefrontError::Store` if the change cannot be saved.
    pub fn decrement(&mut self, id: &ItemId) -> Result<QuantityChange> {
        self.change_quantity(id, -1)
    }

    /// Remove a line whatever its quantity.
    ///
    /// # Errors
    ///
    /// Returns `StorefrontError::Store` if the change cannot be saved.
    #[instrument(skip(self, id), fields(item = %id))]
    pub fn remove_from_cart(&mut self, id: &ItemId) -> Result<QuantityChange> {
        let result = self.transact(|state| Ok(state.cart.remove(id)));
        let change = self.report(result)?;
        self.after_quantity_change(change);
        Ok(change)
    }

    fn after_quantity_change(&mut self, change: QuantityChange) {
        match change {
            QuantityChange::NotInCart => {}
            QuantityChange::Updated(quantity) => {
                tracing::info!(quantity, "cart quantity changed");
                self.renderer.refresh(View::Cart);
            }
            QuantityChange::Removed => {
                tracing::info!("cart line removed");
                self.renderer.refresh(View::Cart);
            }
        }
    }

    /// Empty the cart as a completed order.
    ///
    /// No order record is kept.
    ///
    /// # Errors
    ///
    /// Returns `StorefrontError::EmptyCart` if there is nothing to check out.
    /// Returns `StorefrontError::Store` if the change cannot be saved.
    #[instrument(skip(self))]
    pub fn checkout(&mut self) -> Result<Receipt> {
        let result = self.transact(|state| state.cart.checkout(&state.catalog));
        if matches!(result, Err(StorefrontError::EmptyCart)) {
            self.renderer.shake_cart_badge();
        }
        let receipt = self.report(result)?;

        tracing::info!(
            lines = receipt.line_count,
            units = receipt.item_count,
            subtotal = receipt.subtotal.amount(),
            "checkout completed"
        );
        self.notifier.notify(messages::CHECKOUT, Severity::Success);
        self.cart_open = false;
        self.renderer.refresh(View::Cart);
        Ok(receipt)
    }

    /// Open the cart panel.
    pub fn open_cart(&mut self) {
        self.cart_open = true;
        self.renderer.refresh(View::Cart);
    }

    /// Close the cart panel. Also used for a click outside it.
    pub fn close_cart(&mut self) {
        self.cart_open = false;
        self.renderer.refresh(View::Cart);
    }

    /// Handle a key press. Returns whether the key did anything.
    ///
    /// `typing` is true while focus is in a text field.
    pub fn handle_key(&mut self, key: char, typing: bool) -> bool {
        if typing || !key.eq_ignore_ascii_case(&CART_HOTKEY) {
            return false;
        }
        self.open_cart();
        true
    }

    // =========================================================================
    // Session
    // =========================================================================

    /// Register a customer and show the dashboard.
    ///
    /// # Errors
    ///
    /// Returns `StorefrontError::Validation` for blank fields or a malformed
    /// email, `StorefrontError::SessionConflict` while the admin is signed in,
    /// and `StorefrontError::Store` if the change cannot be saved.
    #[instrument(skip(self, form), fields(email = %form.email))]
    pub fn register(&mut self, form: &RegistrationForm) -> Result<Customer> {
        let result = self.transact(|state| AuthService::new(state).register_customer(form));
        let customer = self.report(result)?;

        tracing::info!(name = %customer.name, "customer registered");
        self.renderer.refresh(View::Cart);
        self.navigate(Page::Dashboard);
        self.notifier
            .notify(&messages::welcome(&customer.name), Severity::Success);
        Ok(customer)
    }

    /// Sign a customer in and show the dashboard. The cart is kept.
    ///
    /// # Errors
    ///
    /// Returns `StorefrontError::Validation` for blank fields,
    /// `StorefrontError::SessionConflict` while the admin is signed in, and
    /// `StorefrontError::Store` if the change cannot be saved.
    #[instrument(skip(self, form), fields(email = %form.email))]
    pub fn sign_in(&mut self, form: &SignInForm) -> Result<Customer> {
        let result = self.transact(|state| AuthService::new(state).sign_in_customer(form));
        let customer = self.report(result)?;

        tracing::info!(name = %customer.name, "customer signed in");
        self.renderer.refresh(View::Cart);
        self.navigate(Page::Dashboard);
        self.notifier
            .notify(&messages::welcome_back(&customer.name), Severity::Success);
        Ok(customer)
    }

    /// Sign the admin in and show the admin page.
    ///
    /// # Errors
    ///
    /// Returns `StorefrontError::InvalidCredentials` for a wrong password,
    /// `StorefrontError::SessionConflict` while a customer is signed in, and
    /// `StorefrontError::Store` if the change cannot be saved.
    #[instrument(skip(self, credential))]
    pub fn admin_login(&mut self, credential: &AdminCredential) -> Result<()> {
        let result = self.transact(|state| AuthService::new(state).sign_in_admin(credential));
        self.report(result)?;

        tracing::info!("admin signed in");
        self.renderer.refresh(View::AdminMessages);
        self.renderer.refresh(View::AdminProducts);
        self.navigate(Page::Admin);
        self.notifier.notify(messages::ADMIN_LOGIN, Severity::Success);
        Ok(())
    }

    /// End the session, empty the cart and show sign-in.
    ///
    /// # Errors
    ///
    /// Returns `StorefrontError::Store` if the change cannot be saved.
    #[instrument(skip(self))]
    pub fn sign_out(&mut self) -> Result<()> {
        let previous = self.state.session.role();
        let result = self.transact(|state| {
            AuthService::new(state).sign_out();
            Ok(())
        });
        self.report(result)?;

        tracing::info!(previous, "signed out");
        self.renderer.refresh(View::Cart);
        self.navigate(Page::SignIn);
        Ok(())
    }

    // =========================================================================
    // Catalog
    // =========================================================================

    /// Add a product to the front of the catalog.
    ///
    /// # Errors
    ///
    /// Returns `StorefrontError::AdminRequired` unless the admin is signed
    /// in, `StorefrontError::Validation` if a field is blank and
    /// `StorefrontError::Store` if the change cannot be saved.
    #[instrument(skip(self, form), fields(name = %form.name))]
    pub fn add_product(&mut self, form: &ProductForm) -> Result<Item> {
        let id = ItemId::generated(self.ids.next(self.clock.now()));
        let result = self.transact(|state| {
            require_admin(&state.session)?;
            Ok(state.catalog.add(form, id)?)
        });
        let item = self.report(result)?;

        tracing::info!(id = %item.id, price = item.price.amount(), "product added");
        self.renderer.refresh(View::Products);
        self.renderer.refresh(View::AdminProducts);
        self.notifier.notify(messages::PRODUCT_ADDED, Severity::Success);
        Ok(item)
    }

    /// Delete a product. Cart lines pointing at it are pruned in the same
    /// step.
    ///
    /// Returns `false` if there was no such product.
    ///
    /// # Errors
    ///
    /// Returns `StorefrontError::AdminRequired` unless the admin is signed in
    /// and `StorefrontError::Store` if the change cannot be saved.
    #[instrument(skip(self, id), fields(item = %id))]
    pub fn delete_product(&mut self, id: &ItemId) -> Result<bool> {
        let result = self.transact(|state| {
            require_admin(&state.session)?;
            Ok(state.catalog.remove(id))
        });
        let removed = self.report(result)?;

        if !removed {
            self.notifier.notify(messages::PRODUCT_MISSING, Severity::Info);
            return Ok(false);
        }

        tracing::info!("product deleted");
        self.renderer.refresh(View::Products);
        self.renderer.refresh(View::AdminProducts);
        self.renderer.refresh(View::Cart);
        self.notifier
            .notify(messages::PRODUCT_DELETED, Severity::Success);
        Ok(true)
    }

    // =========================================================================
    // Contact
    // =========================================================================

    /// Record a contact message and show the dashboard.
    ///
    /// # Errors
    ///
    /// Returns `StorefrontError::Validation` if a field is blank and
    /// `StorefrontError::Store` if the change cannot be saved.
    #[instrument(skip(self, form), fields(email = %form.email))]
    pub fn submit_contact(&mut self, form: &ContactForm) -> Result<ContactSubmission> {
        let now = self.clock.now();
        let id = SubmissionId::new(self.ids.next(now));
        let result = self.transact(|state| Ok(state.inbox.submit(form, id, now)?));
        let submission = self.report(result)?;

        tracing::info!(id = %submission.id, "contact message received");
        self.renderer.refresh(View::AdminMessages);
        self.notifier.notify(messages::CONTACT_SENT, Severity::Success);
        self.navigate(Page::Dashboard);
        Ok(submission)
    }

    // =========================================================================
    // Maintenance
    // =========================================================================

    /// Wipe the store and start over from the seed catalog.
    ///
    /// # Errors
    ///
    /// Returns `StorefrontError::Store` if a key cannot be cleared. Keys
    /// cleared before the failure stay cleared.
    #[instrument(skip(self))]
    pub fn reset(&mut self) -> Result<()> {
        let keys = self.keys.clone();
        for key in keys.all() {
            let result = self.store.clear(key).map_err(StorefrontError::from);
            self.report(result)?;
        }
        self.state = AppState::default();
        self.cart_open = false;
        tracing::info!("storefront reset");

        for view in [
            View::Products,
            View::Cart,
            View::AdminProducts,
            View::AdminMessages,
        ] {
            self.renderer.refresh(view);
        }
        self.navigate(routes::landing(&self.state.session));
        Ok(())
    }

    // =========================================================================
    // Helpers
    // =========================================================================

    /// Apply a change to a copy of the snapshot and commit it once it has
    /// been persisted.
    fn transact<T>(&mut self, apply: impl FnOnce(&mut AppState) -> Result<T>) -> Result<T> {
        let mut next = self.state.clone();
        let value = apply(&mut next)?;
        next.prune_cart();
        next.persist(&mut self.store, &self.keys)?;
        self.state = next;
        Ok(value)
    }

    /// Tell the user about a failed action.
    fn report<T>(&mut self, result: Result<T>) -> Result<T> {
        if let Err(err) = &result {
            match err {
                StorefrontError::Store(source) => {
                    tracing::error!(error = %source, "failed to persist snapshot");
                }
                other => tracing::debug!(error = %other, "action refused"),
            }
            self.notifier.notify(&err.user_message(), err.severity());
        }
        result
    }
}

/// Catalog changes belong to the admin session alone.
fn require_admin(session: &Session) -> Result<()> {
    if session.is_admin() {
        Ok(())
    } else {
        Err(StorefrontError::AdminRequired)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::cell::Cell;
    use std::rc::Rc;

    use chrono::{TimeZone, Utc};
    use secrecy::SecretString;

    use super::*;
    use crate::clock::ManualClock;
    use crate::store::{MemoryStore, StoreError};
    use crate::ui::NullRenderer;
    use crate::ui::testing::{RecordingNotifier, RecordingRenderer};

    type TestStorefront =
        Storefront<MemoryStore, RecordingNotifier, RecordingRenderer, ManualClock>;

    fn storefront() -> TestStorefront {
        Storefront::open_with_clock(
            MemoryStore::new(),
            StoreKeys::default(),
            RecordingNotifier::new(),
            RecordingRenderer::new(),
            ManualClock::new(Utc.timestamp_millis_opt(1_700_000_000_000).unwrap()),
        )
        .unwrap()
    }

    fn admin() -> TestStorefront {
        let mut app = storefront();
        app.admin_login(&AdminCredential::new("admin123")).unwrap();
        app
    }

    fn signed_in() -> TestStorefront {
        let mut app = storefront();
        app.sign_in(&SignInForm {
            email: "kai@example.com".to_string(),
            password: SecretString::from("pw".to_string()),
        })
        .unwrap();
        app
    }

    /// A store whose writes fail while the shared flag is set.
    struct FlakyStore {
        inner: MemoryStore,
        failing: Rc<Cell<bool>>,
    }

    impl KeyValueStore for FlakyStore {
        fn get(&self, key: &str) -> std::result::Result<Option<String>, StoreError> {
            self.inner.get(key)
        }

        fn set(&mut self, key: &str, value: String) -> std::result::Result<(), StoreError> {
            if self.failing.get() {
                return Err(StoreError::Io {
                    key: key.to_owned(),
                    source: std::io::Error::other("disk full"),
                });
            }
            self.inner.set(key, value)
        }

        fn clear(&mut self, key: &str) -> std::result::Result<(), StoreError> {
            self.inner.clear(key)
        }
    }

    #[test]
    fn test_open_persists_seed_and_lands_on_sign_in() {
        let app = Storefront::open(
            MemoryStore::new(),
            StoreKeys::default(),
            RecordingNotifier::new(),
            NullRenderer,
        )
        .unwrap();
        assert_eq!(app.page(), Page::SignIn);
        assert!(app.store().get("catalog").unwrap().is_some());
        assert_eq!(app.catalog().len(), 4);
    }

    #[test]
    fn test_add_to_cart_opens_panel_and_pulses() {
        let mut app = signed_in();
        app.renderer_mut().reset();
        assert_eq!(app.add_to_cart(&ItemId::from("a1")).unwrap(), 1);
        assert_eq!(app.add_to_cart(&ItemId::from("a1")).unwrap(), 2);
        assert!(app.is_cart_open());
        assert_eq!(app.renderer().pulses, 2);
        assert!(app.renderer().saw(View::Cart));
        assert_eq!(app.cart_view().subtotal, "₹4,998");
    }

    #[test]
    fn test_add_unknown_item_is_pruned() {
        let mut app = signed_in();
        assert_eq!(app.add_to_cart(&ItemId::from("nope")).unwrap(), 0);
        assert!(app.cart().is_empty());
    }

    #[test]
    fn test_checkout_empty_cart_shakes_badge() {
        let mut app = signed_in();
        let err = app.checkout().unwrap_err();
        assert!(matches!(err, StorefrontError::EmptyCart));
        assert_eq!(app.renderer().shakes, 1);
        assert_eq!(
            app.notifier().last(),
            Some(("Your cart is empty.", Severity::Error))
        );
    }

    #[test]
    fn test_checkout_closes_panel() {
        let mut app = signed_in();
        app.add_to_cart(&ItemId::from("a3")).unwrap();
        let receipt = app.checkout().unwrap();
        assert_eq!(receipt.item_count, 1);
        assert!(!app.is_cart_open());
        assert!(app.cart().is_empty());
        assert_eq!(
            app.notifier().last(),
            Some((messages::CHECKOUT, Severity::Success))
        );
    }

    #[test]
    fn test_delete_product_prunes_cart() {
        let mut app = admin();
        app.add_to_cart(&ItemId::from("a1")).unwrap();
        app.add_to_cart(&ItemId::from("a2")).unwrap();
        assert!(app.delete_product(&ItemId::from("a1")).unwrap());
        assert_eq!(app.cart().len(), 1);
        assert_eq!(app.cart().quantity_of(&ItemId::from("a1")), None);

        assert!(!app.delete_product(&ItemId::from("a1")).unwrap());
        assert_eq!(
            app.notifier().last(),
            Some((messages::PRODUCT_MISSING, Severity::Info))
        );
    }

    #[test]
    fn test_add_product_ids_are_unique_on_a_frozen_clock() {
        let mut app = admin();
        let form = ProductForm {
            name: "Soap".to_string(),
            image_ref: "img.png".to_string(),
            price: "abc".to_string(),
        };
        let first = app.add_product(&form).unwrap();
        let second = app.add_product(&form).unwrap();
        assert_ne!(first.id, second.id);
        assert_eq!(first.price.amount(), 0);
        assert_eq!(app.catalog().items().first().unwrap().id, second.id);
    }

    #[test]
    fn test_hotkey() {
        let mut app = signed_in();
        assert!(!app.handle_key('c', true));
        assert!(!app.is_cart_open());
        assert!(!app.handle_key('x', false));
        assert!(app.handle_key('C', false));
        assert!(app.is_cart_open());
        app.close_cart();
        assert!(!app.is_cart_open());
    }

    #[test]
    fn test_contact_goes_to_dashboard() {
        let mut app = signed_in();
        app.navigate(Page::Contact);
        let submission = app
            .submit_contact(&ContactForm {
                name: "Kai".to_string(),
                email: "kai".to_string(),
                message: "Hello".to_string(),
            })
            .unwrap();
        assert_eq!(app.page(), Page::Dashboard);
        assert_eq!(app.inbox().list().first().unwrap().name, "Kai");
        assert_eq!(app.inbox().max_id(), Some(submission.id));
        assert!(app.admin_messages().is_empty());

        app.sign_out().unwrap();
        app.admin_login(&AdminCredential::new("admin123")).unwrap();
        assert_eq!(app.admin_messages().first().unwrap().from, "Kai");
    }

    #[test]
    fn test_catalog_changes_need_admin_session() {
        for mut app in [storefront(), signed_in()] {
            let err = app
                .add_product(&ProductForm {
                    name: "Soap".to_string(),
                    image_ref: "img.png".to_string(),
                    price: "10".to_string(),
                })
                .unwrap_err();
            assert!(matches!(err, StorefrontError::AdminRequired));

            let err = app.delete_product(&ItemId::from("a1")).unwrap_err();
            assert!(matches!(err, StorefrontError::AdminRequired));
            assert_eq!(app.catalog(), &Catalog::seeded());
            assert_eq!(
                app.notifier().last(),
                Some(("Please log in as admin.", Severity::Error))
            );
        }
    }

    #[test]
    fn test_failed_persist_changes_nothing() {
        let failing = Rc::new(Cell::new(false));
        let store = FlakyStore {
            inner: MemoryStore::new(),
            failing: Rc::clone(&failing),
        };
        let mut app = Storefront::open_with_clock(
            store,
            StoreKeys::default(),
            RecordingNotifier::new(),
            RecordingRenderer::new(),
            ManualClock::new(Utc.timestamp_millis_opt(0).unwrap()),
        )
        .unwrap();
        app.add_to_cart(&ItemId::from("a1")).unwrap();
        let stored_cart = app.store().get("cart").unwrap();

        failing.set(true);
        let err = app.add_to_cart(&ItemId::from("a1")).unwrap_err();
        assert!(matches!(err, StorefrontError::Store(_)));
        assert_eq!(app.cart().quantity_of(&ItemId::from("a1")), Some(1));
        assert_eq!(app.store().get("cart").unwrap(), stored_cart);
        assert_eq!(
            app.notifier().last(),
            Some((
                "Could not save your changes. Please try again.",
                Severity::Error
            ))
        );
    }

    #[test]
    fn test_reset_restores_seed() {
        let mut app = admin();
        app.delete_product(&ItemId::from("a4")).unwrap();
        app.reset().unwrap();
        assert_eq!(app.catalog(), &Catalog::seeded());
        assert_eq!(app.session(), &Session::Absent);
        assert_eq!(app.page(), Page::SignIn);
        assert!(app.store().get("catalog").unwrap().is_none());
    }
}
