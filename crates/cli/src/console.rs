//! Terminal output.
//!
//! [`ConsoleRenderer`] only remembers which views went stale; [`flush`]
//! prints them once the action is over so each view appears at most once.

use std::collections::BTreeSet;
use std::io::{self, Write};

use sweet_slac_storefront::ui::{MessageView, ProductCardView, Renderer, View};

use crate::commands::App;

/// Collects refresh requests for printing after the action.
#[derive(Debug, Default)]
pub struct ConsoleRenderer {
    dirty: BTreeSet<View>,
    pulsed: bool,
    shaken: bool,
}

impl ConsoleRenderer {
    /// Mark a view for printing without a state change.
    pub fn request(&mut self, view: View) {
        self.dirty.insert(view);
    }

    fn take(&mut self) -> (BTreeSet<View>, bool, bool) {
        let pulsed = std::mem::take(&mut self.pulsed);
        let shaken = std::mem::take(&mut self.shaken);
        (std::mem::take(&mut self.dirty), pulsed, shaken)
    }
}

impl Renderer for ConsoleRenderer {
    fn refresh(&mut self, view: View) {
        self.dirty.insert(view);
    }

    fn pulse_cart_badge(&mut self) {
        self.pulsed = true;
    }

    fn shake_cart_badge(&mut self) {
        self.shaken = true;
    }
}

/// Print every view marked since the last flush.
///
/// # Errors
///
/// Returns an error if stdout cannot be written.
pub fn flush(app: &mut App) -> io::Result<()> {
    let (dirty, pulsed, shaken) = app.renderer_mut().take();
    let mut out = io::stdout().lock();

    for view in dirty {
        match view {
            View::Page => write_page(&mut out, app)?,
            View::Products => {
                let cards = app.products(sweet_slac_core::SortOrder::None);
                write_products(&mut out, "Products", &cards)?;
            }
            View::Cart => write_cart(&mut out, app, pulsed, shaken)?,
            View::AdminProducts => {
                write_products(&mut out, "Catalog (admin)", &app.admin_products())?;
            }
            View::AdminMessages => write_messages(&mut out, &app.admin_messages())?,
        }
    }
    out.flush()
}

fn write_page(out: &mut impl Write, app: &App) -> io::Result<()> {
    let chrome = app.chrome();
    let mut links = Vec::new();
    if chrome.show_sign_in {
        links.push("sign-in");
    }
    if chrome.show_sign_up {
        links.push("sign-up");
    }
    if chrome.show_sign_out {
        links.push("sign-out");
    }

    let who = app.session().display_name().unwrap_or("guest");
    writeln!(out, "== {} ({who}) ==", app.page())?;
    if chrome.header_visible {
        writeln!(out, "   [{}]", links.join(" | "))?;
    }
    Ok(())
}

pub fn write_products(
    out: &mut impl Write,
    title: &str,
    cards: &[ProductCardView],
) -> io::Result<()> {
    writeln!(out, "{title}:")?;
    if cards.is_empty() {
        writeln!(out, "  No products to display.")?;
    }
    for card in cards {
        writeln!(out, "  {:<8} {:<28} {:>10}", card.id, card.name, card.price)?;
    }
    Ok(())
}

fn write_cart(out: &mut impl Write, app: &App, pulsed: bool, shaken: bool) -> io::Result<()> {
    let view = app.cart_view();
    let state = if app.is_cart_open() { "open" } else { "closed" };
    let badge = if view.badge_visible() {
        format!("({})", view.item_count)
    } else {
        String::new()
    };
    let effect = if shaken {
        " !"
    } else if pulsed {
        " *"
    } else {
        ""
    };

    writeln!(out, "Cart {badge}{effect} [{state}]:")?;
    if view.is_empty() {
        writeln!(out, "  Your cart is empty.")?;
    }
    for line in &view.items {
        writeln!(
            out,
            "  {:<8} {:<28} {} x {:>3} = {:>10}",
            line.id, line.name, line.price, line.quantity, line.line_price
        )?;
    }
    writeln!(out, "  Subtotal: {}", view.subtotal)
}

fn write_messages(out: &mut impl Write, messages: &[MessageView]) -> io::Result<()> {
    writeln!(out, "Messages:")?;
    if messages.is_empty() {
        writeln!(out, "  No customer messages yet.")?;
    }
    for message in messages {
        writeln!(out, "  From: {} <{}>", message.from, message.email)?;
        writeln!(out, "    {}", message.message)?;
        writeln!(out, "    Sent on: {}", message.sent_on)?;
    }
    Ok(())
}
