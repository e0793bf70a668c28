//! Sweet Slac CLI - the storefront from a terminal.
//!
//! Every invocation loads the saved snapshot, performs one action, saves the
//! result and prints the views the action changed.
//!
//! # Usage
//!
//! ```bash
//! # Browse and buy
//! slac sign-in --email asha@example.com --password pw
//! slac products --sort low
//! slac cart add a1
//! slac cart inc a1
//! slac checkout
//!
//! # Administer
//! slac sign-out
//! slac admin-login --password admin123
//! slac admin add-product --name Soap --image soap.png --price 499
//! slac admin messages
//! ```
//!
//! # Commands
//!
//! - `products` - List the catalog
//! - `cart` - Show or change the cart
//! - `checkout` - Check out the cart
//! - `register` / `sign-in` / `admin-login` / `sign-out` - Session
//! - `admin` - Manage products and read messages
//! - `contact` - Send a message to the shop
//! - `open` - Show a page or follow a navigation link
//! - `reset` - Wipe saved state

#![cfg_attr(not(test), forbid(unsafe_code))]

use clap::{Parser, Subcommand};
use sweet_slac_core::{ItemId, SortOrder};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

mod commands;
mod console;

#[derive(Parser)]
#[command(name = "slac")]
#[command(author, version, about = "Sweet Slac storefront")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List products
    Products {
        /// Sort order (`none`, `low`, `high`)
        #[arg(short, long, default_value = "none")]
        sort: SortOrder,
    },
    /// Show or change the cart
    Cart {
        #[command(subcommand)]
        action: Option<CartAction>,
    },
    /// Check out the cart
    Checkout,
    /// Create a customer account and sign in
    Register {
        #[arg(short, long)]
        name: String,

        #[arg(short, long)]
        email: String,

        #[arg(short, long)]
        password: String,
    },
    /// Sign in as a customer
    SignIn {
        #[arg(short, long)]
        email: String,

        #[arg(short, long)]
        password: String,
    },
    /// Sign in as the shop admin
    AdminLogin {
        #[arg(short, long)]
        password: String,
    },
    /// Sign out and empty the cart
    SignOut,
    /// Manage the catalog and read messages
    Admin {
        #[command(subcommand)]
        action: AdminAction,
    },
    /// Send a message to the shop
    Contact {
        #[arg(short, long)]
        name: String,

        #[arg(short, long)]
        email: String,

        #[arg(short, long)]
        message: String,
    },
    /// Show a page (`dashboard`, `products`, ...) or follow a link ID
    Open {
        target: String,
    },
    /// Delete all saved state
    Reset,
}

#[derive(Subcommand)]
enum CartAction {
    /// Show the cart (default)
    Show,
    /// Add one unit of a product
    Add { id: ItemId },
    /// Add one unit to a line
    Inc { id: ItemId },
    /// Take one unit off a line
    Dec { id: ItemId },
    /// Remove a line
    Remove { id: ItemId },
}

#[derive(Subcommand)]
enum AdminAction {
    /// Add a product to the catalog
    AddProduct {
        #[arg(short, long)]
        name: String,

        /// Image URL or path
        #[arg(short, long)]
        image: String,

        /// Price in whole rupees; non-numeric input becomes 0
        #[arg(short, long, allow_hyphen_values = true)]
        price: String,
    },
    /// Delete a product
    DeleteProduct { id: ItemId },
    /// List products in catalog order
    Products,
    /// List contact messages, newest first
    Messages,
}

fn main() {
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "sweet_slac_storefront=info,sweet_slac_cli=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    let result: Result<(), Box<dyn std::error::Error>> = run(cli);

    if let Err(e) = result {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let mut app = commands::open()?;

    let outcome = match cli.command {
        Commands::Products { sort } => commands::catalog::list(&mut app, sort),
        Commands::Cart { action } => match action.unwrap_or(CartAction::Show) {
            CartAction::Show => commands::cart::show(&mut app),
            CartAction::Add { id } => commands::cart::add(&mut app, &id),
            CartAction::Inc { id } => commands::cart::change(&mut app, &id, 1),
            CartAction::Dec { id } => commands::cart::change(&mut app, &id, -1),
            CartAction::Remove { id } => commands::cart::remove(&mut app, &id),
        },
        Commands::Checkout => commands::cart::checkout(&mut app),
        Commands::Register {
            name,
            email,
            password,
        } => commands::session::register(&mut app, name, email, password),
        Commands::SignIn { email, password } => {
            commands::session::sign_in(&mut app, email, password)
        }
        Commands::AdminLogin { password } => commands::session::admin_login(&mut app, password),
        Commands::SignOut => commands::session::sign_out(&mut app),
        Commands::Admin { action } => match action {
            AdminAction::AddProduct { name, image, price } => {
                commands::catalog::add(&mut app, name, image, price)
            }
            AdminAction::DeleteProduct { id } => commands::catalog::delete(&mut app, &id),
            AdminAction::Products => commands::catalog::admin_list(&mut app),
            AdminAction::Messages => commands::contact::messages(&mut app),
        },
        Commands::Contact {
            name,
            email,
            message,
        } => commands::contact::submit(&mut app, name, email, message),
        Commands::Open { target } => commands::navigation::open(&mut app, &target),
        Commands::Reset => commands::navigation::reset(&mut app),
    };

    // Print whatever the action changed, even if it failed part way
    console::flush(&mut app)?;
    outcome
}
