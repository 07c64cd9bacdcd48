//! JAZZ 11/11 CLI - Browse the boutique and check out on WhatsApp.
//!
//! # Usage
//!
//! ```bash
//! # Browse the shop
//! jazz shop --category dresses --sort price-low
//!
//! # Look at a piece
//! jazz product 1
//!
//! # Fill the cart and check out
//! jazz cart add 1 --size M --color Black
//! jazz checkout
//! ```
//!
//! # Commands
//!
//! - `shop` - Filtered, sorted listing
//! - `product` - Product page with related pieces
//! - `new-arrivals`, `featured` - Home page collections
//! - `gallery` - Lookbook images
//! - `cart` - Show and edit the cart
//! - `checkout` - Order message and WhatsApp link for the cart
//! - `buy-now` - Order message and WhatsApp link for one piece
//! - `info` - Store settings
//!
//! # Environment Variables
//!
//! See `jazz_storefront::config`. `RUST_LOG` controls diagnostics, which go
//! to stderr.

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::io::{self, Write};
use std::num::NonZeroU32;

use clap::{Parser, Subcommand};
use jazz_storefront::StorefrontConfig;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use commands::browse::ShopArgs;
use commands::cart::Selection;
use commands::{CommandError, Context};

mod commands;

#[derive(Parser)]
#[command(name = "jazz")]
#[command(author, version, about = "JAZZ 11/11 boutique")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Browse the shop
    Shop(ShopArgs),
    /// Show a product page
    Product {
        /// Product id
        id: String,
    },
    /// List the newest pieces
    NewArrivals {
        #[arg(short, long, default_value_t = 4)]
        limit: usize,
    },
    /// List featured pieces
    Featured {
        #[arg(short, long, default_value_t = 4)]
        limit: usize,
    },
    /// Browse the gallery
    Gallery {
        /// Section (`photoshoot`, `new-drop`, `customer`, `store`)
        #[arg(short, long)]
        category: Option<String>,
    },
    /// Manage the cart
    Cart {
        #[command(subcommand)]
        action: CartAction,
    },
    /// Check out the cart on WhatsApp
    Checkout,
    /// Order a single piece on WhatsApp
    BuyNow {
        /// Product id
        id: String,

        /// Size (defaults to the first offered)
        #[arg(short, long)]
        size: Option<String>,

        /// Color (defaults to the first offered)
        #[arg(short, long)]
        color: Option<String>,
    },
    /// Show store settings
    Info,
}

#[derive(Subcommand)]
enum CartAction {
    /// Show the cart
    Show,
    /// Add a piece
    Add {
        /// Product id
        id: String,

        /// Size (defaults to the first offered)
        #[arg(short, long)]
        size: Option<String>,

        /// Color (defaults to the first offered)
        #[arg(short, long)]
        color: Option<String>,

        #[arg(short, long, default_value_t = NonZeroU32::MIN)]
        quantity: NonZeroU32,
    },
    /// Set a line's quantity (0 removes it)
    Update {
        /// Product id
        id: String,

        #[arg(short, long)]
        size: String,

        #[arg(short, long)]
        color: String,

        quantity: u32,
    },
    /// Remove a line
    Remove {
        /// Product id
        id: String,

        #[arg(short, long)]
        size: String,

        #[arg(short, long)]
        color: String,
    },
    /// Empty the cart
    Clear,
}

fn main() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| "warn".into());
    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt::layer().with_writer(io::stderr))
        .init();

    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        tracing::error!("Command failed: {e}");
        let _ = writeln!(io::stderr(), "{}", e.user_message());
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), CommandError> {
    let config = StorefrontConfig::from_env().map_err(jazz_storefront::StorefrontError::from)?;
    let ctx = Context::load(config)?;
    let stdout = io::stdout();
    let mut out = stdout.lock();

    match cli.command {
        Commands::Shop(args) => commands::browse::shop(&ctx, &args, &mut out)?,
        Commands::Product { id } => commands::browse::product(&ctx, &id, &mut out)?,
        Commands::NewArrivals { limit } => commands::browse::new_arrivals(&ctx, limit, &mut out)?,
        Commands::Featured { limit } => commands::browse::featured(&ctx, limit, &mut out)?,
        Commands::Gallery { category } => commands::browse::gallery(category.as_deref(), &mut out)?,
        Commands::Cart { action } => {
            let mut session = ctx.open_session();
            match action {
                CartAction::Show => commands::cart::show(&session, &mut out)?,
                CartAction::Add {
                    id,
                    size,
                    color,
                    quantity,
                } => commands::cart::add(
                    &ctx,
                    &mut session,
                    &id,
                    &Selection { size, color },
                    quantity,
                    &mut out,
                )?,
                CartAction::Update {
                    id,
                    size,
                    color,
                    quantity,
                } => commands::cart::update(&mut session, &id, &size, &color, quantity, &mut out)?,
                CartAction::Remove { id, size, color } => {
                    commands::cart::remove(&mut session, &id, &size, &color, &mut out)?;
                }
                CartAction::Clear => commands::cart::clear(&mut session, &mut out)?,
            }
        }
        Commands::Checkout => {
            let session = ctx.open_session();
            commands::cart::checkout(&ctx, &session, &mut out)?;
        }
        Commands::BuyNow { id, size, color } => {
            commands::cart::buy_now(&ctx, &id, &Selection { size, color }, &mut out)?;
        }
        Commands::Info => commands::browse::info(&ctx, &mut out)?,
    }
    Ok(())
}
