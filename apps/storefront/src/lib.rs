//! # Storefront Library
//!
//! Application layer for the storefront: configuration, logging and the
//! commands a shell drives.
//!
//! ## Module Organization
//! ```text
//! storefront_app/
//! ├── lib.rs          ◄─── You are here (startup & run)
//! ├── state/
//! │   ├── mod.rs      ◄─── State type exports
//! │   ├── config.rs   ◄─── Configuration state
//! │   └── store.rs    ◄─── Store ownership and seeding
//! ├── commands/
//! │   ├── mod.rs      ◄─── Command exports
//! │   ├── product.rs  ◄─── Listing and total quantity
//! │   └── order.rs    ◄─── Order placement
//! └── error.rs        ◄─── API error type for commands
//! ```

pub mod commands;
pub mod error;
pub mod state;

use serde::Serialize;
use tracing::info;
use tracing_subscriber::EnvFilter;

use commands::ProductDto;
use state::{ConfigState, StoreState};

/// What the binary prints on startup.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ListingSnapshot {
    pub store_name: String,
    pub products: Vec<ProductDto>,
    pub total_quantity: i128,
}

impl ListingSnapshot {
    pub fn capture(config: &ConfigState, store: &StoreState) -> Self {
        ListingSnapshot {
            store_name: config.store_name.clone(),
            products: commands::list_products(store),
            total_quantity: commands::total_quantity(store),
        }
    }
}

/// Boots the store and prints the listing snapshot.
///
/// ## Startup Sequence
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │                       Application Startup                               │
/// │                                                                         │
/// │  1. Load Configuration ───────────────────────────────────────────────► │
/// │     • STOREFRONT_STORE_NAME, STOREFRONT_CATALOG, STOREFRONT_LOG         │
/// │                                                                         │
/// │  2. Initialize Logging ───────────────────────────────────────────────► │
/// │     • tracing-subscriber with env filter, writes to stderr              │
/// │     • RUST_LOG overrides the configured filter                          │
/// │                                                                         │
/// │  3. Seed Store ───────────────────────────────────────────────────────► │
/// │     • Catalog file if configured, built-in catalog otherwise            │
/// │                                                                         │
/// │  4. Print Snapshot ───────────────────────────────────────────────────► │
/// │     • JSON on stdout                                                    │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    let config = ConfigState::from_env()?;

    init_tracing(&config.log_filter);

    info!(store = %config.store_name, "Starting storefront");

    let store = StoreState::from_config(&config)?;
    let snapshot = ListingSnapshot::capture(&config, &store);

    info!(
        products = snapshot.products.len(),
        total_quantity = snapshot.total_quantity,
        "Store ready"
    );

    println!("{}", serde_json::to_string_pretty(&snapshot)?);
    Ok(())
}

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages
/// - `RUST_LOG=storefront_core=trace` - Trace for the core crate only
/// - Default: `default_filter` (from `STOREFRONT_LOG` or built-in)
fn init_tracing(default_filter: &str) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
