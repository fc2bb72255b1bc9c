//! # Storefront Entry Point
//!
//! Boots the store and prints a JSON snapshot of the active listing.
//!
//! ## Startup Sequence
//! 1. Load configuration (`STOREFRONT_*` environment variables)
//! 2. Initialize tracing (logging to stderr)
//! 3. Build the store from the configured catalog
//! 4. Emit the listing snapshot on stdout

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // The actual setup is in lib.rs for better testability
    storefront_app::run()
}
