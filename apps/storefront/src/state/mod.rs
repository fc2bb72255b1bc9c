//! # State Module
//!
//! Application state for the storefront session.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    State Architecture                                   │
//! │                                                                         │
//! │  ┌──────────────────────┐          ┌──────────────────────┐            │
//! │  │    ConfigState       │          │     StoreState       │            │
//! │  │                      │  seeds   │                      │            │
//! │  │  store_name          │ ───────► │  Store (arena +      │            │
//! │  │  catalog_path        │          │         listing)     │            │
//! │  │  log_filter          │          │                      │            │
//! │  └──────────────────────┘          └──────────────────────┘            │
//! │                                                                         │
//! │  ConfigState: read-only after startup                                   │
//! │  StoreState:  mutated only by place_order                               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

mod config;
mod store;

pub use config::{ConfigError, ConfigState, DEFAULT_LOG_FILTER};
pub use store::StoreState;
