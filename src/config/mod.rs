//! Configuration loading and management for the reconciliation engine.
//!
//! This module provides functionality to load the engine configuration from a
//! YAML file: the page size used for fetching, the midnight policy of the
//! hourly distribution and the approval filter.
//!
//! # Example
//!
//! ```no_run
//! use punchclock_reconcile::config::ConfigLoader;
//!
//! let loader = ConfigLoader::load("./config/default").unwrap();
//! println!("Midnight policy: {}", loader.midnight_policy());
//! ```

mod loader;
mod types;

pub use loader::{CONFIG_FILE_NAME, ConfigLoader};
pub use types::{DEFAULT_PAGE_SIZE, MidnightPolicy, ReconcileConfig};
