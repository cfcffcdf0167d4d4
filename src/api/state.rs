//! Application state for the reconciliation API.
//!
//! This module defines the shared application state that is available
//! to all request handlers.

use std::sync::Arc;

use crate::config::ConfigLoader;
use crate::reconciliation::Reconciler;

/// Shared application state.
///
/// Holds the loaded configuration and a reconciler built from it. Both are
/// read-only, so handlers share them without locking.
#[derive(Clone)]
pub struct AppState {
    /// The loaded engine configuration.
    config: Arc<ConfigLoader>,
    /// Reconciler configured from `config`.
    reconciler: Arc<Reconciler>,
}

impl AppState {
    /// Creates a new application state with the given configuration loader.
    pub fn new(config: ConfigLoader) -> Self {
        let reconciler = Reconciler::new(config.config().clone());
        Self {
            config: Arc::new(config),
            reconciler: Arc::new(reconciler),
        }
    }

    /// Returns a reference to the configuration loader.
    pub fn config(&self) -> &ConfigLoader {
        &self.config
    }

    /// Returns the shared reconciler.
    pub fn reconciler(&self) -> &Reconciler {
        &self.reconciler
    }
}
