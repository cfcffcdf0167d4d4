//! Configuration types for the reconciliation engine.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from `reconcile.yaml`.

use serde::{Deserialize, Serialize};

/// Page size the workforce-management API serves by default.
pub const DEFAULT_PAGE_SIZE: usize = 50;

/// How the hourly distribution treats shifts that run past midnight.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MidnightPolicy {
    /// Split the shift at each midnight and distribute every piece.
    #[default]
    Split,
    /// Leave the shift out and report it as a data anomaly.
    Exclude,
}

impl std::fmt::Display for MidnightPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MidnightPolicy::Split => write!(f, "split"),
            MidnightPolicy::Exclude => write!(f, "exclude"),
        }
    }
}

/// Engine configuration.
///
/// Every field has a default, so an empty `reconcile.yaml` is valid.
///
/// # Example
///
/// ```
/// use punchclock_reconcile::config::{MidnightPolicy, ReconcileConfig};
///
/// let config: ReconcileConfig = serde_yaml::from_str("page_size: 100").unwrap();
/// assert_eq!(config.page_size, 100);
/// assert_eq!(config.midnight_policy, MidnightPolicy::Split);
/// assert!(!config.approved_only);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReconcileConfig {
    /// Number of records requested per page.
    pub page_size: usize,
    /// Treatment of midnight-crossing shifts in the hourly distribution.
    pub midnight_policy: MidnightPolicy,
    /// Only reconcile shifts a manager has approved.
    pub approved_only: bool,
}

impl Default for ReconcileConfig {
    fn default() -> Self {
        Self {
            page_size: DEFAULT_PAGE_SIZE,
            midnight_policy: MidnightPolicy::default(),
            approved_only: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_yaml_uses_defaults() {
        let config: ReconcileConfig = serde_yaml::from_str("{}").unwrap();
        assert_eq!(config, ReconcileConfig::default());
        assert_eq!(config.page_size, 50);
    }

    #[test]
    fn test_midnight_policy_from_yaml() {
        let config: ReconcileConfig =
            serde_yaml::from_str("midnight_policy: exclude\napproved_only: true").unwrap();
        assert_eq!(config.midnight_policy, MidnightPolicy::Exclude);
        assert!(config.approved_only);
    }

    #[test]
    fn test_unknown_policy_is_rejected() {
        let result: Result<ReconcileConfig, _> = serde_yaml::from_str("midnight_policy: wrap");
        assert!(result.is_err());
    }

    #[test]
    fn test_midnight_policy_display() {
        assert_eq!(MidnightPolicy::Split.to_string(), "split");
        assert_eq!(MidnightPolicy::Exclude.to_string(), "exclude");
    }
}
