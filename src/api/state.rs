//! Application state for the attendance engine API.
//!
//! This module defines the shared application state that is available
//! to all request handlers.

use std::sync::Arc;

use crate::config::ConfigLoader;

/// Shared application state.
///
/// Contains resources that are shared across all request handlers,
/// such as the loaded pay rules and report period.
#[derive(Clone)]
pub struct AppState {
    /// The loaded attendance configuration.
    config: Arc<ConfigLoader>,
}

impl AppState {
    /// Creates a new application state with the given configuration loader.
    pub fn new(config: ConfigLoader) -> Self {
        Self {
            config: Arc::new(config),
        }
    }

    /// Returns a reference to the configuration loader.
    pub fn config(&self) -> &ConfigLoader {
        &self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{AttendanceConfig, PayRules, ReportPeriod};
    use rust_decimal::Decimal;

    #[test]
    fn test_state_exposes_config() {
        let config = AttendanceConfig::new(PayRules::default(), ReportPeriod { year: 2024, month: 2 });
        let state = AppState::new(ConfigLoader::from_config(config));
        let cloned = state.clone();

        assert_eq!(cloned.config().period().month, 2);
        assert_eq!(cloned.config().pay_rules().saturday_base_hours, Decimal::new(7, 0));
    }

    #[test]
    fn test_app_state_is_clone() {
        // Verify AppState can be cloned (required for axum state)
        fn assert_clone<T: Clone>() {}
        assert_clone::<AppState>();
    }
}
