//! Global State Management
//!
//! Dashboard-wide data shared through context. Per-instance UI state (open
//! menus, search text, selected language) lives in each `TopBar`, not here.

use std::rc::Rc;

use leptos::*;
use medboard_shared::DashboardConfig;

/// Dashboard configuration bundled with the application
pub const BUNDLED_CONFIG: &str = include_str!("../../dashboard.toml");

/// Global dashboard state
#[derive(Clone)]
pub struct DashboardState {
    config: Rc<DashboardConfig>,
}

impl DashboardState {
    /// Create state from an already validated configuration
    pub fn new(config: DashboardConfig) -> Self {
        Self {
            config: Rc::new(config),
        }
    }

    /// Load the bundled configuration, falling back to built-in defaults
    pub fn bundled() -> Self {
        match DashboardConfig::load(BUNDLED_CONFIG) {
            Ok(config) => {
                tracing::debug!(
                    sidebar = config.sidebar.len(),
                    languages = config.languages.len(),
                    notifications = config.notifications.len(),
                    "Loaded dashboard config"
                );
                Self::new(config)
            }
            Err(e) => {
                tracing::warn!(error = %e, "Invalid bundled dashboard config, using defaults");
                Self::new(DashboardConfig::default())
            }
        }
    }

    pub fn config(&self) -> &DashboardConfig {
        &self.config
    }
}

impl Default for DashboardState {
    fn default() -> Self {
        Self::bundled()
    }
}

/// Dashboard state from context.
///
/// Components can be mounted without the `App` root (e.g., embedded or in
/// tests); in that case the bundled configuration is provided on first use.
pub fn use_dashboard() -> DashboardState {
    use_context::<DashboardState>().unwrap_or_else(|| {
        let state = DashboardState::bundled();
        provide_context(state.clone());
        state
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bundled_config_matches_defaults() {
        let config = DashboardConfig::load(BUNDLED_CONFIG).unwrap();
        assert_eq!(config, DashboardConfig::default());
    }
}
