//! Dashboard configuration types
//!
//! Everything the dashboard chrome renders from static data (sidebar entries,
//! languages, notifications, profile card) is described here so it can be
//! loaded from TOML and swapped for fixtures in tests.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::menu::MenuPolicy;

/// Errors raised while loading or validating a [`DashboardConfig`]
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to parse dashboard config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Failed to serialize dashboard config: {0}")]
    Serialize(#[from] toml::ser::Error),

    #[error("At least one language must be configured")]
    NoLanguages,

    #[error("Default language '{0}' is not in the language list")]
    UnknownDefaultLanguage(String),

    #[error("Sidebar destination '{0}' is used by more than one entry")]
    DuplicateNavHref(String),

    #[error("Notification id {0} is used more than once")]
    DuplicateNotificationId(u32),
}

/// Complete configuration for the dashboard chrome
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardConfig {
    /// Product name shown in the sidebar header
    pub brand: String,

    /// Subtitle used by pages that don't provide their own
    pub default_subtitle: String,

    /// Language code selected when a top bar is mounted
    pub default_language: String,

    /// Whether dropdown menus open independently or exclusively
    #[serde(default)]
    pub menu_policy: MenuPolicy,

    #[serde(default)]
    pub languages: Vec<Language>,

    #[serde(default)]
    pub notifications: Vec<Notification>,

    pub profile: ProfileCard,

    #[serde(default)]
    pub profile_links: Vec<MenuLink>,

    #[serde(default)]
    pub sidebar: Vec<NavEntry>,
}

impl DashboardConfig {
    /// Parse and validate a configuration from TOML
    pub fn load(s: &str) -> Result<Self, ConfigError> {
        let config = Self::from_toml(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Parse from TOML string without validating
    pub fn from_toml(s: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(s)?)
    }

    /// Convert to a TOML string
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Check the invariants the components rely on
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.languages.is_empty() {
            return Err(ConfigError::NoLanguages);
        }
        if self.language(&self.default_language).is_none() {
            return Err(ConfigError::UnknownDefaultLanguage(
                self.default_language.clone(),
            ));
        }

        // Logout entries are never highlighted, so only links must be unique.
        let mut hrefs = HashSet::new();
        for entry in self.sidebar.iter().filter(|e| e.kind == NavKind::Link) {
            if !hrefs.insert(entry.href.as_str()) {
                return Err(ConfigError::DuplicateNavHref(entry.href.clone()));
            }
        }

        let mut ids = HashSet::new();
        for notification in &self.notifications {
            if !ids.insert(notification.id) {
                return Err(ConfigError::DuplicateNotificationId(notification.id));
            }
        }

        Ok(())
    }

    /// Look up a language by code
    pub fn language(&self, code: &str) -> Option<&Language> {
        self.languages.iter().find(|l| l.code == code)
    }

    /// Language a freshly mounted top bar starts with
    pub fn initial_language(&self) -> Language {
        self.language(&self.default_language)
            .or_else(|| self.languages.first())
            .cloned()
            .unwrap_or_default()
    }

    /// The sidebar entry highlighted for `path`, if any
    pub fn active_entry(&self, path: &str) -> Option<&NavEntry> {
        self.sidebar.iter().find(|e| e.is_active(path))
    }

    /// Badge count shown on the notifications trigger
    pub fn notification_count(&self) -> usize {
        self.notifications.len()
    }
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            brand: "MedBoard".to_string(),
            default_subtitle: "Here's what's happening with your practice today".to_string(),
            default_language: "en".to_string(),
            menu_policy: MenuPolicy::Independent,
            languages: vec![
                Language::new("en", "English", "https://flagcdn.com/w40/gb.png"),
                Language::new("fr", "French", "https://flagcdn.com/w40/fr.png"),
                Language::new("es", "Spanish", "https://flagcdn.com/w40/es.png"),
            ],
            notifications: vec![
                Notification::new(1, "New appointment request from Sarah Johnson"),
                Notification::new(2, "Lab results are ready for patient #1042"),
                Notification::new(3, "Payment received for invoice INV-2031"),
                Notification::new(4, "Appointment with Michael Brown was rescheduled"),
                Notification::new(5, "New message from the front desk"),
                Notification::new(6, "Supplier order #587 has been delivered"),
            ],
            profile: ProfileCard {
                name: "Dr. Emily Carter".to_string(),
                role: "Doctor".to_string(),
                avatar_url: "https://i.pravatar.cc/80?img=47".to_string(),
            },
            profile_links: vec![
                MenuLink::new("Profile", "#"),
                MenuLink::new("Settings", "#"),
                MenuLink::new("Logout", "#"),
            ],
            sidebar: vec![
                NavEntry::link("Dashboard", "/doctor/dashboard", NavIcon::Dashboard),
                NavEntry::link("Patients", "/doctor/patients", NavIcon::Patients),
                NavEntry::link("Appointment", "/doctor/appointments", NavIcon::Appointments),
                NavEntry::link("Payments", "/doctor/payments", NavIcon::Payments),
                NavEntry::link("Notifications", "/doctor/notifications", NavIcon::Notifications),
                NavEntry::logout("Logout", "/"),
                NavEntry::link("Suppliers", "/doctor/suppliers", NavIcon::Suppliers),
            ],
        }
    }
}

/// A selectable UI language
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Language {
    /// Short code (e.g., "en")
    pub code: String,

    /// Label shown next to the flag
    pub label: String,

    /// Flag image URL
    pub flag_url: String,
}

impl Language {
    pub fn new(
        code: impl Into<String>,
        label: impl Into<String>,
        flag_url: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            label: label.into(),
            flag_url: flag_url.into(),
        }
    }
}

/// A static notification item
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    pub id: u32,
    pub text: String,
}

impl Notification {
    pub fn new(id: u32, text: impl Into<String>) -> Self {
        Self {
            id,
            text: text.into(),
        }
    }
}

/// Signed-in user card shown on the profile trigger
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileCard {
    pub name: String,
    pub role: String,
    pub avatar_url: String,
}

/// Plain link inside a dropdown menu
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuLink {
    pub label: String,
    pub href: String,
}

impl MenuLink {
    pub fn new(label: impl Into<String>, href: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            href: href.into(),
        }
    }
}

/// How a sidebar entry behaves
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NavKind {
    /// Route link, highlighted when the path matches
    #[default]
    Link,
    /// Sign-out link, always rendered with default styling
    Logout,
}

/// Icon drawn next to a sidebar entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NavIcon {
    Dashboard,
    Patients,
    Appointments,
    Payments,
    Notifications,
    Logout,
    Suppliers,
}

/// Sidebar navigation entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavEntry {
    pub label: String,

    /// Destination path
    pub href: String,

    pub icon: NavIcon,

    #[serde(default)]
    pub kind: NavKind,
}

impl NavEntry {
    pub fn link(label: impl Into<String>, href: impl Into<String>, icon: NavIcon) -> Self {
        Self {
            label: label.into(),
            href: href.into(),
            icon,
            kind: NavKind::Link,
        }
    }

    pub fn logout(label: impl Into<String>, href: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            href: href.into(),
            icon: NavIcon::Logout,
            kind: NavKind::Logout,
        }
    }

    /// Exact string match against the current path. No prefix matching.
    pub fn is_active(&self, path: &str) -> bool {
        self.kind == NavKind::Link && self.href == path
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = DashboardConfig::default();
        config.validate().unwrap();

        assert_eq!(config.sidebar.len(), 7);
        assert_eq!(config.notification_count(), 6);
        assert_eq!(config.initial_language().label, "English");

        let labels: Vec<_> = config.profile_links.iter().map(|l| l.label.as_str()).collect();
        assert_eq!(labels, ["Profile", "Settings", "Logout"]);
    }

    #[test]
    fn test_active_entry_is_exact_match() {
        let config = DashboardConfig::default();

        let active = config.active_entry("/doctor/appointments").unwrap();
        assert_eq!(active.label, "Appointment");

        assert!(config.active_entry("/doctor/appointments/42").is_none());
        assert!(config.active_entry("/doctor/appointments/").is_none());
        assert!(config.active_entry("/doctor").is_none());
        assert!(config.active_entry("/unknown").is_none());
    }

    #[test]
    fn test_at_most_one_entry_active() {
        let config = DashboardConfig::default();
        let mut paths: Vec<&str> = config.sidebar.iter().map(|e| e.href.as_str()).collect();
        paths.extend(["", "/doctor", "/doctor/dashboard/", "/DOCTOR/PATIENTS"]);

        for path in paths {
            let active = config.sidebar.iter().filter(|e| e.is_active(path)).count();
            assert!(active <= 1, "{path} highlighted {active} entries");
        }
    }

    #[test]
    fn test_logout_never_active() {
        let config = DashboardConfig::default();
        let logout = config
            .sidebar
            .iter()
            .find(|e| e.kind == NavKind::Logout)
            .unwrap();

        assert_eq!(logout.href, "/");
        assert!(!logout.is_active("/"));
        assert!(config.active_entry("/").is_none());
    }

    #[test]
    fn test_toml_roundtrip_keeps_order() {
        let config = DashboardConfig::default();
        let toml = config.to_toml().unwrap();
        assert!(toml.contains("[[sidebar]]"));
        assert!(toml.contains("kind = \"logout\""));

        let parsed = DashboardConfig::load(&toml).unwrap();
        assert_eq!(parsed, config);
    }

    #[test]
    fn test_missing_optional_fields_use_defaults() {
        let toml = r#"
            brand = "Clinic"
            default_subtitle = "Hello"
            default_language = "en"

            [[languages]]
            code = "en"
            label = "English"
            flag_url = "en.png"

            [profile]
            name = "Dr. Who"
            role = "Doctor"
            avatar_url = "who.png"

            [[sidebar]]
            label = "Home"
            href = "/home"
            icon = "dashboard"
        "#;

        let config = DashboardConfig::load(toml).unwrap();
        assert_eq!(config.menu_policy, MenuPolicy::Independent);
        assert_eq!(config.sidebar[0].kind, NavKind::Link);
        assert!(config.notifications.is_empty());
        assert!(config.profile_links.is_empty());
    }

    #[test]
    fn test_validate_rejects_bad_config() {
        let mut config = DashboardConfig::default();
        config.languages.clear();
        assert!(matches!(config.validate(), Err(ConfigError::NoLanguages)));

        let mut config = DashboardConfig::default();
        config.default_language = "de".to_string();
        assert!(matches!(
            config.validate(),
            Err(ConfigError::UnknownDefaultLanguage(code)) if code == "de"
        ));

        let mut config = DashboardConfig::default();
        config
            .sidebar
            .push(NavEntry::link("Again", "/doctor/patients", NavIcon::Patients));
        assert!(matches!(
            config.validate(),
            Err(ConfigError::DuplicateNavHref(href)) if href == "/doctor/patients"
        ));

        let mut config = DashboardConfig::default();
        config.notifications.push(Notification::new(3, "Duplicate"));
        assert!(matches!(
            config.validate(),
            Err(ConfigError::DuplicateNotificationId(3))
        ));
    }

    #[test]
    fn test_logout_may_share_href() {
        let mut config = DashboardConfig::default();
        config.sidebar.push(NavEntry::logout("Sign out", "/"));
        config.validate().unwrap();
    }

    #[test]
    fn test_parse_error() {
        let err = DashboardConfig::load("brand = ").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_initial_language_falls_back_to_first() {
        let mut config = DashboardConfig::default();
        config.default_language = "de".to_string();
        assert_eq!(config.initial_language().code, "en");

        config.languages.clear();
        assert_eq!(config.initial_language(), Language::default());
    }
}
