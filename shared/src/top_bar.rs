//! Top bar interaction model
//!
//! The UI keeps a [`TopBarModel`] in a signal and feeds every user action
//! through [`TopBarModel::apply`]. Actions that must leave the component
//! (currently only the sidebar toggle) come back as a [`TopBarEffect`].

use serde::{Deserialize, Serialize};

use crate::config::{DashboardConfig, Language};
use crate::menu::{Menu, MenuState};

/// Controls a top bar instance renders
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TopBarFeatures {
    pub searchable: bool,
    pub sidebar_toggle: bool,
    pub notifications: bool,
}

impl TopBarFeatures {
    /// Top bar embedded in the layout shell (sidebar is always visible)
    pub fn layout_shell() -> Self {
        Self {
            searchable: true,
            sidebar_toggle: false,
            notifications: true,
        }
    }

    /// Standalone top bar, the parent owns the sidebar
    pub fn standalone() -> Self {
        Self {
            searchable: true,
            sidebar_toggle: true,
            notifications: true,
        }
    }

    pub fn has_menu(&self, menu: Menu) -> bool {
        match menu {
            Menu::Notifications => self.notifications,
            Menu::Language | Menu::Profile => true,
        }
    }
}

impl Default for TopBarFeatures {
    fn default() -> Self {
        Self::standalone()
    }
}

/// User actions on the top bar
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TopBarEvent {
    /// Trigger button of a dropdown clicked
    ToggleMenu(Menu),
    /// Entry picked from the language dropdown
    SelectLanguage(Language),
    /// New content of the search field
    Search(String),
    /// Sidebar toggle button clicked
    ToggleSidebar,
}

/// What the component must do after applying an event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TopBarEffect {
    None,
    /// Notify the parent that the sidebar should be shown or hidden
    ToggleSidebar,
}

/// Local state of one mounted top bar
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TopBarModel {
    features: TopBarFeatures,
    menus: MenuState,
    search: String,
    language: Language,
}

impl TopBarModel {
    /// Fresh state: all menus closed, empty search, default language
    pub fn new(config: &DashboardConfig, features: TopBarFeatures) -> Self {
        Self {
            features,
            menus: MenuState::new(config.menu_policy),
            search: String::new(),
            language: config.initial_language(),
        }
    }

    pub fn apply(&mut self, event: TopBarEvent) -> TopBarEffect {
        match event {
            TopBarEvent::ToggleMenu(menu) => {
                if self.features.has_menu(menu) {
                    self.menus.toggle(menu);
                }
            }
            TopBarEvent::SelectLanguage(language) => {
                self.language = language;
                self.menus.close(Menu::Language);
            }
            TopBarEvent::Search(text) => {
                if self.features.searchable {
                    self.search = text;
                }
            }
            TopBarEvent::ToggleSidebar => {
                if self.features.sidebar_toggle {
                    return TopBarEffect::ToggleSidebar;
                }
            }
        }
        TopBarEffect::None
    }

    pub fn features(&self) -> TopBarFeatures {
        self.features
    }

    pub fn menus(&self) -> &MenuState {
        &self.menus
    }

    pub fn is_open(&self, menu: Menu) -> bool {
        self.menus.is_open(menu)
    }

    pub fn search(&self) -> &str {
        &self.search
    }

    pub fn language(&self) -> &Language {
        &self.language
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::menu::MenuPolicy;

    fn model() -> TopBarModel {
        TopBarModel::new(&DashboardConfig::default(), TopBarFeatures::standalone())
    }

    fn french() -> Language {
        DashboardConfig::default().language("fr").cloned().unwrap()
    }

    #[test]
    fn test_new_model_state() {
        let model = model();
        assert_eq!(model.menus().open_menus().count(), 0);
        assert_eq!(model.search(), "");
        assert_eq!(model.language().label, "English");
    }

    #[test]
    fn test_select_language_updates_and_closes() {
        let mut model = model();
        model.apply(TopBarEvent::ToggleMenu(Menu::Language));
        assert!(model.is_open(Menu::Language));

        let effect = model.apply(TopBarEvent::SelectLanguage(french()));
        assert_eq!(effect, TopBarEffect::None);
        assert_eq!(model.language().label, "French");
        assert_eq!(model.language().flag_url, "https://flagcdn.com/w40/fr.png");
        assert!(!model.is_open(Menu::Language));
    }

    #[test]
    fn test_select_language_leaves_other_menus_open() {
        let mut model = model();
        model.apply(TopBarEvent::ToggleMenu(Menu::Profile));
        model.apply(TopBarEvent::ToggleMenu(Menu::Language));
        model.apply(TopBarEvent::SelectLanguage(french()));

        assert!(model.is_open(Menu::Profile));
    }

    #[test]
    fn test_language_persists_across_search() {
        let mut model = model();
        model.apply(TopBarEvent::SelectLanguage(french()));
        model.apply(TopBarEvent::Search("j".into()));
        model.apply(TopBarEvent::Search("jo".into()));
        model.apply(TopBarEvent::ToggleMenu(Menu::Notifications));

        assert_eq!(model.language().code, "fr");
    }

    #[test]
    fn test_search_is_verbatim_and_isolated() {
        let mut model = model();
        model.apply(TopBarEvent::ToggleMenu(Menu::Profile));
        let before = *model.menus();

        let text = "  Dr. Ünsal / appt #12  ";
        let effect = model.apply(TopBarEvent::Search(text.to_string()));

        assert_eq!(effect, TopBarEffect::None);
        assert_eq!(model.search(), text);
        assert_eq!(*model.menus(), before);
        assert_eq!(model.language().code, "en");
    }

    #[test]
    fn test_sidebar_toggle_has_no_state_change() {
        let mut model = model();
        let before = model.clone();

        assert_eq!(
            model.apply(TopBarEvent::ToggleSidebar),
            TopBarEffect::ToggleSidebar
        );
        assert_eq!(model, before);
    }

    #[test]
    fn test_layout_shell_has_no_sidebar_toggle() {
        let mut model =
            TopBarModel::new(&DashboardConfig::default(), TopBarFeatures::layout_shell());
        assert_eq!(model.apply(TopBarEvent::ToggleSidebar), TopBarEffect::None);
    }

    #[test]
    fn test_disabled_capabilities_ignore_events() {
        let features = TopBarFeatures {
            searchable: false,
            sidebar_toggle: false,
            notifications: false,
        };
        let mut model = TopBarModel::new(&DashboardConfig::default(), features);

        model.apply(TopBarEvent::ToggleMenu(Menu::Notifications));
        model.apply(TopBarEvent::Search("ignored".into()));

        assert!(!model.is_open(Menu::Notifications));
        assert_eq!(model.search(), "");
    }

    #[test]
    fn test_policy_comes_from_config() {
        let config = DashboardConfig {
            menu_policy: MenuPolicy::Exclusive,
            ..DashboardConfig::default()
        };
        let mut model = TopBarModel::new(&config, TopBarFeatures::standalone());

        model.apply(TopBarEvent::ToggleMenu(Menu::Notifications));
        model.apply(TopBarEvent::ToggleMenu(Menu::Profile));

        assert!(!model.is_open(Menu::Notifications));
        assert!(model.is_open(Menu::Profile));
    }
}
