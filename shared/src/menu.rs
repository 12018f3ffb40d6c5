//! Dropdown menu state
//!
//! Each top bar owns one [`MenuState`]. Every menu is a two-state machine
//! (closed/open) driven by its trigger; the [`MenuPolicy`] decides whether
//! opening one menu affects its siblings.

use serde::{Deserialize, Serialize};

/// Dropdown menus hosted by the top bar
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Menu {
    Notifications,
    Language,
    Profile,
}

impl Menu {
    pub const ALL: [Menu; 3] = [Menu::Notifications, Menu::Language, Menu::Profile];

    fn index(self) -> usize {
        match self {
            Menu::Notifications => 0,
            Menu::Language => 1,
            Menu::Profile => 2,
        }
    }
}

/// How opening a menu interacts with the other menus
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MenuPolicy {
    /// Menus open and close independently; several may be open at once
    #[default]
    Independent,
    /// Opening a menu closes every other menu
    Exclusive,
}

/// Open/closed state of every menu in one top bar
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MenuState {
    open: [bool; 3],
    policy: MenuPolicy,
}

impl MenuState {
    /// All menus start closed
    pub fn new(policy: MenuPolicy) -> Self {
        Self {
            open: [false; 3],
            policy,
        }
    }

    pub fn policy(&self) -> MenuPolicy {
        self.policy
    }

    pub fn is_open(&self, menu: Menu) -> bool {
        self.open[menu.index()]
    }

    /// Trigger click: closed -> open, open -> closed
    pub fn toggle(&mut self, menu: Menu) {
        if self.is_open(menu) {
            self.close(menu);
        } else {
            self.open(menu);
        }
    }

    pub fn open(&mut self, menu: Menu) {
        if self.policy == MenuPolicy::Exclusive {
            self.close_all();
        }
        self.open[menu.index()] = true;
    }

    pub fn close(&mut self, menu: Menu) {
        self.open[menu.index()] = false;
    }

    pub fn close_all(&mut self) {
        self.open = [false; 3];
    }

    /// Currently open menus, in declaration order
    pub fn open_menus(&self) -> impl Iterator<Item = Menu> + '_ {
        Menu::ALL.into_iter().filter(move |m| self.is_open(*m))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initially_closed() {
        let state = MenuState::new(MenuPolicy::Independent);
        for menu in Menu::ALL {
            assert!(!state.is_open(menu));
        }
        assert_eq!(state.open_menus().count(), 0);
    }

    #[test]
    fn test_toggle_twice_restores_closed() {
        for menu in Menu::ALL {
            let mut state = MenuState::new(MenuPolicy::Independent);
            state.toggle(menu);
            assert!(state.is_open(menu));
            state.toggle(menu);
            assert!(!state.is_open(menu));
        }
    }

    #[test]
    fn test_independent_menus_do_not_affect_siblings() {
        let mut state = MenuState::new(MenuPolicy::Independent);
        state.toggle(Menu::Profile);
        state.toggle(Menu::Language);
        state.toggle(Menu::Notifications);

        assert_eq!(
            state.open_menus().collect::<Vec<_>>(),
            vec![Menu::Notifications, Menu::Language, Menu::Profile]
        );

        state.toggle(Menu::Language);
        assert!(state.is_open(Menu::Profile));
        assert!(!state.is_open(Menu::Language));
        assert!(state.is_open(Menu::Notifications));
    }

    #[test]
    fn test_exclusive_policy_closes_siblings() {
        let mut state = MenuState::new(MenuPolicy::Exclusive);
        state.toggle(Menu::Profile);
        state.toggle(Menu::Language);

        assert_eq!(state.open_menus().collect::<Vec<_>>(), vec![Menu::Language]);

        // Closing never opens anything else
        state.toggle(Menu::Language);
        assert_eq!(state.open_menus().count(), 0);
    }

    #[test]
    fn test_close_all() {
        let mut state = MenuState::new(MenuPolicy::Independent);
        state.open(Menu::Profile);
        state.open(Menu::Notifications);
        state.close_all();
        assert_eq!(state, MenuState::new(MenuPolicy::Independent));
    }
}
