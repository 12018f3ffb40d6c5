//! Layout Components
//!
//! This module contains the dashboard chrome:
//! - `AppShell` - Page frame with sidebar, top bar, page header and content
//! - `Sidebar` - Fixed navigation with exact-path highlighting
//! - `TopBar` - Search, notifications, language and profile menus
//! - `menus` - The top bar dropdowns

mod app_shell;
mod menus;
mod sidebar;
mod top_bar;

pub use app_shell::{AppShell, PageHeader};
pub use menus::{menu_id, LanguageMenu, NotificationsMenu, ProfileMenu};
pub use sidebar::{nav_link_class, Sidebar, NAV_LINK_ACTIVE, NAV_LINK_DEFAULT};
pub use top_bar::TopBar;
