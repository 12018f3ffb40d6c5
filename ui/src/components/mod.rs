//! UI Components
//!
//! This module contains all UI components organized by feature:
//! - `layout`: Dashboard chrome (shell, sidebar, top bar, menus)
//! - `common`: Shared/reusable components

pub mod common;
pub mod layout;

pub use layout::{AppShell, Sidebar, TopBar};
