//! Shared types for the MedBoard dashboard
//!
//! This crate contains the parts of the dashboard chrome that don't depend on
//! a UI framework:
//! - Dashboard configuration (sidebar, languages, notifications, profile)
//! - Dropdown menu state machine
//! - Top bar interaction model

pub mod config;
pub mod menu;
pub mod top_bar;

pub use config::*;
pub use menu::*;
pub use top_bar::*;
