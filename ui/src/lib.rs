//! MedBoard UI Library
//!
//! This crate provides the chrome of the MedBoard doctor dashboard: a page
//! layout shell with sidebar navigation and a top bar, and a standalone top
//! bar for pages that manage their own sidebar.
//!
//! # Architecture
//!
//! Both entry points share one `TopBar` component. Its interaction model
//! (menus, search, language) lives in `medboard_shared` so it can be tested
//! without a browser; the components here only render it.
//!
//! # Modules
//!
//! - [`app`]: Root application component and routing
//! - [`components`]: UI components (layout shell, sidebar, top bar, icons)
//! - [`state`]: Global state (dashboard configuration)

pub mod app;
pub mod components;
pub mod state;

pub use app::App;
