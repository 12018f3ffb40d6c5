//! MedBoard UI Entry Point
//!
//! This is the main entry point for the MedBoard UI WASM application.
//! It initializes logging and mounts the Leptos app to the DOM.

use leptos::*;
use medboard_ui::App;
use tracing_wasm::WASMLayerConfigBuilder;

fn main() {
    // Initialize WASM tracing
    let config = WASMLayerConfigBuilder::default()
        .set_max_level(tracing::Level::DEBUG)
        .build();
    tracing_wasm::set_as_global_default_with_config(config);

    tracing::info!("Starting MedBoard UI");

    mount_to_body(|| view! { <App /> });
}
