//! App Shell Component
//!
//! Page frame for the doctor dashboard:
//! - Fixed-width sidebar navigation
//! - Top bar (search, notifications, language, profile)
//! - Optional page header (title, subtitle, action button)
//! - Main content area

use leptos::*;
use leptos_meta::Title;
use medboard_shared::TopBarFeatures;

use super::{Sidebar, TopBar};
use crate::state::use_dashboard;

/// Main dashboard layout
#[component]
pub fn AppShell(
    /// Page content
    children: Children,
    /// Page title, also used as the document title
    #[prop(into)]
    title: String,
    /// Subtitle under the title; the configured tagline when absent
    #[prop(optional, into)]
    subtitle: Option<String>,
    /// Whether to render the title/subtitle/action header
    #[prop(default = true)]
    show_header: bool,
    /// Label of the header action button; no button when absent
    #[prop(optional, into)]
    action_label: Option<String>,
    /// Called when the header action button is clicked
    #[prop(optional, into)]
    on_action: Option<Callback<()>>,
) -> impl IntoView {
    let dashboard = use_dashboard();
    let subtitle = subtitle.unwrap_or_else(|| dashboard.config().default_subtitle.clone());

    view! {
        <Title text=title.clone() />
        <div class="h-screen flex bg-slate-50 text-slate-800 overflow-hidden">
            <Sidebar />

            <div class="flex-1 flex flex-col min-w-0">
                <TopBar features=TopBarFeatures::layout_shell() />

                <main class="flex-1 overflow-auto p-6">
                    {show_header.then(|| view! {
                        <PageHeader
                            title=title
                            subtitle=subtitle
                            action_label=action_label
                            on_action=on_action
                        />
                    })}
                    {children()}
                </main>
            </div>
        </div>
    }
}

/// Title block at the top of a page
#[component]
pub fn PageHeader(
    #[prop(into)] title: String,
    #[prop(into)] subtitle: String,
    action_label: Option<String>,
    on_action: Option<Callback<()>>,
) -> impl IntoView {
    view! {
        <div class="flex items-center justify-between mb-6" data-role="page-header">
            <div>
                <h1 class="text-2xl font-bold text-slate-900">{title}</h1>
                <p class="text-slate-500 mt-1">{subtitle}</p>
            </div>
            {action_label.map(|label| view! {
                <button
                    type="button"
                    data-action="page-action"
                    class="px-4 py-2 rounded-lg bg-blue-600 text-white text-sm font-medium hover:bg-blue-700 transition-colors"
                    on:click=move |_| {
                        if let Some(callback) = on_action {
                            callback.call(());
                        }
                    }
                >
                    {label}
                </button>
            })}
        </div>
    }
}
