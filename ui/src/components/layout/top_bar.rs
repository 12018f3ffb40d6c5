//! Top Bar Component
//!
//! One top bar serves both the layout shell and standalone pages. The
//! `TopBarFeatures` capability set picks which controls are rendered; every
//! instance owns a fresh `TopBarModel` for its mounted lifetime.

use leptos::*;
use medboard_shared::{TopBarEffect, TopBarEvent, TopBarFeatures, TopBarModel};

use super::menus::{LanguageMenu, NotificationsMenu, ProfileMenu};
use crate::components::common::{MenuIcon, SearchIcon};
use crate::state::use_dashboard;

/// Top bar with search, notifications, language and profile menus
#[component]
pub fn TopBar(
    /// Called when the sidebar toggle is clicked. Without it the button is inert.
    #[prop(optional, into)]
    on_toggle_sidebar: Option<Callback<()>>,
    /// Controls to render (defaults to the standalone set)
    #[prop(optional)]
    features: Option<TopBarFeatures>,
) -> impl IntoView {
    let dashboard = use_dashboard();
    let config = dashboard.config();
    let features = features.unwrap_or_else(TopBarFeatures::standalone);
    let model = create_rw_signal(TopBarModel::new(config, features));

    let toggle_sidebar = move |_: ev::MouseEvent| {
        let effect = model
            .try_update(|m| m.apply(TopBarEvent::ToggleSidebar))
            .unwrap_or(TopBarEffect::None);

        if effect == TopBarEffect::ToggleSidebar {
            match on_toggle_sidebar {
                Some(callback) => callback.call(()),
                None => tracing::debug!("Sidebar toggle clicked without a handler"),
            }
        }
    };

    let notifications = config.notifications.clone();
    let languages = config.languages.clone();
    let profile = config.profile.clone();
    let profile_links = config.profile_links.clone();

    view! {
        <header class="h-16 flex items-center justify-between gap-4 px-6 bg-white border-b border-slate-200 flex-shrink-0">
            // Left side: sidebar toggle and search
            <div class="flex items-center gap-4 flex-1 min-w-0">
                {features.sidebar_toggle.then(|| view! {
                    <button
                        type="button"
                        aria-label="Toggle sidebar"
                        data-action="toggle-sidebar"
                        class="p-2 rounded-lg text-slate-600 hover:text-slate-900 hover:bg-slate-100 transition-colors"
                        on:click=toggle_sidebar
                    >
                        <MenuIcon />
                    </button>
                })}
                {features.searchable.then(|| view! { <SearchBox model=model /> })}
            </div>

            // Right side: menus
            <div class="flex items-center gap-2">
                {features.notifications.then(|| view! {
                    <NotificationsMenu model=model notifications=notifications />
                })}
                <LanguageMenu model=model languages=languages />
                <ProfileMenu model=model profile=profile links=profile_links />
            </div>
        </header>
    }
}

/// Search field. The text is kept locally and never submitted.
#[component]
fn SearchBox(model: RwSignal<TopBarModel>) -> impl IntoView {
    view! {
        <div class="relative w-full max-w-md">
            <SearchIcon class="absolute left-3 top-1/2 -translate-y-1/2 w-4 h-4 text-slate-400" />
            <input
                type="search"
                class="w-full pl-9 pr-4 py-2 bg-slate-100 border border-transparent rounded-lg text-sm text-slate-900 placeholder-slate-400 focus:outline-none focus:border-blue-500 focus:bg-white transition-colors"
                placeholder="Search patients, appointments..."
                prop:value=move || model.with(|m| m.search().to_string())
                on:input=move |ev| {
                    let text = event_target_value(&ev);
                    model.update(|m| {
                        m.apply(TopBarEvent::Search(text));
                    });
                }
            />
        </div>
    }
}
