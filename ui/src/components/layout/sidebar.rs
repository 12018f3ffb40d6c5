//! Sidebar Navigation Component
//!
//! Fixed-width sidebar listing the configured navigation entries. The entry
//! whose destination equals the current path is highlighted.

use leptos::*;
use leptos_router::*;
use medboard_shared::{NavEntry, NavIcon, NavKind};

use crate::components::common::{
    BellIcon, CalendarIcon, DashboardIcon, LogoutIcon, PatientsIcon, PaymentsIcon, TruckIcon,
};
use crate::state::use_dashboard;

/// Classes for a highlighted sidebar link
pub const NAV_LINK_ACTIVE: &str =
    "flex items-center gap-3 px-3 py-2 rounded-lg text-sm font-medium transition-colors bg-blue-600 text-white";

/// Classes for every other sidebar link
pub const NAV_LINK_DEFAULT: &str =
    "flex items-center gap-3 px-3 py-2 rounded-lg text-sm font-medium transition-colors text-slate-600 hover:text-slate-900 hover:bg-slate-100";

pub fn nav_link_class(active: bool) -> &'static str {
    if active {
        NAV_LINK_ACTIVE
    } else {
        NAV_LINK_DEFAULT
    }
}

/// Main sidebar navigation component
#[component]
pub fn Sidebar() -> impl IntoView {
    let dashboard = use_dashboard();
    let brand = dashboard.config().brand.clone();
    let initial = brand.chars().next().unwrap_or('M').to_string();
    let entries = dashboard.config().sidebar.clone();

    view! {
        <aside class="w-64 h-full flex-shrink-0 bg-white border-r border-slate-200 flex flex-col">
            // Logo header
            <div class="h-16 flex items-center gap-3 px-6 border-b border-slate-200">
                <div class="w-8 h-8 bg-gradient-to-br from-blue-500 to-teal-500 rounded-lg flex items-center justify-center">
                    <span class="text-white text-sm font-bold">{initial}</span>
                </div>
                <span class="text-lg font-bold text-slate-900">{brand}</span>
            </div>

            <nav class="flex-1 py-4 overflow-y-auto">
                <ul class="space-y-1 px-3">
                    {entries
                        .into_iter()
                        .map(|entry| view! { <li><SidebarLink entry=entry /></li> })
                        .collect_view()}
                </ul>
            </nav>
        </aside>
    }
}

/// Sidebar navigation link
#[component]
fn SidebarLink(entry: NavEntry) -> impl IntoView {
    let label = entry.label.clone();
    let href = entry.href.clone();
    let icon = entry.icon;
    let kind = entry.kind;

    match kind {
        // Plain anchor so the router never marks it current
        NavKind::Logout => view! {
            <a href=href class=NAV_LINK_DEFAULT>
                {nav_icon(icon)}
                <span>{label}</span>
            </a>
        }
        .into_view(),
        NavKind::Link => {
            let location = use_location();
            let is_active = move || location.pathname.with(|path| entry.is_active(path));

            view! {
                <A href=href exact=true class=move || nav_link_class(is_active())>
                    {nav_icon(icon)}
                    <span>{label}</span>
                </A>
            }
            .into_view()
        }
    }
}

fn nav_icon(icon: NavIcon) -> View {
    match icon {
        NavIcon::Dashboard => view! { <DashboardIcon /> }.into_view(),
        NavIcon::Patients => view! { <PatientsIcon /> }.into_view(),
        NavIcon::Appointments => view! { <CalendarIcon /> }.into_view(),
        NavIcon::Payments => view! { <PaymentsIcon /> }.into_view(),
        NavIcon::Notifications => view! { <BellIcon /> }.into_view(),
        NavIcon::Logout => view! { <LogoutIcon /> }.into_view(),
        NavIcon::Suppliers => view! { <TruckIcon /> }.into_view(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nav_link_class() {
        assert!(nav_link_class(true).contains("bg-blue-600"));
        assert!(!nav_link_class(false).contains("bg-blue-600"));
    }
}
