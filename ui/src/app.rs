//! Root Application Component
//!
//! This module contains the main App component that sets up:
//! - Routing for the doctor pages
//! - Global state providers
//! - The landing page built on the standalone top bar

use leptos::*;
use leptos_meta::*;
use leptos_router::*;

use crate::components::{AppShell, Sidebar, TopBar};
use crate::state::{use_dashboard, DashboardState};

/// Root application component
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();
    provide_context(DashboardState::bundled());

    view! {
        <Router>
            <Routes>
                // Landing page - standalone top bar, page-owned sidebar
                <Route path="/" view=LandingPage />

                // ====================================================================
                // Doctor pages - inside the app shell
                // ====================================================================
                <Route path="/doctor/dashboard" view=DashboardPage />
                <Route path="/doctor/patients" view=|| view! {
                    <AppShell title="Patients">
                        <SectionPlaceholder text="Patient records will appear here." />
                    </AppShell>
                } />
                <Route path="/doctor/appointments" view=|| view! {
                    <AppShell title="Appointments" subtitle="Upcoming and past visits">
                        <SectionPlaceholder text="No appointments scheduled." />
                    </AppShell>
                } />
                <Route path="/doctor/payments" view=|| view! {
                    <AppShell title="Payments">
                        <SectionPlaceholder text="No payments recorded yet." />
                    </AppShell>
                } />
                <Route path="/doctor/notifications" view=NotificationsPage />
                <Route path="/doctor/suppliers" view=|| view! {
                    <AppShell title="Suppliers">
                        <SectionPlaceholder text="No suppliers added yet." />
                    </AppShell>
                } />

                // Catch-all for 404
                <Route path="/*any" view=NotFoundPage />
            </Routes>
        </Router>
    }
}

/// Landing page: the standalone top bar toggles a sidebar owned by this page
#[component]
fn LandingPage() -> impl IntoView {
    let (sidebar_open, set_sidebar_open) = create_signal(true);
    let brand = use_dashboard().config().brand.clone();

    view! {
        <Title text=brand.clone() />
        <div class="h-screen flex bg-slate-50 text-slate-800 overflow-hidden">
            <Show when=move || sidebar_open.get()>
                <Sidebar />
            </Show>

            <div class="flex-1 flex flex-col min-w-0">
                <TopBar on_toggle_sidebar=move |_| set_sidebar_open.update(|open| *open = !*open) />

                <main class="flex-1 flex items-center justify-center p-6">
                    <div class="text-center">
                        <h1 class="text-3xl font-bold text-slate-900">"Welcome to " {brand}</h1>
                        <p class="text-slate-500 mt-2">"Manage patients, appointments and payments in one place."</p>
                        <A
                            href="/doctor/dashboard"
                            class="inline-block mt-6 px-5 py-2.5 rounded-lg bg-blue-600 text-white text-sm font-medium hover:bg-blue-700 transition-colors"
                        >
                            "Open dashboard"
                        </A>
                    </div>
                </main>
            </div>
        </div>
    }
}

#[component]
fn DashboardPage() -> impl IntoView {
    view! {
        <AppShell
            title="Dashboard"
            action_label="New Appointment"
            on_action=move |_| tracing::info!("New appointment requested")
        >
            <div class="grid grid-cols-1 md:grid-cols-3 gap-4">
                <SummaryCard label="Patients today" />
                <SummaryCard label="Appointments" />
                <SummaryCard label="Pending payments" />
            </div>
        </AppShell>
    }
}

/// Notifications page listing the configured notification feed
#[component]
fn NotificationsPage() -> impl IntoView {
    let notifications = use_dashboard().config().notifications.clone();

    view! {
        <AppShell title="Notifications" subtitle="Recent activity in your practice">
            <ul class="bg-white rounded-xl border border-slate-200 divide-y divide-slate-100">
                {notifications
                    .into_iter()
                    .map(|n| view! { <li class="px-5 py-3 text-sm text-slate-700">{n.text}</li> })
                    .collect_view()}
            </ul>
        </AppShell>
    }
}

#[component]
fn SummaryCard(label: &'static str) -> impl IntoView {
    view! {
        <div class="bg-white rounded-xl border border-slate-200 p-5">
            <p class="text-sm text-slate-500">{label}</p>
            <p class="text-2xl font-bold text-slate-900 mt-2">"-"</p>
        </div>
    }
}

#[component]
fn SectionPlaceholder(text: &'static str) -> impl IntoView {
    view! {
        <div class="bg-white rounded-xl border border-dashed border-slate-300 p-10 text-center text-slate-500">
            {text}
        </div>
    }
}

#[component]
fn NotFoundPage() -> impl IntoView {
    view! {
        <AppShell title="Page not found" subtitle="The page you are looking for does not exist">
            <A href="/doctor/dashboard" class="text-blue-600 hover:underline">"Back to dashboard"</A>
        </AppShell>
    }
}
