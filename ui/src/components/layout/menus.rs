//! Top Bar Dropdown Menus
//!
//! Notifications, language and profile dropdowns. Each reads and writes the
//! owning top bar's `TopBarModel`; nothing here closes on outside clicks.

use leptos::*;
use medboard_shared::{Language, Menu, MenuLink, Notification, ProfileCard, TopBarEvent, TopBarModel};

use crate::components::common::{BellIcon, ChevronDownIcon};

/// Stable identifier used in `data-menu` attributes
pub fn menu_id(menu: Menu) -> &'static str {
    match menu {
        Menu::Notifications => "notifications",
        Menu::Language => "language",
        Menu::Profile => "profile",
    }
}

fn toggle(model: RwSignal<TopBarModel>, menu: Menu) {
    model.update(|m| {
        m.apply(TopBarEvent::ToggleMenu(menu));
    });
    tracing::debug!(
        menu = menu_id(menu),
        open = model.with_untracked(|m| m.is_open(menu)),
        "Toggled menu"
    );
}

const TRIGGER_CLASS: &str =
    "flex items-center gap-2 p-2 rounded-lg text-slate-600 hover:text-slate-900 hover:bg-slate-100 transition-colors";

/// Dropdown panel container
#[component]
fn DropdownPanel(
    menu: Menu,
    #[prop(default = "w-48")] width: &'static str,
    children: Children,
) -> impl IntoView {
    view! {
        <div
            role="menu"
            data-menu=menu_id(menu)
            class=format!("absolute right-0 mt-2 {} bg-white rounded-lg shadow-lg border border-slate-200 py-1 z-50", width)
        >
            {children()}
        </div>
    }
}

/// Notification bell with count badge and list
#[component]
pub fn NotificationsMenu(
    model: RwSignal<TopBarModel>,
    notifications: Vec<Notification>,
) -> impl IntoView {
    let is_open = move || model.with(|m| m.is_open(Menu::Notifications));
    let count = notifications.len();
    let notifications = store_value(notifications);

    view! {
        <div class="relative">
            <button
                type="button"
                class=format!("relative {}", TRIGGER_CLASS)
                aria-label="Notifications"
                aria-haspopup="menu"
                aria-expanded=move || is_open().to_string()
                data-trigger=menu_id(Menu::Notifications)
                on:click=move |_| toggle(model, Menu::Notifications)
            >
                <BellIcon class="w-5 h-5" />
                <span
                    data-badge="notifications"
                    class="absolute -top-0.5 -right-0.5 min-w-[1.1rem] h-[1.1rem] px-1 rounded-full bg-red-500 text-white text-[10px] font-semibold flex items-center justify-center"
                >
                    {count}
                </span>
            </button>

            <Show when=is_open>
                <DropdownPanel menu=Menu::Notifications width="w-80">
                    <div class="px-4 py-2 border-b border-slate-100 text-sm font-semibold text-slate-900">
                        "Notifications"
                    </div>
                    <ul class="max-h-80 overflow-y-auto">
                        {notifications.with_value(|list| {
                            list.iter()
                                .map(|n| view! {
                                    <li data-id=n.id class="px-4 py-2 text-sm text-slate-700 hover:bg-slate-50">
                                        {n.text.clone()}
                                    </li>
                                })
                                .collect_view()
                        })}
                    </ul>
                </DropdownPanel>
            </Show>
        </div>
    }
}

/// Language selector showing the current flag and label
#[component]
pub fn LanguageMenu(
    model: RwSignal<TopBarModel>,
    languages: Vec<Language>,
) -> impl IntoView {
    let is_open = move || model.with(|m| m.is_open(Menu::Language));
    let languages = store_value(languages);

    view! {
        <div class="relative">
            <button
                type="button"
                class=TRIGGER_CLASS
                aria-haspopup="menu"
                aria-expanded=move || is_open().to_string()
                data-trigger=menu_id(Menu::Language)
                on:click=move |_| toggle(model, Menu::Language)
            >
                <img
                    class="w-6 h-4 rounded-sm object-cover"
                    src=move || model.with(|m| m.language().flag_url.clone())
                    alt=""
                />
                <span data-role="current-language" class="text-sm font-medium">
                    {move || model.with(|m| m.language().label.clone())}
                </span>
                <ChevronDownIcon />
            </button>

            <Show when=is_open>
                <DropdownPanel menu=Menu::Language width="w-40">
                    {languages.with_value(|list| list
                        .iter()
                        .map(|language| {
                            let code = language.code.clone();
                            let label = language.label.clone();
                            let flag_url = language.flag_url.clone();
                            let language = language.clone();

                            view! {
                                <button
                                    type="button"
                                    role="menuitem"
                                    data-language=code
                                    class="w-full flex items-center gap-2 px-4 py-2 text-sm text-slate-700 hover:bg-slate-100"
                                    on:click=move |_| {
                                        tracing::debug!(language = %language.code, "Selected language");
                                        model.update(|m| {
                                            m.apply(TopBarEvent::SelectLanguage(language.clone()));
                                        });
                                    }
                                >
                                    <img class="w-6 h-4 rounded-sm object-cover" src=flag_url alt="" />
                                    <span>{label}</span>
                                </button>
                            }
                        })
                        .collect_view())}
                </DropdownPanel>
            </Show>
        </div>
    }
}

/// Profile trigger with avatar, name and role
#[component]
pub fn ProfileMenu(
    model: RwSignal<TopBarModel>,
    profile: ProfileCard,
    links: Vec<MenuLink>,
) -> impl IntoView {
    let is_open = move || model.with(|m| m.is_open(Menu::Profile));
    let links = store_value(links);
    let ProfileCard {
        name,
        role,
        avatar_url,
    } = profile;

    view! {
        <div class="relative">
            <button
                type="button"
                class=TRIGGER_CLASS
                aria-haspopup="menu"
                aria-expanded=move || is_open().to_string()
                data-trigger=menu_id(Menu::Profile)
                on:click=move |_| toggle(model, Menu::Profile)
            >
                <img class="w-9 h-9 rounded-full object-cover" src=avatar_url alt=name.clone() />
                <div class="hidden md:flex flex-col items-start leading-tight">
                    <span class="text-sm font-semibold text-slate-900">{name}</span>
                    <span class="text-xs text-slate-500">{role}</span>
                </div>
                <ChevronDownIcon />
            </button>

            <Show when=is_open>
                <DropdownPanel menu=Menu::Profile>
                    {links.with_value(|list| {
                        list.iter()
                            .map(|link| view! {
                                <a
                                    href=link.href.clone()
                                    role="menuitem"
                                    class="block px-4 py-2 text-sm text-slate-700 hover:bg-slate-100"
                                >
                                    {link.label.clone()}
                                </a>
                            })
                            .collect_view()
                    })}
                </DropdownPanel>
            </Show>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_menu_ids_are_distinct() {
        let ids: Vec<_> = Menu::ALL.into_iter().map(menu_id).collect();
        assert_eq!(ids, ["notifications", "language", "profile"]);
    }
}
