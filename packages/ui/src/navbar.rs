use dioxus::prelude::*;

use crate::auth::{use_auth, LogoutButton};
use crate::hooks::use_caller_profile;
use crate::paths;
use crate::theme::ThemeToggle;

#[component]
fn NavLinks(on_navigate: EventHandler<()>) -> Element {
    let auth = use_auth();
    let signed_in = auth.read().session.is_some();
    let is_admin = auth.read().is_admin();

    rsx! {
        Link { class: "nav-link", to: paths::HOME, onclick: move |_| on_navigate.call(()), "Home" }
        Link { class: "nav-link", to: paths::RESOURCES, onclick: move |_| on_navigate.call(()), "Resources" }
        if signed_in && !is_admin {
            Link {
                class: "nav-link",
                to: paths::DASHBOARD,
                onclick: move |_| on_navigate.call(()),
                crate::Icon { icon: crate::icons::FaTableColumns, width: 14, height: 14 }
                "Dashboard"
            }
            Link { class: "nav-link", to: paths::PROFILE, onclick: move |_| on_navigate.call(()), "Profile" }
        }
        if signed_in && is_admin {
            Link {
                class: "nav-link",
                to: paths::ADMIN,
                onclick: move |_| on_navigate.call(()),
                crate::Icon { icon: crate::icons::FaShieldHalved, width: 14, height: 14 }
                "Admin"
            }
        }
    }
}

#[component]
fn AccountActions() -> Element {
    let auth = use_auth();
    let profile = use_caller_profile();

    if auth.read().session.is_none() {
        return rsx! {
            Link { class: "btn btn-ghost btn-sm", to: paths::LOGIN, "Login" }
            Link { class: "btn btn-primary btn-sm", to: paths::SIGNUP, "Sign Up" }
        };
    }

    rsx! {
        if let Some(Some(profile)) = profile.data() {
            span { class: "nav-user", "{profile.name}" }
        }
        LogoutButton { class: "btn btn-ghost btn-sm" }
    }
}

/// Top bar with brand, page links, theme toggle, and account actions.
#[component]
pub fn Navbar() -> Element {
    let mut open = use_signal(|| false);

    rsx! {
        header {
            class: "navbar",
            div {
                class: "navbar-inner",
                Link {
                    class: "brand",
                    to: paths::HOME,
                    crate::Icon { icon: crate::icons::FaBookOpen, width: 22, height: 22 }
                    div {
                        p { class: "brand-org", "VEMU Institute of Technology" }
                        p { class: "brand-name", "Library Portal" }
                    }
                }
                nav { class: "nav-links", NavLinks { on_navigate: move |_| open.set(false) } }
                div {
                    class: "nav-actions",
                    ThemeToggle {}
                    AccountActions {}
                }
                button {
                    class: "btn btn-ghost nav-menu",
                    "aria-label": "Toggle menu",
                    onclick: move |_| open.toggle(),
                    if open() {
                        crate::Icon { icon: crate::icons::FaXmark, width: 18, height: 18 }
                    } else {
                        crate::Icon { icon: crate::icons::FaBars, width: 18, height: 18 }
                    }
                }
            }
            if open() {
                nav {
                    class: "nav-drawer",
                    NavLinks { on_navigate: move |_| open.set(false) }
                    AccountActions {}
                }
            }
        }
    }
}
