//! Route components. Guarded pages wrap the shared views in `ProtectedRoute`.

use dioxus::prelude::*;

use ui::views::{AdminDashboard, DigitalResources, Landing, Login, SignUp, StudentDashboard, StudentProfile};
use ui::{Footer, Navbar, ProtectedRoute, RequiredRole};

use crate::Route;

/// Navbar and footer around every page.
#[component]
pub fn AppLayout() -> Element {
    rsx! {
        Navbar {}
        main { class: "app-main", Outlet::<Route> {} }
        Footer {}
    }
}

#[component]
pub fn Home() -> Element {
    rsx! { Landing {} }
}

#[component]
pub fn LoginPage() -> Element {
    rsx! { Login {} }
}

#[component]
pub fn SignUpPage() -> Element {
    rsx! { SignUp {} }
}

#[component]
pub fn Resources() -> Element {
    rsx! {
        div { class: "page", DigitalResources {} }
    }
}

#[component]
pub fn Dashboard() -> Element {
    rsx! {
        ProtectedRoute { required: RequiredRole::Member, StudentDashboard {} }
    }
}

#[component]
pub fn Profile() -> Element {
    rsx! {
        ProtectedRoute { required: RequiredRole::Member, StudentProfile {} }
    }
}

#[component]
pub fn Admin() -> Element {
    rsx! {
        ProtectedRoute { required: RequiredRole::Admin, AdminDashboard {} }
    }
}
