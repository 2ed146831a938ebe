use dioxus::prelude::*;

use crate::components::Tabs;
use crate::hooks::use_caller_profile;

use super::{BookCatalog, BorrowedBooksList, NoticeBoard, ProfileSetupModal};

/// Member home: catalog, own loans, and notices.
#[component]
pub fn StudentDashboard() -> Element {
    let profile = use_caller_profile();
    let tab = use_signal(|| "browse".to_string());

    let loaded = profile.data();
    let greeting = match &loaded {
        Some(Some(p)) if !p.name.is_empty() => format!("Welcome, {}!", p.name),
        _ => "Welcome!".to_string(),
    };
    let needs_setup = matches!(loaded, Some(None));

    let tabs = vec![
        ("browse".to_string(), "Browse Books".to_string()),
        ("borrowed".to_string(), "My Borrowed Books".to_string()),
        ("notices".to_string(), "Notices".to_string()),
    ];

    rsx! {
        div {
            class: "page",
            div {
                class: "page-header",
                p { class: "eyebrow", "VEMU Library Portal · Student Dashboard" }
                h1 { "{greeting}" }
            }
            Tabs { tabs, active: tab }
            match tab().as_str() {
                "borrowed" => rsx! { BorrowedBooksList {} },
                "notices" => rsx! { NoticeBoard {} },
                _ => rsx! { BookCatalog {} },
            }
        }
        if needs_setup {
            ProfileSetupModal {}
        }
    }
}
