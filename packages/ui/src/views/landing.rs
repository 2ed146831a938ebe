use dioxus::prelude::*;

use crate::auth::use_auth;
use crate::components::Card;
use crate::counter::AnimatedCounter;
use crate::icons;
use crate::paths;

use super::NoticeBoard;

const FEATURES: [(&str, &str); 6] = [
    (
        "Smart Book Search",
        "Find any book instantly with our powerful search and filter system across thousands of titles.",
    ),
    (
        "Easy Borrowing",
        "Borrow books with a single click and manage your reading list from your personal dashboard.",
    ),
    (
        "Due Date Tracking",
        "Never miss a return date with clear due date displays and your borrowing history.",
    ),
    (
        "Secure Access",
        "Role-based access control ensures students and administrators have the right permissions.",
    ),
    (
        "Academic Focus",
        "Curated collection of academic texts, research papers, and reference materials.",
    ),
    (
        "Premium Experience",
        "A modern, intuitive interface designed for the VEMU academic community.",
    ),
];

/// Marketing figures shown on the landing page; not read from the backend.
const STATIC_STATS: [(&str, u64); 4] = [
    ("Books Available", 5_000),
    ("Registered Users", 1_200),
    ("Books Borrowed", 340),
    ("Categories", 48),
];

#[component]
pub fn Landing() -> Element {
    let auth = use_auth();
    let signed_in = auth.read().session.is_some();
    let home = paths::home_for(auth.read().role);

    rsx! {
        section {
            class: "hero",
            h1 { class: "hero-title", "VEMU INSTITUTE" br {} "OF TECHNOLOGY" }
            span {
                class: "badge badge-info",
                crate::Icon { icon: icons::FaStar, width: 12, height: 12 }
                "Digital Library Portal"
            }
            h2 { "Your Gateway to " span { class: "accent", "Academic Excellence" } }
            p {
                class: "hero-lead",
                "Access thousands of books, manage your borrowings, and explore our curated academic collection, all in one place."
            }
            div {
                class: "hero-actions",
                if signed_in {
                    Link { class: "btn btn-primary", to: home, "Go to Dashboard" }
                } else {
                    Link { class: "btn btn-primary", to: paths::SIGNUP, "Get Started" }
                    Link { class: "btn btn-outline", to: paths::LOGIN, "Login" }
                }
            }
        }

        section {
            class: "stats-bar",
            for (label, value) in STATIC_STATS {
                div {
                    key: "{label}",
                    class: "stat",
                    div { class: "stat-value", AnimatedCounter { value } "+" }
                    p { class: "muted", "{label}" }
                }
            }
        }

        section {
            class: "section",
            h2 { class: "section-title", "Everything You Need" }
            p { class: "muted", "A comprehensive library management system built for the VEMU academic community." }
            div {
                class: "grid",
                for (title, description) in FEATURES {
                    Card {
                        key: "{title}",
                        h3 { class: "card-title", "{title}" }
                        p { class: "muted", "{description}" }
                    }
                }
            }
        }

        section {
            class: "section",
            h2 { class: "section-title", "Latest Announcements" }
            NoticeBoard { limit: 3 }
        }
    }
}
