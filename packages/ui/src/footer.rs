use dioxus::prelude::*;

use crate::paths;

#[component]
pub fn Footer() -> Element {
    let year = api::Time::now().year();

    rsx! {
        footer {
            class: "footer",
            div {
                class: "footer-grid",
                div {
                    p { class: "brand-org", "VEMU Institute of Technology" }
                    p { class: "brand-name", "Library Portal" }
                    p {
                        class: "muted",
                        "Empowering students and faculty with seamless access to knowledge and academic resources."
                    }
                }
                div {
                    h4 { "Quick Links" }
                    ul {
                        li { Link { to: paths::HOME, "Home" } }
                        li { Link { to: paths::RESOURCES, "Digital Resources" } }
                        li { Link { to: paths::LOGIN, "Login" } }
                        li { Link { to: paths::SIGNUP, "Sign Up" } }
                    }
                }
                div {
                    h4 { "Contact" }
                    p { class: "muted", "VEMU Institute of Technology" }
                    p { class: "muted", "Chittoor, Andhra Pradesh" }
                    p { class: "muted", "India - 517 112" }
                }
            }
            p { class: "footer-copy", "© {year} VEMU Institute of Technology. All rights reserved." }
        }
    }
}
