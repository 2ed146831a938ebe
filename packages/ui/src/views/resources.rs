use dioxus::prelude::*;

use crate::components::{Badge, Card, EmptyState, ErrorState, SearchInput, SkeletonGrid};
use crate::filters::{self, categories, filter_resources, resource_icon, showing, ResourceIcon};
use crate::hooks::use_digital_resources;
use crate::icons;
use crate::query::QueryState;

#[component]
fn CategoryIcon(category: String) -> Element {
    match resource_icon(&category) {
        ResourceIcon::Book => rsx! { crate::Icon { icon: icons::FaBookOpen, width: 20, height: 20 } },
        ResourceIcon::Journal => rsx! { crate::Icon { icon: icons::FaFileLines, width: 20, height: 20 } },
        ResourceIcon::Database => rsx! { crate::Icon { icon: icons::FaDatabase, width: 20, height: 20 } },
        ResourceIcon::Video => rsx! { crate::Icon { icon: icons::FaVideo, width: 20, height: 20 } },
        ResourceIcon::Web => rsx! { crate::Icon { icon: icons::FaGlobe, width: 20, height: 20 } },
    }
}

/// Public list of e-books, journals, databases, and other links.
#[component]
pub fn DigitalResources() -> Element {
    let resources = use_digital_resources();
    let mut search = use_signal(String::new);
    let mut category = use_signal(|| filters::ALL.to_string());

    let all = match resources.state() {
        QueryState::Ready(all) => all,
        QueryState::Failed(_) => {
            return rsx! { ErrorState { message: "Failed to load resources" } }
        }
        _ => return rsx! { SkeletonGrid {} },
    };

    let mut chips = vec![filters::ALL.to_string()];
    chips.extend(categories(all.iter().map(|r| r.category.as_str())));
    let visible = filter_resources(&all, &search(), &category());
    let summary = showing(visible.len(), all.len(), "resources");

    rsx! {
        div {
            class: "page",
            div {
                class: "page-header",
                h1 { "Digital Resources" }
                p { class: "muted", "E-books, journals, databases, and learning material curated by the library." }
            }
            SearchInput {
                value: search(),
                placeholder: "Search resources by title, description, or category...",
                oninput: move |value| search.set(value),
            }
            div {
                class: "chips",
                for chip in chips {
                    button {
                        key: "{chip}",
                        class: if category() == chip { "chip chip-active" } else { "chip" },
                        onclick: {
                            let chip = chip.clone();
                            move |_| category.set(chip.clone())
                        },
                        if chip == filters::ALL { "All" } else { "{chip}" }
                    }
                }
            }
            p { class: "muted", "{summary}" }
            if visible.is_empty() {
                EmptyState { message: "No resources found. Try adjusting your search or filter." }
            } else {
                div {
                    class: "grid",
                    for resource in visible {
                        Card {
                            key: "{resource.id}",
                            div {
                                class: "card-header",
                                CategoryIcon { category: resource.category.clone() }
                                h3 { class: "card-title", "{resource.title}" }
                            }
                            Badge { "{resource.category}" }
                            p { class: "description", "{resource.description}" }
                            a {
                                class: "btn btn-outline btn-sm",
                                href: "{resource.url}",
                                target: "_blank",
                                rel: "noopener noreferrer",
                                crate::Icon { icon: icons::FaArrowUpRightFromSquare, width: 12, height: 12 }
                                "Open Resource"
                            }
                        }
                    }
                }
            }
        }
    }
}
