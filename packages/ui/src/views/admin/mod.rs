//! Administrator console: one sidebar, seven panels.

mod announcements;
mod books;
mod overview;
mod records;
mod reservations;
mod resources;
mod users;

use dioxus::prelude::*;
use dioxus_free_icons::IconShape;

use announcements::ManageAnnouncements;
use books::ManageBooks;
use overview::Overview;
use records::BorrowRecords;
use reservations::ManageReservations;
use resources::ManageResources;
use users::ManageUsers;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Panel {
    Overview,
    Books,
    Users,
    Records,
    Reservations,
    Resources,
    Announcements,
}

impl Panel {
    const ALL: [Panel; 7] = [
        Panel::Overview,
        Panel::Books,
        Panel::Users,
        Panel::Records,
        Panel::Reservations,
        Panel::Resources,
        Panel::Announcements,
    ];

    fn label(self) -> &'static str {
        match self {
            Panel::Overview => "Overview",
            Panel::Books => "Manage Books",
            Panel::Users => "Manage Users",
            Panel::Records => "Borrow Records",
            Panel::Reservations => "Reservations",
            Panel::Resources => "Digital Resources",
            Panel::Announcements => "Announcements",
        }
    }
}

#[component]
fn PanelIcon(panel: Panel) -> Element {
    fn icon<I: IconShape + Clone + PartialEq + 'static>(shape: I) -> Element {
        rsx! { crate::Icon { icon: shape, width: 14, height: 14 } }
    }
    match panel {
        Panel::Overview => icon(crate::icons::FaChartLine),
        Panel::Books => icon(crate::icons::FaBook),
        Panel::Users => icon(crate::icons::FaUsers),
        Panel::Records => icon(crate::icons::FaClipboardList),
        Panel::Reservations => icon(crate::icons::FaCalendarCheck),
        Panel::Resources => icon(crate::icons::FaGlobe),
        Panel::Announcements => icon(crate::icons::FaBullhorn),
    }
}

#[component]
pub fn AdminDashboard() -> Element {
    let mut panel = use_signal(|| Panel::Overview);
    let mut drawer_open = use_signal(|| false);

    rsx! {
        div {
            class: "admin-layout",
            button {
                class: "btn btn-ghost admin-drawer-toggle",
                onclick: move |_| drawer_open.toggle(),
                crate::Icon { icon: crate::icons::FaBars, width: 14, height: 14 }
                " Menu"
            }
            aside {
                class: if drawer_open() { "admin-sidebar open" } else { "admin-sidebar" },
                p { class: "eyebrow", "Admin Console" }
                nav {
                    for item in Panel::ALL {
                        button {
                            key: "{item.label()}",
                            class: if panel() == item { "admin-nav active" } else { "admin-nav" },
                            onclick: move |_| {
                                panel.set(item);
                                drawer_open.set(false);
                            },
                            PanelIcon { panel: item }
                            span { "{item.label()}" }
                        }
                    }
                }
            }
            main {
                class: "admin-main",
                match panel() {
                    Panel::Overview => rsx! { Overview {} },
                    Panel::Books => rsx! { ManageBooks {} },
                    Panel::Users => rsx! { ManageUsers {} },
                    Panel::Records => rsx! { BorrowRecords {} },
                    Panel::Reservations => rsx! { ManageReservations {} },
                    Panel::Resources => rsx! { ManageResources {} },
                    Panel::Announcements => rsx! { ManageAnnouncements {} },
                }
            }
        }
    }
}
