use dioxus::prelude::*;
use ui::{AuthControls, Navbar};

use crate::Route;

/// Navbar, page body and footer around every route.
#[component]
pub fn Shell() -> Element {
    let nav = use_navigator();
    let route = use_route::<Route>();
    // Signing out on these pages sends the user home
    let protected = matches!(route, Route::Dashboard {} | Route::Booking {});

    rsx! {
        Navbar {
            on_home: move |_| {
                nav.push(Route::Home {});
            },
            Link { class: "nav-link", active_class: "active", to: Route::Home {}, "Home" }
            Link { class: "nav-link", active_class: "active", to: Route::Movies {}, "Movies" }
            Link { class: "nav-link", active_class: "active", to: Route::Booking {}, "Book Tickets" }
            AuthControls {
                on_dashboard: move |_| {
                    nav.push(Route::Dashboard {});
                },
                on_logout: move |_| {
                    if protected {
                        nav.replace(Route::Home {});
                    }
                },
            }
        }

        main {
            class: "page",
            Outlet::<Route> {}
        }

        footer {
            class: "footer",
            p { "CineBook. Tickets for every show." }
        }
    }
}
