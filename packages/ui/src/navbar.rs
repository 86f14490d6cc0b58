use dioxus::prelude::*;

use crate::icons::FaFilm;
use crate::Icon;

/// Top bar: brand on the left, `children` (links, auth controls) on the right.
#[component]
pub fn Navbar(on_home: EventHandler<()>, children: Element) -> Element {
    rsx! {
        nav {
            class: "navbar",
            button {
                class: "navbar-brand",
                onclick: move |_| on_home.call(()),
                Icon { icon: FaFilm, width: 20, height: 20 }
                span { "CineBook" }
            }
            div {
                class: "navbar-menu",
                {children}
            }
        }
    }
}
