use dioxus::prelude::*;

use crate::icons::FaXmark;
use crate::Icon;

/// A full-screen backdrop that centers its children in a card.
/// Clicking the backdrop or the close button triggers `on_close`.
#[component]
pub fn Modal(
    on_close: EventHandler<()>,
    #[props(default)] title: Option<String>,
    #[props(default = "modal-card".to_string())] class: String,
    children: Element,
) -> Element {
    rsx! {
        div {
            class: "modal-backdrop",
            onclick: move |_| on_close.call(()),
            div {
                class: "{class}",
                onclick: move |evt: Event<MouseData>| evt.stop_propagation(),
                div {
                    class: "modal-header",
                    if let Some(title) = title {
                        h2 { "{title}" }
                    }
                    button {
                        class: "modal-close",
                        title: "Close",
                        onclick: move |_| on_close.call(()),
                        Icon { icon: FaXmark, width: 16, height: 16 }
                    }
                }
                {children}
            }
        }
    }
}
