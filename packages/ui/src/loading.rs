use dioxus::prelude::*;

use crate::icons::FaTriangleExclamation;
use crate::Icon;

#[component]
pub fn LoadingSpinner(#[props(default = "Loading...".to_string())] message: String) -> Element {
    rsx! {
        div {
            class: "loading",
            div { class: "loading-spinner" }
            p { "{message}" }
        }
    }
}

/// Inline error block for a section that failed to load.
#[component]
pub fn ErrorBlock(message: String) -> Element {
    rsx! {
        div {
            class: "error-message",
            Icon { icon: FaTriangleExclamation, width: 20, height: 20 }
            p { "{message}" }
        }
    }
}
