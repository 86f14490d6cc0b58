use dioxus::prelude::*;

use store::AppConfig;
use ui::{AuthProvider, NotificationProvider};
use views::{Booking, Dashboard, Home, Movies, Shell};

mod views;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(Shell)]
        #[route("/")]
        Home {},
        #[route("/movies")]
        Movies {},
        #[route("/booking")]
        Booking {},
        #[route("/dashboard")]
        Dashboard {},
}

const MAIN_CSS: Asset = asset!("/assets/main.css");
const CONFIG_TOML: &str = include_str!("../booking.toml");

fn main() {
    dioxus::logger::initialize_default();
    dioxus::launch(App);
}

fn load_config() -> AppConfig {
    AppConfig::from_toml(CONFIG_TOML).unwrap_or_else(|e| {
        tracing::error!("invalid {}: {e}; using defaults", AppConfig::filename());
        AppConfig::default()
    })
}

#[component]
fn App() -> Element {
    let config = use_context_provider(load_config);

    rsx! {
        document::Stylesheet { href: ui::THEME_CSS }
        document::Stylesheet { href: MAIN_CSS }

        NotificationProvider {
            duration_ms: config.notifications.duration_ms,
            AuthProvider {
                Router::<Route> {}
            }
        }
    }
}
