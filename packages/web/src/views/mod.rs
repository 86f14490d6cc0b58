mod layout;
pub use layout::Shell;

mod home;
pub use home::Home;

mod movies;
pub use movies::Movies;

mod booking;
pub use booking::Booking;

mod dashboard;
pub use dashboard::Dashboard;

use dioxus::prelude::*;
use dioxus::router::Navigator;
use store::CatalogState;
use ui::{api_client, use_app_config, use_notifier, AuthGate, Sessions};

use crate::Route;

/// Catalog state for a page, fetched once on mount.
pub(crate) fn use_catalog() -> Signal<CatalogState> {
    let config = use_app_config();
    let notifier = use_notifier();
    let mut catalog = use_signal(|| CatalogState::new(config.catalog.page_size));

    use_future(move || {
        let client = api_client(&config, None);
        async move {
            match client.list_movies().await {
                Ok(movies) => catalog.write().set_movies(movies),
                Err(e) => {
                    tracing::error!("failed to load movies: {e}");
                    catalog.write().set_failed();
                    notifier.error(format!("Failed to load movies: {e}"));
                }
            }
        }
    });

    catalog
}

/// Hand `movie_id` to the booking page. Without a session the login form
/// opens instead and nothing is stored.
pub(crate) fn start_booking(gate: AuthGate, sessions: &Sessions, nav: Navigator, movie_id: u64) {
    match sessions.hand_off_movie(movie_id) {
        Ok(_) => {
            nav.push(Route::Booking {});
        }
        Err(denied) => gate.deny(denied),
    }
}
