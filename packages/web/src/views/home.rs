use dioxus::prelude::*;
use store::catalog::LoadStatus;
use store::view::{MovieCardView, MovieDetailsView};
use ui::{
    use_app_config, use_auth_gate, use_sessions, ErrorBlock, LoadingSpinner, MovieCard,
    MovieDetailsModal,
};

use super::{start_booking, use_catalog};
use crate::Route;

#[component]
pub fn Home() -> Element {
    let config = use_app_config();
    let catalog = use_catalog();
    let nav = use_navigator();
    let gate = use_auth_gate();
    let sessions = use_sessions();
    let mut details = use_signal(|| None::<u64>);

    let book = use_callback(move |id: u64| {
        details.set(None);
        start_booking(gate, &sessions, nav, id);
    });

    let state = catalog.read();
    let status = state.status();
    let featured: Vec<MovieCardView> = state
        .featured(config.catalog.featured_count)
        .iter()
        .map(MovieCardView::from)
        .collect();
    let open = details().and_then(|id| state.find(id)).map(MovieDetailsView::from);
    drop(state);

    let body = match status {
        LoadStatus::Loading => rsx! { LoadingSpinner { message: "Loading movies..." } },
        LoadStatus::Failed => rsx! { ErrorBlock { message: "Failed to load movies. Please try again later." } },
        LoadStatus::Loaded => rsx! {
            div {
                class: "movies-grid",
                for card in featured {
                    MovieCard {
                        key: "{card.id}",
                        card: card.clone(),
                        on_details: move |id: u64| details.set(Some(id)),
                        on_book: book,
                    }
                }
            }
        },
    };

    rsx! {
        section {
            class: "hero",
            h1 { "Book Your Movie Experience" }
            p { "Discover the latest movies and book your seats in seconds." }
            div {
                class: "hero-actions",
                button {
                    class: "btn btn-primary",
                    onclick: move |_| {
                        nav.push(Route::Movies {});
                    },
                    "Browse Movies"
                }
                button {
                    class: "btn btn-outline hero-outline",
                    onclick: move |_| {
                        nav.push(Route::Booking {});
                    },
                    "Book Tickets"
                }
            }
        }

        section {
            class: "featured",
            div {
                class: "section-header",
                h2 { "Now Showing" }
                Link { class: "nav-link", to: Route::Movies {}, "View all" }
            }
            {body}
        }

        if let Some(view) = open {
            MovieDetailsModal {
                details: view,
                on_close: move |_| details.set(None),
                on_book: book,
            }
        }
    }
}
