use dioxus::prelude::*;
use store::view::{catalog_view, CatalogBody, MovieDetailsView};
use store::{GenreFilter, SortKey};
use ui::{
    use_auth_gate, use_sessions, ErrorBlock, LoadingSpinner, MovieCard, MovieDetailsModal,
};

use super::{start_booking, use_catalog};

/// Full catalog with search, genre tabs, sorting and "show more".
#[component]
pub fn Movies() -> Element {
    let mut catalog = use_catalog();
    let nav = use_navigator();
    let gate = use_auth_gate();
    let sessions = use_sessions();
    let mut details = use_signal(|| None::<u64>);

    let book = use_callback(move |id: u64| {
        details.set(None);
        start_booking(gate, &sessions, nav, id);
    });

    let view = catalog_view(&catalog.read());
    let open = details().and_then(|id| {
        let state = catalog.read();
        state.find(id).map(MovieDetailsView::from)
    });

    let body = match view.body {
        CatalogBody::Loading => rsx! { LoadingSpinner { message: "Loading movies..." } },
        CatalogBody::Error => rsx! { ErrorBlock { message: "Failed to load movies. Please try again later." } },
        CatalogBody::Empty { title, message } => rsx! {
            div {
                class: "no-movies-message",
                h3 { "{title}" }
                p { "{message}" }
                button {
                    class: "btn btn-primary",
                    onclick: move |_| catalog.write().clear_filters(),
                    "Clear Filters"
                }
            }
        },
        CatalogBody::Movies(cards) => rsx! {
            div {
                class: "movies-grid",
                for card in cards {
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
            class: "page-header",
            h1 { "Movies" }
            p { "Find something to watch." }
        }

        div {
            class: "catalog-controls",
            input {
                class: "search-input",
                r#type: "search",
                placeholder: "Search by title, genre or language",
                value: "{view.search}",
                oninput: move |evt: FormEvent| catalog.write().set_search(evt.value()),
            }
            select {
                class: "sort-select",
                onchange: move |evt: FormEvent| {
                    match evt.value().parse::<SortKey>() {
                        Ok(key) => catalog.write().set_sort(key),
                        Err(e) => tracing::warn!("{e}"),
                    }
                },
                for opt in view.sort_options {
                    option {
                        key: "{opt.value}",
                        value: "{opt.value}",
                        selected: opt.selected,
                        "Sort by {opt.label}"
                    }
                }
            }
        }

        div {
            class: "genre-tabs",
            for tab in view.genre_tabs {
                button {
                    key: "{tab.value}",
                    class: if tab.selected { "genre-tab active" } else { "genre-tab" },
                    onclick: {
                        let genre = GenreFilter::from(tab.value.as_str());
                        move |_| catalog.write().set_genre(genre.clone())
                    },
                    "{tab.label}"
                }
            }
        }

        {body}

        if view.show_more {
            div {
                class: "show-more",
                button {
                    class: "btn btn-outline",
                    onclick: move |_| catalog.write().show_more(),
                    "Show More"
                }
            }
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
