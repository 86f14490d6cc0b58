use dioxus::prelude::*;
use store::view::{MovieCardView, MovieDetailsView};

use crate::icons::{FaClock, FaFilm, FaLanguage, FaStar, FaTicket};
use crate::modal::Modal;
use crate::Icon;

fn poster(url: Option<&str>) -> Element {
    match url {
        Some(url) => rsx! {
            div {
                class: "movie-poster",
                style: "background-image: url('{url}')",
            }
        },
        None => rsx! {
            div {
                class: "movie-poster poster-placeholder",
                Icon { icon: FaFilm, width: 48, height: 48 }
            }
        },
    }
}

/// One catalog tile with "Details" and "Book Now" actions.
#[component]
pub fn MovieCard(
    card: MovieCardView,
    on_details: EventHandler<u64>,
    on_book: EventHandler<u64>,
) -> Element {
    let id = card.id;
    rsx! {
        div {
            class: "movie-card",
            onclick: move |_| on_details.call(id),
            {poster(card.poster_url.as_deref())}
            div {
                class: "movie-info",
                h3 { class: "movie-title", "{card.title}" }
                div {
                    class: "movie-meta",
                    span { class: "meta-item genre", "{card.genre}" }
                    span {
                        class: "meta-item",
                        Icon { icon: FaClock, width: 12, height: 12 }
                        " {card.duration}"
                    }
                    if let Some(score) = &card.score {
                        span {
                            class: "meta-item",
                            Icon { icon: FaStar, width: 12, height: 12 }
                            " {score}"
                        }
                    }
                }
                div {
                    class: "movie-footer",
                    span { class: "movie-price", "{card.price}" }
                    button {
                        class: "btn btn-primary btn-small",
                        onclick: move |evt: Event<MouseData>| {
                            evt.stop_propagation();
                            on_book.call(id);
                        },
                        Icon { icon: FaTicket, width: 12, height: 12 }
                        " Book Now"
                    }
                }
            }
        }
    }
}

/// Details modal opened from a catalog tile.
#[component]
pub fn MovieDetailsModal(
    details: MovieDetailsView,
    on_close: EventHandler<()>,
    on_book: EventHandler<u64>,
) -> Element {
    let card = details.card;
    let id = card.id;
    rsx! {
        Modal {
            title: card.title.clone(),
            class: "modal-card movie-modal",
            on_close,
            div {
                class: "movie-modal-body",
                {poster(card.poster_url.as_deref())}
                div {
                    class: "movie-modal-info",
                    div {
                        class: "movie-meta",
                        span { class: "meta-item genre", "{card.genre}" }
                        span { class: "meta-item", "{card.rating}" }
                        span {
                            class: "meta-item",
                            Icon { icon: FaClock, width: 12, height: 12 }
                            " {card.duration}"
                        }
                        span {
                            class: "meta-item",
                            Icon { icon: FaLanguage, width: 12, height: 12 }
                            " {card.language}"
                        }
                        if let Some(score) = &card.score {
                            span {
                                class: "meta-item",
                                Icon { icon: FaStar, width: 12, height: 12 }
                                " {score}"
                            }
                        }
                    }
                    p { class: "movie-description", "{details.description}" }
                    div {
                        class: "movie-footer",
                        span { class: "movie-price", "{card.price}" }
                        button {
                            class: "btn btn-primary",
                            onclick: move |_| on_book.call(id),
                            "Book Tickets"
                        }
                    }
                }
            }
        }
    }
}
