use dioxus::prelude::*;
use store::view::{dashboard_view, BookingCardView};
use store::{BookingBackend, Dashboard as DashboardState};
use ui::{api_client, sleep, use_app_config, use_auth, use_notifier, LoadingSpinner};

use crate::Route;

const REDIRECT_DELAY_MS: u32 = 800;

/// The signed-in user's bookings, with cancellation.
#[component]
pub fn Dashboard() -> Element {
    let config = use_app_config();
    let auth = use_auth();
    let notifier = use_notifier();
    let nav = use_navigator();
    let mut dashboard = use_signal(DashboardState::new);

    let loader_config = config.clone();
    use_future(move || {
        let session = auth.peek().session.clone();
        let client = api_client(&loader_config, session.as_ref());
        async move {
            if session.is_none() {
                notifier.error("Please login to view your dashboard");
                sleep(REDIRECT_DELAY_MS).await;
                nav.replace(Route::Home {});
                return;
            }
            let result = client.my_bookings().await;
            dashboard.write().apply(result);
        }
    });

    let cancel = use_callback(move |id: u64| {
        let session = auth.peek().session.clone();
        let client = api_client(&config, session.as_ref());
        spawn(async move {
            match client.cancel_booking(id).await {
                Ok(()) => {
                    dashboard.write().remove(id);
                    notifier.success("Booking cancelled.");
                }
                Err(e) => {
                    tracing::error!(booking_id = id, "cancel failed: {e}");
                    notifier.error(format!("Failed to cancel booking: {e}"));
                }
            }
        });
    });

    let session = auth.read().session.clone();
    let Some(session) = session else {
        return rsx! {
            LoadingSpinner { message: "Redirecting..." }
        };
    };
    let view = dashboard_view(&dashboard.read(), Some(&session));

    rsx! {
        section {
            class: "page-header",
            h1 { "My Bookings" }
            p { class: "user-greeting", "{view.greeting}" }
        }

        if view.loading {
            LoadingSpinner { message: "Loading your bookings..." }
        } else {
            if view.sample {
                p {
                    class: "sample-notice",
                    "You have no bookings yet. Here is what one will look like."
                }
            }
            div {
                class: "bookings-list",
                for card in view.cards {
                    BookingCard { key: "{card.reference}", card: card.clone(), on_cancel: cancel }
                }
            }
        }
    }
}

#[component]
fn BookingCard(card: BookingCardView, on_cancel: EventHandler<u64>) -> Element {
    let status = card.status.clone().unwrap_or_default();
    let cancel_id = card.id.filter(|_| card.cancellable);
    rsx! {
        div {
            class: "booking-card",
            div {
                class: "booking-card-header",
                h3 { "{card.title}" }
                span { class: "booking-ref", "{card.reference}" }
            }
            div {
                class: "booking-card-body",
                p { "{card.seat}" }
                p { "{card.booked_at}" }
                p { class: "booking-amount", "{card.amount}" }
                if !status.is_empty() {
                    span { class: "status-badge status-{status}", "{status}" }
                }
            }
            if let Some(id) = cancel_id {
                button {
                    class: "btn btn-outline btn-small",
                    onclick: move |_| on_cancel.call(id),
                    "Cancel Booking"
                }
            }
        }
    }
}
