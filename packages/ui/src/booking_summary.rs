use dioxus::prelude::*;
use store::view::SummaryView;

/// Price breakdown beside the seat map and on the payment step.
#[component]
pub fn BookingSummary(
    #[props(!optional)] summary: Option<SummaryView>,
    selected_seats: String,
) -> Element {
    let Some(summary) = summary else {
        return rsx! {
            div {
                class: "booking-summary empty",
                p { "Select a movie to see pricing" }
            }
        };
    };

    rsx! {
        div {
            class: "booking-summary",
            h3 { "Booking Summary" }
            div { class: "summary-row", span { "Movie" } span { "{summary.movie_title}" } }
            div { class: "summary-row", span { "Selected Seats" } span { "{summary.seats}" } }
            div { class: "summary-row", span { "Tickets" } span { "{summary.tickets}" } }
            div { class: "summary-row", span { "Price per ticket" } span { "{summary.price_per_ticket}" } }
            div { class: "summary-row", span { "Subtotal" } span { "{summary.subtotal}" } }
            div { class: "summary-row", span { "Convenience fee" } span { "{summary.convenience_fee}" } }
            div { class: "summary-row total", span { "Total" } span { "{summary.total}" } }
            p { class: "selected-seats", "{selected_seats}" }
        }
    }
}
