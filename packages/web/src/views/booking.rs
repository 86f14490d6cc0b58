use dioxus::prelude::*;
use store::view::{booking_view, BookingStep, BookingView, ConfirmationView, OptionView};
use store::{
    catalog_channel, take_pending_selection, BookingBackend, BookingFlow, CatalogStatus, FlowError,
    SeatLabel,
};
use ui::{
    api_client, use_app_config, use_auth, use_auth_gate, use_notifier, use_sessions,
    BookingSummary, SeatMap,
};

use crate::Route;

const STEPS: [(BookingStep, &str); 3] = [
    (BookingStep::SeatSelection, "Select Seats"),
    (BookingStep::Payment, "Payment"),
    (BookingStep::Confirmation, "Confirmation"),
];

fn step_class(index: usize, current: usize) -> &'static str {
    match index.cmp(&current) {
        std::cmp::Ordering::Less => "step done",
        std::cmp::Ordering::Equal => "step active",
        std::cmp::Ordering::Greater => "step",
    }
}

fn step_indicator(current: BookingStep) -> Element {
    let position = STEPS.iter().position(|(s, _)| *s == current).unwrap_or(0);
    rsx! {
        div {
            class: "booking-steps",
            for (i, (_, label)) in STEPS.iter().enumerate() {
                div {
                    key: "{label}",
                    class: step_class(i, position),
                    span { class: "step-number", {(i + 1).to_string()} }
                    span { class: "step-label", "{label}" }
                }
            }
        }
    }
}

fn select_options(placeholder: &str, options: Vec<OptionView>) -> Element {
    rsx! {
        option { value: "", "{placeholder}" }
        for opt in options {
            option {
                key: "{opt.value}",
                value: "{opt.value}",
                selected: opt.selected,
                "{opt.label}"
            }
        }
    }
}

/// Three-step booking page: seats, payment, confirmation.
#[component]
pub fn Booking() -> Element {
    let config = use_app_config();
    let auth = use_auth();
    let gate = use_auth_gate();
    let sessions = use_sessions();
    let notifier = use_notifier();
    let booking_config = config.booking.clone();
    let mut flow = use_signal(|| BookingFlow::new(&booking_config));

    let loader_config = config.clone();
    use_future(move || {
        let client = api_client(&loader_config, None);
        let sessions = sessions.clone();
        async move {
            let (publisher, mut ready) = catalog_channel();

            // A movie picked on another page is selected once the list is in
            spawn(async move {
                if let Some((movie_id, _)) = take_pending_selection(&sessions, &mut ready).await {
                    if let Err(e) = flow.write().select_movie(movie_id) {
                        tracing::warn!(movie_id, "pending movie not selectable: {e}");
                    }
                }
            });

            match client.list_movies().await {
                Ok(movies) => {
                    flow.write().load_catalog(movies.clone());
                    publisher.publish(movies);
                }
                Err(e) => {
                    tracing::error!("failed to load movies: {e}");
                    flow.write().catalog_failed();
                    publisher.fail();
                    notifier.error("Failed to load movies. Please try again later.");
                }
            }
        }
    });

    // Runs again on login, but fills the name at most once per flow
    use_effect(move || {
        let session = auth.read().session.clone();
        flow.write().prefill_customer_name(session.as_ref());
    });

    let view = booking_view(&flow.read());

    let on_pay = move |evt: FormEvent| {
        evt.prevent_default();
        let session = auth.peek().session.clone();
        let begun = flow.write().begin_submit(session.as_ref());
        let request = match begun {
            Ok(request) => request,
            Err(FlowError::Unauthenticated) => {
                notifier.error(FlowError::Unauthenticated.to_string());
                gate.show_login();
                return;
            }
            Err(e) => {
                notifier.error(e.to_string());
                return;
            }
        };

        let mode = flow.peek().submit_mode();
        let client = api_client(&config, session.as_ref());
        spawn(async move {
            let result = client.submit(mode, &request).await;
            let outcome = flow.write().complete_submit(result);
            match outcome {
                Ok(_) => notifier.success("Booking confirmed!"),
                Err(e) => notifier.error(e.to_string()),
            }
        });
    };

    let book_another = move |_: ()| {
        let mut next = BookingFlow::new(&booking_config);
        if let CatalogStatus::Loaded(movies) = flow.read().catalog() {
            next.load_catalog(movies.clone());
        }
        next.prefill_customer_name(auth.peek().session.as_ref());
        flow.set(next);
    };

    let body = match view.step {
        BookingStep::SeatSelection => rsx! {
            SeatStep { view: view.clone(), flow }
        },
        BookingStep::Payment => rsx! {
            PaymentStep { view: view.clone(), flow, on_pay }
        },
        BookingStep::Confirmation => match view.confirmation.clone() {
            Some(confirmation) => rsx! {
                ConfirmationStep { confirmation, on_book_another: book_another }
            },
            None => rsx! {},
        },
    };

    rsx! {
        section {
            class: "page-header",
            h1 { "Book Tickets" }
        }
        {step_indicator(view.step)}
        div { class: "booking-body", {body} }
    }
}

#[component]
fn SeatStep(view: BookingView, flow: Signal<BookingFlow>) -> Element {
    let mut flow = flow;
    let notifier = use_notifier();
    let tickets = flow.read().ticket_count();

    let on_movie = move |evt: FormEvent| {
        let value = evt.value();
        let result = match value.parse::<u64>() {
            Ok(id) => flow.write().select_movie(id).map(|_| ()),
            Err(_) => flow.write().clear_movie(),
        };
        if let Err(e) = result {
            notifier.error(e.to_string());
        }
    };

    let on_toggle = move |seat: SeatLabel| {
        let toggled = flow.write().toggle_seat(seat);
        if let Err(e) = toggled {
            notifier.error(e.to_string());
        }
    };

    let on_tickets = move |evt: FormEvent| {
        if let Ok(count) = evt.value().trim().parse::<u32>() {
            let _ = flow.write().set_ticket_count(count);
        }
    };

    let on_proceed = move |_| {
        let proceeded = flow.write().proceed();
        if let Err(e) = proceeded {
            notifier.error(e.to_string());
        }
    };

    rsx! {
        div {
            class: "booking-grid",
            div {
                class: "booking-main",
                div {
                    class: "form-group",
                    label { r#for: "movie-select", "Movie" }
                    select {
                        id: "movie-select",
                        onchange: on_movie,
                        {select_options(view.dropdown_placeholder, view.movie_options)}
                    }
                }
                if let Some(movie) = view.movie {
                    div {
                        class: "selected-movie",
                        h2 { "{movie.card.title}" }
                        div {
                            class: "movie-meta",
                            span { class: "meta-item genre", "{movie.card.genre}" }
                            span { class: "meta-item", "{movie.card.duration}" }
                            span { class: "meta-item", "{movie.card.language}" }
                            span { class: "meta-item", "{movie.card.price} per ticket" }
                        }
                    }
                }
                SeatMap { grid: view.seat_grid, on_toggle }
                div {
                    class: "form-group ticket-count",
                    label { r#for: "ticket-count", "Tickets" }
                    input {
                        id: "ticket-count",
                        r#type: "number",
                        min: "1",
                        value: "{tickets}",
                        oninput: on_tickets,
                    }
                }
            }
            div {
                class: "booking-side",
                BookingSummary { summary: view.summary, selected_seats: view.selected_seats }
                button {
                    class: "btn btn-primary btn-block",
                    disabled: !view.can_proceed,
                    onclick: on_proceed,
                    "Proceed to Payment"
                }
            }
        }
    }
}

#[component]
fn PaymentStep(
    view: BookingView,
    flow: Signal<BookingFlow>,
    on_pay: EventHandler<FormEvent>,
) -> Element {
    let mut flow = flow;
    let editing = view.pay_enabled;

    rsx! {
        div {
            class: "booking-grid",
            form {
                class: "booking-main payment-form",
                onsubmit: move |evt: FormEvent| on_pay.call(evt),
                h2 { "Your Details" }
                div {
                    class: "form-group",
                    label { r#for: "customer-name", "Name" }
                    input {
                        id: "customer-name",
                        r#type: "text",
                        disabled: !editing,
                        value: "{view.customer_name}",
                        oninput: move |evt: FormEvent| {
                            let _ = flow.write().set_customer_name(evt.value());
                        },
                    }
                }
                div {
                    class: "form-group",
                    label { r#for: "customer-phone", "Phone" }
                    input {
                        id: "customer-phone",
                        r#type: "tel",
                        placeholder: "10-digit mobile number",
                        disabled: !editing,
                        value: "{view.phone}",
                        oninput: move |evt: FormEvent| {
                            let _ = flow.write().set_phone(evt.value());
                        },
                    }
                }
                div {
                    class: "form-group",
                    label { r#for: "show-time", "Show Time" }
                    select {
                        id: "show-time",
                        disabled: !editing,
                        onchange: move |evt: FormEvent| {
                            let value = evt.value();
                            let show_time = (!value.is_empty()).then_some(value);
                            let _ = flow.write().set_show_time(show_time);
                        },
                        {select_options("Any show time", view.show_times)}
                    }
                }
                if let Some(error) = view.error {
                    p { class: "form-error", "{error}" }
                }
                div {
                    class: "form-actions",
                    button {
                        class: "btn btn-outline",
                        r#type: "button",
                        disabled: !editing,
                        onclick: move |_| {
                            let _ = flow.write().back_to_seats();
                        },
                        "Back"
                    }
                    button {
                        class: "btn btn-primary",
                        r#type: "submit",
                        disabled: !view.pay_enabled,
                        "{view.pay_label}"
                    }
                }
            }
            div {
                class: "booking-side",
                BookingSummary { summary: view.summary, selected_seats: view.selected_seats }
            }
        }
    }
}

#[component]
fn ConfirmationStep(confirmation: ConfirmationView, on_book_another: EventHandler<()>) -> Element {
    let nav = use_navigator();
    rsx! {
        div {
            class: "confirmation",
            h2 { "Booking Confirmed!" }
            p { "Your tickets are booked. Enjoy the show." }
            div {
                class: "confirmation-details",
                div { class: "summary-row", span { "Booking ID" } span { "#{confirmation.booking_id}" } }
                div { class: "summary-row", span { "Movie" } span { "{confirmation.movie_title}" } }
                div { class: "summary-row", span { "Seat" } span { "{confirmation.seat_label}" } }
                div { class: "summary-row", span { "Tickets" } span { "{confirmation.seats}" } }
                div { class: "summary-row total", span { "Total Paid" } span { "{confirmation.total}" } }
            }
            div {
                class: "form-actions",
                button {
                    class: "btn btn-primary",
                    onclick: move |_| {
                        nav.push(Route::Dashboard {});
                    },
                    "View My Bookings"
                }
                button {
                    class: "btn btn-outline",
                    onclick: move |_| on_book_another.call(()),
                    "Book Another"
                }
            }
        }
    }
}
