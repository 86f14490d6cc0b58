//! Render-ready projections of the page controllers.
//!
//! Each `*_view` function is a pure function of controller state and returns
//! plain strings and flags; the Dioxus components draw them without doing
//! any formatting of their own. Calling a projection twice on the same state
//! returns equal values.

use chrono::{DateTime, NaiveDateTime};

use crate::booking::{BookingFlow, CatalogStatus, FlowState, SHOW_TIMES};
use crate::catalog::{CatalogState, GenreFilter, LoadStatus, SortKey};
use crate::dashboard::{BookingsSource, Dashboard};
use crate::models::{BookingRecord, Movie, DEFAULT_TICKET_PRICE};
use crate::seats::{SeatGrid, SeatLabel, SeatSelection};
use crate::session::Session;

/// `₹` amount, at most two decimals, no trailing zeros: `₹610`, `₹299.5`.
pub fn format_price(amount: f64) -> String {
    let rounded = (amount * 100.0).round() / 100.0;
    format!("₹{rounded}")
}

/// Booking timestamp for display, e.g. `01 Mar 2025, 19:30`.
///
/// Accepts a local date-time or an RFC 3339 timestamp. Anything else is shown
/// as received.
pub fn format_booked_at(raw: Option<&str>) -> String {
    let Some(raw) = raw.map(str::trim).filter(|r| !r.is_empty()) else {
        return "Unknown".to_string();
    };
    const DISPLAY: &str = "%d %b %Y, %H:%M";
    if let Ok(local) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f") {
        return local.format(DISPLAY).to_string();
    }
    if let Ok(stamped) = DateTime::parse_from_rfc3339(raw) {
        return stamped.naive_local().format(DISPLAY).to_string();
    }
    raw.to_string()
}

#[derive(Clone, Debug, PartialEq)]
pub struct MovieCardView {
    pub id: u64,
    pub title: String,
    pub genre: String,
    pub language: String,
    pub duration: String,
    pub rating: String,
    /// `8.3/10`, when scored.
    pub score: Option<String>,
    pub price: String,
    pub poster_url: Option<String>,
}

impl From<&Movie> for MovieCardView {
    fn from(movie: &Movie) -> Self {
        Self {
            id: movie.id,
            title: movie.title.clone(),
            genre: movie.genre.clone(),
            language: movie.language.clone(),
            duration: format!("{} min", movie.duration),
            rating: movie.rating.clone(),
            score: movie.score.map(|s| format!("{s}/10")),
            price: format_price(movie.ticket_price),
            poster_url: movie.poster_url.clone().filter(|u| !u.is_empty()),
        }
    }
}

/// Movie details modal and the booking page's movie header.
#[derive(Clone, Debug, PartialEq)]
pub struct MovieDetailsView {
    pub card: MovieCardView,
    pub description: String,
}

impl From<&Movie> for MovieDetailsView {
    fn from(movie: &Movie) -> Self {
        Self {
            card: MovieCardView::from(movie),
            description: movie.description_or_default(),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct OptionView {
    pub value: String,
    pub label: String,
    pub selected: bool,
}

#[derive(Clone, Debug, PartialEq)]
pub enum CatalogBody {
    Loading,
    Error,
    Empty { title: String, message: String },
    Movies(Vec<MovieCardView>),
}

#[derive(Clone, Debug, PartialEq)]
pub struct CatalogView {
    pub genre_tabs: Vec<OptionView>,
    pub sort_options: Vec<OptionView>,
    pub search: String,
    pub body: CatalogBody,
    pub show_more: bool,
}

pub fn catalog_view(state: &CatalogState) -> CatalogView {
    let mut genre_tabs = vec![OptionView {
        value: "all".to_string(),
        label: "All".to_string(),
        selected: *state.genre() == GenreFilter::All,
    }];
    genre_tabs.extend(state.genres().into_iter().map(|g| OptionView {
        value: g.to_string(),
        label: g.to_string(),
        selected: state.genre().as_str().eq_ignore_ascii_case(g),
    }));

    let sort_options = SortKey::ALL
        .into_iter()
        .map(|k| OptionView {
            value: k.as_str().to_string(),
            label: k.label().to_string(),
            selected: k == state.sort(),
        })
        .collect();

    let body = match state.status() {
        LoadStatus::Loading => CatalogBody::Loading,
        LoadStatus::Failed => CatalogBody::Error,
        LoadStatus::Loaded => {
            let visible = state.visible();
            if visible.is_empty() {
                let query = state.search().trim();
                CatalogBody::Empty {
                    title: "No Movies Found".to_string(),
                    message: if query.is_empty() {
                        "No movies available in this category".to_string()
                    } else {
                        format!("No movies found for \"{query}\"")
                    },
                }
            } else {
                CatalogBody::Movies(visible.into_iter().map(MovieCardView::from).collect())
            }
        }
    };

    CatalogView {
        genre_tabs,
        sort_options,
        search: state.search().to_string(),
        body,
        show_more: state.has_more(),
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct SeatCellView {
    pub label: SeatLabel,
    pub title: String,
    pub selected: bool,
}

#[derive(Clone, Debug, PartialEq)]
pub struct SeatRowView {
    pub row: char,
    pub seats: Vec<SeatCellView>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct SeatGridView {
    pub rows: Vec<SeatRowView>,
    /// Seats are clickable only once a movie is selected.
    pub enabled: bool,
}

pub fn seat_grid_view(grid: SeatGrid, selection: &SeatSelection, enabled: bool) -> SeatGridView {
    let rows = grid
        .row_letters()
        .map(|row| SeatRowView {
            row,
            seats: grid
                .row_seats(row)
                .map(|label| SeatCellView {
                    label,
                    title: label.to_string(),
                    selected: selection.contains(&label),
                })
                .collect(),
        })
        .collect();
    SeatGridView { rows, enabled }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BookingStep {
    SeatSelection,
    Payment,
    Confirmation,
}

#[derive(Clone, Debug, PartialEq)]
pub struct SummaryView {
    pub movie_title: String,
    pub price_per_ticket: String,
    pub tickets: u32,
    pub seats: String,
    pub subtotal: String,
    pub convenience_fee: String,
    pub total: String,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ConfirmationView {
    pub booking_id: String,
    pub movie_title: String,
    pub seat_label: String,
    pub seats: String,
    pub total: String,
}

#[derive(Clone, Debug, PartialEq)]
pub struct BookingView {
    pub step: BookingStep,
    /// Placeholder option of the movie dropdown.
    pub dropdown_placeholder: &'static str,
    pub movie_options: Vec<OptionView>,
    pub movie: Option<MovieDetailsView>,
    pub seat_grid: SeatGridView,
    pub selected_seats: String,
    pub summary: Option<SummaryView>,
    pub can_proceed: bool,
    pub show_times: Vec<OptionView>,
    pub customer_name: String,
    pub phone: String,
    pub pay_label: String,
    pub pay_enabled: bool,
    pub error: Option<String>,
    pub confirmation: Option<ConfirmationView>,
}

pub fn booking_view(flow: &BookingFlow) -> BookingView {
    let state = flow.state();
    let step = match state {
        FlowState::Confirmed => BookingStep::Confirmation,
        FlowState::PaymentStep | FlowState::Submitting | FlowState::Failed => BookingStep::Payment,
        FlowState::Idle | FlowState::MovieSelected | FlowState::SeatsSelected => {
            BookingStep::SeatSelection
        }
    };
    let selected_id = flow.selected_movie().map(|m| m.id);

    let (dropdown_placeholder, movie_options) = match flow.catalog() {
        CatalogStatus::Loading => ("Loading movies...", Vec::new()),
        CatalogStatus::Failed => ("Error loading movies", Vec::new()),
        CatalogStatus::Loaded(movies) if movies.is_empty() => ("No movies available", Vec::new()),
        CatalogStatus::Loaded(movies) => (
            "Select a movie...",
            movies
                .iter()
                .map(|m| OptionView {
                    value: m.id.to_string(),
                    label: format!("{} - {}", m.title, format_price(m.ticket_price)),
                    selected: Some(m.id) == selected_id,
                })
                .collect(),
        ),
    };

    let seats = flow.seats();
    let summary = flow.selected_movie().zip(flow.pricing()).map(|(movie, pricing)| SummaryView {
        movie_title: movie.title.clone(),
        price_per_ticket: format_price(pricing.price_per_ticket),
        tickets: pricing.tickets,
        seats: if seats.is_empty() {
            "-".to_string()
        } else {
            seats.joined()
        },
        subtotal: format_price(pricing.subtotal),
        convenience_fee: format_price(pricing.convenience_fee),
        total: format_price(pricing.total),
    });

    let show_times = SHOW_TIMES
        .iter()
        .map(|t| OptionView {
            value: t.to_string(),
            label: t.to_string(),
            selected: flow.customer().show_time.as_deref() == Some(*t),
        })
        .collect();

    let pay_label = match (&state, &summary) {
        (FlowState::Submitting, _) => "Booking...".to_string(),
        (_, Some(summary)) => format!("Book Now {}", summary.total),
        (_, None) => "Book Now".to_string(),
    };

    let confirmation = flow.confirmation().map(|c| ConfirmationView {
        booking_id: c.booking_id.to_string(),
        movie_title: c.movie_title.clone(),
        seat_label: c.seat_label.clone(),
        seats: c.seat_count.to_string(),
        total: format_price(c.total),
    });

    BookingView {
        step,
        dropdown_placeholder,
        movie_options,
        movie: flow.selected_movie().map(MovieDetailsView::from),
        seat_grid: seat_grid_view(
            flow.grid(),
            seats,
            selected_id.is_some() && step == BookingStep::SeatSelection,
        ),
        selected_seats: if seats.is_empty() {
            "No seats selected".to_string()
        } else {
            seats.joined()
        },
        summary,
        can_proceed: flow.can_proceed(),
        show_times,
        customer_name: flow.customer().name.clone(),
        phone: flow.customer().phone.clone(),
        pay_label,
        pay_enabled: state == FlowState::PaymentStep || state == FlowState::Failed,
        error: flow.last_error().map(ToString::to_string),
        confirmation,
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct BookingCardView {
    pub id: Option<u64>,
    pub reference: String,
    pub title: String,
    pub seat: String,
    pub booked_at: String,
    pub amount: String,
    pub status: Option<String>,
    pub cancellable: bool,
}

impl BookingCardView {
    fn new(record: &BookingRecord, source: BookingsSource) -> Self {
        let title = match (&record.movie_title, record.movie_id) {
            (Some(title), _) => title.clone(),
            (None, Some(id)) => format!("Movie ID: {id}"),
            (None, None) => "Unknown Movie".to_string(),
        };
        Self {
            id: record.id,
            reference: record.id.map(|id| format!("#{id}")).unwrap_or_default(),
            title,
            seat: format!("Seat: {}", record.seat_label.as_deref().unwrap_or("N/A")),
            booked_at: format!("Booked: {}", format_booked_at(record.booked_at.as_deref())),
            amount: format_price(record.total_amount.unwrap_or(DEFAULT_TICKET_PRICE)),
            status: record.status.clone(),
            cancellable: source == BookingsSource::Backend && record.id.is_some(),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct DashboardView {
    pub greeting: String,
    pub loading: bool,
    /// True when the list is the sample booking rather than real data.
    pub sample: bool,
    pub cards: Vec<BookingCardView>,
}

pub fn dashboard_view(dashboard: &Dashboard, session: Option<&Session>) -> DashboardView {
    let source = dashboard.source();
    DashboardView {
        greeting: session
            .and_then(Session::display_name)
            .map(|name| format!("Signed in as {name}"))
            .unwrap_or_default(),
        loading: dashboard.is_loading(),
        sample: !dashboard.is_loading() && source == BookingsSource::Placeholder,
        cards: dashboard
            .bookings()
            .iter()
            .map(|b| BookingCardView::new(b, source))
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::BookingConfig;
    use crate::models::UserRecord;

    fn movie(id: u64, title: &str, price: f64) -> Movie {
        serde_json::from_value(serde_json::json!({
            "id": id,
            "title": title,
            "price": price,
            "score": 8.5,
        }))
        .unwrap()
    }

    fn session() -> Session {
        Session {
            token: "t".to_string(),
            user: Some(UserRecord {
                id: 1,
                username: "ada".to_string(),
                email: "ada@example.com".to_string(),
            }),
        }
    }

    #[test]
    fn test_format_price() {
        assert_eq!(format_price(610.0), "₹610");
        assert_eq!(format_price(299.5), "₹299.5");
        assert_eq!(format_price(10.0 / 3.0), "₹3.33");
        assert_eq!(format_price(0.0), "₹0");
    }

    #[test]
    fn test_format_booked_at() {
        assert_eq!(format_booked_at(Some("2025-03-01T19:30:00")), "01 Mar 2025, 19:30");
        assert_eq!(format_booked_at(Some("2025-03-01T19:30:00.123456")), "01 Mar 2025, 19:30");
        assert_eq!(format_booked_at(Some("2025-03-01T19:30:00+05:30")), "01 Mar 2025, 19:30");
        assert_eq!(format_booked_at(Some("yesterday")), "yesterday");
        assert_eq!(format_booked_at(None), "Unknown");
        assert_eq!(format_booked_at(Some(" ")), "Unknown");
    }

    #[test]
    fn test_movie_card() {
        let card = MovieCardView::from(&movie(3, "Heat", 250.0));
        assert_eq!(card.duration, "120 min");
        assert_eq!(card.rating, "PG-13");
        assert_eq!(card.score.as_deref(), Some("8.5/10"));
        assert_eq!(card.price, "₹250");
        assert!(card.poster_url.is_none());
    }

    #[test]
    fn test_catalog_view_states() {
        let mut state = CatalogState::new(12);
        assert_eq!(catalog_view(&state).body, CatalogBody::Loading);

        state.set_movies(vec![movie(1, "Heat", 250.0)]);
        state.set_search("zzz");
        let view = catalog_view(&state);
        assert_eq!(
            view.body,
            CatalogBody::Empty {
                title: "No Movies Found".to_string(),
                message: "No movies found for \"zzz\"".to_string(),
            }
        );
        assert_eq!(view.genre_tabs.len(), 2);
        assert!(view.genre_tabs[0].selected);
        assert!(view.sort_options.iter().any(|o| o.value == "title" && o.selected));

        state.clear_filters();
        let CatalogBody::Movies(cards) = catalog_view(&state).body else {
            panic!("expected movies");
        };
        assert_eq!(cards[0].title, "Heat");
        assert_eq!(catalog_view(&state), catalog_view(&state));
    }

    #[test]
    fn test_booking_view_dropdown_and_summary() {
        let mut flow = BookingFlow::new(&BookingConfig::default());
        assert_eq!(booking_view(&flow).dropdown_placeholder, "Loading movies...");

        flow.load_catalog(Vec::new());
        assert_eq!(booking_view(&flow).dropdown_placeholder, "No movies available");

        flow.load_catalog(vec![movie(1, "Arrival", 299.0), movie(2, "Heat", 250.0)]);
        flow.prefill_customer_name(Some(&session()));
        let view = booking_view(&flow);
        assert_eq!(view.movie_options[0].label, "Arrival - ₹299");
        assert!(view.summary.is_none());
        assert!(!view.seat_grid.enabled);
        assert_eq!(view.selected_seats, "No seats selected");
        assert_eq!(view.customer_name, "ada");

        flow.select_movie(1).unwrap();
        flow.toggle_seat("A2".parse().unwrap()).unwrap();
        flow.toggle_seat("A10".parse().unwrap()).unwrap();
        let view = booking_view(&flow);
        assert!(view.movie_options[0].selected);
        assert!(view.seat_grid.enabled);
        assert_eq!(view.seat_grid.rows.len(), 6);
        assert!(view.seat_grid.rows[0].seats[1].selected);
        assert_eq!(view.selected_seats, "A10, A2");
        let summary = view.summary.unwrap();
        assert_eq!(summary.subtotal, "₹598");
        assert_eq!(summary.convenience_fee, "₹12");
        assert_eq!(summary.total, "₹610");
        assert!(view.can_proceed);
        assert_eq!(view.step, BookingStep::SeatSelection);
    }

    #[test]
    fn test_booking_view_payment_and_confirmation() {
        let mut flow = BookingFlow::new(&BookingConfig::default());
        flow.load_catalog(vec![movie(1, "Arrival", 299.0)]);
        flow.select_movie(1).unwrap();
        flow.toggle_seat("B1".parse().unwrap()).unwrap();
        flow.proceed().unwrap();
        flow.set_phone("9876543210").unwrap();

        let view = booking_view(&flow);
        assert_eq!(view.step, BookingStep::Payment);
        assert_eq!(view.pay_label, "Book Now ₹305");
        assert!(view.pay_enabled);
        assert!(!view.seat_grid.enabled);

        flow.begin_submit(Some(&session())).unwrap();
        let view = booking_view(&flow);
        assert_eq!(view.pay_label, "Booking...");
        assert!(!view.pay_enabled);

        let response: Result<BookingRecord, String> = Ok(BookingRecord {
            id: Some(55),
            ..Default::default()
        });
        flow.complete_submit(response).unwrap();
        let confirmation = booking_view(&flow).confirmation.unwrap();
        assert_eq!(confirmation.booking_id, "55");
        assert_eq!(confirmation.seats, "1");
        assert_eq!(confirmation.total, "₹305");
        assert_eq!(confirmation.seat_label, "B1");
    }

    #[test]
    fn test_dashboard_view() {
        let mut dashboard = Dashboard::new();
        assert!(dashboard_view(&dashboard, None).loading);

        dashboard.apply(Err::<Vec<BookingRecord>, _>("offline"));
        let view = dashboard_view(&dashboard, Some(&session()));
        assert_eq!(view.greeting, "Signed in as ada");
        assert!(view.sample);
        let card = &view.cards[0];
        assert_eq!(card.reference, "#1001");
        assert_eq!(card.title, "Sample Movie");
        assert_eq!(card.seat, "Seat: A1");
        assert_eq!(card.amount, "₹299");
        assert!(!card.cancellable);

        dashboard.apply(Ok::<_, String>(vec![BookingRecord {
            id: Some(9),
            movie_id: Some(4),
            booked_at: Some("2025-03-01T19:30:00".to_string()),
            ..Default::default()
        }]));
        let card = &dashboard_view(&dashboard, None).cards[0];
        assert_eq!(card.title, "Movie ID: 4");
        assert_eq!(card.seat, "Seat: N/A");
        assert_eq!(card.booked_at, "Booked: 01 Mar 2025, 19:30");
        assert!(card.cancellable);
    }
}
