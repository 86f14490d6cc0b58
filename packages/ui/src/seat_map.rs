use dioxus::prelude::*;
use store::view::SeatGridView;
use store::SeatLabel;

/// Seat grid. Clicks are ignored while the grid is disabled.
#[component]
pub fn SeatMap(grid: SeatGridView, on_toggle: EventHandler<SeatLabel>) -> Element {
    let enabled = grid.enabled;
    rsx! {
        div {
            class: if enabled { "seat-map" } else { "seat-map disabled" },
            div { class: "screen", "SCREEN" }
            div {
                class: "seats-grid",
                for row in grid.rows {
                    div {
                        key: "{row.row}",
                        class: "seat-row",
                        span { class: "row-label", "{row.row}" }
                        for seat in row.seats {
                            button {
                                key: "{seat.title}",
                                class: if seat.selected { "seat selected" } else { "seat available" },
                                title: "{seat.title}",
                                disabled: !enabled,
                                onclick: move |_| on_toggle.call(seat.label),
                            }
                        }
                    }
                }
            }
            div {
                class: "seat-legend",
                span { class: "legend-item", span { class: "seat available" } " Available" }
                span { class: "legend-item", span { class: "seat selected" } " Selected" }
            }
        }
    }
}
