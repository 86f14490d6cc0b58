pub mod backend;
pub mod booking;
pub mod catalog;
pub mod config;
pub mod dashboard;
pub mod handoff;
pub mod models;
pub mod pricing;
pub mod seats;
pub mod session;
pub mod view;

mod memory;
pub use memory::MemoryStore;

#[cfg(all(target_arch = "wasm32", feature = "web"))]
mod local;
#[cfg(all(target_arch = "wasm32", feature = "web"))]
pub use local::LocalStorage;

pub use backend::BookingBackend;
pub use booking::{
    take_pending_selection, BookingFlow, CatalogStatus, Confirmation, FlowError, FlowState,
};
pub use catalog::{CatalogState, GenreFilter, SortKey};
pub use config::{AppConfig, SubmitMode};
pub use dashboard::{BookingsSource, Dashboard};
pub use handoff::{catalog_channel, CatalogPublisher, CatalogReady};
pub use models::{BookingRecord, BookingRequest, Movie, UserRecord};
pub use pricing::Pricing;
pub use seats::{SeatGrid, SeatLabel, SeatSelection};
pub use session::{AuthRequired, KeyValueStore, Session, SessionStore};
