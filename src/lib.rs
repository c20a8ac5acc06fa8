//! solar_panel_data - CRUD service for solar and wind telemetry records
//!
//! Records are validated by [`service::SolarPanelDataService`], held by a
//! [`repository::SolarPanelDataRepository`] backend and exported as CSV
//! event rows by [`extractor::SolarPanelDataEventExtractor`].

pub mod cli;
pub mod data;
pub mod errors;
pub mod extractor;
pub mod http_server;
pub mod observability;
pub mod repository;
pub mod service;

pub use data::{Event, ParameterId, SolarEvents, SolarPanelData};
pub use errors::{ErrorKind, SolarPanelDataError, SolarPanelDataResult, StoreOperation};
pub use extractor::SolarPanelDataEventExtractor;
pub use repository::{InMemorySolarPanelDataRepository, SolarPanelDataRepository};
pub use service::SolarPanelDataService;
