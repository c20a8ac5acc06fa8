//! # Solar Panel Data Repository
//!
//! Storage seam for solar panel data records. The repository is a dumb
//! backend: it assigns identifiers and holds records, and leaves every
//! business rule to the service.

pub mod backend;
pub mod memory;

pub use backend::SolarPanelDataRepository;
pub use memory::InMemorySolarPanelDataRepository;
