//! # Solar Panel Data HTTP Server Module
//!
//! Transport boundary for the solar panel data service. It decodes
//! requests, calls the service and the extractor, and maps each error's
//! recommended status onto the response.
//!
//! # Endpoints
//!
//! - `/health-check` - Health check
//! - `POST /solar-panel-data` - Create a record
//! - `GET /solar-panel-data/:id` - CSV export of a record's events
//! - `PUT /solar-panel-data/:id` - Replace a record
//! - `DELETE /solar-panel-data/:id` - Delete a record

pub mod config;
pub mod observability_routes;
pub mod server;
pub mod solar_panel_data_routes;

pub use config::{ConfigError, HttpServerConfig};
pub use server::HttpServer;
pub use solar_panel_data_routes::SolarPanelDataState;
