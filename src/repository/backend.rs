//! # Repository Backend Trait

use crate::data::SolarPanelData;
use crate::errors::SolarPanelDataResult;

/// Backend trait for solar panel data storage
pub trait SolarPanelDataRepository: Send + Sync + std::fmt::Debug {
    /// Store a copy of the record under a fresh id and return the id
    fn create(&self, data: &SolarPanelData) -> SolarPanelDataResult<String>;

    /// Copy of the record stored under `id`
    fn get(&self, id: &str) -> SolarPanelDataResult<SolarPanelData>;

    /// Replace the whole record stored under `id`
    fn update(&self, id: &str, data: &SolarPanelData) -> SolarPanelDataResult<()>;

    /// Remove the record under `id`. Absent ids are not an error.
    fn delete(&self, id: &str) -> SolarPanelDataResult<()>;
}
