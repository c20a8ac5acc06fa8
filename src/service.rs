//! # Solar Panel Data Service
//!
//! The only entry point transport code talks to. Preconditions the
//! repository does not know about are enforced here before any storage
//! call is made; repository errors are forwarded unchanged.

use std::sync::Arc;

use crate::data::SolarPanelData;
use crate::errors::{SolarPanelDataError, SolarPanelDataResult};
use crate::repository::SolarPanelDataRepository;

/// Validation and orchestration over a repository backend
#[derive(Debug, Clone)]
pub struct SolarPanelDataService {
    repository: Arc<dyn SolarPanelDataRepository>,
}

impl SolarPanelDataService {
    pub fn new(repository: Arc<dyn SolarPanelDataRepository>) -> Self {
        Self { repository }
    }

    pub fn get(&self, id: &str) -> SolarPanelDataResult<SolarPanelData> {
        self.repository.get(id)
    }

    pub fn create(&self, data: &SolarPanelData) -> SolarPanelDataResult<String> {
        Self::require_solar(data)?;
        self.repository.create(data)
    }

    /// Replace the record under `id` with `data`
    pub fn update(&self, id: &str, data: &SolarPanelData) -> SolarPanelDataResult<()> {
        Self::require_solar(data)?;
        self.repository.update(id, data)
    }

    pub fn delete(&self, id: &str) -> SolarPanelDataResult<()> {
        self.repository.delete(id)
    }

    fn require_solar(data: &SolarPanelData) -> SolarPanelDataResult<()> {
        if data.has_solar() {
            return Ok(());
        }

        tracing::debug!("rejecting solar panel data without a solar mapping");
        Err(SolarPanelDataError::EmptySolarData)
    }
}
