//! # In-Memory Repository
//!
//! Process-local record table shared by every request handler. All access
//! goes through a single `RwLock`, so concurrent create/update/delete calls
//! never race on the backing map.

use std::collections::HashMap;
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use uuid::Uuid;

use super::backend::SolarPanelDataRepository;
use crate::data::SolarPanelData;
use crate::errors::{SolarPanelDataError, SolarPanelDataResult, StoreOperation};

/// In-memory solar panel data store
#[derive(Debug, Default)]
pub struct InMemorySolarPanelDataRepository {
    records: RwLock<HashMap<String, SolarPanelData>>,
}

impl InMemorySolarPanelDataRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored records
    pub fn len(&self) -> usize {
        self.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.read().is_empty()
    }

    // Every critical section is a single map operation, so a panic in another
    // holder cannot leave the table half-written and the guard is reusable.
    fn read(&self) -> RwLockReadGuard<'_, HashMap<String, SolarPanelData>> {
        self.records.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, HashMap<String, SolarPanelData>> {
        self.records.write().unwrap_or_else(PoisonError::into_inner)
    }
}

impl SolarPanelDataRepository for InMemorySolarPanelDataRepository {
    fn create(&self, data: &SolarPanelData) -> SolarPanelDataResult<String> {
        let mut records = self.write();

        let mut id = Uuid::new_v4().to_string();
        while records.contains_key(&id) {
            id = Uuid::new_v4().to_string();
        }

        records.insert(id.clone(), data.clone());
        Ok(id)
    }

    fn get(&self, id: &str) -> SolarPanelDataResult<SolarPanelData> {
        self.read()
            .get(id)
            .cloned()
            .ok_or_else(|| SolarPanelDataError::not_found(id, StoreOperation::Get))
    }

    fn update(&self, id: &str, data: &SolarPanelData) -> SolarPanelDataResult<()> {
        let mut records = self.write();

        match records.get_mut(id) {
            Some(stored) => {
                *stored = data.clone();
                Ok(())
            }
            None => Err(SolarPanelDataError::not_found(id, StoreOperation::Update)),
        }
    }

    fn delete(&self, id: &str) -> SolarPanelDataResult<()> {
        self.write().remove(id);
        Ok(())
    }
}
