//! Solar panel data record model

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Key of one channel's event sequence
pub type ParameterId = String;

/// `[timestamp, value]`, kept positional as submitted
pub type Event = Vec<String>;

/// Events per parameter, iterated in ascending parameter id order
pub type SolarEvents = BTreeMap<ParameterId, Vec<Event>>;

/// A stored telemetry document
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SolarPanelData {
    /// `None` when the request carried no `solar` mapping (absent or `null`)
    #[serde(default)]
    pub solar: Option<SolarEvents>,

    /// Unvalidated payload, carried verbatim
    #[serde(default)]
    pub wind: Value,
}

impl SolarPanelData {
    pub fn new(solar: Option<SolarEvents>, wind: Value) -> Self {
        Self { solar, wind }
    }

    pub fn has_solar(&self) -> bool {
        self.solar.is_some()
    }
}
