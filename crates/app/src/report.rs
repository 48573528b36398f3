//! Inventory report — a presentation-neutral snapshot of the inventory.

use serde::Serialize;

use powerhub_domain::device::{Category, Device, PowerState};
use powerhub_domain::power::Watts;
use powerhub_domain::time::Timestamp;

/// Snapshot of the inventory at a point in time.
#[derive(Debug, Clone, Serialize)]
pub struct InventoryReport {
    pub generated_at: Timestamp,
    pub devices: Vec<DeviceSummary>,
    pub total_active_power: Watts,
}

/// Flattened view of a single device.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DeviceSummary {
    pub name: String,
    pub category: Category,
    pub state: PowerState,
    pub rated_power: Watts,
    pub current_power: Watts,
    pub description: String,
}

impl From<&Device> for DeviceSummary {
    fn from(device: &Device) -> Self {
        Self {
            name: device.name().to_string(),
            category: device.kind().category(),
            state: device.state(),
            rated_power: device.rated_power(),
            current_power: device.current_power(),
            description: device.describe(),
        }
    }
}
