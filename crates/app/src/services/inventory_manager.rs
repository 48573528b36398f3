//! Inventory manager — owns the devices and records their lifecycle.

use powerhub_domain::device::Device;
use powerhub_domain::power::Watts;
use powerhub_domain::time::now;

use crate::ports::Logger;
use crate::report::{DeviceSummary, InventoryReport};

/// Sole owner of the device collection and source of truth for the total
/// active power.
///
/// Devices keep their insertion order. Every device in the collection has
/// been reported to the logger at the moment it was added.
pub struct InventoryManager<L> {
    devices: Vec<Device>,
    logger: L,
}

impl<L: Logger> InventoryManager<L> {
    /// Create an empty inventory reporting to the given logger.
    #[must_use]
    pub fn new(logger: L) -> Self {
        Self {
            devices: Vec::new(),
            logger,
        }
    }

    /// Log the device, then append it. Duplicates are accepted.
    #[tracing::instrument(skip(self, device), fields(device_name = %device.name()))]
    pub fn add_device(&mut self, device: Device) {
        self.logger.log(&format!("Device added: {device}"));
        self.devices.push(device);
        tracing::debug!(count = self.devices.len(), "device added to inventory");
    }

    /// Switch every device on, in insertion order.
    #[tracing::instrument(skip(self), fields(count = self.devices.len()))]
    pub fn activate_all(&mut self) {
        for device in &mut self.devices {
            device.activate();
            self.logger.log(&format!("Device switched on: {device}"));
        }
    }

    /// Switch every device off, in insertion order.
    #[tracing::instrument(skip(self), fields(count = self.devices.len()))]
    pub fn deactivate_all(&mut self) {
        for device in &mut self.devices {
            device.deactivate();
            self.logger.log(&format!("Device switched off: {device}"));
        }
    }

    /// Sum of the power currently drawn by every device.
    #[must_use]
    pub fn total_active_power(&self) -> Watts {
        self.devices.iter().map(Device::current_power).sum()
    }

    /// Devices in insertion order.
    #[must_use]
    pub fn devices(&self) -> &[Device] {
        &self.devices
    }

    /// Mutable access to a single device, e.g. to switch it on or off.
    ///
    /// The collection itself cannot be reordered or resized through this.
    pub fn device_mut(&mut self, index: usize) -> Option<&mut Device> {
        self.devices.get_mut(index)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.devices.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.devices.is_empty()
    }

    #[must_use]
    pub fn report(&self) -> InventoryReport {
        InventoryReport {
            generated_at: now(),
            devices: self.devices.iter().map(DeviceSummary::from).collect(),
            total_active_power: self.total_active_power(),
        }
    }
}
