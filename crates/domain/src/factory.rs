//! Device factories — templates that produce fully configured devices.
//!
//! The built-in [`RefrigeratorFactory`] and [`DrillFactory`] are closed
//! templates with literal configuration. [`DeviceSpec`] describes a device in
//! configuration; once validated it becomes a [`DeviceTemplate`] that can be
//! used wherever a [`DeviceFactory`] is expected.

use serde::Deserialize;

use crate::device::{Device, DeviceKind, Drill, Refrigerator};
use crate::error::PowerHubError;
use crate::power::Watts;

/// Produces a new, switched-off [`Device`] every time it is called.
pub trait DeviceFactory {
    fn create(&self) -> Device;
}

impl<F: DeviceFactory + ?Sized> DeviceFactory for Box<F> {
    fn create(&self) -> Device {
        (**self).create()
    }
}

/// Builds the stock "Samsung Fridge".
#[derive(Debug, Clone, Copy, Default)]
pub struct RefrigeratorFactory;

impl DeviceFactory for RefrigeratorFactory {
    fn create(&self) -> Device {
        Device::refrigerator("Samsung Fridge", Watts::from(150), "Samsung", 300)
    }
}

/// Builds the stock "Bosch Drill".
#[derive(Debug, Clone, Copy, Default)]
pub struct DrillFactory;

impl DeviceFactory for DrillFactory {
    fn create(&self) -> Device {
        Device::drill("Bosch Drill", Watts::from(800), 220, 3000)
    }
}

/// The built-in factories, in the order their devices are registered.
#[must_use]
pub fn default_factories() -> Vec<Box<dyn DeviceFactory>> {
    vec![Box::new(RefrigeratorFactory), Box::new(DrillFactory)]
}

/// Unvalidated, kind-tagged device description as found in configuration.
///
/// ```toml
/// [[devices]]
/// kind = "drill"
/// name = "Makita Drill"
/// rated_power = 650
/// voltage = 18
/// rpm = 1900
/// ```
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DeviceSpec {
    Refrigerator {
        name: String,
        rated_power: f64,
        brand: String,
        capacity_liters: u32,
    },
    Drill {
        name: String,
        rated_power: f64,
        voltage: u32,
        rpm: u32,
    },
}

impl DeviceSpec {
    /// Validate the description and turn it into a reusable factory.
    ///
    /// # Errors
    ///
    /// Returns [`PowerHubError::Validation`] when the name is blank or the
    /// rated power is negative or not finite.
    pub fn into_template(self) -> Result<DeviceTemplate, PowerHubError> {
        let device = match self {
            Self::Refrigerator {
                name,
                rated_power,
                brand,
                capacity_liters,
            } => Device::new(
                name,
                Watts::new(rated_power)?,
                DeviceKind::Refrigerator(Refrigerator {
                    brand,
                    capacity_liters,
                }),
            ),
            Self::Drill {
                name,
                rated_power,
                voltage,
                rpm,
            } => Device::new(
                name,
                Watts::new(rated_power)?,
                DeviceKind::Drill(Drill { voltage, rpm }),
            ),
        };
        device.validate()?;
        Ok(DeviceTemplate(device))
    }
}

/// A validated device description.
#[derive(Debug, Clone, PartialEq)]
pub struct DeviceTemplate(Device);

impl DeviceFactory for DeviceTemplate {
    fn create(&self) -> Device {
        self.0.clone()
    }
}
