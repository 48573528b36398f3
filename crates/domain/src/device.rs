//! Device — an electric appliance with a rated power and an on/off state.
//!
//! Every device shares a base record (name, rated power, state) and carries a
//! kind-specific payload. The set of kinds is closed:
//!
//! | Kind | Category | Extra fields |
//! |------|----------|--------------|
//! | [`Refrigerator`] | [`Category::HomeAppliance`] | brand, capacity (litres) |
//! | [`Drill`] | [`Category::PowerTool`] | voltage, rotational speed |

mod state;

pub use state::PowerState;

use std::fmt;

use serde::Serialize;

use crate::error::{PowerHubError, ValidationError};
use crate::power::Watts;

/// Family a device kind belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    HomeAppliance,
    PowerTool,
}

/// Home appliance payload.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Refrigerator {
    pub brand: String,
    pub capacity_liters: u32,
}

/// Power tool payload.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Drill {
    pub voltage: u32,
    pub rpm: u32,
}

/// Kind-specific part of a [`Device`].
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum DeviceKind {
    Refrigerator(Refrigerator),
    Drill(Drill),
}

impl DeviceKind {
    #[must_use]
    pub fn category(&self) -> Category {
        match self {
            Self::Refrigerator(_) => Category::HomeAppliance,
            Self::Drill(_) => Category::PowerTool,
        }
    }
}

/// An electric device owned by the inventory.
///
/// The rated power is fixed at construction; only the [`PowerState`] changes,
/// through [`activate`](Self::activate) and [`deactivate`](Self::deactivate).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Device {
    name: String,
    rated_power: Watts,
    state: PowerState,
    kind: DeviceKind,
}

impl Device {
    /// Create a switched-off device of the given kind.
    #[must_use]
    pub fn new(name: impl Into<String>, rated_power: Watts, kind: DeviceKind) -> Self {
        Self {
            name: name.into(),
            rated_power,
            state: PowerState::Off,
            kind,
        }
    }

    #[must_use]
    pub fn refrigerator(
        name: impl Into<String>,
        rated_power: Watts,
        brand: impl Into<String>,
        capacity_liters: u32,
    ) -> Self {
        Self::new(
            name,
            rated_power,
            DeviceKind::Refrigerator(Refrigerator {
                brand: brand.into(),
                capacity_liters,
            }),
        )
    }

    #[must_use]
    pub fn drill(name: impl Into<String>, rated_power: Watts, voltage: u32, rpm: u32) -> Self {
        Self::new(name, rated_power, DeviceKind::Drill(Drill { voltage, rpm }))
    }

    /// Check domain invariants.
    ///
    /// # Errors
    ///
    /// Returns [`PowerHubError::Validation`] when `name` is blank.
    pub fn validate(&self) -> Result<(), PowerHubError> {
        if self.name.trim().is_empty() {
            return Err(ValidationError::EmptyName.into());
        }
        Ok(())
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn rated_power(&self) -> Watts {
        self.rated_power
    }

    #[must_use]
    pub fn state(&self) -> PowerState {
        self.state
    }

    #[must_use]
    pub fn is_on(&self) -> bool {
        self.state.is_on()
    }

    #[must_use]
    pub fn kind(&self) -> &DeviceKind {
        &self.kind
    }

    /// Switch the device on. Calling it on a device that is already on is a no-op.
    pub fn activate(&mut self) {
        self.state = PowerState::On;
    }

    /// Switch the device off. Calling it on a device that is already off is a no-op.
    pub fn deactivate(&mut self) {
        self.state = PowerState::Off;
    }

    /// Power currently drawn: the rated power when on, zero otherwise.
    #[must_use]
    pub fn current_power(&self) -> Watts {
        match self.state {
            PowerState::On => self.rated_power,
            PowerState::Off => Watts::ZERO,
        }
    }

    /// One-line human readable summary, see the [`Display`](fmt::Display) impl.
    #[must_use]
    pub fn describe(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Device {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            DeviceKind::Refrigerator(fridge) => write!(
                f,
                "Refrigerator: {}, Brand: {}, Capacity: {}L, Power: {}W",
                self.name, fridge.brand, fridge.capacity_liters, self.rated_power
            ),
            DeviceKind::Drill(drill) => write!(
                f,
                "Drill: {}, Voltage: {}V, RPM: {}, Power: {}W",
                self.name, drill.voltage, drill.rpm, self.rated_power
            ),
        }
    }
}
