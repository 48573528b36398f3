//! # powerhub-adapter-console-ui
//!
//! Presentation adapter that renders an [`InventoryManager`] to the console.
//!
//! ```text
//!
//! Device list:
//! Refrigerator: Samsung Fridge, Brand: Samsung, Capacity: 300L, Power: 150W
//! Drill: Bosch Drill, Voltage: 220V, RPM: 3000, Power: 800W
//! Total power: 950 W
//! ```
//!
//! ## Dependency rule
//!
//! Depends on `powerhub-app` only. Read-only consumer of
//! the inventory.

use std::cell::RefCell;
use std::io::{self, Stdout, Write};

use powerhub_app::ports::Logger;
use powerhub_app::services::inventory_manager::InventoryManager;

/// Console front-end over a borrowed inventory.
pub struct ConsoleUi<'a, L, W = Stdout> {
    manager: &'a InventoryManager<L>,
    logger: L,
    out: RefCell<W>,
}

impl<'a, L: Logger> ConsoleUi<'a, L, Stdout> {
    /// Render to standard output.
    #[must_use]
    pub fn new(manager: &'a InventoryManager<L>, logger: L) -> Self {
        Self::with_writer(manager, logger, io::stdout())
    }
}

impl<'a, L: Logger, W: Write> ConsoleUi<'a, L, W> {
    #[must_use]
    pub fn with_writer(manager: &'a InventoryManager<L>, logger: L, out: W) -> Self {
        Self {
            manager,
            logger,
            out: RefCell::new(out),
        }
    }

    /// Give back the underlying writer.
    pub fn into_inner(self) -> W {
        self.out.into_inner()
    }

    /// Print every device description, in inventory order.
    pub fn show_devices(&self) {
        self.emit("\nDevice list:");
        for device in self.manager.devices() {
            self.emit(&device.describe());
        }
    }

    /// Print the total active power and log the same summary.
    pub fn show_total_power(&self) {
        let total = self.manager.total_active_power();
        self.emit(&format!("Total power: {total} W"));
        self.logger.log(&format!("Total power consumption: {total} W"));
    }

    /// Print the inventory report as pretty JSON.
    pub fn show_report_json(&self) {
        match serde_json::to_string_pretty(&self.manager.report()) {
            Ok(json) => self.emit(&json),
            Err(err) => tracing::warn!(error = %err, "unable to serialize inventory report"),
        }
    }

    fn emit(&self, line: &str) {
        if let Err(err) = writeln!(self.out.borrow_mut(), "{line}") {
            tracing::warn!(error = %err, "unable to write to console");
        }
    }
}
