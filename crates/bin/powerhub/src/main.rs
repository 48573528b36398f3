//! # powerhub — device inventory report
//!
//! Composition root that wires the adapters together and prints the report.
//!
//! ## Responsibilities
//! - Parse configuration (config file, env vars)
//! - Install the diagnostics subscriber (stderr, so stdout stays clean)
//! - Construct the logger through the log sink factory
//! - Construct the inventory manager and register the configured devices
//! - Switch everything on and render the report
//!
//! ## Dependency rule
//! This is the **only** crate that depends on all other crates.
//! It is the wiring layer — no domain logic belongs here.

mod config;

use std::rc::Rc;

use powerhub_adapter_console_ui::ConsoleUi;
use powerhub_adapter_log_sink::create_logger;
use powerhub_app::services::inventory_manager::InventoryManager;
use tracing_subscriber::EnvFilter;

use crate::config::{Config, ReportFormat};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load()?;
    init_tracing(&config.logging.filter)?;

    let factories = config.device_factories()?;

    // Logger
    let logger = create_logger(&config.logger);

    // Inventory
    let mut manager = InventoryManager::new(Rc::clone(&logger));
    for factory in &factories {
        manager.add_device(factory.create());
    }
    manager.activate_all();
    tracing::info!(devices = manager.len(), "inventory ready");

    // UI
    let ui = ConsoleUi::new(&manager, logger);
    match config.report.format {
        ReportFormat::Text => {
            ui.show_devices();
            ui.show_total_power();
        }
        ReportFormat::Json => ui.show_report_json(),
    }

    Ok(())
}

fn init_tracing(filter: &str) -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_new(filter)?)
        .with_writer(std::io::stderr)
        .init();
    Ok(())
}
