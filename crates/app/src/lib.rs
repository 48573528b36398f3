//! # powerhub-app
//!
//! Application layer — use-cases and **port definitions** (traits).
//!
//! ## Responsibilities
//! - Define **port traits** that adapters must implement (driven/outbound ports):
//!   - `Logger` — record a line of text somewhere (console, file, …)
//! - Define **driving/inbound ports** as use-case structs:
//!   - `InventoryManager` — add devices, switch them on/off, aggregate power
//!   - `InventoryReport` — serializable snapshot for presentation adapters
//! - Orchestrate domain objects without knowing *where* log lines end up
//!
//! ## Dependency rule
//! Depends on `powerhub-domain` only.
//! Never imports adapter crates. Adapters depend on *this* crate, not the reverse.

pub mod ports;
pub mod report;
pub mod services;
