//! # powerhub-domain
//!
//! Pure domain model for the powerhub device inventory.
//!
//! ## Responsibilities
//! - Foundational types: error conventions, power values, timestamps
//! - Define **Devices** (electric appliances with a rated power and an on/off state)
//! - Define **Factories** (fixed or configured templates that produce devices)
//! - Contain all invariant enforcement and domain logic
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or external IO crates.
//! All IO boundaries are expressed as traits in the `app` crate (ports).

pub mod error;
pub mod power;
pub mod time;

pub mod device;
pub mod factory;
