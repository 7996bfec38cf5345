//! Rentzy Core - Shared domain types.
//!
//! This crate provides the value types used across all Rentzy components:
//! - `dashboard` - Session/view controller, providers, persistence
//! - `cli` - Terminal front-end over the dashboard controller
//!
//! # Architecture
//!
//! The core crate contains only types and parsing rules - no I/O, no storage,
//! no rendering. This keeps it lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Typed IDs, contact and identity numbers, roles, statuses, prices

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
