//! Rentzy dashboard library.
//!
//! This crate holds the session and view-state controller behind the Rentzy
//! rental dashboard, along with the services, providers and stores it is
//! wired to. Presentation lives elsewhere; the controller only produces a
//! [`render::Screen`] describing what should be shown.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod config;
pub mod controller;
pub mod error;
pub mod models;
pub mod notify;
pub mod providers;
pub mod render;
pub mod search;
pub mod services;
pub mod store;

pub use config::DashboardConfig;
pub use controller::Controller;
pub use error::{AppError, Result};
