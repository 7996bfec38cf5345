//! Business logic services for the dashboard.
//!
//! # Services
//!
//! - `auth` - Login, signup validation and the mocked Google sign-in

pub mod auth;
