//! Domain models for the dashboard.

pub mod catalog;
pub mod session;
pub mod view;

pub use catalog::{Booking, CatalogItem, DateRange, Listing, OverviewStats};
pub use session::{Profile, Session};
pub use view::{LoginSurface, LoginTab, Section, View, ViewState};
