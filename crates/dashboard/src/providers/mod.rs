//! Data sources rendered into the dashboard.
//!
//! The controller only sees these traits; [`Providers::mock`] wires in the
//! fixed demo data from [`mock`].

pub mod mock;

use crate::models::catalog::{Booking, CatalogItem, Listing};

/// Items available to rent.
pub trait CatalogProvider {
    /// Every catalog item, in display order.
    fn items(&self) -> Vec<CatalogItem>;
}

/// The signed-in renter's bookings.
pub trait BookingProvider {
    fn bookings(&self) -> Vec<Booking>;
}

/// The signed-in owner's listings.
pub trait ListingProvider {
    fn listings(&self) -> Vec<Listing>;
}

/// The set of providers a controller renders from.
pub struct Providers {
    pub catalog: Box<dyn CatalogProvider>,
    pub bookings: Box<dyn BookingProvider>,
    pub listings: Box<dyn ListingProvider>,
}

impl Providers {
    /// Providers backed by the built-in demo data.
    #[must_use]
    pub fn mock() -> Self {
        Self {
            catalog: Box::new(mock::MockCatalog),
            bookings: Box::new(mock::MockBookings),
            listings: Box::new(mock::MockListings),
        }
    }
}

impl std::fmt::Debug for Providers {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Providers").finish_non_exhaustive()
    }
}
