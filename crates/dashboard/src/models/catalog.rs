//! Records supplied by the catalog, booking and listing providers.

use chrono::{Datelike, NaiveDate};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use rentzy_core::{
    BookingId, BookingStatus, Category, CurrencyCode, ItemId, ListingId, ListingStatus, Price,
};

/// An item available to rent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogItem {
    pub id: ItemId,
    pub name: String,
    pub category: Category,
    pub price_per_day: Price,
    /// Emoji shown in place of a photo.
    pub icon: String,
    pub rating: Decimal,
}

/// Inclusive span of days a booking covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl std::fmt::Display for DateRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.start.year() == self.end.year() {
            write!(
                f,
                "{} - {}",
                self.start.format("%-d %b"),
                self.end.format("%-d %b %Y")
            )
        } else {
            write!(
                f,
                "{} - {}",
                self.start.format("%-d %b %Y"),
                self.end.format("%-d %b %Y")
            )
        }
    }
}

/// A renter's booking.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Booking {
    pub id: BookingId,
    pub item_name: String,
    pub dates: DateRange,
    pub status: BookingStatus,
    pub amount: Price,
}

/// An owner's listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Listing {
    pub id: ListingId,
    pub name: String,
    pub category: Category,
    pub price_per_day: Price,
    pub status: ListingStatus,
    pub booking_count: u32,
}

/// Headline numbers for the overview section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "role", rename_all = "snake_case")]
pub enum OverviewStats {
    Renter {
        active_bookings: usize,
        pending_requests: usize,
        total_spent: Price,
        rating: Decimal,
    },
    Owner {
        active_listings: usize,
        total_bookings: u32,
        total_earnings: Price,
        rating: Decimal,
    },
}

impl OverviewStats {
    /// Placeholder rating until reviews exist.
    const RENTER_RATING: Decimal = Decimal::from_parts(45, 0, 0, false, 1);
    const OWNER_RATING: Decimal = Decimal::from_parts(48, 0, 0, false, 1);

    /// Stats for a renter, from their bookings.
    #[must_use]
    pub fn for_renter(bookings: &[Booking]) -> Self {
        Self::Renter {
            active_bookings: count_bookings(bookings, BookingStatus::Active),
            pending_requests: count_bookings(bookings, BookingStatus::Pending),
            total_spent: Price::sum_in(CurrencyCode::INR, bookings.iter().map(|b| b.amount)),
            rating: Self::RENTER_RATING,
        }
    }

    /// Stats for an owner, from their listings.
    ///
    /// Earnings are estimated as daily price times bookings per listing.
    #[must_use]
    pub fn for_owner(listings: &[Listing]) -> Self {
        Self::Owner {
            active_listings: listings
                .iter()
                .filter(|l| l.status == ListingStatus::Active)
                .count(),
            total_bookings: listings
                .iter()
                .fold(0, |total, l| total.saturating_add(l.booking_count)),
            total_earnings: Price::sum_in(
                CurrencyCode::INR,
                listings.iter().map(|l| l.price_per_day.times(l.booking_count)),
            ),
            rating: Self::OWNER_RATING,
        }
    }
}

fn count_bookings(bookings: &[Booking], status: BookingStatus) -> usize {
    bookings.iter().filter(|b| b.status == status).count()
}
