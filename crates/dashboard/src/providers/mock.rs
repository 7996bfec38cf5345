//! Fixed demo data.

use chrono::NaiveDate;
use rust_decimal::Decimal;

use rentzy_core::{
    BookingId, BookingStatus, Category, ItemId, ListingId, ListingStatus, Price,
};

use super::{BookingProvider, CatalogProvider, ListingProvider};
use crate::models::catalog::{Booking, CatalogItem, DateRange, Listing};

/// Six demo items covering all five categories.
#[derive(Debug, Clone, Copy, Default)]
pub struct MockCatalog;

impl CatalogProvider for MockCatalog {
    fn items(&self) -> Vec<CatalogItem> {
        vec![
            item(1, "Honda City", Category::Cars, 2000, "🚗", 45),
            item(2, "Royal Enfield", Category::Bikes, 800, "🏍️", 43),
            item(3, "MacBook Pro", Category::Gadgets, 1500, "💻", 48),
            item(4, "Beach Villa", Category::Villas, 8000, "🏖️", 49),
            item(5, "Canon DSLR", Category::Gadgets, 1200, "📷", 46),
            item(6, "Apartment", Category::Homes, 3000, "🏠", 44),
        ]
    }
}

/// Three demo bookings from January 2024.
#[derive(Debug, Clone, Copy, Default)]
pub struct MockBookings;

impl BookingProvider for MockBookings {
    fn bookings(&self) -> Vec<Booking> {
        vec![
            booking(1, "Honda City", (15, 17), BookingStatus::Active, 6000),
            booking(2, "MacBook Pro", (20, 25), BookingStatus::Pending, 7500),
            booking(3, "Beach Villa", (28, 30), BookingStatus::Confirmed, 24000),
        ]
    }
}

/// Three demo listings, one inactive.
#[derive(Debug, Clone, Copy, Default)]
pub struct MockListings;

impl ListingProvider for MockListings {
    fn listings(&self) -> Vec<Listing> {
        vec![
            listing(1, "My Honda City", Category::Cars, 2000, ListingStatus::Active, 15),
            listing(2, "Gaming Laptop", Category::Gadgets, 1800, ListingStatus::Active, 8),
            listing(3, "Apartment", Category::Homes, 3500, ListingStatus::Inactive, 3),
        ]
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

fn item(
    id: i32,
    name: &str,
    category: Category,
    rupees: i64,
    icon: &str,
    rating_tenths: i64,
) -> CatalogItem {
    CatalogItem {
        id: ItemId::new(id),
        name: name.to_string(),
        category,
        price_per_day: Price::inr(rupees),
        icon: icon.to_string(),
        rating: Decimal::new(rating_tenths, 1),
    }
}

fn booking(
    id: i32,
    item_name: &str,
    (start_day, end_day): (u32, u32),
    status: BookingStatus,
    rupees: i64,
) -> Booking {
    Booking {
        id: BookingId::new(id),
        item_name: item_name.to_string(),
        dates: DateRange {
            start: january_2024(start_day),
            end: january_2024(end_day),
        },
        status,
        amount: Price::inr(rupees),
    }
}

fn listing(
    id: i32,
    name: &str,
    category: Category,
    rupees: i64,
    status: ListingStatus,
    booking_count: u32,
) -> Listing {
    Listing {
        id: ListingId::new(id),
        name: name.to_string(),
        category,
        price_per_day: Price::inr(rupees),
        status,
        booking_count,
    }
}

fn january_2024(day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 1, day).unwrap_or(NaiveDate::MIN)
}
