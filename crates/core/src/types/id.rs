//! Newtype IDs for type-safe entity references.
//!
//! Use the `define_id!` macro to create type-safe ID wrappers that prevent
//! accidentally mixing IDs from different entity types.

/// Macro to define a type-safe ID wrapper.
///
/// Creates a newtype wrapper around the given integer type with:
/// - `Serialize`/`Deserialize` with `#[serde(transparent)]`
/// - `Debug`, `Clone`, `Copy`, `PartialEq`, `Eq`, `Hash`, `PartialOrd`, `Ord`
/// - Conversion methods: `new()`, `get()`
/// - `From` implementations in both directions
///
/// # Example
///
/// ```rust
/// # use rentzy_core::define_id;
/// define_id!(ItemId, i32);
/// define_id!(BookingId, i32);
///
/// let item_id = ItemId::new(1);
/// let booking_id = BookingId::new(1);
///
/// // These are different types, so this won't compile:
/// // let _: ItemId = booking_id;
/// ```
#[macro_export]
macro_rules! define_id {
    ($name:ident, $inner:ty) => {
        #[derive(
            Debug,
            Clone,
            Copy,
            PartialEq,
            Eq,
            Hash,
            PartialOrd,
            Ord,
            ::serde::Serialize,
            ::serde::Deserialize
        )]
        #[serde(transparent)]
        pub struct $name($inner);

        impl $name {
            /// Create a new ID from its raw value.
            #[must_use]
            pub const fn new(id: $inner) -> Self {
                Self(id)
            }

            /// Get the underlying raw value.
            #[must_use]
            pub const fn get(&self) -> $inner {
                self.0
            }
        }

        impl ::core::fmt::Display for $name {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<$inner> for $name {
            fn from(id: $inner) -> Self {
                Self(id)
            }
        }

        impl From<$name> for $inner {
            fn from(id: $name) -> Self {
                id.0
            }
        }
    };
}

// Session IDs are creation timestamps in milliseconds.
define_id!(SessionId, i64);
define_id!(ItemId, i32);
define_id!(BookingId, i32);
define_id!(ListingId, i32);

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_session_id_holds_millisecond_timestamps() {
        let id = SessionId::new(1_705_312_800_000);
        assert_eq!(id.get(), 1_705_312_800_000);
        assert_eq!(id.to_string(), "1705312800000");
    }

    #[test]
    fn test_ids_serialize_transparently() {
        let json = serde_json::to_string(&ItemId::new(4)).unwrap();
        assert_eq!(json, "4");

        let parsed: BookingId = serde_json::from_str("2").unwrap();
        assert_eq!(parsed, BookingId::new(2));
    }

    #[test]
    fn test_from_conversions() {
        let id: ListingId = 3.into();
        let raw: i32 = id.into();
        assert_eq!(raw, 3);
    }
}
