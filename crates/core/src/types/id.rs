//! Newtype IDs for type-safe entity references.
//!
//! Use the `define_id!` macro to create type-safe ID wrappers that prevent
//! accidentally mixing IDs from different entity types. Catalog and order
//! identifiers are opaque strings (`"101"`, `"LUX-123456"`), so the wrappers
//! hold a `String` rather than an integer.

/// Macro to define a type-safe string ID wrapper.
///
/// Creates a newtype wrapper around `String` with:
/// - `Serialize`/`Deserialize` with `#[serde(transparent)]`
/// - `Debug`, `Clone`, `PartialEq`, `Eq`, `Hash`, `PartialOrd`, `Ord`
/// - Conversion methods: `new()`, `as_str()`, `into_inner()`
/// - `Display`, `From<&str>`, `From<String>` and `AsRef<str>`
///
/// # Example
///
/// ```rust
/// # use luxestore_core::define_id;
/// define_id!(WishlistId);
/// define_id!(ReviewId);
///
/// let wishlist = WishlistId::new("w1");
/// let review = ReviewId::new("w1");
///
/// // These are different types, so this won't compile:
/// // let _: WishlistId = review;
/// assert_eq!(wishlist.as_str(), review.as_str());
/// ```
#[macro_export]
macro_rules! define_id {
    ($name:ident) => {
        #[derive(
            Debug,
            Clone,
            PartialEq,
            Eq,
            Hash,
            PartialOrd,
            Ord,
            ::serde::Serialize,
            ::serde::Deserialize
        )]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Create a new ID from anything string-like.
            #[must_use]
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            /// Get the underlying string slice.
            #[must_use]
            pub fn as_str(&self) -> &str {
                &self.0
            }

            /// Consume the ID and return the inner string.
            #[must_use]
            pub fn into_inner(self) -> String {
                self.0
            }
        }

        impl ::core::fmt::Display for $name {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<&str> for $name {
            fn from(id: &str) -> Self {
                Self(id.to_owned())
            }
        }

        impl From<String> for $name {
            fn from(id: String) -> Self {
                Self(id)
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }
    };
}

define_id!(ProductId);
define_id!(UserId);
define_id!(OrderId);

impl OrderId {
    /// Prefix carried by every storefront order number.
    pub const PREFIX: &'static str = "LUX-";

    /// Build an order number from its six-digit sequence part.
    ///
    /// Values outside `100_000..=999_999` are clamped into range so the
    /// number always renders as `LUX-` followed by exactly six digits.
    #[must_use]
    pub fn from_sequence(sequence: u32) -> Self {
        let sequence = sequence.clamp(100_000, 999_999);
        Self(format!("{}{sequence}", Self::PREFIX))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_display_and_as_str() {
        let id = ProductId::new("101");
        assert_eq!(id.to_string(), "101");
        assert_eq!(id.as_str(), "101");
    }

    #[test]
    fn test_serde_transparent() {
        let id = OrderId::new("LUX-123456");
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"LUX-123456\"");
        let back: OrderId = serde_json::from_str(&json).unwrap();
        assert_eq!(back, id);
    }

    #[test]
    fn test_order_id_from_sequence() {
        assert_eq!(OrderId::from_sequence(482_193).as_str(), "LUX-482193");
        assert_eq!(OrderId::from_sequence(7).as_str(), "LUX-100000");
        assert_eq!(OrderId::from_sequence(5_000_000).as_str(), "LUX-999999");
    }
}
