//! Newtype wrappers for entity identifiers.
//!
//! These prevent accidentally mixing up IDs of different entity types
//! at compile time. All identifiers in this domain are opaque strings
//! (the original document store used ObjectID strings).

use serde::{Deserialize, Serialize};

/// Macro to define a newtype ID wrapping a `String` inner type.
macro_rules! define_string_id {
    (
        $(#[$meta:meta])*
        $name:ident
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Creates a new identifier from the given string.
            #[inline]
            #[must_use]
            pub const fn new(value: String) -> Self {
                Self(value)
            }

            /// Returns a reference to the inner string.
            #[inline]
            #[must_use]
            pub fn as_inner(&self) -> &str {
                &self.0
            }

            /// Consumes the wrapper and returns the inner string.
            #[inline]
            #[must_use]
            pub fn into_inner(self) -> String {
                self.0
            }
        }

        impl core::fmt::Display for $name {
            #[inline]
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                core::fmt::Display::fmt(&self.0, f)
            }
        }

        impl From<String> for $name {
            #[inline]
            fn from(value: String) -> Self {
                Self(value)
            }
        }

        impl From<&str> for $name {
            #[inline]
            fn from(value: &str) -> Self {
                Self(value.to_owned())
            }
        }
    };
}

define_string_id! {
    /// Unique identifier for a user.
    UserId
}

define_string_id! {
    /// Unique identifier for a transaction.
    TransactionId
}

define_string_id! {
    /// Unique identifier for a transaction category.
    CategoryId
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_id_serde_roundtrip() {
        let id = UserId::new("u-42".to_owned());
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, r#""u-42""#);
        let deserialized: UserId = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized, id);
    }

    #[test]
    fn transaction_id_serde_roundtrip() {
        let id = TransactionId::new("550e8400-e29b-41d4-a716-446655440000".to_owned());
        let json = serde_json::to_string(&id).unwrap();
        let deserialized: TransactionId = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized, id);
    }

    #[test]
    fn string_id_display() {
        let id = CategoryId::new("cat-food".to_owned());
        assert_eq!(id.to_string(), "cat-food");
    }

    #[test]
    fn id_from_inner() {
        let id: UserId = "abc".to_owned().into();
        assert_eq!(id.as_inner(), "abc");

        let id: CategoryId = "c-1".into();
        assert_eq!(id.as_inner(), "c-1");
    }

    #[test]
    fn id_into_inner() {
        let id = TransactionId::new("t-7".to_owned());
        assert_eq!(id.into_inner(), "t-7");
    }

    #[test]
    fn different_id_types_are_distinct() {
        let _user = UserId::new("x".to_owned());
        let _tx = TransactionId::new("x".to_owned());
        let _cat = CategoryId::new("x".to_owned());
    }
}
