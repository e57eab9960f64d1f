//! Strongly-typed id newtypes for domain entities.
//!
//! Every table uses a `SERIAL` key, so each id wraps an `i32`. The wrappers
//! are transparent to sqlx and serde, keep a `StudentId` from being passed
//! where a `SubjectId` is expected, and deserialize from either a JSON number
//! or a numeric string.

use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use utoipa::ToSchema;

use gradebook_core::serde::i32_or_string;

macro_rules! define_id {
    (
        $(#[$meta:meta])*
        $name:ident
    ) => {
        $(#[$meta])*
        #[derive(
            Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, sqlx::Type, ToSchema,
        )]
        #[serde(transparent)]
        #[sqlx(transparent)]
        #[schema(value_type = i32)]
        pub struct $name(pub i32);

        impl $name {
            #[inline]
            pub const fn new(value: i32) -> Self {
                Self(value)
            }

            #[inline]
            pub const fn into_inner(self) -> i32 {
                self.0
            }
        }

        impl From<i32> for $name {
            fn from(value: i32) -> Self {
                Self(value)
            }
        }

        impl From<$name> for i32 {
            fn from(id: $name) -> Self {
                id.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl<'de> Deserialize<'de> for $name {
            fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
            where
                D: Deserializer<'de>,
            {
                i32_or_string(deserializer).map(Self)
            }
        }
    };
}

define_id!(
    /// Id of a registered teacher.
    TeacherId
);

define_id!(
    /// Id of a student.
    StudentId
);

define_id!(
    /// Id of a subject.
    SubjectId
);

define_id!(
    /// Id of a mark.
    MarkId
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serializes_as_bare_integer() {
        assert_eq!(serde_json::to_string(&StudentId::new(5)).unwrap(), "5");
    }

    #[test]
    fn test_deserializes_number_and_string() {
        let from_number: SubjectId = serde_json::from_str("3").unwrap();
        let from_string: SubjectId = serde_json::from_str("\"3\"").unwrap();
        assert_eq!(from_number, SubjectId::new(3));
        assert_eq!(from_number, from_string);
    }

    #[test]
    fn test_rejects_non_numeric() {
        assert!(serde_json::from_str::<MarkId>("\"abc\"").is_err());
    }

    #[test]
    fn test_display_and_conversion() {
        let id = TeacherId::from(9);
        assert_eq!(id.to_string(), "9");
        assert_eq!(i32::from(id), 9);
        assert_eq!(id.into_inner(), 9);
    }
}
