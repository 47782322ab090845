//! Macros for defining statically typed ID types.

/// Macro to define a typed ID newtype with a fixed type name.
///
/// This generates a wrapper around [`TypedId`](crate::TypedId) with:
/// - A `TYPE_NAME` constant, validated at compile time
/// - `new()` to make a fresh ID
/// - `parse()` to parse from string
/// - `Display` and `FromStr` implementations
/// - `Serialize` and `Deserialize` implementations
/// - `TryFrom<TypedId>` and `From<Self> for TypedId`
///
/// # Example
///
/// ```
/// typeid::define_typed_id!(UserId, "user");
///
/// let id = UserId::new();
/// assert!(id.as_str().starts_with("user_"));
///
/// let parsed: UserId = "user_01ARZ3NDEKTSV4RRFFQ69G5FAV".parse().unwrap();
/// assert_eq!(parsed.as_typed_id().id_part(), "01ARZ3NDEKTSV4RRFFQ69G5FAV");
/// ```
#[macro_export]
macro_rules! define_typed_id {
    ($name:ident, $type_name:literal) => {
        const _: () = assert!(
            $crate::is_valid_type_name($type_name),
            concat!("invalid type name: ", $type_name)
        );

        #[doc = concat!("A typed ID of type `", $type_name, "`.")]
        #[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
        pub struct $name($crate::TypedId);

        impl $name {
            /// The type name for this ID type.
            pub const TYPE_NAME: $crate::TypeName = $crate::TypeName::from_static($type_name);

            /// Makes a new ID with a fresh ULID.
            #[must_use]
            pub fn new() -> Self {
                Self(Self::TYPE_NAME.make_id())
            }

            /// Creates an ID from a raw ULID.
            #[must_use]
            pub fn from_ulid(ulid: $crate::Ulid) -> Self {
                Self($crate::TypedId::from_ulid(&Self::TYPE_NAME, ulid))
            }

            /// Parses an ID from a string.
            ///
            /// The string must be in the format `{type_name}_{ulid}`.
            pub fn parse(s: &str) -> Result<Self, $crate::TypeIdError> {
                Self::TYPE_NAME.parse_id(s).map(Self)
            }

            /// Returns the ID as a string slice.
            #[must_use]
            pub fn as_str(&self) -> &str {
                self.0.as_str()
            }

            /// Returns the underlying typed ID.
            #[must_use]
            pub fn as_typed_id(&self) -> &$crate::TypedId {
                &self.0
            }

            /// Consumes the wrapper and returns the underlying typed ID.
            #[must_use]
            pub fn into_typed_id(self) -> $crate::TypedId {
                self.0
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                std::fmt::Display::fmt(&self.0, f)
            }
        }

        impl std::str::FromStr for $name {
            type Err = $crate::TypeIdError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Self::parse(s)
            }
        }

        impl TryFrom<$crate::TypedId> for $name {
            type Error = $crate::TypeIdError;

            fn try_from(id: $crate::TypedId) -> Result<Self, Self::Error> {
                Self::parse(id.as_str())
            }
        }

        impl From<$name> for $crate::TypedId {
            fn from(id: $name) -> Self {
                id.0
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                self.0.as_str()
            }
        }

        impl $crate::__private::serde::Serialize for $name {
            fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
            where
                S: $crate::__private::serde::Serializer,
            {
                serializer.serialize_str(self.as_str())
            }
        }

        impl<'de> $crate::__private::serde::Deserialize<'de> for $name {
            fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
            where
                D: $crate::__private::serde::Deserializer<'de>,
            {
                let s =
                    <String as $crate::__private::serde::Deserialize>::deserialize(deserializer)?;
                Self::parse(&s).map_err($crate::__private::serde::de::Error::custom)
            }
        }
    };
}
