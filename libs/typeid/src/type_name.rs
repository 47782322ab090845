//! Type name grammar and the validated [`TypeName`] value.
//!
//! A type name is one or more ASCII alphanumeric segments joined by single
//! underscores: `^[A-Za-z0-9]+(?:_[A-Za-z0-9]+)*$`.

use std::borrow::Cow;
use std::fmt;
use std::str::FromStr;

use ulid::Ulid;

use crate::error::TypeIdError;
use crate::typed_id::TypedId;

/// Returns true if `s` is a valid type name.
///
/// This is a `const fn` so statically known names can be checked at compile
/// time (see [`TypeName::from_static`]).
#[must_use]
pub const fn is_valid_type_name(s: &str) -> bool {
    let bytes = s.as_bytes();
    if bytes.is_empty() {
        return false;
    }

    // Starts true so a leading underscore is rejected.
    let mut prev_underscore = true;
    let mut i = 0;
    while i < bytes.len() {
        let b = bytes[i];
        if b == b'_' {
            if prev_underscore {
                return false;
            }
            prev_underscore = true;
        } else if b.is_ascii_alphanumeric() {
            prev_underscore = false;
        } else {
            return false;
        }
        i += 1;
    }

    !prev_underscore
}

/// Validates `type_name` against the type name grammar.
pub fn validate_type_name(type_name: &str) -> Result<(), TypeIdError> {
    let reason = if type_name.is_empty() {
        "type name must not be empty"
    } else if type_name.starts_with('_') || type_name.ends_with('_') {
        "type name must not start or end with an underscore"
    } else if !is_valid_type_name(type_name) {
        "type name must only contain alphanumeric characters and single underscores"
    } else {
        return Ok(());
    };

    Err(TypeIdError::InvalidTypeName {
        type_name: type_name.to_string(),
        reason,
    })
}

/// A validated type name.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TypeName(Cow<'static, str>);

impl TypeName {
    /// Validates and wraps a type name.
    pub fn new(type_name: impl Into<String>) -> Result<Self, TypeIdError> {
        let type_name = type_name.into();
        validate_type_name(&type_name)?;
        Ok(Self(Cow::Owned(type_name)))
    }

    /// Wraps a static type name.
    ///
    /// # Panics
    ///
    /// Panics if `type_name` is not valid. In a `const` context the panic
    /// becomes a compile error.
    #[must_use]
    pub const fn from_static(type_name: &'static str) -> Self {
        assert!(
            is_valid_type_name(type_name),
            "type name must be alphanumeric segments joined by single underscores"
        );
        Self(Cow::Borrowed(type_name))
    }

    /// Returns the type name as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns the underscore-separated segments of the type name.
    pub fn segments(&self) -> std::str::Split<'_, char> {
        self.0.split('_')
    }

    /// Makes a fresh typed ID of this type.
    #[must_use]
    pub fn make_id(&self) -> TypedId {
        let id = TypedId::from_ulid(self, Ulid::new());
        tracing::trace!(typed_id = %id, "made typed id");
        id
    }

    /// Parses `candidate` as a typed ID of this type.
    pub fn parse_id(&self, candidate: &str) -> Result<TypedId, TypeIdError> {
        crate::typed_id::parse_validated(self.as_str(), candidate)
    }
}

impl fmt::Display for TypeName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for TypeName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl FromStr for TypeName {
    type Err = TypeIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<&str> for TypeName {
    type Error = TypeIdError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        Self::new(s)
    }
}

impl TryFrom<String> for TypeName {
    type Error = TypeIdError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::new(s)
    }
}

impl serde::Serialize for TypeName {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> serde::Deserialize<'de> for TypeName {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = <String as serde::Deserialize>::deserialize(deserializer)?;
        Self::new(s).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_type_names() {
        for name in ["user", "User", "u", "user_account", "a_b_c", "v2", "123"] {
            assert!(is_valid_type_name(name), "{name} should be valid");
            assert!(validate_type_name(name).is_ok());
        }
    }

    #[test]
    fn test_invalid_type_names() {
        for name in [
            "", "_", "_foo", "foo_", "foo__bar", "foo$bar", "foo bar", " user", "user\n",
            "foo-bar", "café",
        ] {
            assert!(!is_valid_type_name(name), "{name:?} should be invalid");
            let err = validate_type_name(name).unwrap_err();
            assert!(err.is_type_name_error());
        }
    }

    #[test]
    fn test_validate_reasons() {
        let reason_of = |name: &str| match validate_type_name(name) {
            Err(TypeIdError::InvalidTypeName { reason, .. }) => reason,
            other => panic!("unexpected result: {other:?}"),
        };

        assert!(reason_of("").contains("empty"));
        assert!(reason_of("_foo").contains("start or end"));
        assert!(reason_of("foo_").contains("start or end"));
        assert!(reason_of("foo$bar").contains("alphanumeric"));
        assert!(reason_of("foo__bar").contains("single underscores"));
    }

    #[test]
    fn test_type_name_segments() {
        let name = TypeName::new("user_account").unwrap();
        assert_eq!(name.segments().collect::<Vec<_>>(), vec!["user", "account"]);
        assert_eq!(name.to_string(), "user_account");
    }

    #[test]
    fn test_from_static_matches_new() {
        const USER: TypeName = TypeName::from_static("user");
        assert_eq!(USER, TypeName::new("user").unwrap());
    }

    #[test]
    #[should_panic]
    fn test_from_static_rejects_invalid() {
        let _ = TypeName::from_static("not valid");
    }

    #[test]
    fn test_make_and_parse_id() {
        let name: TypeName = "order_line".parse().unwrap();
        let id = name.make_id();
        assert_eq!(id.type_part(), "order_line");
        assert_eq!(name.parse_id(id.as_str()).unwrap(), id);
    }

    #[test]
    fn test_type_name_json() {
        let name = TypeName::new("user").unwrap();
        assert_eq!(serde_json::to_string(&name).unwrap(), "\"user\"");

        let parsed: TypeName = serde_json::from_str("\"user\"").unwrap();
        assert_eq!(parsed, name);

        assert!(serde_json::from_str::<TypeName>("\"_user\"").is_err());
    }
}
