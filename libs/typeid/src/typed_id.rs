//! The [`TypedId`] value and the free functions that make and parse it.

use std::borrow::Borrow;
use std::fmt;
use std::str::FromStr;

use tracing::debug;
use ulid::Ulid;

use crate::error::TypeIdError;
use crate::generator::TypedIdGenerator;
use crate::type_name::{validate_type_name, TypeName};

/// Separator between type name and ULID.
pub const SEPARATOR: char = '_';

/// Length of the ULID portion in canonical text form.
pub const ULID_LEN: usize = 26;

/// A typed identifier: `{type_name}_{ulid}`.
///
/// The value is an immutable string. Values built by [`make`], [`parse`] or
/// [`parse_any`] are always well-formed; [`TypedId::from_raw`] wraps any
/// string, and the accessors degrade to empty strings instead of panicking
/// when the separator is missing.
///
/// Ordering is plain string ordering, so IDs of the same type sort by
/// creation time.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TypedId(String);

impl TypedId {
    /// Wraps a string without validating it.
    #[must_use]
    pub fn from_raw(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    /// Builds a typed ID from a type name and an existing ULID.
    #[must_use]
    pub fn from_ulid(type_name: &TypeName, ulid: Ulid) -> Self {
        Self(format!("{type_name}{SEPARATOR}{ulid}"))
    }

    /// Returns the underlying representation verbatim.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes the ID and returns the underlying string.
    #[must_use]
    pub fn into_string(self) -> String {
        self.0
    }

    /// Returns the type name portion, or `""` if there is no separator.
    #[must_use]
    pub fn type_part(&self) -> &str {
        self.split().map_or("", |(type_part, _)| type_part)
    }

    /// Returns the ULID portion, or `""` if there is no separator.
    #[must_use]
    pub fn id_part(&self) -> &str {
        self.split().map_or("", |(_, id_part)| id_part)
    }

    /// Number of characters in the full representation.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.chars().count()
    }

    /// Returns true if the representation is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns true if the type name portion equals `type_name`.
    #[must_use]
    pub fn has_type(&self, type_name: &str) -> bool {
        self.split().is_some_and(|(type_part, _)| type_part == type_name)
    }

    /// Decodes the ULID portion, if it is well-formed.
    #[must_use]
    pub fn ulid(&self) -> Option<Ulid> {
        decode_ulid(self.id_part()).ok()
    }

    /// Returns the timestamp of the ULID portion in milliseconds.
    #[must_use]
    pub fn timestamp_ms(&self) -> Option<u64> {
        self.ulid().map(|ulid| ulid.timestamp_ms())
    }

    // The ULID alphabet has no underscore, so on a well-formed value the last
    // underscore is the separator even when the type name has several segments.
    fn split(&self) -> Option<(&str, &str)> {
        self.0.rsplit_once(SEPARATOR)
    }
}

/// Makes a fresh typed ID for `type_name`.
pub fn make(type_name: &str) -> Result<TypedId, TypeIdError> {
    Ok(TypeName::new(type_name)?.make_id())
}

/// Makes a typed ID using a monotonic generator.
///
/// IDs drawn from the same generator are strictly increasing, even within a
/// single millisecond.
pub fn make_with(
    type_name: &str,
    generator: &mut TypedIdGenerator,
) -> Result<TypedId, TypeIdError> {
    let type_name = TypeName::new(type_name)?;
    generator.generate(&type_name)
}

/// Parses `candidate` as a typed ID of type `type_name`.
///
/// On success the returned value holds `candidate` unchanged.
pub fn parse(type_name: &str, candidate: &str) -> Result<TypedId, TypeIdError> {
    validate_type_name(type_name).inspect_err(|error| {
        debug!(type_name, candidate, %error, "rejected typed id");
    })?;
    parse_validated(type_name, candidate)
}

/// Parses `candidate` as a typed ID of any valid type.
///
/// The prefix before the last underscore must be a valid type name and the
/// rest a valid ULID.
pub fn parse_any(candidate: &str) -> Result<TypedId, TypeIdError> {
    check_any(candidate)
        .map(|()| TypedId(candidate.to_string()))
        .inspect_err(|error| debug!(candidate, %error, "rejected typed id"))
}

/// Parses assuming `type_name` has already been validated.
pub(crate) fn parse_validated(type_name: &str, candidate: &str) -> Result<TypedId, TypeIdError> {
    check_typed(type_name, candidate)
        .map(|()| TypedId(candidate.to_string()))
        .inspect_err(|error| debug!(type_name, candidate, %error, "rejected typed id"))
}

fn check_typed(type_name: &str, candidate: &str) -> Result<(), TypeIdError> {
    let Some((prefix, id)) = split_for(type_name, candidate) else {
        return Err(TypeIdError::MalformedIdentifier {
            candidate: candidate.to_string(),
        });
    };

    if prefix != type_name {
        return Err(TypeIdError::TypeMismatch {
            expected: type_name.to_string(),
            actual: prefix.to_string(),
        });
    }

    check_ulid(id)
}

fn check_any(candidate: &str) -> Result<(), TypeIdError> {
    let Some((prefix, id)) = candidate.rsplit_once(SEPARATOR) else {
        return Err(TypeIdError::MalformedIdentifier {
            candidate: candidate.to_string(),
        });
    };

    validate_type_name(prefix)?;
    check_ulid(id)
}

fn check_ulid(id: &str) -> Result<(), TypeIdError> {
    decode_ulid(id).map(|_| ())
}

/// Decodes a ULID, rejecting text that does not re-encode to itself.
///
/// The `ulid` decoder silently drops the bits above 128, so a 26-character
/// token starting above `7` would otherwise decode to a different value.
fn decode_ulid(id: &str) -> Result<Ulid, TypeIdError> {
    let invalid = |reason: String| TypeIdError::InvalidSortableId {
        id: id.to_string(),
        reason,
    };

    if id.len() == ULID_LEN && id.as_bytes()[0] > b'7' {
        return Err(invalid("overflow: value exceeds 128 bits".to_string()));
    }

    let ulid = Ulid::from_string(id).map_err(|e| invalid(e.to_string()))?;
    if ulid.to_string() != id.to_ascii_uppercase() {
        return Err(invalid("non-canonical encoding".to_string()));
    }

    Ok(ulid)
}

/// Splits `candidate` at the separator that follows the expected type name.
///
/// A type name with `n` underscores puts the separator at the `n + 1`th
/// underscore of the candidate, so for single-segment names this is the first
/// underscore. When the candidate has fewer underscores than that, it is split
/// at its last one and the prefix cannot match.
fn split_for<'a>(type_name: &str, candidate: &'a str) -> Option<(&'a str, &'a str)> {
    let underscores = type_name.matches(SEPARATOR).count();
    match candidate.match_indices(SEPARATOR).nth(underscores) {
        Some((idx, _)) => Some((&candidate[..idx], &candidate[idx + 1..])),
        None => candidate.rsplit_once(SEPARATOR),
    }
}

impl fmt::Display for TypedId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for TypedId {
    type Err = TypeIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_any(s)
    }
}

impl From<String> for TypedId {
    fn from(raw: String) -> Self {
        Self(raw)
    }
}

impl From<&str> for TypedId {
    fn from(raw: &str) -> Self {
        Self(raw.to_string())
    }
}

impl From<TypedId> for String {
    fn from(id: TypedId) -> Self {
        id.0
    }
}

impl AsRef<str> for TypedId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for TypedId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl PartialEq<str> for TypedId {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for TypedId {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

impl serde::Serialize for TypedId {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> serde::Deserialize<'de> for TypedId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = <String as serde::Deserialize>::deserialize(deserializer)?;
        check_any(&s).map_err(serde::de::Error::custom)?;
        Ok(Self(s))
    }
}
