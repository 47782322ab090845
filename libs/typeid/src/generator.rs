//! Monotonic typed ID generation.

use std::fmt;

use ulid::Generator;

use crate::error::TypeIdError;
use crate::type_name::TypeName;
use crate::typed_id::TypedId;

/// Generates typed IDs whose ULIDs strictly increase.
///
/// Within one millisecond the generator increments the random component of
/// the previous ULID instead of drawing fresh randomness. Keep one generator
/// per ordering domain; it is a plain value with no shared state.
pub struct TypedIdGenerator {
    inner: Generator,
}

impl TypedIdGenerator {
    /// Creates a new generator.
    #[must_use]
    pub fn new() -> Self {
        Self {
            inner: Generator::new(),
        }
    }

    /// Generates the next typed ID for `type_name`.
    ///
    /// Fails with [`TypeIdError::MonotonicOverflow`] only when the 80-bit random
    /// component is exhausted within one millisecond; `ulid::Generator` offers
    /// no way to force that, so it is not exercised in tests.
    pub fn generate(&mut self, type_name: &TypeName) -> Result<TypedId, TypeIdError> {
        let ulid = self
            .inner
            .generate()
            .map_err(|_| TypeIdError::MonotonicOverflow)?;
        let id = TypedId::from_ulid(type_name, ulid);
        tracing::trace!(typed_id = %id, "generated monotonic typed id");
        Ok(id)
    }
}

impl Default for TypedIdGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for TypedIdGenerator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TypedIdGenerator").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::typed_id::make_with;

    #[test]
    fn test_generator_strictly_increasing() {
        let mut generator = TypedIdGenerator::new();
        let name = TypeName::new("evt").unwrap();

        let ids: Vec<_> = (0..500)
            .map(|_| generator.generate(&name).unwrap())
            .collect();

        for pair in ids.windows(2) {
            assert!(pair[0] < pair[1], "{} !< {}", pair[0], pair[1]);
        }
    }

    #[test]
    fn test_make_with_validates_type_name() {
        let mut generator = TypedIdGenerator::default();
        let err = make_with("foo_", &mut generator).unwrap_err();
        assert!(err.is_type_name_error());

        let id = make_with("foo", &mut generator).unwrap();
        assert_eq!(id.type_part(), "foo");
    }
}
