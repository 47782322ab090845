//! # typeid
//!
//! Typed, sortable identifiers.
//!
//! ## ID Format
//!
//! A typed ID is a type name and a ULID joined by an underscore:
//! `{type_name}_{ulid}`
//!
//! Examples:
//! - `user_01ARZ3NDEKTSV4RRFFQ69G5FAV`
//! - `order_line_01HV4Z3MXNKPQR9HSTZ7WCLD4E`
//!
//! Type names are ASCII alphanumeric segments joined by single underscores.
//! The ULID alphabet has no underscore, so the last underscore always
//! separates the two halves.
//!
//! This format provides:
//! - Type tagging (the prefix names what the ID refers to)
//! - Sortability (ULID is time-ordered)
//! - Uniqueness (ULID has 80 bits of randomness)
//!
//! ## Usage
//!
//! ```
//! let id = typeid::make("user")?;
//! assert_eq!(id.type_part(), "user");
//!
//! let parsed = typeid::parse("user", id.as_str())?;
//! assert_eq!(parsed, id);
//!
//! assert!(typeid::parse("admin", id.as_str()).unwrap_err().is_mismatch());
//! # Ok::<(), typeid::TypeIdError>(())
//! ```

mod error;
mod generator;
mod macros;
mod type_name;
mod typed_id;

pub use error::TypeIdError;
pub use generator::TypedIdGenerator;
pub use type_name::{is_valid_type_name, validate_type_name, TypeName};
pub use typed_id::{make, make_with, parse, parse_any, TypedId, SEPARATOR, ULID_LEN};

/// Re-export ulid for consumers that need raw ULID operations
pub use ulid::Ulid;

#[doc(hidden)]
pub mod __private {
    pub use serde;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_send_sync<T: Send + Sync>() {}

    #[test]
    fn test_public_types_are_send_sync() {
        assert_send_sync::<TypedId>();
        assert_send_sync::<TypeName>();
        assert_send_sync::<TypeIdError>();
        assert_send_sync::<TypedIdGenerator>();
    }

    #[test]
    fn test_concurrent_make() {
        let handles: Vec<_> = (0..4)
            .map(|_| {
                std::thread::spawn(|| (0..250).map(|_| make("job").unwrap()).collect::<Vec<_>>())
            })
            .collect();

        let ids: std::collections::HashSet<_> = handles
            .into_iter()
            .flat_map(|h| h.join().unwrap())
            .collect();
        assert_eq!(ids.len(), 1000);
    }
}
