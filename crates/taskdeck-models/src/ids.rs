//! Type-safe ID wrappers for Taskdeck.
//!
//! Entity ids are assigned by the server; clients only carry them around,
//! so these newtypes have no generation path.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Macro to generate ID newtypes with common functionality.
macro_rules! define_id {
    ($name:ident) => {
        #[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Returns the inner string.
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<String> for $name {
            fn from(s: String) -> Self {
                Self(s)
            }
        }

        impl From<&str> for $name {
            fn from(s: &str) -> Self {
                Self(s.to_string())
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }
    };
}

define_id!(EntityId);
define_id!(WorkspaceId);
define_id!(UserId);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entity_id_from_str() {
        let id = EntityId::from("s1");
        assert_eq!(id.as_str(), "s1");
    }

    #[test]
    fn test_id_serialization_is_transparent() {
        let id = EntityId::from("64f0c2");
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"64f0c2\"");

        let parsed: EntityId = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, id);
    }

    #[test]
    fn test_id_display() {
        let id = WorkspaceId::from("ws-123");
        assert_eq!(format!("{}", id), "ws-123");
    }

    #[test]
    fn test_ids_are_distinct_types() {
        // Same wire form, different types; mixing them up fails to compile.
        let e = EntityId::from("x");
        let u = UserId::from("x");
        assert_eq!(
            serde_json::to_string(&e).unwrap(),
            serde_json::to_string(&u).unwrap()
        );
    }
}
