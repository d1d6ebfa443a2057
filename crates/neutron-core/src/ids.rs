//! Typed wrappers for Neutron resource identifiers.
//!
//! Neutron hands out UUIDs, but the client treats identifiers as opaque strings:
//! nothing is parsed or validated, and the text is interpolated into request
//! paths exactly as given. The wrappers only keep a router ID from being passed
//! where a subnet ID is expected.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Macro to generate opaque identifier wrapper types.
macro_rules! id_type {
    ($(#[$meta:meta])* $name:ident, $doc:expr) => {
        $(#[$meta])*
        #[doc = $doc]
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Wraps an identifier verbatim.
            #[must_use]
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            /// Returns the identifier text.
            #[must_use]
            pub fn as_str(&self) -> &str {
                &self.0
            }

            /// Converts into the inner string.
            #[must_use]
            pub fn into_inner(self) -> String {
                self.0
            }
        }

        impl From<String> for $name {
            fn from(id: String) -> Self {
                Self(id)
            }
        }

        impl From<&str> for $name {
            fn from(id: &str) -> Self {
                Self(id.to_string())
            }
        }

        impl From<$name> for String {
            fn from(wrapper: $name) -> Self {
                wrapper.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }
    };
}

id_type!(NetworkId, "Network identifier");
id_type!(SubnetId, "Subnet identifier");
id_type!(PortId, "Port identifier");
id_type!(RouterId, "Router identifier");
id_type!(ProjectId, "Project (tenant) identifier");

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    const VALID_UUID: &str = "550e8400-e29b-41d4-a716-446655440000";

    #[test]
    fn test_network_id_from_uuid_text() {
        let id = NetworkId::new(VALID_UUID);
        assert_eq!(id.as_str(), VALID_UUID);
        assert_eq!(id.to_string(), VALID_UUID);
    }

    #[test]
    fn test_malformed_id_kept_verbatim() {
        let id = SubnetId::from("not a uuid/../x");
        assert_eq!(id.as_ref(), "not a uuid/../x");
    }

    #[test]
    fn test_random_uuid_roundtrip_into_inner() {
        let raw = Uuid::new_v4().to_string();
        let id = PortId::from(raw.clone());
        assert_eq!(id.into_inner(), raw);
    }

    #[test]
    fn test_serde_transparent() {
        let id = RouterId::new("r-1");
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"r-1\"");

        let parsed: RouterId = serde_json::from_str("\"r-2\"").unwrap();
        assert_eq!(parsed, RouterId::new("r-2"));
    }

    #[test]
    fn test_empty_id_allowed() {
        let id = ProjectId::new("");
        assert!(id.as_str().is_empty());
        assert_eq!(String::from(id), "");
    }
}
