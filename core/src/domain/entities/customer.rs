//! Customer identity projection.

use serde::{Deserialize, Serialize};

/// The externally-owned customer projection used by downstream handlers.
///
/// This subsystem never mutates a customer record; it only resolves the
/// projection from the authoritative store (through the session cache) and
/// hands it to route handlers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Customer {
    /// Unique customer identifier
    pub id: String,

    /// Display name
    pub name: String,

    /// Email address
    pub email: String,

    /// Profile image URL, if any
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

impl Customer {
    /// Creates a new customer projection
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        email: impl Into<String>,
        image: Option<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            email: email.into(),
            image,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_customer_serialization_roundtrip() {
        let customer = Customer::new("cust-1", "Jo", "jo@example.com", None);

        let json = serde_json::to_string(&customer).unwrap();
        // Absent image must not appear in the serialized projection
        assert!(!json.contains("image"));

        let deserialized: Customer = serde_json::from_str(&json).unwrap();
        assert_eq!(customer, deserialized);
    }
}
