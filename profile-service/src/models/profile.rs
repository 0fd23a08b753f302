use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A stored profile. The identifier doubles as the collection's `_id`, so
/// uniqueness is enforced by the datastore's primary-key index.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Profile {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
}

impl Profile {
    /// New profile with a store-generated identifier.
    pub fn new(name: String) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            name,
        }
    }

    /// New profile with a caller-supplied identifier.
    pub fn with_id(id: String, name: String) -> Self {
        Self { id, name }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_generates_unique_ids() {
        let a = Profile::new("Alice".to_string());
        let b = Profile::new("Alice".to_string());
        assert!(!a.id.is_empty());
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn test_with_id_keeps_caller_id() {
        let profile = Profile::with_id("alice-1".to_string(), "Alice".to_string());
        assert_eq!(profile.id, "alice-1");
        assert_eq!(profile.name, "Alice");
    }

    #[test]
    fn test_id_serializes_as_underscore_id() {
        let profile = Profile::with_id("alice-1".to_string(), "Alice".to_string());
        let json = serde_json::to_value(&profile).unwrap();
        assert_eq!(json["_id"], "alice-1");
        assert_eq!(json["name"], "Alice");
    }
}
