//! Core type definitions used throughout the codebase

use serde::{Deserialize, Serialize};
use std::fmt;

/// Starting life points for every creature kind
pub const DEFAULT_LIFE_POINTS: i32 = 50;

/// Inclusive bounds for generated creature ids
pub const ID_RANGE_MIN: u32 = 111;
pub const ID_RANGE_MAX: u32 = 999;

/// Opaque creature identifier
///
/// Generated ids are short decimal strings and may collide; nothing here
/// enforces uniqueness.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CreatureId(pub String);

impl CreatureId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CreatureId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for CreatureId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for CreatureId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_creature_id_equality() {
        let a = CreatureId::from("123");
        let b = CreatureId::new(String::from("123"));
        let c = CreatureId::from("456");
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn test_creature_id_display() {
        assert_eq!(CreatureId::from("777").to_string(), "777");
    }

    #[test]
    fn test_creature_id_serializes_as_plain_string() {
        let json = serde_json::to_string(&CreatureId::from("321")).unwrap();
        assert_eq!(json, "\"321\"");
    }

    #[test]
    fn test_id_range_ordered() {
        assert!(ID_RANGE_MIN < ID_RANGE_MAX);
    }
}
