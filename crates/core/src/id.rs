//! Strongly-typed identifiers used across the domain.

use core::str::FromStr;
use serde::{Deserialize, Deserializer, Serialize};
use uuid::{Builder, Uuid};

use crate::error::DomainError;

/// Identifier of an inventory item.
///
/// Backed by UUIDv7, so identifiers are unique and later items sort after
/// earlier ones. Records written by older builds carry a numeric millisecond
/// timestamp instead; those load as the v7 UUID for that instant.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct ItemId(Uuid);

impl ItemId {
    /// Create a new identifier.
    ///
    /// Prefer passing IDs explicitly in tests for determinism.
    pub fn new() -> Self {
        Self(Uuid::now_v7())
    }

    /// Deterministic identifier for a legacy millisecond id.
    fn from_legacy_millis(millis: u64) -> Self {
        Self(Builder::from_unix_timestamp_millis(millis, &[0; 10]).into_uuid())
    }
}

impl Default for ItemId {
    fn default() -> Self {
        Self::new()
    }
}

impl core::fmt::Display for ItemId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum StoredId {
    Uuid(Uuid),
    Millis(u64),
}

impl<'de> Deserialize<'de> for ItemId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Ok(match StoredId::deserialize(deserializer)? {
            StoredId::Uuid(uuid) => Self(uuid),
            StoredId::Millis(millis) => Self::from_legacy_millis(millis),
        })
    }
}

impl FromStr for ItemId {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let uuid = Uuid::from_str(s.trim())
            .map_err(|e| DomainError::invalid_id(format!("ItemId: {e}")))?;
        Ok(Self(uuid))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_are_unique() {
        let a = ItemId::new();
        let b = ItemId::new();
        assert_ne!(a, b);
    }

    #[test]
    fn parse_round_trips_display() {
        let id = ItemId::new();
        let parsed: ItemId = id.to_string().parse().unwrap();
        assert_eq!(parsed, id);
    }

    #[test]
    fn parse_rejects_garbage() {
        let err = "not-a-uuid".parse::<ItemId>().unwrap_err();
        assert!(matches!(err, DomainError::InvalidId(_)));
    }

    #[test]
    fn serializes_as_plain_string() {
        let id = ItemId::new();
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, format!("\"{id}\""));
        assert_eq!(serde_json::from_str::<ItemId>(&json).unwrap(), id);
    }

    #[test]
    fn numeric_legacy_ids_map_to_a_stable_uuid() {
        let a: ItemId = serde_json::from_str("1735063200000").unwrap();
        let b: ItemId = serde_json::from_str("1735063200000").unwrap();
        let later: ItemId = serde_json::from_str("1735063200001").unwrap();

        assert_eq!(a, b);
        assert_ne!(a, later);
        assert!(a < later);

        let rewritten = serde_json::to_string(&a).unwrap();
        assert_eq!(serde_json::from_str::<ItemId>(&rewritten).unwrap(), a);
        assert_eq!(a.to_string().parse::<ItemId>().unwrap(), a);
    }

    #[test]
    fn rejects_non_id_values() {
        assert!(serde_json::from_str::<ItemId>("\"nope\"").is_err());
        assert!(serde_json::from_str::<ItemId>("-5").is_err());
    }
}
