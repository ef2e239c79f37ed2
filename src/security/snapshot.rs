//! Privacy-reduced network snapshots of security frequencies
//!
//! Clients only ever need the mode, the override flag, and the display names
//! of trusted players. Raw identities stay on the server: the snapshot form
//! omits them entirely, and applying a snapshot clears the authoritative
//! trusted list rather than pretending to know it.

use crate::core::{PlayerId, Username};
use crate::error::{Result, VaultError};
use crate::security::frequency::SecurityFrequency;
use crate::security::mode::SecurityMode;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// What a client sees of a security frequency
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SecuritySnapshot {
    pub overridden: bool,
    pub mode: SecurityMode,
    pub trusted_names: Vec<Username>,
}

impl SecuritySnapshot {
    /// Compact wire form (mode travels as its ordinal, the name list as a
    /// count followed by the strings)
    pub fn encode(&self) -> Result<Vec<u8>> {
        bincode::serialize(self).map_err(|e| VaultError::Serialization(e.to_string()))
    }

    pub fn decode(bytes: &[u8]) -> Result<Self> {
        bincode::deserialize(bytes).map_err(|e| VaultError::Deserialization(e.to_string()))
    }
}

impl SecurityFrequency {
    /// Capture the client-visible view of this frequency
    pub fn snapshot(&self) -> SecuritySnapshot {
        SecuritySnapshot {
            overridden: self.is_overridden(),
            mode: self.mode(),
            trusted_names: self.trusted_names().to_vec(),
        }
    }

    /// Replace this frequency's client-visible state with a received snapshot
    ///
    /// The authoritative trusted list is cleared: snapshots carry names only
    /// and must never masquerade as an authoritative trust update.
    pub fn apply_snapshot(&mut self, snapshot: SecuritySnapshot) {
        debug!(owner = %self.owner(), names = snapshot.trusted_names.len(), "applying security snapshot");
        self.set_view(snapshot.overridden, snapshot.mode, snapshot.trusted_names);
    }

    /// Build a view-only frequency from a received snapshot
    pub fn from_snapshot(owner: PlayerId, snapshot: SecuritySnapshot) -> Self {
        let mut frequency = SecurityFrequency::new(owner);
        frequency.apply_snapshot(snapshot);
        frequency
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn trusting_frequency() -> SecurityFrequency {
        let mut frequency = SecurityFrequency::new(PlayerId::random());
        frequency.set_mode(SecurityMode::Trusted);
        frequency.add_trusted(PlayerId::random(), Username::new("Alice"));
        frequency.add_trusted(PlayerId::random(), Username::new("Bob"));
        frequency
    }

    #[test]
    fn test_snapshot_carries_names_only() {
        let frequency = trusting_frequency();
        let snapshot = frequency.snapshot();

        assert_eq!(snapshot.mode, SecurityMode::Trusted);
        assert_eq!(snapshot.trusted_names.len(), 2);
        assert_eq!(snapshot.trusted_names[0].as_str(), "Alice");
    }

    #[test]
    fn test_wire_round_trip() {
        let snapshot = trusting_frequency().snapshot();
        let bytes = snapshot.encode().unwrap();
        let decoded = SecuritySnapshot::decode(&bytes).unwrap();
        assert_eq!(decoded, snapshot);
    }

    #[test]
    fn test_decode_rejects_garbage() {
        assert!(SecuritySnapshot::decode(&[0xFF, 0x01]).is_err());
    }

    #[test]
    fn test_wire_form_never_contains_identities() {
        let frequency = trusting_frequency();
        let bytes = frequency.snapshot().encode().unwrap();
        let wire = String::from_utf8_lossy(&bytes);

        for entry in frequency.trusted() {
            assert!(!wire.contains(&entry.id.to_string()));
        }
        // Display names do travel
        assert!(wire.contains("Alice"));
        assert!(wire.contains("Bob"));
    }

    #[test]
    fn test_apply_snapshot_clears_authoritative_list() {
        let server_side = trusting_frequency();
        let snapshot = server_side.snapshot();

        let mut client_side = SecurityFrequency::from_snapshot(server_side.owner(), snapshot);
        assert_eq!(client_side.mode(), SecurityMode::Trusted);
        assert_eq!(client_side.trusted_count(), 2);
        assert!(client_side.trusted().is_empty());
        assert_eq!(client_side.name_cache_hash(), server_side.name_cache_hash());

        // Applying a fresh snapshot replaces the view wholesale
        let mut empty = SecurityFrequency::new(server_side.owner());
        empty.set_overridden(true);
        client_side.apply_snapshot(empty.snapshot());
        assert!(client_side.is_overridden());
        assert_eq!(client_side.mode(), SecurityMode::Public);
        assert_eq!(client_side.trusted_count(), 0);
    }
}
