//! Per-owner security frequencies and their durable storage form

use crate::core::{PlayerId, Username};
use crate::error::{Result, VaultError};
use crate::security::mode::SecurityMode;
use rustc_hash::FxHasher;
use serde::{Deserialize, Serialize};
use std::hash::{Hash, Hasher};
use std::path::Path;
use tracing::debug;

/// Host service resolving an identity to its last known display name
///
/// Durable storage keeps identities only; names are re-resolved through this
/// lookup on load so renamed players show up under their current name.
pub trait NameLookup {
    fn last_known_name(&self, id: PlayerId) -> Username;
}

/// One trusted-player entry: identity plus its cached display name
///
/// A single ordered mapping instead of two parallel lists, so identity and
/// name cannot drift out of alignment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrustedPlayer {
    pub id: PlayerId,
    pub name: Username,
}

/// Access-control record for everything a single player owns
///
/// Holds the security mode, the operator override flag, and the ordered
/// trusted-player list. `trusted` is the authoritative list; `name_cache` is
/// the display view rebuilt from it on every mutation. The two only diverge
/// on purpose: applying a network snapshot fills the cache and clears the
/// authoritative list, because a snapshot is a view, not an update.
#[derive(Debug, Clone)]
pub struct SecurityFrequency {
    owner: PlayerId,
    overridden: bool,
    mode: SecurityMode,
    trusted: Vec<TrustedPlayer>,
    name_cache: Vec<Username>,
    cache_hash: u64,
}

impl SecurityFrequency {
    pub fn new(owner: PlayerId) -> Self {
        SecurityFrequency {
            owner,
            overridden: false,
            mode: SecurityMode::Public,
            trusted: Vec::new(),
            name_cache: Vec::new(),
            cache_hash: hash_names(&[]),
        }
    }

    pub fn owner(&self) -> PlayerId {
        self.owner
    }

    /// Registry key of this frequency (frequencies are keyed by owner)
    pub fn key(&self) -> PlayerId {
        self.owner
    }

    pub fn mode(&self) -> SecurityMode {
        self.mode
    }

    pub fn set_mode(&mut self, mode: SecurityMode) {
        self.mode = mode;
    }

    pub fn is_overridden(&self) -> bool {
        self.overridden
    }

    pub fn set_overridden(&mut self, overridden: bool) {
        self.overridden = overridden;
    }

    /// The authoritative trusted-player list, in insertion order
    pub fn trusted(&self) -> &[TrustedPlayer] {
        &self.trusted
    }

    /// Display names for client screens, in trusted-list order
    ///
    /// After a snapshot was applied this still holds names even though the
    /// authoritative list is empty.
    pub fn trusted_names(&self) -> &[Username] {
        &self.name_cache
    }

    pub fn trusted_count(&self) -> usize {
        self.name_cache.len()
    }

    /// Cheap change detector over the display-name cache
    pub fn name_cache_hash(&self) -> u64 {
        self.cache_hash
    }

    /// Digest of everything a synced client view depends on: override flag,
    /// mode ordinal, and the name-cache hash
    pub fn state_hash(&self) -> u64 {
        let mut hasher = FxHasher::default();
        self.overridden.hash(&mut hasher);
        self.mode.index().hash(&mut hasher);
        self.cache_hash.hash(&mut hasher);
        hasher.finish()
    }

    pub fn add_trusted(&mut self, id: PlayerId, name: Username) {
        debug!(owner = %self.owner, player = %id, "adding trusted player");
        self.trusted.push(TrustedPlayer { id, name });
        self.rebuild_cache();
    }

    /// Remove the trusted entry at `index`
    ///
    /// Out-of-range indices leave the list untouched and return `false`, so
    /// callers can tell a removal from an ignored request.
    pub fn remove_trusted(&mut self, index: usize) -> bool {
        if index >= self.trusted.len() {
            return false;
        }
        let removed = self.trusted.remove(index);
        debug!(owner = %self.owner, player = %removed.id, "removed trusted player");
        self.rebuild_cache();
        true
    }

    /// Durable form of this frequency: identities only, names dropped
    pub fn to_record(&self) -> SecurityRecord {
        SecurityRecord {
            overridden: self.overridden,
            mode: self.mode,
            trusted: self.trusted.iter().map(|entry| entry.id).collect(),
        }
    }

    /// Rebuild a frequency from its durable form, re-resolving display names
    pub fn from_record(
        owner: PlayerId,
        record: &SecurityRecord,
        names: &impl NameLookup,
    ) -> Self {
        let mut frequency = SecurityFrequency::new(owner);
        frequency.overridden = record.overridden;
        frequency.mode = record.mode;
        for &id in &record.trusted {
            frequency.trusted.push(TrustedPlayer {
                id,
                name: names.last_known_name(id),
            });
        }
        frequency.rebuild_cache();
        frequency
    }

    pub(crate) fn set_view(&mut self, overridden: bool, mode: SecurityMode, names: Vec<Username>) {
        self.overridden = overridden;
        self.mode = mode;
        self.trusted.clear();
        self.cache_hash = hash_names(&names);
        self.name_cache = names;
    }

    fn rebuild_cache(&mut self) {
        self.name_cache = self.trusted.iter().map(|entry| entry.name.clone()).collect();
        self.cache_hash = hash_names(&self.name_cache);
    }
}

/// Durable storage form of a frequency
///
/// Display names are deliberately absent: they go stale, and the lookup
/// service is the source of truth for them at load time. The identity list
/// is omitted entirely from the serialized form when empty.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SecurityRecord {
    pub overridden: bool,
    pub mode: SecurityMode,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub trusted: Vec<PlayerId>,
}

impl SecurityRecord {
    /// Save this record to a JSON file
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let json = serde_json::to_string_pretty(self)
            .map_err(|e| VaultError::Serialization(e.to_string()))?;
        std::fs::write(path.as_ref(), json)?;
        Ok(())
    }

    /// Load a record from a JSON file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let json = std::fs::read_to_string(path.as_ref())?;
        serde_json::from_str(&json).map_err(|e| VaultError::Deserialization(e.to_string()))
    }
}

fn hash_names(names: &[Username]) -> u64 {
    let mut hasher = FxHasher::default();
    names.hash(&mut hasher);
    hasher.finish()
}
