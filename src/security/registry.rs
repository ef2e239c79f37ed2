//! Owner-keyed storage for security frequencies
//!
//! Frequencies are created per owner on first use and live for as long as
//! the owner has secured devices. Uses FxHashMap for fast hashing of the
//! UUID keys.

use crate::core::PlayerId;
use crate::security::frequency::{NameLookup, SecurityFrequency, SecurityRecord};
use rustc_hash::FxHashMap;

/// Central store of every owner's security frequency
#[derive(Debug, Clone, Default)]
pub struct SecurityRegistry {
    frequencies: FxHashMap<PlayerId, SecurityFrequency>,
}

impl SecurityRegistry {
    pub fn new() -> Self {
        SecurityRegistry::default()
    }

    /// Fetch the owner's frequency, creating a fresh Public one on first use
    pub fn get_or_create(&mut self, owner: PlayerId) -> &mut SecurityFrequency {
        self.frequencies
            .entry(owner)
            .or_insert_with(|| SecurityFrequency::new(owner))
    }

    pub fn get(&self, owner: PlayerId) -> Option<&SecurityFrequency> {
        self.frequencies.get(&owner)
    }

    pub fn get_mut(&mut self, owner: PlayerId) -> Option<&mut SecurityFrequency> {
        self.frequencies.get_mut(&owner)
    }

    pub fn contains(&self, owner: PlayerId) -> bool {
        self.frequencies.contains_key(&owner)
    }

    pub fn remove(&mut self, owner: PlayerId) -> Option<SecurityFrequency> {
        self.frequencies.remove(&owner)
    }

    pub fn len(&self) -> usize {
        self.frequencies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frequencies.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&PlayerId, &SecurityFrequency)> {
        self.frequencies.iter()
    }

    /// Durable form of every frequency in the registry
    pub fn to_records(&self) -> Vec<(PlayerId, SecurityRecord)> {
        self.frequencies
            .iter()
            .map(|(&owner, frequency)| (owner, frequency.to_record()))
            .collect()
    }

    /// Rebuild a registry from durable records, re-resolving display names
    pub fn from_records(
        records: Vec<(PlayerId, SecurityRecord)>,
        names: &impl NameLookup,
    ) -> Self {
        let mut registry = SecurityRegistry::new();
        for (owner, record) in records {
            registry
                .frequencies
                .insert(owner, SecurityFrequency::from_record(owner, &record, names));
        }
        registry
    }
}
