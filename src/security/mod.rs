//! Security frequencies: per-owner access modes and trust lists

pub mod frequency;
pub mod mode;
pub mod registry;
pub mod snapshot;

pub use frequency::{NameLookup, SecurityFrequency, SecurityRecord, TrustedPlayer};
pub use mode::SecurityMode;
pub use registry::SecurityRegistry;
pub use snapshot::SecuritySnapshot;
