//! Security access modes

use crate::error::VaultError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Access mode of a security frequency
///
/// Every storage and wire form carries the mode as its ordinal. The access
/// decision itself belongs to the consumer combining this with the override
/// flag; the intended precedence there is: an overridden frequency grants
/// access regardless of mode, otherwise Public admits everyone, Trusted
/// admits the trusted list plus the owner, Private admits only the owner.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum SecurityMode {
    #[default]
    Public,
    Private,
    Trusted,
}

impl SecurityMode {
    /// Ordinal used on the wire and in durable storage
    pub fn index(self) -> u8 {
        self as u8
    }

    /// Inverse of [`SecurityMode::index`]; unknown ordinals are rejected
    /// rather than wrapped around
    pub fn from_index(index: u8) -> Result<Self, VaultError> {
        match index {
            0 => Ok(SecurityMode::Public),
            1 => Ok(SecurityMode::Private),
            2 => Ok(SecurityMode::Trusted),
            unknown => Err(VaultError::UnknownSecurityMode(unknown)),
        }
    }
}

impl From<SecurityMode> for u8 {
    fn from(mode: SecurityMode) -> u8 {
        mode.index()
    }
}

impl TryFrom<u8> for SecurityMode {
    type Error = VaultError;

    fn try_from(index: u8) -> Result<Self, VaultError> {
        SecurityMode::from_index(index)
    }
}

impl fmt::Display for SecurityMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SecurityMode::Public => "Public",
            SecurityMode::Private => "Private",
            SecurityMode::Trusted => "Trusted",
        };
        write!(f, "{}", name)
    }
}
