//! Error types for Tilevault

use thiserror::Error;

#[derive(Error, Debug)]
pub enum VaultError {
    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Deserialization error: {0}")]
    Deserialization(String),

    #[error("Unknown security mode ordinal: {0}")]
    UnknownSecurityMode(u8),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, VaultError>;
