//! Core value types shared by the inventory and security components

pub mod item;
pub mod types;

pub use item::{ItemId, ItemStack};
pub use types::{PlayerId, Username};
