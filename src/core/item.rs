//! Item stacks and item identities

use serde::{Deserialize, Serialize};
use std::fmt;

/// Identity of an item kind (e.g., "iron_ingot")
///
/// Opaque to this crate: equality is the whole contract, and equality is what
/// decides whether two stacks may merge.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ItemId(String);

impl ItemId {
    pub fn new(s: impl Into<String>) -> Self {
        ItemId(s.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for ItemId {
    fn from(s: String) -> Self {
        ItemId(s)
    }
}

impl From<&str> for ItemId {
    fn from(s: &str) -> Self {
        ItemId(s.to_string())
    }
}

/// A quantity of a specific item kind
///
/// The empty stack is a sentinel value: `count == 0`, item identity blank.
/// Insertion routines pass stacks by value and hand back a fresh remainder,
/// so an `ItemStack` you hold is never mutated behind your back.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemStack {
    item: ItemId,
    count: u32,
}

impl ItemStack {
    pub fn new(item: impl Into<ItemId>, count: u32) -> Self {
        ItemStack {
            item: item.into(),
            count,
        }
    }

    /// The empty sentinel stack
    pub fn empty() -> Self {
        ItemStack {
            item: ItemId::new(""),
            count: 0,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    pub fn item(&self) -> &ItemId {
        &self.item
    }

    pub fn count(&self) -> u32 {
        self.count
    }

    /// Copy of this stack resized to exactly `count` units
    pub fn with_count(&self, count: u32) -> ItemStack {
        ItemStack {
            item: self.item.clone(),
            count,
        }
    }

    pub fn grow(&mut self, amount: u32) {
        self.count += amount;
    }

    /// Remove up to `amount` units, clamping at the empty sentinel
    pub fn shrink(&mut self, amount: u32) {
        self.count = self.count.saturating_sub(amount);
    }

    /// Can the two stacks merge into one? Empty stacks never stack.
    pub fn can_stack_with(&self, other: &ItemStack) -> bool {
        !self.is_empty() && !other.is_empty() && self.item == other.item
    }
}
