//! Container slots and the insertion capability

use crate::core::ItemStack;
use serde::{Deserialize, Serialize};

/// Default per-slot stack capacity
pub const DEFAULT_STACK_LIMIT: u32 = 64;

/// Whether an insertion commits its result or only computes it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Action {
    /// Compute the remainder without mutating the destination
    Simulate,
    /// Perform the insertion
    Execute,
}

impl Action {
    pub fn execute(self) -> bool {
        matches!(self, Action::Execute)
    }
}

/// Source category of a slot
///
/// Transfer routing is decided entirely by which category the clicked slot
/// was registered under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SlotKind {
    /// A tile device's own insertable slot
    Tile,
    /// Player main inventory (the 3x9 grid)
    Main,
    /// Player hotbar row
    Hotbar,
}

/// Anything that can accept a stack and report what would not fit
///
/// The contract mirrors the host's item-handler capability: the input stack
/// is taken by value and a new remainder value comes back. A full or
/// incompatible destination returns the input unchanged; no error is ever
/// raised, because absence of movement is itself the signal.
pub trait InsertableSlot {
    fn stack(&self) -> &ItemStack;

    fn insert(&mut self, stack: ItemStack, action: Action) -> ItemStack;
}

/// A single container slot: current contents, category, and capacity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Slot {
    stack: ItemStack,
    kind: SlotKind,
    limit: u32,
}

impl Slot {
    pub fn new(kind: SlotKind) -> Self {
        Slot {
            stack: ItemStack::empty(),
            kind,
            limit: DEFAULT_STACK_LIMIT,
        }
    }

    pub fn with_limit(kind: SlotKind, limit: u32) -> Self {
        Slot {
            stack: ItemStack::empty(),
            kind,
            limit,
        }
    }

    pub fn with_stack(kind: SlotKind, stack: ItemStack) -> Self {
        Slot {
            stack,
            kind,
            limit: DEFAULT_STACK_LIMIT,
        }
    }

    pub fn kind(&self) -> SlotKind {
        self.kind
    }

    pub fn stack(&self) -> &ItemStack {
        &self.stack
    }

    pub fn limit(&self) -> u32 {
        self.limit
    }

    pub fn set_stack(&mut self, stack: ItemStack) {
        self.stack = stack;
    }

    /// Remove up to `amount` units from this slot's contents
    pub fn shrink(&mut self, amount: u32) {
        self.stack.shrink(amount);
    }
}

impl InsertableSlot for Slot {
    fn stack(&self) -> &ItemStack {
        &self.stack
    }

    fn insert(&mut self, stack: ItemStack, action: Action) -> ItemStack {
        if stack.is_empty() {
            return stack;
        }
        if !self.stack.is_empty() && !self.stack.can_stack_with(&stack) {
            return stack;
        }
        let room = self.limit.saturating_sub(self.stack.count());
        if room == 0 {
            return stack;
        }
        let accepted = room.min(stack.count());
        if action.execute() {
            if self.stack.is_empty() {
                self.stack = stack.with_count(accepted);
            } else {
                self.stack.grow(accepted);
            }
        }
        if accepted == stack.count() {
            ItemStack::empty()
        } else {
            stack.with_count(stack.count() - accepted)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_into_empty_slot() {
        let mut slot = Slot::new(SlotKind::Main);
        let remainder = slot.insert(ItemStack::new("stone", 10), Action::Execute);

        assert!(remainder.is_empty());
        assert_eq!(slot.stack().count(), 10);
        assert_eq!(slot.stack().item().as_str(), "stone");
    }

    #[test]
    fn test_insert_merges_compatible() {
        let mut slot = Slot::with_stack(SlotKind::Main, ItemStack::new("stone", 60));
        let remainder = slot.insert(ItemStack::new("stone", 10), Action::Execute);

        // Capped at the 64 limit, 6 units do not fit
        assert_eq!(slot.stack().count(), 64);
        assert_eq!(remainder.count(), 6);
        assert_eq!(remainder.item().as_str(), "stone");
    }

    #[test]
    fn test_insert_rejects_incompatible() {
        let mut slot = Slot::with_stack(SlotKind::Main, ItemStack::new("stone", 1));
        let input = ItemStack::new("dirt", 5);
        let remainder = slot.insert(input.clone(), Action::Execute);

        assert_eq!(remainder, input);
        assert_eq!(slot.stack().count(), 1);
    }

    #[test]
    fn test_insert_full_slot_unchanged() {
        let mut slot = Slot::with_stack(SlotKind::Hotbar, ItemStack::new("stone", 64));
        let input = ItemStack::new("stone", 5);
        let remainder = slot.insert(input.clone(), Action::Execute);

        assert_eq!(remainder, input);
        assert_eq!(slot.stack().count(), 64);
    }

    #[test]
    fn test_simulate_does_not_mutate() {
        let mut slot = Slot::with_stack(SlotKind::Tile, ItemStack::new("stone", 60));
        let executed_remainder = {
            let mut copy = slot.clone();
            copy.insert(ItemStack::new("stone", 10), Action::Execute)
        };
        let simulated_remainder = slot.insert(ItemStack::new("stone", 10), Action::Simulate);

        assert_eq!(simulated_remainder, executed_remainder);
        // Simulation left the slot alone
        assert_eq!(slot.stack().count(), 60);
    }

    #[test]
    fn test_custom_limit() {
        let mut slot = Slot::with_limit(SlotKind::Tile, 16);
        let remainder = slot.insert(ItemStack::new("ender_pearl", 20), Action::Execute);

        assert_eq!(slot.stack().count(), 16);
        assert_eq!(remainder.count(), 4);
    }
}
