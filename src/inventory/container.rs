//! Containers: ordered slot groups and the shift-click transfer routine

use crate::core::ItemStack;
use crate::inventory::slot::{Action, InsertableSlot, Slot, SlotKind};
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use tracing::trace;

/// Size of the player's 3x9 main inventory grid
pub const MAIN_INVENTORY_SIZE: usize = 27;

/// Size of the player's hotbar row
pub const HOTBAR_SIZE: usize = 9;

/// Ordered slot indices for one destination group
type SlotOrder = SmallVec<[usize; 9]>;

/// A container binding a tile device's slots to the player inventory
///
/// Slots live in one flat vector; each slot is also registered, at add time,
/// in the ordered index list for its category. Transfer routing walks those
/// lists in registration order, which is why construction order matters.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Container {
    slots: Vec<Slot>,
    tile_order: SlotOrder,
    main_order: SlotOrder,
    hotbar_order: SlotOrder,
}

impl Container {
    pub fn new() -> Self {
        Container::default()
    }

    /// Add a slot, registering it in the group matching its kind
    ///
    /// Returns the slot's index in the flat slot vector.
    pub fn add_slot(&mut self, slot: Slot) -> usize {
        let index = self.slots.len();
        match slot.kind() {
            SlotKind::Tile => self.tile_order.push(index),
            SlotKind::Main => self.main_order.push(index),
            SlotKind::Hotbar => self.hotbar_order.push(index),
        }
        self.slots.push(slot);
        index
    }

    /// Append the standard player inventory layout: the 3x9 main grid
    /// followed by the hotbar row
    ///
    /// Screens add the tile's own slots first and call this afterwards, so
    /// player slots always sort after tile slots in the flat vector.
    pub fn add_player_slots(&mut self) {
        for _ in 0..MAIN_INVENTORY_SIZE {
            self.add_slot(Slot::new(SlotKind::Main));
        }
        for _ in 0..HOTBAR_SIZE {
            self.add_slot(Slot::new(SlotKind::Hotbar));
        }
    }

    pub fn slot(&self, index: usize) -> Option<&Slot> {
        self.slots.get(index)
    }

    pub fn slot_mut(&mut self, index: usize) -> Option<&mut Slot> {
        self.slots.get_mut(index)
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Slot indices registered for `group`, in registration order
    pub fn group(&self, group: SlotKind) -> &[usize] {
        match group {
            SlotKind::Tile => &self.tile_order,
            SlotKind::Main => &self.main_order,
            SlotKind::Hotbar => &self.hotbar_order,
        }
    }

    /// Move the clicked slot's stack to its preferred destinations
    ///
    /// Returns the stack actually moved (empty if nothing moved):
    /// - Tile slot clicked: hotbar (merge), main (merge), main (fill),
    ///   hotbar (fill).
    /// - Player slot clicked: tile slots merge-then-fill; if the tile took
    ///   nothing at all, spill into the other player group, merge-then-fill.
    ///
    /// Both merge passes for a destination pair run before any fill pass, so
    /// stacks coalesce with existing partial stacks before empty slots are
    /// consumed.
    pub fn transfer(&mut self, clicked: usize) -> ItemStack {
        let source = match self.slots.get(clicked) {
            Some(slot) if !slot.stack().is_empty() => slot.stack().clone(),
            _ => return ItemStack::empty(),
        };
        let kind = self.slots[clicked].kind();

        let remainder = match kind {
            SlotKind::Tile => {
                let stack =
                    Self::insert_item(&mut self.slots, &self.hotbar_order, source.clone(), true);
                let stack = Self::insert_item(&mut self.slots, &self.main_order, stack, true);
                // Still run the empty-allowing main pass before the hotbar
                // one: an empty main slot may sit before the hotbar slot we
                // could otherwise have stacked with.
                let stack = Self::insert_item(&mut self.slots, &self.main_order, stack, false);
                Self::insert_item(&mut self.slots, &self.hotbar_order, stack, false)
            }
            SlotKind::Main | SlotKind::Hotbar => {
                let mut stack =
                    Self::insert_item(&mut self.slots, &self.tile_order, source.clone(), true);
                if stack.count() == source.count() {
                    stack = Self::insert_item(&mut self.slots, &self.tile_order, stack, false);
                    if stack.count() == source.count() {
                        // Tile slots took nothing; move between the player
                        // groups instead
                        let fallback = match kind {
                            SlotKind::Main => &self.hotbar_order,
                            _ => &self.main_order,
                        };
                        stack = Self::insert_item(&mut self.slots, fallback, stack, true);
                        stack = Self::insert_item(&mut self.slots, fallback, stack, false);
                    }
                }
                stack
            }
        };

        let moved = source.count() - remainder.count();
        if moved == 0 {
            return ItemStack::empty();
        }
        self.slots[clicked].shrink(moved);
        trace!(slot = clicked, moved, "transferred stack out of slot");
        source.with_count(moved)
    }

    /// Insert a stack into one destination group, returning the remainder
    ///
    /// Merge-only passes (`ignore_empty == true`) skip destinations that are
    /// currently empty.
    pub fn insert_into(&mut self, group: SlotKind, stack: ItemStack, ignore_empty: bool) -> ItemStack {
        let order = match group {
            SlotKind::Tile => &self.tile_order,
            SlotKind::Main => &self.main_order,
            SlotKind::Hotbar => &self.hotbar_order,
        };
        Self::insert_item(&mut self.slots, order, stack, ignore_empty)
    }

    // Returns the remainder; the caller's stack is moved in, never aliased
    fn insert_item(
        slots: &mut [Slot],
        order: &[usize],
        mut stack: ItemStack,
        ignore_empty: bool,
    ) -> ItemStack {
        if stack.is_empty() {
            // Already exhausted; returning immediately keeps these calls
            // chainable without an emptiness check between each one
            return stack;
        }
        for &index in order {
            let slot = &mut slots[index];
            if ignore_empty && slot.stack().is_empty() {
                continue;
            }
            stack = slot.insert(stack, Action::Execute);
            if stack.is_empty() {
                break;
            }
        }
        stack
    }
}
