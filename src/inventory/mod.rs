//! Container slot management and the stack-transfer engine

pub mod container;
pub mod slot;

pub use container::{Container, HOTBAR_SIZE, MAIN_INVENTORY_SIZE};
pub use slot::{Action, InsertableSlot, Slot, SlotKind, DEFAULT_STACK_LIMIT};
