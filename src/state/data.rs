/// Shared data structures for the application state
///
/// These structs represent the data model that flows between
/// the list store and the UI layer.

use std::fmt;

/// Durable identifier of a shopping list item.
///
/// Handed out by the store from a counter, never reused and never tied
/// to the item's position in the list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ItemId(u64);

impl ItemId {
    pub(crate) fn new(raw: u64) -> Self {
        Self(raw)
    }

    pub fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.get())
    }
}

/// Represents a single entry in the shopping list
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Item {
    pub id: ItemId,
    /// Label shown in the row
    pub name: String,
    /// Always at least 1
    pub quantity: u32,
    /// True while the row is in inline-edit mode
    pub editing: bool,
}
