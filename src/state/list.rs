use super::data::{Item, ItemId};
use super::quantity::{parse_quantity_or, DEFAULT_QUANTITY};

/// The ListStore owns every item on the shopping list.
/// It lives in memory for as long as the window is open.
#[derive(Debug)]
pub struct ListStore {
    items: Vec<Item>,
    /// Next id to hand out. Only ever grows.
    next_id: u64,
}

impl Default for ListStore {
    fn default() -> Self {
        Self::new()
    }
}

impl ListStore {
    /// Create an empty list
    pub fn new() -> Self {
        Self {
            items: Vec::new(),
            next_id: 1,
        }
    }

    /// All items in insertion order
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Look up an item by id
    pub fn get(&self, id: ItemId) -> Option<&Item> {
        self.items.iter().find(|item| item.id == id)
    }

    fn get_mut(&mut self, id: ItemId) -> Option<&mut Item> {
        self.items.iter_mut().find(|item| item.id == id)
    }

    /// Append a new item.
    ///
    /// Returns `None` (and changes nothing) when the name is blank.
    /// Unparseable quantity text falls back to 1.
    pub fn add(&mut self, name: &str, quantity_text: &str) -> Option<ItemId> {
        if name.trim().is_empty() {
            tracing::debug!("Rejected new item with a blank name");
            return None;
        }

        let id = ItemId::new(self.next_id);
        self.next_id += 1;

        let quantity = parse_quantity_or(quantity_text, DEFAULT_QUANTITY);
        self.items.push(Item {
            id,
            name: name.to_string(),
            quantity,
            editing: false,
        });

        tracing::info!("Added item {} \"{}\" x{}", id, name, quantity);
        Some(id)
    }

    /// Put one item into edit mode, leaving the others as they are
    pub fn toggle_edit(&mut self, id: ItemId) -> bool {
        match self.get_mut(id) {
            Some(item) => {
                item.editing = true;
                true
            }
            None => false,
        }
    }

    /// Commit an inline edit.
    ///
    /// Unparseable quantity text keeps the item's previous quantity.
    pub fn save_edit(&mut self, id: ItemId, new_name: &str, new_quantity_text: &str) -> bool {
        let Some(item) = self.get_mut(id) else {
            return false;
        };

        item.quantity = parse_quantity_or(new_quantity_text, item.quantity);
        item.name = new_name.to_string();
        item.editing = false;

        tracing::info!("Updated item {} to \"{}\" x{}", id, item.name, item.quantity);
        true
    }

    /// Leave edit mode without changing anything
    pub fn cancel_edit(&mut self, id: ItemId) -> bool {
        match self.get_mut(id) {
            Some(item) => {
                item.editing = false;
                true
            }
            None => false,
        }
    }

    /// Remove the item with this id and return it
    pub fn remove(&mut self, id: ItemId) -> Option<Item> {
        let index = self.items.iter().position(|item| item.id == id)?;
        let removed = self.items.remove(index);
        tracing::info!("Removed item {} \"{}\", {} left", id, removed.name, self.len());
        Some(removed)
    }
}
