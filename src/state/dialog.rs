/// Add-item dialog controller
///
/// A two-state machine: `Closed` or `Open` with a name draft and a
/// quantity draft. Drafts start fresh every time the dialog opens.

use super::data::ItemId;
use super::list::ListStore;

/// Quantity draft shown when the dialog opens
pub const DEFAULT_QUANTITY_TEXT: &str = "1";

/// Text typed into the dialog but not saved yet
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Drafts {
    pub name: String,
    pub quantity: String,
}

impl Default for Drafts {
    fn default() -> Self {
        Self {
            name: String::new(),
            quantity: DEFAULT_QUANTITY_TEXT.to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum AddDialog {
    #[default]
    Closed,
    Open(Drafts),
}

impl AddDialog {
    pub fn is_open(&self) -> bool {
        matches!(self, AddDialog::Open(_))
    }

    /// Current drafts, if the dialog is open
    pub fn drafts(&self) -> Option<&Drafts> {
        match self {
            AddDialog::Open(drafts) => Some(drafts),
            AddDialog::Closed => None,
        }
    }

    /// Open the dialog with empty drafts
    pub fn open(&mut self) {
        *self = AddDialog::Open(Drafts::default());
    }

    /// Close the dialog and throw the drafts away
    pub fn cancel(&mut self) {
        *self = AddDialog::Closed;
    }

    pub fn set_name(&mut self, name: String) {
        if let AddDialog::Open(drafts) = self {
            drafts.name = name;
        }
    }

    pub fn set_quantity(&mut self, quantity: String) {
        if let AddDialog::Open(drafts) = self {
            drafts.quantity = quantity;
        }
    }

    /// Commit the drafts to the store.
    ///
    /// The dialog closes only if the store accepted the item; a blank name
    /// leaves it open with the drafts untouched.
    pub fn save(&mut self, store: &mut ListStore) -> Option<ItemId> {
        let drafts = self.drafts()?;
        let id = store.add(&drafts.name, &drafts.quantity)?;
        *self = AddDialog::Closed;
        Some(id)
    }
}
