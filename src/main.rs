use iced::keyboard;
use iced::widget::{button, column, container, scrollable, text, Column};
use iced::{Alignment, Element, Length, Size, Subscription, Task, Theme};
use std::collections::HashMap;

mod state;
mod ui;

use state::data::ItemId;
use state::dialog::AddDialog;
use state::list::ListStore;
use ui::row::RowDraft;

const WINDOW_TITLE: &str = "Shopping List";
const WINDOW_SIZE: Size = Size {
    width: 420.0,
    height: 640.0,
};

/// Main application state
struct ShoppingList {
    /// Every item on the list
    list: ListStore,
    /// The add-item dialog
    dialog: AddDialog,
    /// Drafts for rows currently in edit mode
    drafts: HashMap<ItemId, RowDraft>,
}

/// Application messages (events)
#[derive(Debug, Clone)]
enum Message {
    /// User clicked "Add Item"
    AddPressed,
    DialogNameChanged(String),
    DialogQuantityChanged(String),
    DialogSave,
    /// Cancel button, backdrop click, or Escape
    DialogCancel,
    /// Row switched into edit mode
    EditPressed(ItemId),
    DraftNameChanged(ItemId, String),
    DraftQuantityChanged(ItemId, String),
    SaveEdit(ItemId),
    CancelEdit(ItemId),
    DeletePressed(ItemId),
}

impl ShoppingList {
    /// Create a new instance of the application
    fn new() -> (Self, Task<Message>) {
        tracing::info!("🛒 Shopping list started");

        (
            ShoppingList {
                list: ListStore::new(),
                dialog: AddDialog::default(),
                drafts: HashMap::new(),
            },
            Task::none(),
        )
    }

    /// Handle application messages and update state
    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::AddPressed => {
                self.dialog.open();
                tracing::debug!("Add dialog opened");
            }
            Message::DialogNameChanged(name) => self.dialog.set_name(name),
            Message::DialogQuantityChanged(quantity) => self.dialog.set_quantity(quantity),
            Message::DialogSave => {
                if self.dialog.save(&mut self.list).is_none() && self.dialog.is_open() {
                    tracing::debug!("Add dialog kept open, name is blank");
                }
            }
            Message::DialogCancel => {
                if self.dialog.is_open() {
                    self.dialog.cancel();
                    tracing::debug!("Add dialog cancelled");
                }
            }
            Message::EditPressed(id) => {
                if let Some(item) = self.list.get(id) {
                    let draft = RowDraft::from_item(item);
                    self.list.toggle_edit(id);
                    self.drafts.entry(id).or_insert(draft);
                }
            }
            Message::DraftNameChanged(id, name) => {
                if let Some(draft) = self.drafts.get_mut(&id) {
                    draft.name = name;
                }
            }
            Message::DraftQuantityChanged(id, quantity) => {
                if let Some(draft) = self.drafts.get_mut(&id) {
                    draft.quantity = quantity;
                }
            }
            Message::SaveEdit(id) => {
                if let Some(draft) = self.drafts.remove(&id) {
                    self.list.save_edit(id, &draft.name, &draft.quantity);
                }
            }
            Message::CancelEdit(id) => {
                self.drafts.remove(&id);
                if self.list.cancel_edit(id) {
                    tracing::debug!("Edit of item {} cancelled", id);
                }
            }
            Message::DeletePressed(id) => {
                self.drafts.remove(&id);
                self.list.remove(id);
            }
        }

        Task::none()
    }

    /// Build the user interface
    fn view(&self) -> Element<Message> {
        let list: Element<Message> = if self.list.is_empty() {
            text("Nothing on the list yet.").size(16).into()
        } else {
            Column::with_children(
                self.list
                    .items()
                    .iter()
                    .map(|item| ui::row::view_row(item, self.drafts.get(&item.id))),
            )
            .spacing(8)
            .into()
        };

        let content: Column<Message> = column![
            button("Add Item")
                .on_press(Message::AddPressed)
                .padding(10),
            scrollable(container(list).width(Length::Fill).padding(8))
                .height(Length::Fill),
        ]
        .spacing(20)
        .padding(20)
        .align_x(Alignment::Center);

        let base = container(content)
            .width(Length::Fill)
            .height(Length::Fill);

        match self.dialog.drafts() {
            Some(drafts) => ui::dialog::modal(
                base,
                ui::dialog::view_dialog(drafts),
                Message::DialogCancel,
            ),
            None => base.into(),
        }
    }

    fn subscription(&self) -> Subscription<Message> {
        keyboard::on_key_press(on_key_press)
    }

    /// Set the application theme
    fn theme(&self) -> Theme {
        Theme::Dark
    }
}

/// Escape dismisses the add dialog
fn on_key_press(key: keyboard::Key, _modifiers: keyboard::Modifiers) -> Option<Message> {
    match key {
        keyboard::Key::Named(keyboard::key::Named::Escape) => Some(Message::DialogCancel),
        _ => None,
    }
}

fn main() -> iced::Result {
    tracing_subscriber::fmt().with_env_filter("info").init();

    iced::application(WINDOW_TITLE, ShoppingList::update, ShoppingList::view)
        .subscription(ShoppingList::subscription)
        .theme(ShoppingList::theme)
        .window_size(WINDOW_SIZE)
        .centered()
        .run_with(ShoppingList::new)
}
