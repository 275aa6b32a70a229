/// One shopping list row
/// Shows the item, or two text fields while it is being edited
use iced::widget::{button, column, container, row, text, text_input};
use iced::{Alignment, Element, Length};

use crate::state::data::Item;
use crate::Message;

/// Unsaved text for a row in edit mode.
/// Seeded from the item when editing starts and dropped on save or cancel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowDraft {
    pub name: String,
    pub quantity: String,
}

impl RowDraft {
    pub fn from_item(item: &Item) -> Self {
        Self {
            name: item.name.clone(),
            quantity: item.quantity.to_string(),
        }
    }
}

/// Build the row for `item`.
/// The edit layout is used only when the item is editing and has a draft.
pub fn view_row<'a>(item: &'a Item, draft: Option<&'a RowDraft>) -> Element<'a, Message> {
    let content: Element<'a, Message> = match draft {
        Some(draft) if item.editing => view_editing(item, draft),
        _ => view_display(item),
    };

    container(content)
        .padding(8)
        .width(Length::Fill)
        .style(container::rounded_box)
        .into()
}

fn view_display(item: &Item) -> Element<'_, Message> {
    row![
        text(&item.name).width(Length::Fill),
        text(format!("Qty: {}", item.quantity)),
        button("Edit")
            .on_press(Message::EditPressed(item.id))
            .style(button::secondary),
        button("Delete")
            .on_press(Message::DeletePressed(item.id))
            .style(button::danger),
    ]
    .spacing(10)
    .align_y(Alignment::Center)
    .into()
}

fn view_editing<'a>(item: &'a Item, draft: &'a RowDraft) -> Element<'a, Message> {
    let id = item.id;

    let fields = column![
        text_input("Name", &draft.name)
            .on_input(move |name| Message::DraftNameChanged(id, name))
            .on_submit(Message::SaveEdit(id))
            .padding(6),
        text_input("Quantity", &draft.quantity)
            .on_input(move |quantity| Message::DraftQuantityChanged(id, quantity))
            .on_submit(Message::SaveEdit(id))
            .padding(6),
    ]
    .spacing(8)
    .width(Length::Fill);

    row![
        fields,
        button("Save").on_press(Message::SaveEdit(id)),
        button("Cancel")
            .on_press(Message::CancelEdit(id))
            .style(button::secondary),
    ]
    .spacing(10)
    .align_y(Alignment::Center)
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::list::ListStore;

    #[test]
    fn test_draft_seeded_from_item() {
        let mut store = ListStore::new();
        let id = store.add("Eggs", "12").unwrap();

        let draft = RowDraft::from_item(store.get(id).unwrap());
        assert_eq!(draft.name, "Eggs");
        assert_eq!(draft.quantity, "12");
    }
}
