/// Modal "Add Shopping Item" dialog
use iced::widget::{
    button, center, column, container, horizontal_space, mouse_area, opaque, row, stack, text,
    text_input,
};
use iced::{Color, Element, Length};

use crate::state::dialog::Drafts;
use crate::Message;

const DIALOG_WIDTH: f32 = 320.0;

/// Dialog body: title, name and quantity fields, Cancel and Save
pub fn view_dialog(drafts: &Drafts) -> Element<'_, Message> {
    let content = column![
        text("Add Shopping Item").size(20),
        text_input("Item name", &drafts.name)
            .on_input(Message::DialogNameChanged)
            .on_submit(Message::DialogSave)
            .padding(8),
        text_input("Quantity", &drafts.quantity)
            .on_input(Message::DialogQuantityChanged)
            .on_submit(Message::DialogSave)
            .padding(8),
        row![
            horizontal_space(),
            button("Cancel")
                .on_press(Message::DialogCancel)
                .style(button::secondary),
            button("Save").on_press(Message::DialogSave),
        ]
        .spacing(10),
    ]
    .spacing(12);

    container(content)
        .width(Length::Fixed(DIALOG_WIDTH))
        .padding(20)
        .style(container::rounded_box)
        .into()
}

/// Lay `content` over a dimmed `base`.
/// Clicking the backdrop sends `on_blur`.
pub fn modal<'a>(
    base: impl Into<Element<'a, Message>>,
    content: impl Into<Element<'a, Message>>,
    on_blur: Message,
) -> Element<'a, Message> {
    stack![
        base.into(),
        opaque(
            mouse_area(center(opaque(content)).style(|_theme| {
                container::Style {
                    background: Some(
                        Color {
                            a: 0.8,
                            ..Color::BLACK
                        }
                        .into(),
                    ),
                    ..container::Style::default()
                }
            }))
            .on_press(on_blur)
        )
    ]
    .into()
}
