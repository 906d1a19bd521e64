use iced::{
    Element, Length,
    widget::{Column, button, scrollable, text},
};

use super::MovieListView;
use super::messages::Message;
use super::types::ListEntry;

impl MovieListView {
    /// Render one button per entry; the list is empty until a fetch succeeds
    pub fn view(&self) -> Element<'_, Message> {
        let entries = self.entries().into_iter().map(entry_button);

        scrollable(
            Column::with_children(entries)
                .spacing(4)
                .padding(8)
                .width(Length::Fill),
        )
        .height(Length::Fill)
        .into()
    }
}

fn entry_button<'a>(entry: ListEntry) -> Element<'a, Message> {
    let on_press = entry.select();

    button(text(entry.label).size(16))
        .on_press(on_press)
        .width(Length::Fill)
        .padding([6, 12])
        .style(button::text)
        .into()
}
