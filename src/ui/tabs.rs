use iced::alignment::Horizontal;
use iced::widget::{button, row, text};
use iced::{Element, Length};

use crate::state::controller::{Controller, Panel};
use crate::Message;

/// "Generate" / "History (n)" tab bar
pub fn tab_bar(controller: &Controller) -> Element<'_, Message> {
    let active = controller.panel();

    row![
        tab("Generate".to_string(), Panel::Create, active),
        tab(history_label(controller.history().len()), Panel::History, active),
    ]
    .width(Length::Fill)
    .into()
}

/// History tab label; the count only shows once something exists
pub fn history_label(count: usize) -> String {
    if count > 0 {
        format!("History ({})", count)
    } else {
        "History".to_string()
    }
}

fn tab<'a>(label: String, panel: Panel, active: Panel) -> Element<'a, Message> {
    let style = if panel == active {
        button::primary
    } else {
        button::text
    };

    button(text(label).width(Length::Fill).align_x(Horizontal::Center))
        .width(Length::Fill)
        .padding(14)
        .style(style)
        .on_press(Message::SelectPanel(panel))
        .into()
}
