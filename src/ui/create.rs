use iced::alignment::Horizontal;
use iced::widget::{button, column, container, text, text_input};
use iced::{Element, Length};

use crate::state::controller::Controller;
use crate::Message;

pub const INPUT_PLACEHOLDER: &str = "https://example.com or any text";

/// The "Generate" panel: input, inline error, submit button
pub fn view(controller: &Controller) -> Element<'_, Message> {
    let loading = controller.is_loading();

    let input = text_input(INPUT_PLACEHOLDER, controller.input())
        .on_input(Message::InputChanged)
        .padding(12)
        .size(16);
    // Enter submits too, except while a code is being generated
    let input = if loading {
        input
    } else {
        input.on_submit(Message::Submit)
    };

    let mut content = column![text("Enter URL or text").size(14), input].spacing(8);

    if let Some(error) = controller.error() {
        content = content.push(
            container(text(error).size(14).style(text::danger))
                .padding(10)
                .width(Length::Fill)
                .style(container::rounded_box),
        );
    }

    let label = if loading {
        "Generating..."
    } else {
        "Generate QR Code"
    };
    let submit = button(text(label).width(Length::Fill).align_x(Horizontal::Center))
        .width(Length::Fill)
        .padding(12)
        .style(button::primary)
        .on_press_maybe((!loading).then_some(Message::Submit));

    content.push(submit).spacing(16).padding(32).into()
}
