/// The "History" panel
/// Shows one card per generated code, or an empty-state prompt
use iced::alignment::Horizontal;
use iced::widget::{button, column, container, row, scrollable, text, Image};
use iced::{Alignment, Element, Length};
use iced_aw::Wrap;

use crate::state::controller::{Controller, Panel};
use crate::state::data::GenerationRecord;
use crate::Message;

/// Longest source text shown on a card before it is cut with an ellipsis
const DISPLAY_CHARS: usize = 40;

/// Preview size on the card (the PNG itself keeps its configured size)
const PREVIEW_SIZE: f32 = 192.0;

const CARD_WIDTH: f32 = 300.0;

pub fn view(controller: &Controller) -> Element<'_, Message> {
    let history = controller.history();
    if history.is_empty() {
        return empty_state();
    }

    let cards: Vec<Element<'_, Message>> = history
        .all()
        .iter()
        .enumerate()
        .map(|(index, record)| card(index, record))
        .collect();

    scrollable(
        container(Wrap::with_elements(cards).spacing(24.0).line_spacing(24.0))
            .padding(32)
            .width(Length::Fill),
    )
    .height(Length::Fill)
    .into()
}

fn card(index: usize, record: &GenerationRecord) -> Element<'_, Message> {
    let preview = Image::new(record.image().handle().clone())
        .width(Length::Fixed(PREVIEW_SIZE))
        .height(Length::Fixed(PREVIEW_SIZE));

    let details = column![
        text(format!(
            "{} · {}",
            record.kind().label(),
            record.created_at().format("%H:%M:%S")
        ))
        .size(12),
        text(truncate_for_display(record.source_text(), DISPLAY_CHARS)).size(15),
    ]
    .spacing(4);

    let actions = row![
        button(text("Download").width(Length::Fill).align_x(Horizontal::Center))
            .width(Length::Fill)
            .style(button::primary)
            .on_press(Message::Download(index)),
        button("Copy")
            .style(button::secondary)
            .on_press(Message::CopyDataUrl(index)),
        button("Remove")
            .style(button::danger)
            .on_press(Message::Remove(index)),
    ]
    .spacing(8);

    container(
        column![
            container(preview).center_x(Length::Fill).padding(12),
            details,
            actions,
        ]
        .spacing(12),
    )
    .width(Length::Fixed(CARD_WIDTH))
    .padding(16)
    .style(container::rounded_box)
    .into()
}

fn empty_state<'a>() -> Element<'a, Message> {
    let content = column![
        text("No QR codes yet").size(18),
        text("Generate your first QR code to see it here.").size(14),
        button("Create QR Code")
            .padding(10)
            .style(button::primary)
            .on_press(Message::SelectPanel(Panel::Create)),
    ]
    .spacing(12)
    .align_x(Alignment::Center);

    container(content)
        .padding(48)
        .center_x(Length::Fill)
        .into()
}

/// Single-line preview of the source text, cut at `max_chars` characters
pub fn truncate_for_display(text: &str, max_chars: usize) -> String {
    let flat: String = text
        .chars()
        .map(|c| if c.is_control() { ' ' } else { c })
        .collect();

    if flat.chars().count() <= max_chars {
        return flat;
    }

    let mut cut: String = flat.chars().take(max_chars.saturating_sub(1)).collect();
    cut.push('…');
    cut
}
