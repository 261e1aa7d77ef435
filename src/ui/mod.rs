/// View layer
///
/// Pure rendering of `Controller` state into iced widgets. Nothing in
/// here mutates state; every interaction is turned into a `Message`.

pub mod create;
pub mod history;
pub mod tabs;

use iced::alignment::Horizontal;
use iced::widget::{column, text};
use iced::{Alignment, Element};

use crate::Message;

/// App title and tagline
pub fn header<'a>() -> Element<'a, Message> {
    column![
        text("QR Code Generator").size(36),
        text("Create professional QR codes instantly")
            .size(16)
            .align_x(Horizontal::Center),
    ]
    .spacing(8)
    .align_x(Alignment::Center)
    .into()
}
