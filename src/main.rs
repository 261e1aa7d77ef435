use iced::widget::{column, container, horizontal_rule};
use iced::{Alignment, Element, Length, Size, Task, Theme};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

mod color;
mod config;
mod error;
mod export;
mod qr;
mod state;
mod ui;
mod validate;

use config::Config;
use state::controller::{Controller, EncodeOutcome, Panel};

/// Main application state
struct QrStudio {
    /// Session state and history
    controller: Controller,
}

/// Application messages (events)
#[derive(Debug, Clone)]
pub enum Message {
    /// Text field edited
    InputChanged(String),
    /// Generate button pressed (or Enter in the text field)
    Submit,
    /// Background encode finished
    Generated(EncodeOutcome),
    /// Tab clicked
    SelectPanel(Panel),
    /// Download clicked on a history card
    Download(usize),
    /// Save dialog closed; only logged
    DownloadFinished(Result<Option<PathBuf>, String>),
    /// Copy the card's data URL to the clipboard
    CopyDataUrl(usize),
    /// Remove clicked on a history card
    Remove(usize),
}

impl QrStudio {
    /// Create a new instance of the application
    fn new(config: Config) -> (Self, Task<Message>) {
        let controller = Controller::new(config.style);

        let style = controller.style();
        tracing::info!(
            pixel_width = style.pixel_width,
            margin = style.margin_modules,
            foreground = %style.foreground,
            background = %style.background,
            "QR Studio initialized"
        );

        (QrStudio { controller }, Task::none())
    }

    /// Handle application messages and update state
    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::InputChanged(input) => {
                self.controller.set_input(input);
                Task::none()
            }
            Message::Submit => match self.controller.submit() {
                Some(job) => {
                    tracing::debug!(
                        chars = job.text().chars().count(),
                        pixel_width = job.style().pixel_width,
                        "Encoding in background"
                    );
                    Task::perform(qr::encode_in_background(job), Message::Generated)
                }
                None => Task::none(),
            },
            Message::Generated(outcome) => {
                if let Ok(image) = outcome.result() {
                    tracing::info!(
                        chars = outcome.text().chars().count(),
                        side = image.side(),
                        bytes = image.png().len(),
                        "Generated QR code"
                    );
                }
                self.controller.complete(outcome);
                Task::none()
            }
            Message::SelectPanel(panel) => {
                self.controller.select_panel(panel);
                Task::none()
            }
            Message::Download(index) => {
                let Some(request) = self.controller.download(index) else {
                    return Task::none();
                };
                tracing::debug!(file_name = %request.file_name, "Opening save dialog");

                Task::perform(
                    async move {
                        export::save_with_dialog(request)
                            .await
                            .map_err(|e| e.to_string())
                    },
                    Message::DownloadFinished,
                )
            }
            Message::DownloadFinished(result) => {
                match result {
                    Ok(Some(path)) => tracing::info!(path = %path.display(), "Saved QR code"),
                    Ok(None) => tracing::debug!("Save dialog cancelled"),
                    Err(e) => tracing::warn!(error = %e, "Failed to save QR code"),
                }
                Task::none()
            }
            Message::CopyDataUrl(index) => match self.controller.history().get(index) {
                Some(record) => iced::clipboard::write(record.image().data_url()),
                None => Task::none(),
            },
            Message::Remove(index) => {
                if let Some(record) = self.controller.remove(index) {
                    tracing::info!(
                        index,
                        remaining = self.controller.history().len(),
                        kind = record.kind().label(),
                        "Removed QR code"
                    );
                }
                Task::none()
            }
        }
    }

    /// Build the user interface
    fn view(&self) -> Element<Message> {
        let panel = match self.controller.panel() {
            Panel::Create => ui::create::view(&self.controller),
            Panel::History => ui::history::view(&self.controller),
        };

        let content = column![
            ui::header(),
            ui::tabs::tab_bar(&self.controller),
            horizontal_rule(1),
            panel,
        ]
        .spacing(16)
        .padding(24)
        .max_width(1000.0)
        .align_x(Alignment::Center);

        container(content)
            .width(Length::Fill)
            .height(Length::Fill)
            .center_x(Length::Fill)
            .into()
    }

    /// Set the application theme
    fn theme(&self) -> Theme {
        Theme::Light
    }
}

fn main() -> iced::Result {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = Config::load();

    iced::application("QR Code Generator", QrStudio::update, QrStudio::view)
        .theme(QrStudio::theme)
        .window_size(Size::new(config.window.width, config.window.height))
        .centered()
        .run_with(move || QrStudio::new(config))
}
