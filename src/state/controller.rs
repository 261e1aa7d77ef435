/// Toolkit-agnostic orchestration of a QR Studio session
///
/// The controller owns the history plus every transient UI value (input
/// text, error, busy flag, active panel). The iced app forwards events
/// here and draws whatever state results. Encoding is split into
/// `submit` (validate, hand out a job) and `complete` (apply the result)
/// so the host can run the encoder in the background in between.

use crate::error::EncodeError;
use crate::qr::Encoder;
use crate::validate::{validate, ValidatedInput};

use super::data::{GenerationRecord, ImageArtifact};
use super::history::History;
use super::style::EncodeStyle;

/// The two mutually exclusive panels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Panel {
    #[default]
    Create,
    History,
}

/// A validated request waiting to be encoded
#[derive(Debug, Clone, PartialEq)]
pub struct EncodeJob {
    input: ValidatedInput,
    style: EncodeStyle,
}

impl EncodeJob {
    pub fn text(&self) -> &str {
        self.input.as_str()
    }

    pub fn style(&self) -> &EncodeStyle {
        &self.style
    }

    /// Encode synchronously with the given encoder
    pub fn run<E: Encoder>(self, encoder: &E) -> EncodeOutcome {
        let result = encoder.encode(self.input.as_str(), &self.style);
        EncodeOutcome {
            input: self.input,
            result,
        }
    }

    /// Build a failed outcome without running the encoder
    pub fn fail(self, error: EncodeError) -> EncodeOutcome {
        EncodeOutcome {
            input: self.input,
            result: Err(error),
        }
    }
}

/// Result of running an `EncodeJob`, fed back through `Controller::complete`
#[derive(Debug, Clone, PartialEq)]
pub struct EncodeOutcome {
    input: ValidatedInput,
    result: Result<ImageArtifact, EncodeError>,
}

impl EncodeOutcome {
    pub fn text(&self) -> &str {
        self.input.as_str()
    }

    pub fn result(&self) -> &Result<ImageArtifact, EncodeError> {
        &self.result
    }
}

/// Everything the file-save boundary needs to offer a download
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SaveRequest {
    pub file_name: String,
    pub png: Vec<u8>,
}

/// Session state and the operations the UI can trigger
#[derive(Debug, Default)]
pub struct Controller {
    history: History,
    style: EncodeStyle,
    input: String,
    error: Option<String>,
    loading: bool,
    panel: Panel,
}

impl Controller {
    /// Start a session that encodes with `style`
    pub fn new(style: EncodeStyle) -> Self {
        Self {
            style,
            ..Self::default()
        }
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    /// Mirror the text field
    pub fn set_input(&mut self, input: String) {
        self.input = input;
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Whether an encode is in flight (advisory; disables submit in the UI)
    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn panel(&self) -> Panel {
        self.panel
    }

    /// Manual tab switch, no other side effects
    pub fn select_panel(&mut self, panel: Panel) {
        self.panel = panel;
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    pub fn style(&self) -> &EncodeStyle {
        &self.style
    }

    /// Validate the current input and, if it passes, mark the session busy
    /// and return the job to encode
    ///
    /// On validation failure the error is set and `None` is returned.
    pub fn submit(&mut self) -> Option<EncodeJob> {
        self.error = None;

        match validate(&self.input) {
            Ok(input) => {
                self.loading = true;
                Some(EncodeJob {
                    input,
                    style: self.style,
                })
            }
            Err(e) => {
                self.error = Some(e.to_string());
                None
            }
        }
    }

    /// Apply the result of an encode started by `submit`
    ///
    /// Clears the busy flag whatever the outcome. On success the record is
    /// appended, the input cleared and the History panel shown.
    pub fn complete(&mut self, outcome: EncodeOutcome) {
        self.loading = false;

        match outcome.result {
            Ok(image) => {
                self.history.append(GenerationRecord::new(outcome.input, image));
                self.input.clear();
                self.panel = Panel::History;
            }
            Err(e) => {
                self.error = Some(e.to_string());
            }
        }
    }

    /// Build a save request for the record at `index`
    pub fn download(&self, index: usize) -> Option<SaveRequest> {
        self.history.get(index).map(|record| SaveRequest {
            file_name: record.download_file_name(),
            png: record.image().png().to_vec(),
        })
    }

    /// Remove the record at `index`; the panel stays where it is
    pub fn remove(&mut self, index: usize) -> Option<GenerationRecord> {
        self.history.remove_at(index)
    }
}
