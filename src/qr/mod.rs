/// QR encoding module
///
/// This module handles:
/// - Turning text into a QR symbol (`qrcode` crate)
/// - Rasterizing the symbol with the configured style
/// - Encoding the result as PNG
/// - Running all of that off the UI thread

pub mod encoder;

pub use encoder::{Encoder, QrEncoder};

use crate::error::EncodeError;
use crate::state::controller::{EncodeJob, EncodeOutcome};

/// Run an encode job on the blocking pool
///
/// Symbol construction and PNG compression are CPU-bound, so they run
/// via `spawn_blocking` and the UI keeps handling events meanwhile.
pub async fn encode_in_background(job: EncodeJob) -> EncodeOutcome {
    let fallback = job.clone();

    match tokio::task::spawn_blocking(move || job.run(&QrEncoder)).await {
        Ok(outcome) => outcome,
        Err(e) => fallback.fail(EncodeError::from_message(format!("Task join error: {}", e))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::controller::Controller;
    use crate::state::style::EncodeStyle;

    #[tokio::test]
    async fn test_encode_in_background() {
        let mut controller = Controller::new(EncodeStyle::default());
        controller.set_input("https://example.com".to_string());
        let job = controller.submit().unwrap();

        let outcome = encode_in_background(job).await;
        assert!(outcome.result().is_ok());

        controller.complete(outcome);
        assert_eq!(controller.history().len(), 1);
        assert!(!controller.is_loading());
    }
}
