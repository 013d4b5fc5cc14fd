//! Translation of dialog and disk results into canonical wire responses.

use platform_io::{IoCause, OpenOutcome, OpenResponse, SaveOutcome, SaveResponse};

use crate::dialog::{DialogOutcome, FileDialog};

#[derive(Debug, Clone, Copy, Default)]
/// Privileged operation executor.
///
/// One instance per surface window. Each handler resolves the dialog prompt fully
/// before starting disk I/O and reduces every outcome, including platform errors,
/// to the canonical response shape. Error messages cross the trust boundary as
/// stringified `io::Error` values only; chosen paths never do.
pub struct IoExecutor<D> {
    dialog: D,
}

impl<D: FileDialog> IoExecutor<D> {
    /// Creates an executor over the given dialog capability.
    pub fn new(dialog: D) -> Self {
        Self { dialog }
    }

    /// Services one `open` request: file-choice prompt, then a full read.
    pub async fn handle_open(&self) -> OpenResponse {
        let outcome = match self.dialog.pick_open_target().await {
            DialogOutcome::Canceled => OpenOutcome::Canceled,
            DialogOutcome::NoSelection => OpenOutcome::Empty,
            DialogOutcome::Chosen(path) => match tokio::fs::read(&path).await {
                Ok(bytes) => OpenOutcome::Loaded(bytes),
                Err(err) => OpenOutcome::Failed(IoCause::read(err.to_string())),
            },
        };
        if let OpenOutcome::Failed(cause) = &outcome {
            log::warn!("host open failed: {cause}");
        }
        outcome.into()
    }

    /// Services one `save` request: location prompt, then a full write of `data`.
    pub async fn handle_save(&self, data: &[u8]) -> SaveResponse {
        let outcome = match self.dialog.pick_save_target().await {
            DialogOutcome::Canceled => SaveOutcome::Canceled,
            DialogOutcome::NoSelection => {
                SaveOutcome::Failed(IoCause::write("save dialog returned no target"))
            }
            DialogOutcome::Chosen(path) => match tokio::fs::write(&path, data).await {
                Ok(()) => SaveOutcome::Saved,
                Err(err) => SaveOutcome::Failed(IoCause::write(err.to_string())),
            },
        };
        if let SaveOutcome::Failed(cause) = &outcome {
            log::warn!("host save failed: {cause}");
        }
        outcome.into()
    }
}
