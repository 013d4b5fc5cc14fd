//! File-choice dialog seam for the privileged executor.

use std::{
    cell::RefCell,
    collections::VecDeque,
    future::Future,
    path::PathBuf,
    pin::Pin,
};

/// Object-safe boxed future used by [`FileDialog`] async methods.
pub type FileDialogFuture<'a, T> = Pin<Box<dyn Future<Output = T> + 'a>>;

#[derive(Debug, Clone, PartialEq, Eq)]
/// Result of one dialog prompt, fully resolved before any disk I/O starts.
pub enum DialogOutcome {
    /// The user dismissed the dialog.
    Canceled,
    /// The dialog completed without returning a target path.
    NoSelection,
    /// The user chose a target path.
    Chosen(PathBuf),
}

/// Host dialog capability used by [`crate::IoExecutor`].
///
/// Dialogs are single-flight per window; the executor awaits one prompt to
/// completion before touching the disk, and the host UI toolkit serializes any
/// concurrent prompts.
pub trait FileDialog {
    /// Prompts for an existing file to open.
    fn pick_open_target(&self) -> FileDialogFuture<'_, DialogOutcome>;

    /// Prompts for a save location.
    fn pick_save_target(&self) -> FileDialogFuture<'_, DialogOutcome>;
}

#[derive(Debug, Clone, Copy, Default)]
/// Native file dialogs backed by `rfd`.
pub struct NativeFileDialog;

impl FileDialog for NativeFileDialog {
    fn pick_open_target(&self) -> FileDialogFuture<'_, DialogOutcome> {
        Box::pin(async {
            // rfd reports dismissal as None; it cannot produce a chosen-but-empty result.
            match rfd::AsyncFileDialog::new().pick_file().await {
                Some(handle) => DialogOutcome::Chosen(handle.path().to_path_buf()),
                None => DialogOutcome::Canceled,
            }
        })
    }

    fn pick_save_target(&self) -> FileDialogFuture<'_, DialogOutcome> {
        Box::pin(async {
            match rfd::AsyncFileDialog::new().save_file().await {
                Some(handle) => DialogOutcome::Chosen(handle.path().to_path_buf()),
                None => DialogOutcome::Canceled,
            }
        })
    }
}

#[derive(Debug, Default)]
/// Scripted dialog for executor and transport tests.
///
/// Outcomes are consumed in push order; an exhausted script answers
/// [`DialogOutcome::Canceled`].
pub struct ScriptedFileDialog {
    open_targets: RefCell<VecDeque<DialogOutcome>>,
    save_targets: RefCell<VecDeque<DialogOutcome>>,
}

impl ScriptedFileDialog {
    /// Queues the outcome of the next open prompt.
    pub fn push_open_target(&self, outcome: DialogOutcome) {
        self.open_targets.borrow_mut().push_back(outcome);
    }

    /// Queues the outcome of the next save prompt.
    pub fn push_save_target(&self, outcome: DialogOutcome) {
        self.save_targets.borrow_mut().push_back(outcome);
    }
}

impl FileDialog for ScriptedFileDialog {
    fn pick_open_target(&self) -> FileDialogFuture<'_, DialogOutcome> {
        Box::pin(async {
            self.open_targets
                .borrow_mut()
                .pop_front()
                .unwrap_or(DialogOutcome::Canceled)
        })
    }

    fn pick_save_target(&self) -> FileDialogFuture<'_, DialogOutcome> {
        Box::pin(async {
            self.save_targets
                .borrow_mut()
                .pop_front()
                .unwrap_or(DialogOutcome::Canceled)
        })
    }
}
