//! Privileged desktop host for surface file I/O.
//!
//! Owns real file-system access on behalf of the sandboxed surface: the file-choice
//! dialog seam, the executor that translates dialog and disk results into the
//! canonical wire responses, and the request/response channel the desktop shell
//! binds to its IPC command layer (`io_open` / `io_save`).

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

pub mod dialog;
pub mod executor;
pub mod transport;

pub use dialog::{
    DialogOutcome, FileDialog, FileDialogFuture, NativeFileDialog, ScriptedFileDialog,
};
pub use executor::IoExecutor;
pub use transport::{host_channel, serve, ChannelIoService, IoRequest};
