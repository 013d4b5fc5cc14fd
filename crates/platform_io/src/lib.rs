//! File I/O contracts, bridge facade, and callback delivery for the sandboxed canvas surface.
//!
//! This crate is the API-first boundary between the presentation surface and whichever
//! backend services its file requests: the privileged desktop host transport
//! (`desktop_io_host`) or the browser picker fallback (`platform_io_web`). Both backends
//! implement [`FileIoService`]; the surface only ever talks to [`IoBridge`].

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

pub mod bridge;
pub mod cause;
pub mod dispatch;
pub mod outcome;
pub mod service;

pub use bridge::IoBridge;
pub use cause::{IoCause, IoCauseKind};
pub use outcome::{OpenOutcome, OpenResponse, SaveOutcome, SaveResponse};
pub use service::{FileIoFuture, FileIoService, MemoryFileIoService, NoopFileIoService};
