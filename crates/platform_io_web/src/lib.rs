//! Browser-side file I/O backends for the sandboxed surface.
//!
//! Two adapters implement the `platform_io` service contract: the invoke-backed
//! host transport (present when the desktop shell injected its capability into the
//! surface's global context) and the File System Access picker fallback. Backend
//! selection happens once, at surface startup, through [`detect_backend`].

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

mod backend;
mod interop;

pub use backend::{detect_backend, HostInvokeIoService, PickerIoService, WebIoBackend};
