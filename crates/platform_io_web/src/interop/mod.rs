//! Target-specific transport interop for the browser adapters.
//!
//! Routes calls to the wasm implementations in browser builds and to inert stubs
//! elsewhere, so the adapter types keep one API on every target.

use platform_io::{OpenOutcome, SaveOutcome};

#[cfg(not(target_arch = "wasm32"))]
mod non_wasm;
#[cfg(target_arch = "wasm32")]
mod wasm;

#[cfg(not(target_arch = "wasm32"))]
use non_wasm as imp;
#[cfg(target_arch = "wasm32")]
use wasm as imp;

/// Returns whether the desktop shell injected its invoke capability.
pub(crate) fn host_transport_present() -> bool {
    imp::host_transport_present()
}

/// Runs one `open` round trip over the injected host transport.
pub(crate) async fn host_open() -> OpenOutcome {
    imp::host_open().await
}

/// Runs one `save` round trip over the injected host transport.
pub(crate) async fn host_save(data: &[u8]) -> SaveOutcome {
    imp::host_save(data).await
}

/// Runs one `open` flow through the browser file picker.
pub(crate) async fn picker_open() -> OpenOutcome {
    imp::picker_open().await
}

/// Runs one `save` flow through the browser save picker.
pub(crate) async fn picker_save(data: &[u8]) -> SaveOutcome {
    imp::picker_save(data).await
}
