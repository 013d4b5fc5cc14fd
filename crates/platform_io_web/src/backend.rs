//! Backend adapters and one-time selection.

use platform_io::{FileIoFuture, FileIoService, OpenOutcome, SaveOutcome};

use crate::interop;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
/// Host-transport backend reached through the invoke capability the desktop shell
/// injects into the surface's global context.
pub struct HostInvokeIoService;

impl FileIoService for HostInvokeIoService {
    fn open(&self) -> FileIoFuture<'_, OpenOutcome> {
        Box::pin(interop::host_open())
    }

    fn save<'a>(&'a self, data: &'a [u8]) -> FileIoFuture<'a, SaveOutcome> {
        Box::pin(interop::host_save(data))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
/// Same-process fallback backend using the File System Access pickers.
pub struct PickerIoService;

impl FileIoService for PickerIoService {
    fn open(&self) -> FileIoFuture<'_, OpenOutcome> {
        Box::pin(interop::picker_open())
    }

    fn save<'a>(&'a self, data: &'a [u8]) -> FileIoFuture<'a, SaveOutcome> {
        Box::pin(interop::picker_save(data))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Backend selected once at surface startup and held for the surface's lifetime.
///
/// A surface either has privileged file access for its whole lifetime or it does
/// not; the selection is never re-evaluated per call.
pub enum WebIoBackend {
    /// Privileged host transport.
    HostTransport(HostInvokeIoService),
    /// Browser picker fallback.
    Picker(PickerIoService),
}

impl WebIoBackend {
    /// Returns whether the privileged host transport is active.
    pub const fn is_privileged(&self) -> bool {
        matches!(self, Self::HostTransport(_))
    }
}

impl FileIoService for WebIoBackend {
    fn open(&self) -> FileIoFuture<'_, OpenOutcome> {
        match self {
            Self::HostTransport(service) => service.open(),
            Self::Picker(service) => service.open(),
        }
    }

    fn save<'a>(&'a self, data: &'a [u8]) -> FileIoFuture<'a, SaveOutcome> {
        match self {
            Self::HostTransport(service) => service.save(data),
            Self::Picker(service) => service.save(data),
        }
    }
}

/// Checks the surface's global context once and selects the backend.
pub fn detect_backend() -> WebIoBackend {
    if interop::host_transport_present() {
        WebIoBackend::HostTransport(HostInvokeIoService)
    } else {
        log::info!("no host transport injected, falling back on browser file pickers");
        WebIoBackend::Picker(PickerIoService)
    }
}

#[cfg(test)]
mod tests {
    use futures::executor::block_on;
    use platform_io::{IoCause, IoCauseKind};

    use super::*;

    fn open_cause(outcome: OpenOutcome) -> IoCause {
        match outcome {
            OpenOutcome::Failed(cause) => cause,
            other => panic!("expected failure, got {other:?}"),
        }
    }

    #[cfg(not(target_arch = "wasm32"))]
    #[test]
    fn non_wasm_adapters_report_unsupported_parity() {
        let expected = "browser file io is only available when compiled for wasm32";

        for backend in [
            WebIoBackend::HostTransport(HostInvokeIoService),
            WebIoBackend::Picker(PickerIoService),
        ] {
            let backend_obj: &dyn FileIoService = &backend;

            let cause = open_cause(block_on(backend_obj.open()));
            assert_eq!(cause.kind, IoCauseKind::Unsupported);
            assert_eq!(cause.message, expected);

            let save = block_on(backend_obj.save(b"bytes"));
            assert_eq!(
                save,
                SaveOutcome::Failed(IoCause::unsupported(expected))
            );
        }
    }

    #[cfg(not(target_arch = "wasm32"))]
    #[test]
    fn detection_without_a_host_selects_the_picker_fallback() {
        let backend = detect_backend();
        assert_eq!(backend, WebIoBackend::Picker(PickerIoService));
        assert!(!backend.is_privileged());
    }
}
