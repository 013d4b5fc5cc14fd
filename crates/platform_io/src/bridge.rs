//! Bridge facade exposed to the presentation surface.

use std::future::Future;
use std::rc::Rc;

use crate::cause::IoCause;
use crate::dispatch;
use crate::outcome::{OpenOutcome, SaveOutcome};
use crate::service::FileIoService;

#[derive(Clone)]
/// The single file I/O object handed to the compute module.
///
/// Holds the backend selected at construction; the selection is never re-evaluated.
/// Both operations return immediately and resume the caller through its callback
/// once the backend round trip resolves.
pub struct IoBridge {
    service: Rc<dyn FileIoService>,
}

impl IoBridge {
    /// Wraps the selected backend service.
    pub fn new(service: impl FileIoService + 'static) -> Self {
        Self {
            service: Rc::new(service),
        }
    }

    /// Wraps an already shared backend service.
    pub fn from_shared(service: Rc<dyn FileIoService>) -> Self {
        Self { service }
    }

    /// Runs the file-choice flow and eventually invokes `callback(error, data)`
    /// exactly once.
    ///
    /// `error` is non-`None` only when a file was chosen but could not be read;
    /// `data` is non-`None` only on success; both are `None` on cancellation and
    /// when no file reference was produced.
    pub fn open<F>(&self, callback: F)
    where
        F: FnOnce(Option<IoCause>, Option<Vec<u8>>) + 'static,
    {
        let service = Rc::clone(&self.service);
        spawn_local(async move {
            let outcome = service.open().await;
            let (error, data) = match outcome {
                OpenOutcome::Canceled => {
                    log::info!("open: canceled");
                    (None, None)
                }
                OpenOutcome::Empty => {
                    log::info!("open: empty");
                    (None, None)
                }
                OpenOutcome::Failed(cause) => {
                    log::warn!("open: error: {cause}");
                    (Some(cause), None)
                }
                OpenOutcome::Loaded(bytes) => {
                    log::info!("open: ok");
                    (None, Some(bytes))
                }
            };
            dispatch::deliver_open(callback, error, data);
        });
    }

    /// Runs the save flow for an opaque buffer and eventually invokes
    /// `callback(success)` exactly once.
    ///
    /// `success` is `true` only when the write completed without error and was not
    /// canceled.
    pub fn save<F>(&self, data: Vec<u8>, callback: F)
    where
        F: FnOnce(bool) + 'static,
    {
        let service = Rc::clone(&self.service);
        spawn_local(async move {
            let outcome = service.save(&data).await;
            let success = match outcome {
                SaveOutcome::Canceled => {
                    log::info!("save: canceled");
                    false
                }
                SaveOutcome::Failed(cause) => {
                    log::warn!("save: error: {cause}");
                    false
                }
                SaveOutcome::Saved => {
                    log::info!("save: ok");
                    true
                }
            };
            dispatch::deliver_save(callback, success);
        });
    }
}

impl std::fmt::Debug for IoBridge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("IoBridge").finish_non_exhaustive()
    }
}

#[cfg(target_arch = "wasm32")]
fn spawn_local(future: impl Future<Output = ()> + 'static) {
    wasm_bindgen_futures::spawn_local(future);
}

#[cfg(not(target_arch = "wasm32"))]
fn spawn_local(future: impl Future<Output = ()> + 'static) {
    // Requires a tokio LocalSet, which is how the desktop host runs its executor.
    tokio::task::spawn_local(future);
}
