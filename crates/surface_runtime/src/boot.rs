//! Startup sequencing and the compute-module boundary.

use platform_io::{FileIoService, IoBridge};

/// Boundary to the compiled canvas editor.
///
/// The runtime never looks inside the module; it only hands over the file I/O
/// bridge at mount. What the module does with the bytes is its own business.
pub trait ComputeModule {
    /// Mounts the module into the surface with its file I/O capabilities.
    ///
    /// # Errors
    ///
    /// Returns an error when the module cannot attach to the surface.
    fn mount(&mut self, io: IoBridge) -> Result<(), String>;
}

/// Boots the surface: icon templates, backend detection, compute-module mount.
///
/// Backend detection runs exactly once here; the resulting bridge keeps that
/// backend for the surface's whole lifetime.
///
/// # Errors
///
/// Returns an error when icon loading or the mount fails.
pub async fn boot(compute: &mut dyn ComputeModule) -> Result<(), String> {
    crate::icons::load_icon_templates().await?;
    let backend = platform_io_web::detect_backend();
    boot_with(compute, backend)
}

/// Mounts the compute module over an explicitly chosen backend service.
///
/// This is the seam tests use to substitute a fake backend for the detected one.
///
/// # Errors
///
/// Returns an error when the mount fails.
pub fn boot_with(
    compute: &mut dyn ComputeModule,
    service: impl FileIoService + 'static,
) -> Result<(), String> {
    compute.mount(IoBridge::new(service))
}

#[cfg(test)]
mod tests {
    use std::cell::{Cell, RefCell};
    use std::rc::Rc;

    use platform_io::MemoryFileIoService;
    use pretty_assertions::assert_eq;

    use super::*;

    #[derive(Default)]
    struct MountProbe {
        io: Option<IoBridge>,
    }

    impl ComputeModule for MountProbe {
        fn mount(&mut self, io: IoBridge) -> Result<(), String> {
            self.io = Some(io);
            Ok(())
        }
    }

    #[test]
    fn boot_with_hands_the_bridge_to_the_compute_module() {
        let mut probe = MountProbe::default();
        boot_with(&mut probe, MemoryFileIoService::default()).expect("mount");
        assert!(probe.io.is_some());
    }

    #[tokio::test]
    async fn mounted_module_round_trips_bytes_through_its_bridge() {
        let mut probe = MountProbe::default();
        boot_with(&mut probe, MemoryFileIoService::default()).expect("mount");
        let io = probe.io.expect("bridge handed over");

        let saved = Rc::new(Cell::new(None));
        let reopened = Rc::new(RefCell::new(None));
        let saved_cb = Rc::clone(&saved);
        let reopened_cb = Rc::clone(&reopened);

        let local = tokio::task::LocalSet::new();
        local
            .run_until(async move {
                io.save(b"strokes".to_vec(), move |success| {
                    saved_cb.set(Some(success));
                });
                io.open(move |error, data| {
                    assert!(error.is_none());
                    *reopened_cb.borrow_mut() = data;
                });
            })
            .await;
        local.await;

        assert_eq!(saved.get(), Some(true));
        assert_eq!(reopened.borrow().as_deref(), Some(b"strokes".as_slice()));
    }
}
