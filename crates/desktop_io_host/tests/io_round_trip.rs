use std::cell::{Cell, RefCell};
use std::fs;
use std::path::PathBuf;
use std::process;
use std::rc::Rc;
use std::time::{SystemTime, UNIX_EPOCH};

use desktop_io_host::{host_channel, serve, DialogOutcome, IoExecutor, ScriptedFileDialog};
use platform_io::{FileIoService, IoBridge, OpenOutcome, SaveOutcome};
use pretty_assertions::assert_eq;

fn temp_dir(prefix: &str) -> PathBuf {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_nanos();
    let path = std::env::temp_dir().join(format!("{prefix}_{}_{}", process::id(), nanos));
    fs::create_dir_all(&path).expect("create temp dir");
    path
}

#[tokio::test]
async fn channel_round_trip_preserves_saved_bytes() {
    let dir = temp_dir("io_host_round_trip");
    let target = dir.join("drawing.bin");

    let dialog = ScriptedFileDialog::default();
    dialog.push_save_target(DialogOutcome::Chosen(target.clone()));
    dialog.push_open_target(DialogOutcome::Chosen(target.clone()));

    let (service, receiver) = host_channel();
    let local = tokio::task::LocalSet::new();
    local
        .run_until(async {
            tokio::task::spawn_local(serve(IoExecutor::new(dialog), receiver));

            let payload = b"hello".to_vec();
            assert_eq!(service.save(&payload).await, SaveOutcome::Saved);
            assert_eq!(service.open().await, OpenOutcome::Loaded(payload));
        })
        .await;

    let _ = fs::remove_dir_all(dir);
}

#[tokio::test]
async fn bridge_over_host_channel_round_trips_through_callbacks() {
    let dir = temp_dir("io_host_bridge_round_trip");
    let target = dir.join("drawing.bin");

    let dialog = ScriptedFileDialog::default();
    dialog.push_save_target(DialogOutcome::Chosen(target.clone()));
    dialog.push_open_target(DialogOutcome::Chosen(target.clone()));

    let (service, receiver) = host_channel();
    let saved = Rc::new(Cell::new(None));
    let reopened = Rc::new(RefCell::new(None));
    let saved_cb = Rc::clone(&saved);
    let reopened_cb = Rc::clone(&reopened);

    let local = tokio::task::LocalSet::new();
    local
        .run_until(async {
            tokio::task::spawn_local(serve(IoExecutor::new(dialog), receiver));

            let bridge = IoBridge::new(service);
            bridge.save(b"hello".to_vec(), move |success| {
                saved_cb.set(Some(success));
            });
            bridge.open(move |error, data| {
                assert!(error.is_none());
                *reopened_cb.borrow_mut() = data;
            });
        })
        .await;
    local.await;

    assert_eq!(saved.get(), Some(true));
    assert_eq!(reopened.borrow().as_deref(), Some(b"hello".as_slice()));

    let _ = fs::remove_dir_all(dir);
}

#[tokio::test]
async fn canceled_save_leaves_no_file_behind() {
    let dir = temp_dir("io_host_cancel");
    let target = dir.join("never_written.bin");

    let dialog = ScriptedFileDialog::default();
    dialog.push_save_target(DialogOutcome::Canceled);

    let (service, receiver) = host_channel();
    let local = tokio::task::LocalSet::new();
    local
        .run_until(async {
            tokio::task::spawn_local(serve(IoExecutor::new(dialog), receiver));
            assert_eq!(service.save(b"hello").await, SaveOutcome::Canceled);
        })
        .await;

    assert!(!target.exists());
    let _ = fs::remove_dir_all(dir);
}

#[tokio::test]
async fn open_of_unreadable_target_reports_cause_not_cancel() {
    let dir = temp_dir("io_host_unreadable");
    let target = dir.join("absent.bin");

    let dialog = ScriptedFileDialog::default();
    dialog.push_open_target(DialogOutcome::Chosen(target));

    let (service, receiver) = host_channel();
    let local = tokio::task::LocalSet::new();
    local
        .run_until(async {
            tokio::task::spawn_local(serve(IoExecutor::new(dialog), receiver));
            match service.open().await {
                OpenOutcome::Failed(cause) => {
                    assert_eq!(cause.kind, platform_io::IoCauseKind::Read);
                }
                other => panic!("expected read failure, got {other:?}"),
            }
        })
        .await;

    let _ = fs::remove_dir_all(dir);
}
