//! Request/response channel between the surface and the privileged executor.
//!
//! Each request owns a oneshot reply slot, so one call is one round trip and
//! nothing is shared between concurrent calls. [`serve`] handles requests
//! sequentially, which also keeps dialog prompts single-flight on the host side.

use platform_io::{FileIoFuture, FileIoService, IoCause, OpenOutcome, OpenResponse, SaveOutcome, SaveResponse};
use tokio::sync::{mpsc, oneshot};

use crate::dialog::FileDialog;
use crate::executor::IoExecutor;

#[derive(Debug)]
/// One named operation crossing the host channel.
pub enum IoRequest {
    /// `open` round trip.
    Open {
        /// Reply slot for the single response.
        reply: oneshot::Sender<OpenResponse>,
    },
    /// `save` round trip carrying the opaque buffer.
    Save {
        /// Bytes to write, untouched by the transport.
        data: Vec<u8>,
        /// Reply slot for the single response.
        reply: oneshot::Sender<SaveResponse>,
    },
}

#[derive(Debug, Clone)]
/// Surface-side half of the host channel.
///
/// Implements [`FileIoService`], so the bridge facade cannot tell it apart from
/// the picker fallback. A broken channel resolves to a `transport` cause instead
/// of hanging the caller.
pub struct ChannelIoService {
    requests: mpsc::UnboundedSender<IoRequest>,
}

/// Creates a connected service/receiver pair; the receiver is handed to [`serve`].
pub fn host_channel() -> (ChannelIoService, mpsc::UnboundedReceiver<IoRequest>) {
    let (requests, receiver) = mpsc::unbounded_channel();
    (ChannelIoService { requests }, receiver)
}

/// Drives the executor over the host channel until every sender is gone.
pub async fn serve<D: FileDialog>(
    executor: IoExecutor<D>,
    mut requests: mpsc::UnboundedReceiver<IoRequest>,
) {
    while let Some(request) = requests.recv().await {
        match request {
            IoRequest::Open { reply } => {
                // A dropped reply slot means the surface lost interest; not an error here.
                let _ = reply.send(executor.handle_open().await);
            }
            IoRequest::Save { data, reply } => {
                let _ = reply.send(executor.handle_save(&data).await);
            }
        }
    }
}

impl FileIoService for ChannelIoService {
    fn open(&self) -> FileIoFuture<'_, OpenOutcome> {
        Box::pin(async move {
            let (reply, response) = oneshot::channel();
            if self.requests.send(IoRequest::Open { reply }).is_err() {
                return OpenOutcome::Failed(IoCause::transport("host executor is gone"));
            }
            match response.await {
                Ok(response) => response.into(),
                Err(_) => OpenOutcome::Failed(IoCause::transport("host executor dropped the reply")),
            }
        })
    }

    fn save<'a>(&'a self, data: &'a [u8]) -> FileIoFuture<'a, SaveOutcome> {
        Box::pin(async move {
            let (reply, response) = oneshot::channel();
            let request = IoRequest::Save {
                data: data.to_vec(),
                reply,
            };
            if self.requests.send(request).is_err() {
                return SaveOutcome::Failed(IoCause::transport("host executor is gone"));
            }
            match response.await {
                Ok(response) => response.into(),
                Err(_) => SaveOutcome::Failed(IoCause::transport("host executor dropped the reply")),
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use platform_io::IoCauseKind;

    use super::*;

    fn transport_kind_of_open(outcome: OpenOutcome) -> Option<IoCauseKind> {
        match outcome {
            OpenOutcome::Failed(cause) => Some(cause.kind),
            _ => None,
        }
    }

    #[tokio::test]
    async fn closed_channel_resolves_to_transport_cause() {
        let (service, receiver) = host_channel();
        drop(receiver);

        let open = service.open().await;
        assert_eq!(transport_kind_of_open(open), Some(IoCauseKind::Transport));

        let save = service.save(b"hello").await;
        assert_eq!(
            save,
            SaveOutcome::Failed(IoCause::transport("host executor is gone"))
        );
    }

    #[tokio::test]
    async fn dropped_reply_resolves_to_transport_cause() {
        let (service, mut receiver) = host_channel();

        let local = tokio::task::LocalSet::new();
        local
            .run_until(async {
                let surface = tokio::task::spawn_local(async move { service.open().await });
                let request = receiver.recv().await.expect("one request");
                drop(request);
                drop(receiver);

                let outcome = surface.await.expect("surface task");
                assert_eq!(transport_kind_of_open(outcome), Some(IoCauseKind::Transport));
            })
            .await;
    }
}
