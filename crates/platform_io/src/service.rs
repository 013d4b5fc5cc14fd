//! Backend service contract and baseline adapters.

use std::{cell::RefCell, collections::VecDeque, future::Future, pin::Pin, rc::Rc};

use crate::cause::IoCause;
use crate::outcome::{OpenOutcome, SaveOutcome};

/// Object-safe boxed future used by [`FileIoService`] async methods.
///
/// Futures are deliberately not `Send`; both sides of the bridge run on
/// single-threaded cooperative executors.
pub type FileIoFuture<'a, T> = Pin<Box<dyn Future<Output = T> + 'a>>;

/// Backend service behind the bridge facade.
///
/// Exactly two production realizations exist: the privileged host transport and the
/// browser picker fallback. One of them is selected when the bridge is constructed
/// and never switched afterwards.
pub trait FileIoService {
    /// Runs one full open round trip: file-choice prompt, then read.
    fn open(&self) -> FileIoFuture<'_, OpenOutcome>;

    /// Runs one full save round trip: location prompt, then write.
    ///
    /// The buffer is opaque to the backend and must not be mutated.
    fn save<'a>(&'a self, data: &'a [u8]) -> FileIoFuture<'a, SaveOutcome>;
}

#[derive(Debug, Clone, Copy, Default)]
/// Backend that rejects every operation, for targets with no file I/O capability.
pub struct NoopFileIoService;

impl NoopFileIoService {
    fn unsupported() -> IoCause {
        IoCause::unsupported("no file io backend configured")
    }
}

impl FileIoService for NoopFileIoService {
    fn open(&self) -> FileIoFuture<'_, OpenOutcome> {
        Box::pin(async { OpenOutcome::Failed(Self::unsupported()) })
    }

    fn save<'a>(&'a self, _data: &'a [u8]) -> FileIoFuture<'a, SaveOutcome> {
        Box::pin(async { SaveOutcome::Failed(Self::unsupported()) })
    }
}

#[derive(Debug, Clone, Default)]
/// In-memory backend for facade and bootstrap tests.
///
/// Scripted outcomes, when queued, are returned first. With an empty script the
/// service behaves like a single-slot store: `save` retains the buffer and succeeds,
/// `open` returns the most recently saved buffer (or [`OpenOutcome::Empty`] when
/// nothing was saved yet), which gives tests round-trip behavior for free.
pub struct MemoryFileIoService {
    open_script: Rc<RefCell<VecDeque<OpenOutcome>>>,
    save_script: Rc<RefCell<VecDeque<SaveOutcome>>>,
    stored: Rc<RefCell<Option<Vec<u8>>>>,
    saved_buffers: Rc<RefCell<Vec<Vec<u8>>>>,
}

impl MemoryFileIoService {
    /// Queues the outcome returned by the next `open` call.
    pub fn push_open(&self, outcome: OpenOutcome) {
        self.open_script.borrow_mut().push_back(outcome);
    }

    /// Queues the outcome returned by the next `save` call.
    pub fn push_save(&self, outcome: SaveOutcome) {
        self.save_script.borrow_mut().push_back(outcome);
    }

    /// Returns every buffer passed to `save`, successful or not, in call order.
    pub fn saved_buffers(&self) -> Vec<Vec<u8>> {
        self.saved_buffers.borrow().clone()
    }
}

impl FileIoService for MemoryFileIoService {
    fn open(&self) -> FileIoFuture<'_, OpenOutcome> {
        Box::pin(async move {
            if let Some(outcome) = self.open_script.borrow_mut().pop_front() {
                return outcome;
            }
            match self.stored.borrow().clone() {
                Some(data) => OpenOutcome::Loaded(data),
                None => OpenOutcome::Empty,
            }
        })
    }

    fn save<'a>(&'a self, data: &'a [u8]) -> FileIoFuture<'a, SaveOutcome> {
        Box::pin(async move {
            self.saved_buffers.borrow_mut().push(data.to_vec());
            if let Some(outcome) = self.save_script.borrow_mut().pop_front() {
                return outcome;
            }
            *self.stored.borrow_mut() = Some(data.to_vec());
            SaveOutcome::Saved
        })
    }
}
