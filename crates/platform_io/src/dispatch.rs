//! Exactly-once, fault-contained delivery of operation results.
//!
//! The caller that issued an `open`/`save` may be gone by the time the backend
//! resolves; its callback can then panic when invoked (a disposed owner, a dead
//! borrow). Loss of interest in a result is not cancellation of the operation, so
//! the dispatcher's contract is: invoke once, contain any fault, log it, and leave
//! the bridge's own state untouched.

use std::panic::{catch_unwind, AssertUnwindSafe};

use crate::cause::IoCause;

/// Delivers an open result to the caller's callback, containing callback faults.
pub fn deliver_open<F>(callback: F, error: Option<IoCause>, data: Option<Vec<u8>>)
where
    F: FnOnce(Option<IoCause>, Option<Vec<u8>>),
{
    if catch_unwind(AssertUnwindSafe(move || callback(error, data))).is_err() {
        log::warn!("open: callback discarded");
    }
}

/// Delivers a save result to the caller's callback, containing callback faults.
pub fn deliver_save<F>(callback: F, success: bool)
where
    F: FnOnce(bool),
{
    if catch_unwind(AssertUnwindSafe(move || callback(success))).is_err() {
        log::warn!("save: callback discarded");
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;
    use std::rc::Rc;

    use super::*;

    #[test]
    fn open_callback_is_invoked_exactly_once_with_arguments() {
        let calls = Rc::new(Cell::new(0));
        let seen = Rc::new(Cell::new(false));
        let calls_cb = Rc::clone(&calls);
        let seen_cb = Rc::clone(&seen);

        deliver_open(
            move |error, data| {
                calls_cb.set(calls_cb.get() + 1);
                seen_cb.set(error.is_none() && data == Some(b"abc".to_vec()));
            },
            None,
            Some(b"abc".to_vec()),
        );

        assert_eq!(calls.get(), 1);
        assert!(seen.get());
    }

    #[test]
    fn panicking_open_callback_is_contained() {
        deliver_open(
            |_error, _data| panic!("owner already disposed"),
            Some(IoCause::read("boom")),
            None,
        );
        // Reaching this point is the assertion: the panic did not propagate.
    }

    #[test]
    fn panicking_save_callback_is_contained() {
        deliver_save(|_success| panic!("owner already disposed"), true);
    }

    #[test]
    fn save_callback_receives_success_flag() {
        let flag = Rc::new(Cell::new(None));
        let flag_cb = Rc::clone(&flag);
        deliver_save(move |success| flag_cb.set(Some(success)), false);
        assert_eq!(flag.get(), Some(false));
    }
}
