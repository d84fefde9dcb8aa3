//! Settlement of a promise.
//!
//! A promise settles exactly once. Both settle handles race for a single
//! [oneshot](tokio::sync::oneshot) sender kept in a shared cell; whichever
//! handle is used first wins and the other becomes a no-op.

use log::trace;
use std::sync::{Arc, Mutex};
use tokio::sync::oneshot;

/// Shared slot holding the sender half of the settlement channel.
///
/// The slot is emptied by the first settlement. The promise keeps one clone
/// alive so that dropping both settle handles without settling leaves
/// subscribers pending rather than waking them with a closed channel.
pub(crate) type SettleCell<T, E> = Arc<Mutex<Option<oneshot::Sender<Result<T, E>>>>>;

/// Creates the settlement cell and the receiver observing it.
pub(crate) fn channel<T, E>() -> (SettleCell<T, E>, oneshot::Receiver<Result<T, E>>) {
    let (tx, rx) = oneshot::channel();
    (Arc::new(Mutex::new(Some(tx))), rx)
}

fn settle<T, E>(cell: &SettleCell<T, E>, outcome: Result<T, E>) {
    match cell.lock().unwrap().take() {
        Some(tx) => {
            if tx.send(outcome).is_err() {
                trace!("settlement dropped, no subscriber is listening");
            }
        }
        None => trace!("settlement ignored, promise is already settled"),
    }
}

/// Settles a promise with its success value.
///
/// Consumed by use. If the promise was already settled through the other
/// handle, resolving has no effect.
pub struct Resolve<T, E> {
    cell: SettleCell<T, E>,
}

impl<T, E> std::fmt::Debug for Resolve<T, E> {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        f.debug_struct("Resolve").finish()
    }
}

impl<T, E> Resolve<T, E> {
    pub(crate) fn new(cell: SettleCell<T, E>) -> Self {
        Self { cell }
    }

    /// Settles the promise with `value`, unless it is already settled.
    pub fn resolve(self, value: T) {
        settle(&self.cell, Ok(value));
    }
}

/// Settles a promise with its failure value.
///
/// Consumed by use. If the promise was already settled through the other
/// handle, rejecting has no effect.
pub struct Reject<T, E> {
    cell: SettleCell<T, E>,
}

impl<T, E> std::fmt::Debug for Reject<T, E> {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        f.debug_struct("Reject").finish()
    }
}

impl<T, E> Reject<T, E> {
    pub(crate) fn new(cell: SettleCell<T, E>) -> Self {
        Self { cell }
    }

    /// Settles the promise with `error`, unless it is already settled.
    pub fn reject(self, error: E) {
        settle(&self.cell, Err(error));
    }
}
