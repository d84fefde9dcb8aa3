//! Chained continuation futures.

use futures::{
    future::{BoxFuture, Shared},
    Future, FutureExt,
};
use pin_project::pin_project;
use std::{
    fmt,
    pin::Pin,
    task::{Context, Poll},
};

/// A future produced by attaching continuations to a promise.
///
/// Cloning is cheap and every clone observes the same settlement, so a
/// promise can be chained from as many places as needed. Continuations run
/// when the chained future is awaited, never inside the call that attached
/// them.
#[pin_project]
pub struct PromiseFuture<T, E> {
    #[pin]
    inner: Shared<BoxFuture<'static, Result<T, E>>>,
}

impl<T, E> fmt::Debug for PromiseFuture<T, E> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("PromiseFuture").finish()
    }
}

impl<T, E> Clone for PromiseFuture<T, E> {
    fn clone(&self) -> Self {
        Self { inner: self.inner.clone() }
    }
}

impl<T, E> PromiseFuture<T, E>
where
    T: Clone + Send + Sync + 'static,
    E: Clone + Send + Sync + 'static,
{
    pub(crate) fn new<F>(fut: F) -> Self
    where
        F: Future<Output = Result<T, E>> + Send + 'static,
    {
        Self { inner: fut.boxed().shared() }
    }

    /// Chains a success and a failure continuation.
    ///
    /// The continuation matching the settlement runs with the settled value
    /// once this future is awaited; its result settles the returned future.
    pub fn then<U, S, F>(&self, on_success: S, on_failure: F) -> PromiseFuture<U, E>
    where
        U: Clone + Send + Sync + 'static,
        S: FnOnce(T) -> Result<U, E> + Send + 'static,
        F: FnOnce(E) -> Result<U, E> + Send + 'static,
    {
        let inner = self.inner.clone();
        PromiseFuture::new(async move {
            match inner.await {
                Ok(value) => on_success(value),
                Err(error) => on_failure(error),
            }
        })
    }

    /// Chains a success continuation; failures pass through untouched.
    pub fn map<U, S>(&self, on_success: S) -> PromiseFuture<U, E>
    where
        U: Clone + Send + Sync + 'static,
        S: FnOnce(T) -> Result<U, E> + Send + 'static,
    {
        self.then(on_success, Err)
    }

    /// Chains a failure continuation; success values pass through untouched.
    ///
    /// The continuation may recover to a success value or reject again.
    pub fn catch<F>(&self, on_failure: F) -> PromiseFuture<T, E>
    where
        F: FnOnce(E) -> Result<T, E> + Send + 'static,
    {
        self.then(Ok, on_failure)
    }
}

impl<T, E> Future for PromiseFuture<T, E>
where
    T: Clone,
    E: Clone,
{
    type Output = Result<T, E>;

    fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        self.project().inner.poll(cx)
    }
}
