//! Deferred-execution promises.
//!
//! A [LazyPromise] stores its factory at construction and starts it only when
//! the first continuation is attached, by [then](LazyPromise::then),
//! [map](LazyPromise::map), [catch](LazyPromise::catch),
//! [subscribe](LazyPromise::subscribe) or by polling the promise itself.
//! The start is scheduled as a task on the runtime, so the factory never runs
//! inside the attaching call and code following the attach observes it as
//! not yet started. However many continuations are attached, the factory runs
//! at most once.
//!
//! A promise that is never subscribed to never does any work.
//!
//! # Example
//!
//! ```
//! use lazy_promise::prelude::*;
//!
//! lazy_promise::exec::task::block_on(async {
//!     let promise: LazyPromise<String, String> =
//!         LazyPromise::new(|_resolve, reject| reject.reject("boom".to_string()));
//!
//!     let recovered = promise.catch(|error| Ok(format!("recovered from {error}")));
//!     assert_eq!(recovered.await, Ok("recovered from boom".to_string()));
//! });
//! ```

use futures::future;
use log::{debug, trace};
use pin_project::pin_project;
use std::{
    fmt,
    future::Future,
    pin::Pin,
    sync::{Arc, Mutex},
    task::{Context, Poll},
};

use crate::{
    chain::PromiseFuture,
    exec,
    resolver::{Resolver, TypeError},
    settle::{self, Reject, Resolve, SettleCell},
};

/// Boxed producer computation, invoked with the settle handles of its promise.
pub type Factory<T, E> = Box<dyn FnOnce(Resolve<T, E>, Reject<T, E>) + Send + 'static>;

/// The not-yet-started factory together with the settle handles captured at
/// construction. Taken out of its slot exactly once.
struct Pending<T, E> {
    factory: Factory<T, E>,
    resolve: Resolve<T, E>,
    reject: Reject<T, E>,
}

/// A promise that starts producing its value on first subscription.
///
/// Usable wherever a future of `Result<T, E>` is expected. See the
/// [module-level documentation](self) for details.
#[pin_project]
pub struct LazyPromise<T, E> {
    #[pin]
    base: PromiseFuture<T, E>,
    pending: Arc<Mutex<Option<Pending<T, E>>>>,
    // Keeps the producer side alive so a factory that drops its settle
    // handles without settling leaves subscribers pending, exactly like a
    // factory that never settles.
    _settle_tx: SettleCell<T, E>,
}

impl<T, E> fmt::Debug for LazyPromise<T, E> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("LazyPromise").finish()
    }
}

impl<T, E> LazyPromise<T, E>
where
    T: Clone + Send + Sync + 'static,
    E: Clone + Send + Sync + 'static,
{
    /// Creates a promise that will run `factory` when first subscribed to.
    ///
    /// The factory receives the [Resolve] and [Reject] handles of the promise
    /// and is expected to eventually use one of them. It may do so
    /// synchronously or hand them to another task and settle later.
    pub fn new<F>(factory: F) -> Self
    where
        F: FnOnce(Resolve<T, E>, Reject<T, E>) + Send + 'static,
    {
        Self::from_factory(Box::new(factory))
    }

    /// Creates a promise from a dynamically typed resolver value.
    ///
    /// Fails with a [TypeError] naming the dynamic type of the value when it
    /// is not callable. The check happens before any settlement machinery is
    /// set up.
    pub fn try_new(resolver: Resolver<T, E>) -> Result<Self, TypeError> {
        match resolver {
            Resolver::Function(factory) => Ok(Self::from_factory(factory)),
            other => Err(TypeError::not_a_function(other.type_name())),
        }
    }

    fn from_factory(factory: Factory<T, E>) -> Self {
        let (settle_tx, settled_rx) = settle::channel();

        let base = PromiseFuture::new(async move {
            match settled_rx.await {
                Ok(outcome) => outcome,
                // Producer gone without settling: stay pending forever,
                // like a factory that never settles.
                Err(_) => future::pending().await,
            }
        });

        let pending = Pending {
            factory,
            resolve: Resolve::new(settle_tx.clone()),
            reject: Reject::new(settle_tx.clone()),
        };

        Self { base, pending: Arc::new(Mutex::new(Some(pending))), _settle_tx: settle_tx }
    }

    /// Schedules the one-time start of the factory as a deferred task.
    ///
    /// May be called any number of times from any subscription path. The
    /// spawned task re-checks the slot, so concurrent triggers collapse to a
    /// single factory run.
    fn trigger(&self) {
        if self.pending.lock().unwrap().is_none() {
            return;
        }

        let pending = self.pending.clone();
        exec::task::spawn(async move {
            let slot = pending.lock().unwrap().take();
            if let Some(Pending { factory, resolve, reject }) = slot {
                debug!("starting lazy promise factory");
                factory(resolve, reject);
            }
        });
        trace!("lazy promise start scheduled");
    }

    /// Attaches a success and a failure continuation and starts the factory
    /// if it has not started yet.
    ///
    /// Returns the chained future the continuations settle, with the same
    /// chaining, value forwarding and rejection propagation the underlying
    /// shared future provides.
    pub fn then<U, S, F>(&self, on_success: S, on_failure: F) -> PromiseFuture<U, E>
    where
        U: Clone + Send + Sync + 'static,
        S: FnOnce(T) -> Result<U, E> + Send + 'static,
        F: FnOnce(E) -> Result<U, E> + Send + 'static,
    {
        self.trigger();
        self.base.then(on_success, on_failure)
    }

    /// Attaches a success continuation; failures pass through untouched.
    ///
    /// Starts the factory like [then](Self::then).
    pub fn map<U, S>(&self, on_success: S) -> PromiseFuture<U, E>
    where
        U: Clone + Send + Sync + 'static,
        S: FnOnce(T) -> Result<U, E> + Send + 'static,
    {
        self.trigger();
        self.base.map(on_success)
    }

    /// Attaches a failure continuation; success values pass through
    /// untouched.
    ///
    /// Starts the factory like [then](Self::then). The continuation may
    /// recover to a success value or reject again.
    pub fn catch<F>(&self, on_failure: F) -> PromiseFuture<T, E>
    where
        F: FnOnce(E) -> Result<T, E> + Send + 'static,
    {
        self.trigger();
        self.base.catch(on_failure)
    }

    /// Subscribes without attaching continuations.
    ///
    /// Starts the factory and returns a future settling to the promise's own
    /// outcome.
    pub fn subscribe(&self) -> PromiseFuture<T, E> {
        self.trigger();
        self.base.clone()
    }
}

/// Polling is a subscription: the first poll starts the factory.
impl<T, E> Future for LazyPromise<T, E>
where
    T: Clone + Send + Sync + 'static,
    E: Clone + Send + Sync + 'static,
{
    type Output = Result<T, E>;

    fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        self.trigger();
        self.project().base.poll(cx)
    }
}
