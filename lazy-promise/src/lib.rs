//! Deferred-execution promises that start their producer on first
//! subscription.
//!
//! A [LazyPromise] stores a factory at construction time but does not run it.
//! Only when a continuation is attached — or the promise itself is awaited —
//! is the factory scheduled as a deferred task, which then settles the
//! promise through the [Resolve] and [Reject] handles it receives. Apart from
//! the deferred start, a lazy promise behaves like any other future:
//! continuations chain, values forward, rejections propagate and every
//! subscriber observes the same settlement.
//!
//! The factory runs at most once, regardless of how many continuations are
//! attached, and a promise nobody subscribes to never does any work.
//!
//! All scheduling uses the Tokio runtime; attaching a continuation therefore
//! requires a runtime context.
//!
//! # Example
//!
//! ```
//! use lazy_promise::LazyPromise;
//!
//! lazy_promise::exec::task::block_on(async {
//!     let promise: LazyPromise<u32, String> =
//!         LazyPromise::new(|resolve, _reject| resolve.resolve(42));
//!
//!     let doubled = promise.map(|value| Ok(value * 2));
//!     assert_eq!(doubled.await, Ok(84));
//! });
//! ```

mod chain;
mod lazy;
mod resolver;
mod settle;

pub mod exec;
pub mod prelude;

pub use chain::PromiseFuture;
pub use lazy::{Factory, LazyPromise};
pub use resolver::{AnyBox, Resolver, TypeError};
pub use settle::{Reject, Resolve};
