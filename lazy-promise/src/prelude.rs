//! Convenience re-export of common members.
//!
//! ```
//! use lazy_promise::prelude::*;
//! ```

#[doc(no_inline)]
pub use crate::{LazyPromise, PromiseFuture, Reject, Resolve, Resolver, TypeError};
