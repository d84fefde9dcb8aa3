//! Async executive for futures.
//!
//! All scheduling goes through this module. The deferred start of a lazy
//! promise relies on [task::spawn] submitting work to the runtime's task
//! queue instead of running it inline.

pub mod task {
    use std::future::Future;

    pub use tokio::task::{spawn, JoinError, JoinHandle};

    /// Runs a future to completion on a fresh single-threaded runtime.
    #[track_caller]
    pub fn block_on<F: Future>(future: F) -> F::Output {
        let rt = tokio::runtime::Builder::new_current_thread().enable_time().build().unwrap();
        rt.block_on(future)
    }
}

pub mod time {
    pub use tokio::time::{sleep, timeout, Sleep, Timeout};

    pub mod error {
        pub use tokio::time::error::Elapsed;
    }
}
