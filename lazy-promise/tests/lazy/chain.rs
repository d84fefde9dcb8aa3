use std::sync::{
    atomic::{AtomicUsize, Ordering},
    Arc,
};

use lazy_promise::LazyPromise;

#[tokio::test]
async fn continuations_chain() {
    crate::init();
    let promise: LazyPromise<u32, String> = LazyPromise::new(|resolve, _| resolve.resolve(2));

    let chained = promise.map(|value| Ok(value + 1)).map(|value| Ok(value * 10));
    assert_eq!(chained.await, Ok(30));
}

#[tokio::test]
async fn failures_pass_through_success_continuations() {
    crate::init();
    let promise: LazyPromise<u32, String> =
        LazyPromise::new(|_, reject| reject.reject("broken".to_string()));

    let mapped = Arc::new(AtomicUsize::new(0));
    let chained = {
        let mapped = mapped.clone();
        promise.map(move |value| {
            mapped.fetch_add(1, Ordering::SeqCst);
            Ok(value)
        })
    };

    assert_eq!(chained.await, Err("broken".to_string()));
    assert_eq!(mapped.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn catch_recovers_from_a_rejection() {
    crate::init();
    let promise: LazyPromise<u32, String> =
        LazyPromise::new(|_, reject| reject.reject("broken".to_string()));

    let recovered = promise.catch(|_| Ok(0));
    assert_eq!(recovered.await, Ok(0));
}

#[tokio::test]
async fn catch_may_reject_again() {
    crate::init();
    let promise: LazyPromise<u32, String> =
        LazyPromise::new(|_, reject| reject.reject("broken".to_string()));

    let chained = promise.catch(|error| Err(format!("still {error}")));
    assert_eq!(chained.await, Err("still broken".to_string()));
}

#[tokio::test]
async fn success_values_pass_through_catch() {
    crate::init();
    let promise: LazyPromise<u32, String> = LazyPromise::new(|resolve, _| resolve.resolve(4));

    let caught = Arc::new(AtomicUsize::new(0));
    let chained = {
        let caught = caught.clone();
        promise.catch(move |error| {
            caught.fetch_add(1, Ordering::SeqCst);
            Err(error)
        })
    };

    assert_eq!(chained.await, Ok(4));
    assert_eq!(caught.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn every_subscriber_observes_the_same_settlement() {
    crate::init();
    let promise: LazyPromise<String, String> =
        LazyPromise::new(|resolve, _| resolve.resolve("shared".to_string()));

    let first = promise.subscribe();
    let second = first.clone();
    let third = first.map(|value| Ok(value.len()));

    assert_eq!(first.await, Ok("shared".to_string()));
    assert_eq!(second.await, Ok("shared".to_string()));
    assert_eq!(third.await, Ok(6));
}

#[tokio::test]
async fn chained_futures_chain_further() {
    crate::init();
    let promise: LazyPromise<u32, String> = LazyPromise::new(|resolve, _| resolve.resolve(1));

    let chained = promise
        .subscribe()
        .then(|value| Ok(value + 1), Err)
        .catch(|_| Ok(0))
        .map(|value| Ok(value * 100));

    assert_eq!(chained.await, Ok(200));
}
