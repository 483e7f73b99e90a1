use crate::promise::{deferred, Promise};

/// Creates a promise that is already fulfilled with `value`.
///
/// The promise settles before it is returned, so any handler attached to it
/// fires immediately.
///
/// # Examples
///
/// ```
/// use promise_lite::promise;
///
/// promise::fulfilled::<i32, String>(10).then(|n| assert_eq!(*n, 10));
/// ```
pub fn fulfilled<T: 'static, E: 'static>(value: T) -> Promise<T, E> {
    let (promise, fulfiller, _) = deferred();
    fulfiller.fulfill(value);
    promise
}
