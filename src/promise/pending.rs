use crate::promise::{deferred, Promise};

/// Creates a promise that never settles.
///
/// Both settle capabilities are dropped before the promise is returned, so
/// no handler attached to it will ever fire.
///
/// # Examples
///
/// ```
/// use promise_lite::promise;
///
/// let forever = promise::pending::<i32, String>();
/// forever.then(|_| unreachable!());
/// ```
pub fn pending<T: 'static, E: 'static>() -> Promise<T, E> {
    let (promise, _fulfiller, _rejecter) = deferred();
    promise
}
