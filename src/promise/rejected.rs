use crate::promise::{deferred, Promise};

/// Creates a promise that is already rejected with `reason`.
///
/// The rejection-side counterpart of [`fulfilled`].
///
/// [`fulfilled`]: fn.fulfilled.html
///
/// # Examples
///
/// ```
/// use promise_lite::promise;
///
/// promise::rejected::<i32, String>("no".to_string())
///     .catch(|reason| assert_eq!(reason, "no"));
/// ```
pub fn rejected<T: 'static, E: 'static>(reason: E) -> Promise<T, E> {
    let (promise, _, rejecter) = deferred();
    rejecter.reject(reason);
    promise
}
