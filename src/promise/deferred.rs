use crate::promise::{Fulfiller, Promise, Rejecter};

/// Creates an unsettled promise along with both of its settle capabilities.
///
/// This is the same pair of capabilities an executor receives from
/// [`Promise::new`], handed out directly instead of through a callback. The
/// capabilities can be cloned and moved wherever the settlement will
/// eventually happen, typically into a [`Timer`] callback.
///
/// [`Promise::new`]: struct.Promise.html#method.new
/// [`Timer`]: ../timer/struct.Timer.html
///
/// # Examples
///
/// ```
/// use promise_lite::promise;
///
/// let (p, fulfiller, _rejecter) = promise::deferred::<i32, String>();
///
/// fulfiller.fulfill(7);
/// p.then(|n| assert_eq!(*n, 7));
/// ```
pub fn deferred<T: 'static, E: 'static>() -> (Promise<T, E>, Fulfiller<T, E>, Rejecter<T, E>) {
    Promise::parts()
}
