use crate::promise::{deferred, Promise};

/// Settles with the outcome of whichever input settles first.
///
/// The first settlement of any kind wins, in either direction. The other
/// inputs keep running; their eventual settlements land on an
/// already-settled promise and are ignored.
///
/// An empty input never settles. This matches the standard race-on-nothing
/// semantics and is intentional: there is no settlement to forward, so the
/// combined promise stays pending forever.
///
/// # Examples
///
/// ```
/// use promise_lite::promise;
///
/// let slow = promise::pending::<i32, String>();
/// let fast = promise::fulfilled(2);
///
/// promise::race(vec![slow, fast]).then(|n| assert_eq!(*n, 2));
/// ```
pub fn race<I, T, E>(promises: I) -> Promise<T, E>
where
    I: IntoIterator<Item = Promise<T, E>>,
    T: Clone + 'static,
    E: Clone + 'static,
{
    let (combined, fulfiller, rejecter) = deferred();

    for promise in promises {
        let fulfiller = fulfiller.clone();
        promise.then(move |value| fulfiller.fulfill(value.clone()));

        let rejecter = rejecter.clone();
        promise.catch(move |reason| rejecter.reject(reason.clone()));
    }

    combined
}
