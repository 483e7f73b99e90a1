use std::convert::Infallible;
use std::time::Duration;

use crate::promise::{deferred, Promise};
use crate::timer::Timer;

/// Returns a promise that fulfills once `dur` has elapsed on `timer`.
///
/// The promise cannot reject; `Infallible` in the error position makes that
/// a type-level guarantee. Fulfillment happens during the [`advance`] or
/// [`run`] call that reaches the deadline.
///
/// [`advance`]: struct.Timer.html#method.advance
/// [`run`]: struct.Timer.html#method.run
///
/// # Examples
///
/// ```
/// use std::time::Duration;
///
/// use promise_lite::timer::{self, Timer};
///
/// let clock = Timer::new();
/// timer::delay(&clock, Duration::from_millis(5)).then(|_| println!("done"));
///
/// clock.advance(Duration::from_millis(5));
/// ```
pub fn delay(timer: &Timer, dur: Duration) -> Promise<(), Infallible> {
    let (promise, fulfiller, _rejecter) = deferred();
    timer.schedule(dur, move || fulfiller.fulfill(()));
    promise
}
