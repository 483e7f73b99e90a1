//! Single-resolution promises for single-threaded, callback-driven code.
//!
//! A [`Promise`] is a value that may not have been produced yet. It settles
//! at most once, either fulfilled with a value or rejected with a reason, and
//! every handler registered through [`then`] and [`catch`] observes that one
//! settlement: handlers registered before the promise settles fire at
//! settlement time, handlers registered after it settles fire immediately.
//!
//! The [`promise`] module also provides the combinators that compose many
//! promises into one ([`all`], [`race`], [`all_settled`], [`any`]), and the
//! [`timer`] module provides the deterministic timer queue that stands in for
//! a host scheduler, so every interleaving of settlements can be replayed
//! exactly in tests.
//!
//! [`Promise`]: promise/struct.Promise.html
//! [`then`]: promise/struct.Promise.html#method.then
//! [`catch`]: promise/struct.Promise.html#method.catch
//! [`promise`]: promise/index.html
//! [`all`]: promise/fn.all.html
//! [`race`]: promise/fn.race.html
//! [`all_settled`]: promise/fn.all_settled.html
//! [`any`]: promise/fn.any.html
//! [`timer`]: timer/index.html
//!
//! # Examples
//!
//! Settle a promise through the timer and observe the value:
//!
//! ```
//! use std::time::Duration;
//!
//! use promise_lite::promise;
//! use promise_lite::timer::Timer;
//!
//! let timer = Timer::new();
//!
//! let (apples, fulfiller, _) = promise::deferred::<i32, String>();
//! timer.schedule(Duration::from_millis(10), move || fulfiller.fulfill(3));
//!
//! apples.then(|n| println!("{} apples", n));
//! timer.run();
//! ```

#![warn(missing_docs, missing_debug_implementations, rust_2018_idioms)]
#![allow(clippy::module_inception)]

pub mod promise;
pub mod timer;
