//! Deferred single-resolution values.
//!
//! A [`Promise`] settles at most once, as either fulfilled or rejected, and
//! settlement is sticky: handlers attached after the fact still observe it.
//! The free functions in this module construct promises ([`deferred`],
//! [`fulfilled`], [`rejected`], [`pending`]) and combine many promises into
//! one ([`all`], [`race`], [`all_settled`], [`any`]).
//!
//! [`Promise`]: struct.Promise.html
//! [`deferred`]: fn.deferred.html
//! [`fulfilled`]: fn.fulfilled.html
//! [`rejected`]: fn.rejected.html
//! [`pending`]: fn.pending.html
//! [`all`]: fn.all.html
//! [`race`]: fn.race.html
//! [`all_settled`]: fn.all_settled.html
//! [`any`]: fn.any.html
//!
//! # Examples
//!
//! Combine two promises and observe the values in input order:
//!
//! ```
//! use promise_lite::promise;
//!
//! let first = promise::fulfilled::<i32, String>(1);
//! let second = promise::fulfilled::<i32, String>(2);
//!
//! promise::all(vec![first, second]).then(|values| {
//!     assert_eq!(values, &[1, 2]);
//! });
//! ```

pub use all::all;
pub use all_settled::all_settled;
pub use any::{any, AggregateError};
pub use deferred::deferred;
pub use fulfilled::fulfilled;
pub use outcome::Outcome;
pub use pending::pending;
pub use promise::{Fulfiller, Promise, Rejecter};
pub use promise_id::PromiseId;
pub use race::race;
pub use rejected::rejected;

mod all;
mod all_settled;
mod any;
mod deferred;
mod fulfilled;
mod outcome;
mod pending;
mod promise;
mod promise_id;
mod race;
mod rejected;
