//! Deterministic virtual-time scheduling.
//!
//! A [`Timer`] holds a virtual clock and a queue of scheduled callbacks.
//! Nothing runs on its own: time only moves when [`advance`] or [`run`] is
//! called, which makes timing-dependent code fully deterministic under test.
//! [`delay`] bridges the timer into the promise world.
//!
//! [`Timer`]: struct.Timer.html
//! [`advance`]: struct.Timer.html#method.advance
//! [`run`]: struct.Timer.html#method.run
//! [`delay`]: fn.delay.html
//!
//! # Examples
//!
//! Schedule two callbacks and run the clock forward:
//!
//! ```
//! use std::time::Duration;
//!
//! use promise_lite::timer::Timer;
//!
//! let timer = Timer::new();
//! timer.schedule(Duration::from_millis(10), || println!("second"));
//! timer.schedule(Duration::from_millis(5), || println!("first"));
//!
//! timer.run();
//! assert!(timer.is_idle());
//! ```

pub use delay::delay;
pub use timer::Timer;

mod delay;
mod timer;
