use std::cell::RefCell;
use std::cmp::Ordering;
use std::collections::BinaryHeap;
use std::fmt;
use std::rc::Rc;
use std::time::Duration;

use kv_log_macro::trace;

/// A virtual clock with a queue of scheduled callbacks.
///
/// The clock starts at zero and only moves when [`advance`] or [`run`] is
/// called. Callbacks fire in deadline order; callbacks sharing a deadline
/// fire in the order they were scheduled.
///
/// Cloning a `Timer` produces another handle to the same clock and queue.
///
/// [`advance`]: #method.advance
/// [`run`]: #method.run
///
/// # Examples
///
/// ```
/// use std::time::Duration;
///
/// use promise_lite::timer::Timer;
///
/// let timer = Timer::new();
/// timer.schedule(Duration::from_millis(3), || println!("fired"));
///
/// timer.advance(Duration::from_millis(2));
/// assert!(!timer.is_idle());
///
/// timer.advance(Duration::from_millis(1));
/// assert!(timer.is_idle());
/// ```
pub struct Timer {
    inner: Rc<RefCell<Inner>>,
}

struct Inner {
    now: Duration,
    sequence: u64,
    queue: BinaryHeap<Entry>,
}

struct Entry {
    deadline: Duration,
    sequence: u64,
    callback: Box<dyn FnOnce()>,
}

impl Timer {
    /// Creates a timer with the clock at zero and an empty queue.
    pub fn new() -> Timer {
        Timer {
            inner: Rc::new(RefCell::new(Inner {
                now: Duration::from_millis(0),
                sequence: 0,
                queue: BinaryHeap::new(),
            })),
        }
    }

    /// The current virtual time.
    pub fn now(&self) -> Duration {
        self.inner.borrow().now
    }

    /// Schedules `callback` to fire once `dur` has elapsed on the virtual
    /// clock.
    ///
    /// The deadline is measured from the current virtual time. A zero
    /// duration does not fire inline; the callback waits for the next
    /// [`advance`] or [`run`] like any other.
    ///
    /// [`advance`]: #method.advance
    /// [`run`]: #method.run
    pub fn schedule(&self, dur: Duration, callback: impl FnOnce() + 'static) {
        let mut inner = self.inner.borrow_mut();
        let deadline = inner.now + dur;
        let sequence = inner.sequence;
        inner.sequence += 1;

        let deadline_ms = deadline.as_millis() as u64;
        trace!("timer schedule", {
            deadline_ms: deadline_ms,
            sequence: sequence,
        });

        inner.queue.push(Entry {
            deadline,
            sequence,
            callback: Box::new(callback),
        });
    }

    /// Moves the clock forward by `dur`, firing every callback whose
    /// deadline falls within the window.
    ///
    /// Callbacks fire one at a time with the clock set to their own
    /// deadline, so a callback that schedules a new entry still inside the
    /// window sees that entry fire during the same call. Once the queue
    /// holds nothing due, the clock lands on the target time.
    pub fn advance(&self, dur: Duration) {
        let target = self.inner.borrow().now + dur;

        loop {
            let entry = {
                let mut inner = self.inner.borrow_mut();
                let due = inner
                    .queue
                    .peek()
                    .map_or(false, |entry| entry.deadline <= target);
                if !due {
                    break;
                }

                let entry = inner.queue.pop().unwrap();
                inner.now = entry.deadline;
                entry
            };

            let deadline_ms = entry.deadline.as_millis() as u64;
            let sequence = entry.sequence;
            trace!("timer fire", {
                deadline_ms: deadline_ms,
                sequence: sequence,
            });
            (entry.callback)();
        }

        self.inner.borrow_mut().now = target;
    }

    /// Fires every queued callback, including entries scheduled by the
    /// callbacks themselves, until the queue is empty.
    ///
    /// The clock ends at the deadline of the last callback fired.
    pub fn run(&self) {
        loop {
            let entry = {
                let mut inner = self.inner.borrow_mut();
                match inner.queue.pop() {
                    Some(entry) => {
                        inner.now = entry.deadline;
                        entry
                    }
                    None => break,
                }
            };

            let deadline_ms = entry.deadline.as_millis() as u64;
            let sequence = entry.sequence;
            trace!("timer fire", {
                deadline_ms: deadline_ms,
                sequence: sequence,
            });
            (entry.callback)();
        }
    }

    /// Returns `true` if no callbacks are queued.
    pub fn is_idle(&self) -> bool {
        self.inner.borrow().queue.is_empty()
    }
}

impl Default for Timer {
    fn default() -> Timer {
        Timer::new()
    }
}

impl Clone for Timer {
    fn clone(&self) -> Timer {
        Timer {
            inner: Rc::clone(&self.inner),
        }
    }
}

impl fmt::Debug for Timer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let inner = self.inner.borrow();
        f.debug_struct("Timer")
            .field("now", &inner.now)
            .field("pending", &inner.queue.len())
            .finish()
    }
}

// BinaryHeap is a max-heap; reversing the comparison yields the earliest
// deadline first, with the lower sequence breaking ties.
impl Ord for Entry {
    fn cmp(&self, other: &Entry) -> Ordering {
        other
            .deadline
            .cmp(&self.deadline)
            .then_with(|| other.sequence.cmp(&self.sequence))
    }
}

impl PartialOrd for Entry {
    fn partial_cmp(&self, other: &Entry) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for Entry {
    fn eq(&self, other: &Entry) -> bool {
        self.deadline == other.deadline && self.sequence == other.sequence
    }
}

impl Eq for Entry {}
