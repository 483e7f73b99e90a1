use std::cell::RefCell;
use std::fmt;
use std::mem;
use std::rc::Rc;

use kv_log_macro::trace;

use crate::promise::PromiseId;

/// A deferred value that settles at most once.
///
/// A promise starts out pending and transitions exactly once to either
/// fulfilled (with a value) or rejected (with a reason). The transition is
/// monotonic: once settled, a promise never changes state again, and any
/// further attempt to settle it is a silent no-op.
///
/// Settlement is sticky. A handler registered through [`then`] or [`catch`]
/// before settlement fires synchronously at settlement time; a handler
/// registered after settlement fires synchronously at registration time. No
/// handler can miss a settlement, and each handler fires at most once, only
/// with the value or reason matching the promise's final state. Any number
/// of handlers may be attached; they fire in attachment order.
///
/// `Promise` is a cheaply-cloneable handle: clones share the same underlying
/// state, so attaching a handler through one clone is visible through all of
/// them. The outcome of a promise is only observable through `then`/`catch`
/// registration; there is no blocking or panicking accessor.
///
/// [`then`]: #method.then
/// [`catch`]: #method.catch
///
/// # Examples
///
/// ```
/// use promise_lite::promise::Promise;
///
/// let answer: Promise<i32, String> = Promise::new(|fulfiller, _rejecter| {
///     fulfiller.fulfill(42);
///     Ok(())
/// });
///
/// answer.then(|n| assert_eq!(*n, 42));
/// ```
pub struct Promise<T, E> {
    shared: Rc<Shared<T, E>>,
}

/// The settle-as-success capability of a [`Promise`].
///
/// Handed to the executor by [`Promise::new`] and returned by [`deferred`].
/// The first call to [`fulfill`] wins; calls after the promise has settled
/// in either direction are silent no-ops.
///
/// [`Promise`]: struct.Promise.html
/// [`Promise::new`]: struct.Promise.html#method.new
/// [`deferred`]: fn.deferred.html
/// [`fulfill`]: #method.fulfill
pub struct Fulfiller<T, E> {
    shared: Rc<Shared<T, E>>,
}

/// The settle-as-failure capability of a [`Promise`].
///
/// The rejection-side counterpart of [`Fulfiller`].
///
/// [`Promise`]: struct.Promise.html
/// [`Fulfiller`]: struct.Fulfiller.html
pub struct Rejecter<T, E> {
    shared: Rc<Shared<T, E>>,
}

/// State shared between a promise and its settle capabilities.
struct Shared<T, E> {
    id: PromiseId,
    state: RefCell<State<T, E>>,
}

/// The settlement state machine.
///
/// Transitions only `Pending -> Fulfilled` or `Pending -> Rejected`. The
/// settled value/reason lives behind an `Rc` so that every handler observes
/// the same value by shared reference, with no borrow of the state cell held
/// while user code runs.
enum State<T, E> {
    Pending {
        on_fulfill: Vec<Box<dyn FnOnce(&T)>>,
        on_reject: Vec<Box<dyn FnOnce(&E)>>,
    },
    Fulfilled(Rc<T>),
    Rejected(Rc<E>),
}

impl<T: 'static, E: 'static> Promise<T, E> {
    /// Creates a promise and runs `executor` synchronously, exactly once,
    /// with the two capabilities that settle it.
    ///
    /// Returning `Err` from the executor rejects the promise with the error,
    /// so `?` inside the executor turns failures into rejections. If the
    /// executor has already settled the promise, the returned error is
    /// ignored like any other late settlement.
    ///
    /// # Examples
    ///
    /// ```
    /// use promise_lite::promise::Promise;
    ///
    /// let parsed: Promise<i32, std::num::ParseIntError> = Promise::new(|fulfiller, _| {
    ///     fulfiller.fulfill("42".parse()?);
    ///     Ok(())
    /// });
    ///
    /// parsed.then(|n| assert_eq!(*n, 42));
    /// ```
    pub fn new<F>(executor: F) -> Promise<T, E>
    where
        F: FnOnce(Fulfiller<T, E>, Rejecter<T, E>) -> Result<(), E>,
    {
        let (promise, fulfiller, rejecter) = Promise::parts();

        if let Err(reason) = executor(fulfiller, rejecter.clone()) {
            rejecter.reject(reason);
        }

        promise
    }

    /// Creates an unsettled promise along with both settle capabilities.
    pub(crate) fn parts() -> (Promise<T, E>, Fulfiller<T, E>, Rejecter<T, E>) {
        let id = PromiseId::generate();
        let raw_id = id.0;
        trace!("promise created", { promise_id: raw_id });

        let shared = Rc::new(Shared {
            id,
            state: RefCell::new(State::Pending {
                on_fulfill: Vec::new(),
                on_reject: Vec::new(),
            }),
        });

        let promise = Promise {
            shared: Rc::clone(&shared),
        };
        let fulfiller = Fulfiller {
            shared: Rc::clone(&shared),
        };
        let rejecter = Rejecter { shared };

        (promise, fulfiller, rejecter)
    }

    /// Returns the unique identifier of this promise.
    ///
    /// Clones of a promise handle report the same identifier.
    ///
    /// # Examples
    ///
    /// ```
    /// use promise_lite::promise;
    ///
    /// let p = promise::fulfilled::<i32, String>(1);
    /// assert_eq!(p.id(), p.clone().id());
    /// ```
    pub fn id(&self) -> PromiseId {
        self.shared.id
    }

    /// Registers a handler for the fulfillment value.
    ///
    /// If the promise is already fulfilled, `callback` fires immediately with
    /// the value; if it is still pending, `callback` fires when and if the
    /// promise fulfills. On a rejected promise the handler is discarded.
    ///
    /// Returns a clone of the same promise handle, so registration chains:
    /// `promise.then(..).catch(..)`. This is attachment chaining, not value
    /// transformation; every handler in the chain observes the settlement of
    /// this one promise.
    ///
    /// # Examples
    ///
    /// ```
    /// use promise_lite::promise;
    ///
    /// promise::fulfilled::<i32, String>(3)
    ///     .then(|n| assert_eq!(*n, 3))
    ///     .catch(|_| unreachable!());
    /// ```
    pub fn then(&self, callback: impl FnOnce(&T) + 'static) -> Promise<T, E> {
        let value = {
            let mut state = self.shared.state.borrow_mut();
            match &mut *state {
                State::Pending { on_fulfill, .. } => {
                    on_fulfill.push(Box::new(callback));
                    return self.clone();
                }
                State::Fulfilled(value) => Some(Rc::clone(value)),
                State::Rejected(_) => None,
            }
        };

        if let Some(value) = value {
            callback(&value);
        }
        self.clone()
    }

    /// Registers a handler for the rejection reason.
    ///
    /// The rejection-side counterpart of [`then`]: fires immediately on an
    /// already-rejected promise, fires at settlement time on a pending one,
    /// and is discarded on a fulfilled one.
    ///
    /// [`then`]: #method.then
    ///
    /// # Examples
    ///
    /// ```
    /// use promise_lite::promise;
    ///
    /// promise::rejected::<i32, String>("oops".to_string())
    ///     .catch(|reason| assert_eq!(reason, "oops"));
    /// ```
    pub fn catch(&self, callback: impl FnOnce(&E) + 'static) -> Promise<T, E> {
        let reason = {
            let mut state = self.shared.state.borrow_mut();
            match &mut *state {
                State::Pending { on_reject, .. } => {
                    on_reject.push(Box::new(callback));
                    return self.clone();
                }
                State::Rejected(reason) => Some(Rc::clone(reason)),
                State::Fulfilled(_) => None,
            }
        };

        if let Some(reason) = reason {
            callback(&reason);
        }
        self.clone()
    }
}

impl<T, E> Shared<T, E> {
    /// Transitions `Pending -> Fulfilled` and drains the fulfill handlers.
    ///
    /// No borrow of the state cell is held while handlers run, so a handler
    /// is free to attach further handlers or settle other promises.
    fn fulfill(&self, value: T) {
        let raw_id = self.id.0;

        let fired = {
            let mut state = self.state.borrow_mut();
            match &mut *state {
                State::Pending { on_fulfill, .. } => {
                    let callbacks = mem::take(on_fulfill);
                    let value = Rc::new(value);
                    *state = State::Fulfilled(Rc::clone(&value));
                    Some((callbacks, value))
                }
                _ => None,
            }
        };

        match fired {
            Some((callbacks, value)) => {
                let handlers = callbacks.len();
                trace!("promise fulfilled", { promise_id: raw_id, handlers: handlers });
                for callback in callbacks {
                    callback(&value);
                }
            }
            None => trace!("late fulfill ignored", { promise_id: raw_id }),
        }
    }

    /// Transitions `Pending -> Rejected` and drains the reject handlers.
    fn reject(&self, reason: E) {
        let raw_id = self.id.0;

        let fired = {
            let mut state = self.state.borrow_mut();
            match &mut *state {
                State::Pending { on_reject, .. } => {
                    let callbacks = mem::take(on_reject);
                    let reason = Rc::new(reason);
                    *state = State::Rejected(Rc::clone(&reason));
                    Some((callbacks, reason))
                }
                _ => None,
            }
        };

        match fired {
            Some((callbacks, reason)) => {
                let handlers = callbacks.len();
                trace!("promise rejected", { promise_id: raw_id, handlers: handlers });
                for callback in callbacks {
                    callback(&reason);
                }
            }
            None => trace!("late reject ignored", { promise_id: raw_id }),
        }
    }
}

impl<T, E> Fulfiller<T, E> {
    /// Fulfills the promise with `value`.
    ///
    /// If the promise is still pending, it transitions to fulfilled and every
    /// registered fulfill handler fires with a reference to `value`, in
    /// attachment order. If it has already settled, the call is a silent
    /// no-op and `value` is dropped.
    ///
    /// # Examples
    ///
    /// ```
    /// use promise_lite::promise;
    ///
    /// let (p, fulfiller, _) = promise::deferred::<i32, String>();
    /// fulfiller.fulfill(1);
    /// fulfiller.fulfill(2); // ignored
    ///
    /// p.then(|n| assert_eq!(*n, 1));
    /// ```
    pub fn fulfill(&self, value: T) {
        self.shared.fulfill(value);
    }
}

impl<T, E> Rejecter<T, E> {
    /// Rejects the promise with `reason`.
    ///
    /// The rejection-side counterpart of [`Fulfiller::fulfill`]: first
    /// settlement wins, later calls are silent no-ops.
    ///
    /// [`Fulfiller::fulfill`]: struct.Fulfiller.html#method.fulfill
    pub fn reject(&self, reason: E) {
        self.shared.reject(reason);
    }
}

impl<T, E> Clone for Promise<T, E> {
    fn clone(&self) -> Promise<T, E> {
        Promise {
            shared: Rc::clone(&self.shared),
        }
    }
}

impl<T, E> Clone for Fulfiller<T, E> {
    fn clone(&self) -> Fulfiller<T, E> {
        Fulfiller {
            shared: Rc::clone(&self.shared),
        }
    }
}

impl<T, E> Clone for Rejecter<T, E> {
    fn clone(&self) -> Rejecter<T, E> {
        Rejecter {
            shared: Rc::clone(&self.shared),
        }
    }
}

impl<T, E> fmt::Debug for Promise<T, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Promise")
            .field("id", &self.shared.id)
            .field("state", &self.shared.state_name())
            .finish()
    }
}

impl<T, E> fmt::Debug for Fulfiller<T, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Fulfiller")
            .field("promise_id", &self.shared.id)
            .finish()
    }
}

impl<T, E> fmt::Debug for Rejecter<T, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Rejecter")
            .field("promise_id", &self.shared.id)
            .finish()
    }
}

impl<T, E> Shared<T, E> {
    fn state_name(&self) -> &'static str {
        match &*self.state.borrow() {
            State::Pending { .. } => "Pending",
            State::Fulfilled(_) => "Fulfilled",
            State::Rejected(_) => "Rejected",
        }
    }
}
