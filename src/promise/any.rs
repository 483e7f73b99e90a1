use std::cell::RefCell;
use std::error::Error;
use std::fmt;
use std::mem;
use std::rc::Rc;

use crate::promise::{deferred, Promise};

/// Fulfills with the value of the first input to fulfill.
///
/// Any one fulfillment wins; the outcomes of the remaining inputs are
/// ignored. The combined promise rejects only if every input rejects, with
/// an [`AggregateError`] collecting all rejection reasons in the order the
/// rejections were observed (completion order, not input order).
///
/// An empty input rejects immediately with an empty [`AggregateError`]:
/// with zero inputs, "every input has rejected" holds vacuously.
///
/// [`AggregateError`]: struct.AggregateError.html
///
/// # Examples
///
/// ```
/// use promise_lite::promise;
///
/// let failed = promise::rejected::<i32, String>("a".to_string());
/// let succeeded = promise::fulfilled::<i32, String>(3);
///
/// promise::any(vec![failed, succeeded]).then(|n| assert_eq!(*n, 3));
/// ```
pub fn any<I, T, E>(promises: I) -> Promise<T, AggregateError<E>>
where
    I: IntoIterator<Item = Promise<T, E>>,
    T: Clone + 'static,
    E: Clone + 'static,
{
    let promises: Vec<_> = promises.into_iter().collect();
    let (combined, fulfiller, rejecter) = deferred();

    let total = promises.len();
    if total == 0 {
        rejecter.reject(AggregateError::new(Vec::new()));
        return combined;
    }

    let reasons = Rc::new(RefCell::new(Vec::new()));

    for promise in &promises {
        let fulfiller = fulfiller.clone();
        promise.then(move |value| fulfiller.fulfill(value.clone()));

        let reasons = Rc::clone(&reasons);
        let rejecter = rejecter.clone();
        promise.catch(move |reason| {
            // Collect under the borrow, reject after releasing it.
            let complete = {
                let mut reasons = reasons.borrow_mut();
                reasons.push(reason.clone());
                if reasons.len() == total {
                    Some(mem::take(&mut *reasons))
                } else {
                    None
                }
            };

            if let Some(reasons) = complete {
                rejecter.reject(AggregateError::new(reasons));
            }
        });
    }

    combined
}

/// The rejection reason of [`any`]: every input rejected.
///
/// Holds each input's rejection reason in the order the rejections were
/// observed.
///
/// [`any`]: fn.any.html
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AggregateError<E> {
    reasons: Vec<E>,
}

impl<E> AggregateError<E> {
    pub(crate) fn new(reasons: Vec<E>) -> AggregateError<E> {
        AggregateError { reasons }
    }

    /// The collected rejection reasons, in completion order.
    pub fn reasons(&self) -> &[E] {
        &self.reasons
    }

    /// Consumes the error and returns the collected reasons.
    pub fn into_reasons(self) -> Vec<E> {
        self.reasons
    }
}

impl<E: fmt::Debug> Error for AggregateError<E> {}

impl<E> fmt::Display for AggregateError<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        "all promises were rejected".fmt(f)
    }
}
