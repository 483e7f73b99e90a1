use std::cell::{Cell, RefCell};
use std::rc::Rc;

use crate::promise::{deferred, Promise};

/// Combines promises into one that fulfills with every value, in input order.
///
/// The combined promise fulfills once every input has fulfilled, with the
/// values ordered by input position, not by completion order. It rejects as
/// soon as any input rejects, with that input's reason, without waiting for
/// the remaining inputs; their later settlements land on an already-settled
/// promise and are ignored.
///
/// An empty input fulfills immediately with an empty vector.
///
/// # Examples
///
/// ```
/// use promise_lite::promise;
///
/// let first = promise::fulfilled::<i32, String>(1);
/// let second = promise::fulfilled::<i32, String>(2);
///
/// promise::all(vec![first, second]).then(|values| {
///     assert_eq!(values, &[1, 2]);
/// });
/// ```
pub fn all<I, T, E>(promises: I) -> Promise<Vec<T>, E>
where
    I: IntoIterator<Item = Promise<T, E>>,
    T: Clone + 'static,
    E: Clone + 'static,
{
    let promises: Vec<_> = promises.into_iter().collect();
    let (combined, fulfiller, rejecter) = deferred();

    let total = promises.len();
    if total == 0 {
        fulfiller.fulfill(Vec::new());
        return combined;
    }

    // One slot per input, indexed by input position, plus a fill count so
    // completion is detected without rescanning the slots.
    let slots: Rc<RefCell<Vec<Option<T>>>> = Rc::new(RefCell::new(vec![None; total]));
    let filled = Rc::new(Cell::new(0));

    for (index, promise) in promises.iter().enumerate() {
        let slots = Rc::clone(&slots);
        let filled = Rc::clone(&filled);
        let fulfiller = fulfiller.clone();
        promise.then(move |value| {
            slots.borrow_mut()[index] = Some(value.clone());
            filled.set(filled.get() + 1);

            if filled.get() == total {
                let values: Vec<T> = slots
                    .borrow_mut()
                    .iter_mut()
                    .map(|slot| slot.take().unwrap())
                    .collect();
                fulfiller.fulfill(values);
            }
        });

        let rejecter = rejecter.clone();
        promise.catch(move |reason| rejecter.reject(reason.clone()));
    }

    combined
}
