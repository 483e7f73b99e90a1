use std::convert::Infallible;

use crate::promise::{all, deferred, Outcome, Promise};

/// Combines promises into one that fulfills with every settlement record.
///
/// Unlike [`all`], the combined promise never rejects: once every input has
/// settled in either direction, it fulfills with one [`Outcome`] record per
/// input, in input order. `Infallible` in the error position makes the
/// never-rejects contract a type-level guarantee.
///
/// Each input is first mapped to a promise that converts its own rejection
/// into a fulfilled [`Outcome::Rejected`] record; [`all`] over the mapped
/// promises then cannot fast-fail, because no mapped promise can reject.
///
/// An empty input fulfills immediately with an empty vector.
///
/// [`all`]: fn.all.html
/// [`Outcome`]: enum.Outcome.html
/// [`Outcome::Rejected`]: enum.Outcome.html#variant.Rejected
///
/// # Examples
///
/// ```
/// use promise_lite::promise::{self, Outcome};
///
/// let ok = promise::fulfilled::<i32, String>(5);
/// let err = promise::rejected::<i32, String>("err".to_string());
///
/// promise::all_settled(vec![ok, err]).then(|records| {
///     assert_eq!(records[0], Outcome::Fulfilled(5));
///     assert_eq!(records[1], Outcome::Rejected("err".to_string()));
/// });
/// ```
pub fn all_settled<I, T, E>(promises: I) -> Promise<Vec<Outcome<T, E>>, Infallible>
where
    I: IntoIterator<Item = Promise<T, E>>,
    T: Clone + 'static,
    E: Clone + 'static,
{
    let mapped: Vec<Promise<Outcome<T, E>, Infallible>> = promises
        .into_iter()
        .map(|promise| {
            let (record, fulfiller, _rejecter) = deferred();

            {
                let fulfiller = fulfiller.clone();
                promise.then(move |value| fulfiller.fulfill(Outcome::Fulfilled(value.clone())));
            }
            promise.catch(move |reason| fulfiller.fulfill(Outcome::Rejected(reason.clone())));

            record
        })
        .collect();

    all(mapped)
}
