use std::cell::{Cell, RefCell};
use std::rc::Rc;
use std::time::Duration;

use promise_lite::promise::{self, Promise};
use promise_lite::timer::Timer;

fn ms(ms: u64) -> Duration {
    Duration::from_millis(ms)
}

#[test]
fn first_fulfillment_wins() {
    let timer = Timer::new();

    let (slow, slow_fulfiller, _r1) = promise::deferred::<i32, String>();
    let (fast, fast_fulfiller, _r2) = promise::deferred::<i32, String>();

    timer.schedule(ms(20), move || slow_fulfiller.fulfill(1));
    timer.schedule(ms(10), move || fast_fulfiller.fulfill(2));

    let seen = Rc::new(Cell::new(0));
    let observed = Rc::clone(&seen);
    promise::race(vec![slow, fast]).then(move |n| observed.set(*n));

    timer.run();
    assert_eq!(seen.get(), 2);
}

#[test]
fn first_rejection_wins() {
    let timer = Timer::new();

    let (winner, _f, rejecter) = promise::deferred::<i32, String>();
    let (loser, fulfiller, _r) = promise::deferred::<i32, String>();

    timer.schedule(ms(5), move || rejecter.reject("lost".to_string()));
    timer.schedule(ms(10), move || fulfiller.fulfill(1));

    let reason = Rc::new(RefCell::new(None));
    let observed = Rc::clone(&reason);
    promise::race(vec![winner, loser])
        .then(|_| unreachable!())
        .catch(move |r| *observed.borrow_mut() = Some(r.clone()));

    timer.run();
    assert_eq!(*reason.borrow(), Some("lost".to_string()));
}

#[test]
fn later_settlements_are_ignored() {
    let combined = promise::race(vec![
        promise::fulfilled::<i32, String>(1),
        promise::fulfilled::<i32, String>(2),
        promise::rejected::<i32, String>("late".to_string()),
    ]);

    let seen = Rc::new(Cell::new(0));
    let observed = Rc::clone(&seen);
    combined.then(move |n| observed.set(*n));
    combined.catch(|_| unreachable!());

    assert_eq!(seen.get(), 1);
}

#[test]
fn empty_input_never_settles() {
    let inputs: Vec<Promise<i32, String>> = Vec::new();

    let combined = promise::race(inputs);
    combined.then(|_| unreachable!());
    combined.catch(|_| unreachable!());
}
