use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use promise_lite::promise::{self, Outcome, Promise};
use promise_lite::timer::Timer;

fn ms(ms: u64) -> Duration {
    Duration::from_millis(ms)
}

#[test]
fn records_in_input_order() {
    let timer = Timer::new();

    let (first, fulfiller, _r1) = promise::deferred::<i32, String>();
    let (second, _f, rejecter) = promise::deferred::<i32, String>();

    // The rejection lands first; the records still follow input order.
    timer.schedule(ms(20), move || fulfiller.fulfill(1));
    timer.schedule(ms(10), move || rejecter.reject("err".to_string()));

    let records = Rc::new(RefCell::new(None));
    let observed = Rc::clone(&records);
    promise::all_settled(vec![first, second])
        .then(move |r| *observed.borrow_mut() = Some(r.clone()));

    timer.run();
    assert_eq!(
        *records.borrow(),
        Some(vec![
            Outcome::Fulfilled(1),
            Outcome::Rejected("err".to_string()),
        ])
    );
}

#[test]
fn never_rejects() {
    let combined = promise::all_settled(vec![
        promise::rejected::<i32, String>("a".to_string()),
        promise::rejected::<i32, String>("b".to_string()),
    ]);

    combined.catch(|_| unreachable!());

    let records = Rc::new(RefCell::new(None));
    let observed = Rc::clone(&records);
    combined.then(move |r| *observed.borrow_mut() = Some(r.clone()));

    assert_eq!(
        *records.borrow(),
        Some(vec![
            Outcome::Rejected("a".to_string()),
            Outcome::Rejected("b".to_string()),
        ])
    );
}

#[test]
fn empty_input_fulfills_immediately() {
    let inputs: Vec<Promise<i32, String>> = Vec::new();

    let records = Rc::new(RefCell::new(None));
    let observed = Rc::clone(&records);
    promise::all_settled(inputs).then(move |r| *observed.borrow_mut() = Some(r.clone()));

    assert_eq!(*records.borrow(), Some(Vec::new()));
}

#[test]
fn outcome_accessors() {
    let fulfilled: Outcome<i32, String> = Outcome::Fulfilled(1);
    let rejected: Outcome<i32, String> = Outcome::Rejected("no".to_string());

    assert!(fulfilled.is_fulfilled());
    assert!(!fulfilled.is_rejected());
    assert!(rejected.is_rejected());
    assert!(!rejected.is_fulfilled());
}
