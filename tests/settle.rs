use std::cell::{Cell, RefCell};
use std::rc::Rc;

use promise_lite::promise::{self, Promise};

#[test]
fn smoke() {
    let (p, fulfiller, _) = promise::deferred::<i32, String>();

    let seen = Rc::new(Cell::new(0));
    let observed = Rc::clone(&seen);
    p.then(move |n| observed.set(*n));

    fulfiller.fulfill(7);
    assert_eq!(seen.get(), 7);
}

#[test]
fn first_settlement_wins() {
    let (p, fulfiller, rejecter) = promise::deferred::<i32, String>();

    let value = Rc::new(Cell::new(0));
    let failed = Rc::new(Cell::new(false));

    let observed = Rc::clone(&value);
    p.then(move |n| observed.set(*n));
    let observed = Rc::clone(&failed);
    p.catch(move |_| observed.set(true));

    fulfiller.fulfill(1);
    rejecter.reject("too late".to_string());
    fulfiller.fulfill(2);

    assert_eq!(value.get(), 1);
    assert!(!failed.get());
}

#[test]
fn handlers_attached_late_still_fire() {
    let p = promise::fulfilled::<i32, String>(5);

    let seen = Rc::new(Cell::new(0));
    let observed = Rc::clone(&seen);
    p.then(move |n| observed.set(*n));

    assert_eq!(seen.get(), 5);
}

#[test]
fn handlers_fire_in_attachment_order() {
    let (p, fulfiller, _) = promise::deferred::<i32, String>();

    let order = Rc::new(RefCell::new(Vec::new()));
    for label in &["first", "second", "third"] {
        let order = Rc::clone(&order);
        let label = *label;
        p.then(move |_| order.borrow_mut().push(label));
    }

    fulfiller.fulfill(0);
    assert_eq!(*order.borrow(), vec!["first", "second", "third"]);
}

#[test]
fn every_subscriber_observes_the_value() {
    let (p, fulfiller, _) = promise::deferred::<String, String>();

    let total = Rc::new(Cell::new(0));
    for _ in 0..4 {
        let total = Rc::clone(&total);
        p.then(move |s| total.set(total.get() + s.len()));
    }

    fulfiller.fulfill("abc".to_string());
    assert_eq!(total.get(), 12);
}

#[test]
fn opposite_handlers_are_discarded() {
    let fulfilled = promise::fulfilled::<i32, String>(1);
    fulfilled.catch(|_| unreachable!());

    let rejected = promise::rejected::<i32, String>("no".to_string());
    rejected.then(|_| unreachable!());
}

#[test]
fn pending_never_settles() {
    let p = promise::pending::<i32, String>();
    p.then(|_| unreachable!());
    p.catch(|_| unreachable!());
}

#[test]
fn executor_error_rejects() {
    let p: Promise<i32, String> = Promise::new(|_, _| Err("exploded".to_string()));

    let reason = Rc::new(RefCell::new(None));
    let observed = Rc::clone(&reason);
    p.catch(move |r| *observed.borrow_mut() = Some(r.clone()));

    assert_eq!(*reason.borrow(), Some("exploded".to_string()));
}

#[test]
fn executor_question_mark_rejects() {
    let p: Promise<i32, std::num::ParseIntError> = Promise::new(|fulfiller, _| {
        fulfiller.fulfill("not a number".parse()?);
        Ok(())
    });

    let failed = Rc::new(Cell::new(false));
    let observed = Rc::clone(&failed);
    p.catch(move |_| observed.set(true));

    assert!(failed.get());
}

#[test]
fn executor_error_after_settlement_is_ignored() {
    let p: Promise<i32, String> = Promise::new(|fulfiller, _| {
        fulfiller.fulfill(3);
        Err("already settled".to_string())
    });

    let seen = Rc::new(Cell::new(0));
    let observed = Rc::clone(&seen);
    p.then(move |n| observed.set(*n));
    p.catch(|_| unreachable!());

    assert_eq!(seen.get(), 3);
}

#[test]
fn handlers_can_attach_handlers() {
    let (p, fulfiller, _) = promise::deferred::<i32, String>();

    let seen = Rc::new(Cell::new(0));
    let observed = Rc::clone(&seen);
    let same = p.clone();
    p.then(move |_| {
        same.then(move |n| observed.set(*n));
    });

    fulfiller.fulfill(9);
    assert_eq!(seen.get(), 9);
}

#[test]
fn handlers_can_settle_other_promises() {
    let (a, fulfill_a, _) = promise::deferred::<i32, String>();
    let (b, fulfill_b, _) = promise::deferred::<i32, String>();

    a.then(move |n| fulfill_b.fulfill(n + 1));

    let seen = Rc::new(Cell::new(0));
    let observed = Rc::clone(&seen);
    b.then(move |n| observed.set(*n));

    fulfill_a.fulfill(1);
    assert_eq!(seen.get(), 2);
}

#[test]
fn chaining_returns_the_same_promise() {
    let p = promise::fulfilled::<i32, String>(1);
    let q = p.then(|_| {}).catch(|_| {});

    assert_eq!(p.id(), q.id());
}

#[test]
fn clones_share_settlement() {
    let (p, fulfiller, _) = promise::deferred::<i32, String>();
    let clone = p.clone();

    let seen = Rc::new(Cell::new(0));
    let observed = Rc::clone(&seen);
    clone.then(move |n| observed.set(*n));

    fulfiller.fulfill(4);
    assert_eq!(seen.get(), 4);

    let late = Rc::new(Cell::new(0));
    let observed = Rc::clone(&late);
    p.then(move |n| observed.set(*n));
    assert_eq!(late.get(), 4);
}
