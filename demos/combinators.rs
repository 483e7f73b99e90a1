//! Runs every combinator over a set of timer-driven promises.

use std::time::Duration;

use promise_lite::promise;
use promise_lite::timer::Timer;

fn ms(ms: u64) -> Duration {
    Duration::from_millis(ms)
}

fn main() {
    let timer = Timer::new();

    let (apples, fulfill_apples, _r1) = promise::deferred::<i32, String>();
    let (pears, fulfill_pears, _r2) = promise::deferred::<i32, String>();
    let (plums, _f, reject_plums) = promise::deferred::<i32, String>();

    timer.schedule(ms(30), move || fulfill_apples.fulfill(3));
    timer.schedule(ms(10), move || fulfill_pears.fulfill(5));
    timer.schedule(ms(20), move || reject_plums.reject("rotten".to_string()));

    promise::all(vec![apples.clone(), pears.clone()])
        .then(|values| println!("all: {:?}", values));

    promise::race(vec![apples.clone(), pears.clone()])
        .then(|n| println!("race: {}", n));

    promise::all_settled(vec![apples.clone(), plums.clone()])
        .then(|records| println!("all_settled: {:?}", records));

    promise::any(vec![plums, apples])
        .then(|n| println!("any: {}", n));

    timer.run();
}
