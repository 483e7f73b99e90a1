//! Prints the promise and timer trace log on the standard output.

use std::time::Duration;

use promise_lite::promise;
use promise_lite::timer::Timer;

fn main() {
    femme::start(log::LevelFilter::Trace).unwrap();

    let timer = Timer::new();

    let (value, fulfiller, _rejecter) = promise::deferred::<i32, String>();
    timer.schedule(Duration::from_millis(50), move || fulfiller.fulfill(42));

    value.then(|n| log::info!("settled with {}", n));

    timer.run();
}
