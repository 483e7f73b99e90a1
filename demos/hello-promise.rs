//! Settles a promise through the timer and prints the value.

use std::time::Duration;

use promise_lite::promise;
use promise_lite::timer::Timer;

fn main() {
    let timer = Timer::new();

    let (greeting, fulfiller, _rejecter) = promise::deferred::<String, String>();
    timer.schedule(Duration::from_millis(100), move || {
        fulfiller.fulfill("Hello, world!".to_string());
    });

    greeting.then(|message| println!("{}", message));

    timer.run();
}
