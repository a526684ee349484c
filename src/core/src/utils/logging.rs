use log::debug;
use std::time::Instant;

pub struct Logging;

impl Logging {
    /// Runs `action` and logs how long it took.
    pub fn estimate_result<T, F: FnOnce() -> T>(action: F, message: &str) -> T {
        let (result, elapsed) = TimeEstimation::estimate(action);

        debug!("{}, {} ms", message, elapsed);

        result
    }
}

pub struct TimeEstimation;

impl TimeEstimation {
    /// Result of `action` with the elapsed time in milliseconds.
    pub fn estimate<T, F: FnOnce() -> T>(action: F) -> (T, u128) {
        let now = Instant::now();

        let result = action();

        (result, now.elapsed().as_millis())
    }
}
