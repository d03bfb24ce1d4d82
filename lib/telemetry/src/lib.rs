#[macro_use]
extern crate lazy_static;
#[macro_use]
extern crate prometheus;

use std::convert::Infallible;

use prometheus::{Encoder, Histogram, HistogramVec, IntCounter, IntCounterVec, TextEncoder};

lazy_static! {
    static ref SUCCESS: IntCounterVec = register_int_counter_vec!(
        "success_counter",
        "Success Count",
        &["app_layer", "class_function"]
    )
    .unwrap();
    static ref FAILURE: IntCounterVec = register_int_counter_vec!(
        "failure_counter",
        "Failure Count",
        &["app_layer", "class_function"]
    )
    .unwrap();
    static ref TIMER: HistogramVec =
        register_histogram_vec!("timer", "Duration", &["app_layer", "class_function"]).unwrap();
}

// This trait allows certain classes of errors to not be considered failures
pub trait IsErr {
    fn is_err(&self) -> bool {
        true
    }
}

impl IsErr for Infallible {
    fn is_err(&self) -> bool {
        false
    }
}

#[derive(Clone)]
pub struct Measure {
    success: IntCounter,
    failure: IntCounter,
    timer: Histogram,
}

impl Measure {
    pub fn new(layer: &str, function: &str) -> Measure {
        Measure {
            success: SUCCESS.with_label_values(&[layer, function]),
            failure: FAILURE.with_label_values(&[layer, function]),
            timer: TIMER.with_label_values(&[layer, function]),
        }
    }

    pub fn stats<F, T, E>(&self, inner: F) -> Result<T, E>
    where
        F: FnOnce() -> Result<T, E>,
        E: IsErr,
    {
        let timer = self.timer.start_timer();
        let r = inner();
        timer.observe_duration();
        match &r {
            Ok(_) => self.success.inc(),
            Err(e) if !e.is_err() => self.success.inc(),
            Err(_) => self.failure.inc(),
        }
        r
    }
}

pub fn encode() -> Result<String, Box<dyn std::error::Error>> {
    let mut buffer = Vec::new();
    let encoder = TextEncoder::new();
    let metric_families = prometheus::gather();
    encoder.encode(&metric_families, &mut buffer)?;
    Ok(String::from_utf8(buffer)?)
}

#[cfg(test)]
mod tests {
    use std::convert::Infallible;
    use std::thread;
    use std::time::Duration;

    use super::*;

    enum TestError {
        Fatal,
        Recoverable,
    }

    impl IsErr for TestError {
        fn is_err(&self) -> bool {
            match self {
                Self::Fatal => true,
                Self::Recoverable => false,
            }
        }
    }

    fn assert_counts(layer: &str, function: &str, success: i64, failure: i64) {
        assert_eq!(SUCCESS.with_label_values(&[layer, function]).get(), success);
        assert_eq!(FAILURE.with_label_values(&[layer, function]).get(), failure);
        assert_eq!(
            TIMER
                .with_label_values(&[layer, function])
                .get_sample_count(),
            1
        );
    }

    #[test]
    fn test_success() {
        let layer = "layer";
        let function = "test_success";

        let m = Measure::new(layer, function);

        let _ = m.stats(|| {
            thread::sleep(Duration::from_millis(1100));
            Ok::<_, Infallible>("")
        });

        assert_counts(layer, function, 1, 0);
        assert_eq!(
            TIMER
                .with_label_values(&[layer, function])
                .get_sample_sum()
                .round() as i64,
            1
        );
    }

    #[test]
    fn test_failure() {
        let layer = "layer";
        let function = "test_failure";

        let m = Measure::new(layer, function);

        let _ = m.stats(|| Err::<(), _>(TestError::Fatal));

        assert_counts(layer, function, 0, 1);
    }

    #[test]
    fn test_recoverable() {
        let layer = "layer";
        let function = "test_recoverable";

        let m = Measure::new(layer, function);

        let _ = m.stats(|| Err::<(), _>(TestError::Recoverable));

        assert_counts(layer, function, 1, 0);
    }

    #[test]
    fn test_encode() -> Result<(), Box<dyn std::error::Error>> {
        let m = Measure::new("layer", "test_encode");
        m.stats(|| Ok::<_, Infallible>(()))?;

        let text = encode()?;
        let expected = "success_counter{app_layer=\"layer\",class_function=\"test_encode\"} 1";
        assert!(text.contains(expected));
        Ok(())
    }
}
