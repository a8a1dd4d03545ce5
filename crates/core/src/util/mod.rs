pub mod vec2d;

/// A macro to measure the evaluation time of an expression. Wraps an
/// expression, logs how long it took to evaluate, and returns the value of
/// the expression.
#[macro_export]
macro_rules! timed {
    ($label:expr, $ex:expr) => {
        $crate::timed!($label, log::Level::Debug, $ex)
    };
    ($label:expr, $log_level:expr, $ex:expr) => {{
        let now = std::time::Instant::now();
        let value = $ex;
        let elapsed = now.elapsed();
        log::log!($log_level, "{} took {} ms", $label, elapsed.as_millis());
        value
    }};
}

/// Calculate the number of cells within `range` steps of a center cell,
/// including the center. Range 0 means 1 cell, 1 is 7 cells, 2 is 19, etc.
pub fn area_len(range: usize) -> usize {
    // We'll always have 3r^2+3r+1 cells (a reduction of a geometric sum).
    // f(0) = 1, and we add 6r cells for every step after that, so:
    // 1, (+6) 7, (+12) 19, (+18) 37, ...
    3 * range * range + 3 * range + 1
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_area_len() {
        assert_eq!(area_len(0), 1);
        assert_eq!(area_len(1), 7);
        assert_eq!(area_len(2), 19);
        assert_eq!(area_len(3), 37);
    }

    #[test]
    fn test_timed_returns_value() {
        let value = timed!("addition", log::Level::Trace, 2 + 2);
        assert_eq!(value, 4);
    }
}
