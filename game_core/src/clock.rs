//! Frame timing for host loops.
//!
//! `step` never reads a clock itself; the host samples a [`FrameClock`] once
//! per frame and passes the resulting `dt` in.

use std::time::Instant;

use crate::Time;

/// Monotonic time source
pub trait TimeSource {
    /// Seconds since an arbitrary fixed origin
    fn now_secs(&self) -> f64;
}

/// Time source backed by `std::time::Instant`
#[derive(Debug, Clone, Copy)]
pub struct MonotonicTime {
    origin: Instant,
}

impl MonotonicTime {
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }
}

impl Default for MonotonicTime {
    fn default() -> Self {
        Self::new()
    }
}

impl TimeSource for MonotonicTime {
    fn now_secs(&self) -> f64 {
        self.origin.elapsed().as_secs_f64()
    }
}

/// Measures the elapsed time between consecutive frames
#[derive(Debug)]
pub struct FrameClock<T: TimeSource> {
    source: T,
    last: Option<f64>,
    now: f32,
}

impl<T: TimeSource> FrameClock<T> {
    pub fn new(source: T) -> Self {
        Self {
            source,
            last: None,
            now: 0.0,
        }
    }

    /// Sample the clock for a new frame.
    ///
    /// The first sample has nothing to measure against and yields `dt = 0`,
    /// as does any negative or non-finite interval.
    pub fn tick(&mut self) -> Time {
        let sample = self.source.now_secs();
        let dt = match self.last {
            Some(last) => sanitize_dt((sample - last) as f32),
            None => 0.0,
        };
        if sample.is_finite() {
            self.last = Some(sample);
        }
        self.now += dt;
        Time::new(dt, self.now)
    }
}

/// Zero out any delta that would produce an invalid displacement
pub fn sanitize_dt(dt: f32) -> f32 {
    if dt.is_finite() && dt > 0.0 {
        dt
    } else {
        if dt != 0.0 {
            log::trace!("discarding invalid frame delta {dt}");
        }
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    struct ManualTime(Cell<f64>);

    impl TimeSource for &ManualTime {
        fn now_secs(&self) -> f64 {
            self.0.get()
        }
    }

    #[test]
    fn test_first_tick_is_zero() {
        let source = ManualTime(Cell::new(5.0));
        let mut clock = FrameClock::new(&source);
        assert_eq!(clock.tick(), Time::new(0.0, 0.0));
    }

    #[test]
    fn test_tick_measures_interval() {
        let source = ManualTime(Cell::new(1.0));
        let mut clock = FrameClock::new(&source);
        clock.tick();

        source.0.set(1.25);
        let time = clock.tick();
        assert_eq!(time.dt, 0.25);
        assert_eq!(time.now, 0.25);

        source.0.set(1.5);
        assert_eq!(clock.tick().now, 0.5);
    }

    #[test]
    fn test_backwards_or_broken_source_yields_zero() {
        let source = ManualTime(Cell::new(2.0));
        let mut clock = FrameClock::new(&source);
        clock.tick();

        source.0.set(1.0);
        assert_eq!(clock.tick().dt, 0.0);

        source.0.set(f64::NAN);
        assert_eq!(clock.tick().dt, 0.0);

        // Recovers once the source is sane again
        source.0.set(1.5);
        assert_eq!(clock.tick().dt, 0.5);
    }

    #[test]
    fn test_sanitize_dt() {
        assert_eq!(sanitize_dt(0.016), 0.016);
        assert_eq!(sanitize_dt(0.0), 0.0);
        assert_eq!(sanitize_dt(-0.5), 0.0);
        assert_eq!(sanitize_dt(f32::NAN), 0.0);
        assert_eq!(sanitize_dt(f32::INFINITY), 0.0);
    }

    #[test]
    fn test_monotonic_time_advances() {
        let time = MonotonicTime::new();
        let a = time.now_secs();
        let b = time.now_secs();
        assert!(b >= a);
    }
}
