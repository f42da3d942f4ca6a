use std::time::{SystemTime, UNIX_EPOCH};

/// Injected wall-clock capability for diurnal angle easing.
///
/// Kept behind a trait so the parabolic hour-of-day mapping is testable with
/// fixed synthetic times.
pub trait TimeSource: Send + Sync {
    /// Fractional hour of day in `[0, 24)`.
    fn hour_of_day(&self) -> f64;
}

/// System wall clock (UTC hour of day).
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemClock;

impl TimeSource for SystemClock {
    fn hour_of_day(&self) -> f64 {
        let secs = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_secs_f64())
            .unwrap_or(0.0);
        (secs % 86_400.0) / 3_600.0
    }
}

/// A clock frozen at a fixed hour; the test and demo companion to
/// [`SystemClock`].
#[derive(Clone, Copy, Debug)]
pub struct FixedClock(pub f64);

impl TimeSource for FixedClock {
    fn hour_of_day(&self) -> f64 {
        self.0
    }
}

/// Map hour-of-day onto a slat angle via a parabolic easing arc.
///
/// The hour is normalized over the 06:00-18:00 daylight window (clamped
/// outside it), eased through `arc = 1 - 4 * (t - 0.5)^2`, a downward
/// parabola peaking at noon, and the result is `base + arc * swing`.
/// Monotonic on each half of the day and symmetric about noon.
pub fn diurnal_angle_degrees(hour_of_day: f64, base_degrees: f64, swing_degrees: f64) -> f64 {
    let t = ((hour_of_day - 6.0) / 12.0).clamp(0.0, 1.0);
    let arc = 1.0 - 4.0 * (t - 0.5) * (t - 0.5);
    base_degrees + arc * swing_degrees
}

#[cfg(test)]
#[path = "../../tests/unit/model/clock.rs"]
mod tests;
