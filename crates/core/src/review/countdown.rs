use std::time::Duration;

use super::event::CountdownId;

fn clamp_unit(value: f64) -> f64 {
    if value.is_nan() {
        0.0
    } else {
        value.clamp(0.0, 1.0)
    }
}

//
// ─── COUNTDOWN ─────────────────────────────────────────────────────────────────
//

/// Elapsed-time bookkeeping for the card currently on screen.
///
/// The countdown never decides transitions on its own; it only mirrors the
/// elapsed time reported by ticks. Expiry is an explicit event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Countdown {
    id: CountdownId,
    duration: Duration,
    tick_interval: Duration,
    elapsed: Duration,
    expired: bool,
}

impl Countdown {
    #[must_use]
    pub fn new(id: CountdownId, duration: Duration, tick_interval: Duration) -> Self {
        Self {
            id,
            duration,
            tick_interval,
            elapsed: Duration::ZERO,
            expired: false,
        }
    }

    #[must_use]
    pub fn id(&self) -> CountdownId {
        self.id
    }

    #[must_use]
    pub fn duration(&self) -> Duration {
        self.duration
    }

    #[must_use]
    pub fn tick_interval(&self) -> Duration {
        self.tick_interval
    }

    #[must_use]
    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }

    #[must_use]
    pub fn remaining(&self) -> Duration {
        self.duration.saturating_sub(self.elapsed)
    }

    #[must_use]
    pub fn is_expired(&self) -> bool {
        self.expired
    }

    pub fn observe(&mut self, elapsed: Duration) {
        self.elapsed = elapsed;
    }

    pub fn mark_expired(&mut self) {
        self.expired = true;
        self.elapsed = self.elapsed.max(self.duration);
    }

    /// `elapsed / duration`, clamped to `[0, 1]`. A zero-length countdown is complete.
    #[must_use]
    pub fn fraction(&self) -> f64 {
        if self.duration.is_zero() {
            return 1.0;
        }
        clamp_unit(self.elapsed.as_secs_f64() / self.duration.as_secs_f64())
    }
}

//
// ─── PROGRESS BAR ──────────────────────────────────────────────────────────────
//

/// Animated progress indicator: eases its displayed value toward a target.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ProgressBar {
    target: f64,
    shown: f64,
}

impl ProgressBar {
    const EASING: f64 = 0.35;
    const SETTLE_EPSILON: f64 = 0.001;

    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn target(&self) -> f64 {
        self.target
    }

    /// Fraction currently displayed, always in `[0, 1]`.
    #[must_use]
    pub fn fraction(&self) -> f64 {
        self.shown
    }

    #[must_use]
    pub fn is_settled(&self) -> bool {
        (self.target - self.shown).abs() < f64::EPSILON
    }

    /// Set a new target. Returns true if frames are needed to reach it.
    pub fn set_target(&mut self, fraction: f64) -> bool {
        self.target = clamp_unit(fraction);
        !self.is_settled()
    }

    /// Advance one animation frame. Returns true if more frames are needed.
    pub fn step(&mut self) -> bool {
        let gap = self.target - self.shown;
        if gap.abs() < Self::SETTLE_EPSILON {
            self.shown = self.target;
        } else {
            self.shown = clamp_unit(self.shown + gap * Self::EASING);
        }
        !self.is_settled()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn countdown(secs: u64) -> Countdown {
        Countdown::new(
            CountdownId::new(0),
            Duration::from_secs(secs),
            Duration::from_millis(100),
        )
    }

    #[test]
    fn fraction_tracks_elapsed() {
        let mut cd = countdown(30);
        assert!(cd.fraction().abs() < f64::EPSILON);
        cd.observe(Duration::from_secs(15));
        assert!((cd.fraction() - 0.5).abs() < 1e-9);
        assert_eq!(cd.remaining(), Duration::from_secs(15));
    }

    #[test]
    fn fraction_is_clamped_past_the_deadline() {
        let mut cd = countdown(30);
        cd.observe(Duration::from_secs(3_600));
        assert!((cd.fraction() - 1.0).abs() < f64::EPSILON);
        assert_eq!(cd.remaining(), Duration::ZERO);
    }

    #[test]
    fn zero_duration_is_complete_not_nan() {
        let cd = countdown(0);
        assert!((cd.fraction() - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn mark_expired_pins_elapsed_to_duration() {
        let mut cd = countdown(30);
        cd.observe(Duration::from_secs(29));
        cd.mark_expired();
        assert!(cd.is_expired());
        assert_eq!(cd.elapsed(), Duration::from_secs(30));
    }

    #[test]
    fn progress_eases_toward_target_and_settles() {
        let mut bar = ProgressBar::new();
        assert!(bar.set_target(0.5));

        let mut frames = 0;
        while bar.step() {
            frames += 1;
            assert!(bar.fraction() <= 0.5);
            assert!(frames < 100, "animation never settled");
        }
        assert!((bar.fraction() - 0.5).abs() < f64::EPSILON);
    }

    #[test]
    fn progress_target_is_clamped() {
        let mut bar = ProgressBar::new();
        bar.set_target(4.2);
        assert!((bar.target() - 1.0).abs() < f64::EPSILON);
        bar.set_target(-1.0);
        assert!(bar.target().abs() < f64::EPSILON);
        bar.set_target(f64::NAN);
        assert!(bar.target().abs() < f64::EPSILON);
    }
}
