//! Delays between screens.

use std::thread;
use std::time::Duration;

/// How long the terminal lingers on each kind of output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pacing {
    /// One spinner frame or banner line.
    pub tick: Duration,
    /// After an unconfirmed exit.
    pub confirm: Duration,
    /// After a rejected answer, and after the winning score is set.
    pub settle: Duration,
    /// On the opening banner.
    pub banner: Duration,
    /// On a round result.
    pub round: Duration,
    /// Whether to draw the spinner and clear the screen.
    pub animate: bool,
}

impl Pacing {
    /// Interactive pacing.
    pub fn standard() -> Self {
        Self {
            tick: Duration::from_millis(100),
            confirm: Duration::from_millis(500),
            settle: Duration::from_secs(1),
            banner: Duration::from_secs(2),
            round: Duration::from_secs(3),
            animate: true,
        }
    }

    /// No delays and no animation.
    pub fn instant() -> Self {
        Self {
            tick: Duration::ZERO,
            confirm: Duration::ZERO,
            settle: Duration::ZERO,
            banner: Duration::ZERO,
            round: Duration::ZERO,
            animate: false,
        }
    }

    /// Sleep for `d`, skipping zero durations.
    pub fn pause(&self, d: Duration) {
        if !d.is_zero() {
            thread::sleep(d);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn instant_has_no_delays() {
        let p = Pacing::instant();
        assert!(!p.animate);
        for d in [p.tick, p.confirm, p.settle, p.banner, p.round] {
            assert!(d.is_zero());
        }
    }

    #[test]
    fn standard_delays() {
        let p = Pacing::standard();
        assert!(p.animate);
        assert_eq!(p.tick, Duration::from_millis(100));
        assert_eq!(p.round, Duration::from_secs(3));
    }
}
