//! Time-based interpolation between two row offsets.

use std::time::{Duration, Instant};

use folio_core::EasingType;

/// Map linear progress `t` in [0, 1] through an easing curve
pub fn ease(easing: EasingType, t: f64) -> f64 {
    let t = t.clamp(0.0, 1.0);
    let inv = 1.0 - t;
    match easing {
        EasingType::None if t < 1.0 => 0.0,
        EasingType::None => 1.0,
        EasingType::Linear => t,
        EasingType::Cubic => 1.0 - inv.powi(3),
        EasingType::Quintic => 1.0 - inv.powi(5),
        EasingType::EaseOut if t >= 1.0 => 1.0,
        EasingType::EaseOut => 1.0 - 2.0_f64.powf(-10.0 * t),
    }
}

/// One eased move from `from` to `to`
#[derive(Debug, Clone, Copy)]
pub struct Tween {
    from: u32,
    to: u32,
    start: Instant,
    duration: Duration,
    easing: EasingType,
}

impl Tween {
    pub fn new(from: u32, to: u32, duration: Duration, easing: EasingType) -> Self {
        Self::starting_at(Instant::now(), from, to, duration, easing)
    }

    pub fn starting_at(
        start: Instant,
        from: u32,
        to: u32,
        duration: Duration,
        easing: EasingType,
    ) -> Self {
        Self {
            from,
            to,
            start,
            duration,
            easing,
        }
    }

    pub fn target(&self) -> u32 {
        self.to
    }

    /// Linear progress at `now`, clamped to [0, 1]
    pub fn fraction_at(&self, now: Instant) -> f64 {
        if self.duration.is_zero() {
            return 1.0;
        }
        let elapsed = now.saturating_duration_since(self.start);
        (elapsed.as_secs_f64() / self.duration.as_secs_f64()).clamp(0.0, 1.0)
    }

    /// Offset at `now`, or None once the move is over
    pub fn sample_at(&self, now: Instant) -> Option<u32> {
        let t = self.fraction_at(now);
        if t >= 1.0 {
            return None;
        }
        let eased = ease(self.easing, t);
        let value = self.from as f64 + (self.to as f64 - self.from as f64) * eased;
        Some(value.round().max(0.0) as u32)
    }

    pub fn sample(&self) -> Option<u32> {
        self.sample_at(Instant::now())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [EasingType; 5] = [
        EasingType::None,
        EasingType::Linear,
        EasingType::Cubic,
        EasingType::Quintic,
        EasingType::EaseOut,
    ];

    #[test]
    fn test_curves_end_at_one() {
        for easing in ALL {
            assert!((ease(easing, 1.0) - 1.0).abs() < 1e-9, "{:?}", easing);
            assert!((ease(easing, 5.0) - 1.0).abs() < 1e-9, "{:?} clamps", easing);
        }
        assert_eq!(ease(EasingType::None, 0.99), 0.0);
    }

    #[test]
    fn test_curves_are_monotonic() {
        for easing in ALL {
            let mut prev = ease(easing, 0.0);
            assert!(prev.abs() < 1e-3, "{:?} starts at 0", easing);
            for i in 1..=20 {
                let v = ease(easing, i as f64 / 20.0);
                assert!(v >= prev, "{:?} dips at step {}", easing, i);
                prev = v;
            }
        }
    }

    #[test]
    fn test_ease_out_front_loads() {
        assert!(ease(EasingType::Cubic, 0.5) > 0.5);
        assert!(ease(EasingType::Quintic, 0.5) > ease(EasingType::Cubic, 0.5));
    }

    #[test]
    fn test_sample_along_the_way() {
        let start = Instant::now();
        let tween = Tween::starting_at(start, 100, 0, Duration::from_millis(100), EasingType::Linear);
        assert_eq!(tween.sample_at(start), Some(100));
        assert_eq!(tween.sample_at(start + Duration::from_millis(25)), Some(75));
        assert_eq!(tween.sample_at(start + Duration::from_millis(100)), None);
        assert_eq!(tween.target(), 0);
    }

    #[test]
    fn test_zero_duration_is_already_done() {
        let tween = Tween::new(0, 10, Duration::ZERO, EasingType::Cubic);
        assert_eq!(tween.sample(), None);
    }
}
