//! Scroll progress ratio with spring smoothing.

use std::time::Duration;

use crate::config::ProgressConfig;

/// Largest integration step; longer frames are split into substeps
const MAX_STEP_SECS: f64 = 1.0 / 240.0;

/// `offset / max_offset` clamped to [0, 1]. A page that cannot scroll is at 0.
#[inline]
pub fn scroll_ratio(scroll_offset: u32, max_offset: u32) -> f64 {
    if max_offset == 0 {
        return 0.0;
    }
    (scroll_offset as f64 / max_offset as f64).clamp(0.0, 1.0)
}

/// Damped spring parameters (unit mass)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Spring {
    pub stiffness: f64,
    pub damping: f64,
    pub rest_delta: f64,
}

impl Spring {
    /// Critically damped spring: fastest approach without overshoot
    pub fn critical(stiffness: f64) -> Self {
        let stiffness = stiffness.max(f64::EPSILON);
        Self {
            stiffness,
            damping: 2.0 * stiffness.sqrt(),
            rest_delta: 0.001,
        }
    }
}

impl Default for Spring {
    fn default() -> Self {
        Self::from(&ProgressConfig::default())
    }
}

impl From<&ProgressConfig> for Spring {
    fn from(config: &ProgressConfig) -> Self {
        let critical = Self::critical(config.stiffness);
        Self {
            damping: config.damping.unwrap_or(critical.damping),
            rest_delta: config.rest_delta.max(0.0),
            ..critical
        }
    }
}

/// Smoothed 0..=1 scroll position for the progress bar
#[derive(Debug, Clone)]
pub struct ScrollProgress {
    spring: Spring,
    target: f64,
    value: f64,
    velocity: f64,
}

impl Default for ScrollProgress {
    fn default() -> Self {
        Self::new(Spring::default())
    }
}

impl ScrollProgress {
    pub fn new(spring: Spring) -> Self {
        Self {
            spring,
            target: 0.0,
            value: 0.0,
            velocity: 0.0,
        }
    }

    pub fn from_config(config: &ProgressConfig) -> Self {
        Self::new(Spring::from(config))
    }

    /// Feed a scroll or resize notification
    pub fn set_scroll(&mut self, scroll_offset: u32, max_offset: u32) {
        self.target = scroll_ratio(scroll_offset, max_offset);
    }

    /// Unsmoothed ratio
    pub fn target(&self) -> f64 {
        self.target
    }

    /// Smoothed ratio, always in [0, 1]
    pub fn value(&self) -> f64 {
        self.value
    }

    pub fn is_settled(&self) -> bool {
        self.value == self.target && self.velocity == 0.0
    }

    /// Advance the spring by `dt` and return the smoothed ratio
    pub fn update(&mut self, dt: Duration) -> f64 {
        let mut remaining = dt.as_secs_f64();
        while remaining > 0.0 && !self.is_settled() {
            let h = remaining.min(MAX_STEP_SECS);
            remaining -= h;

            let accel = -self.spring.stiffness * (self.value - self.target)
                - self.spring.damping * self.velocity;
            self.velocity += accel * h;
            self.value += self.velocity * h;

            if !(0.0..=1.0).contains(&self.value) {
                self.value = self.value.clamp(0.0, 1.0);
                self.velocity = 0.0;
            }

            if (self.value - self.target).abs() < self.spring.rest_delta
                && self.velocity.abs() < self.spring.rest_delta
            {
                self.value = self.target;
                self.velocity = 0.0;
            }
        }
        self.value
    }

    /// Skip the animation and sit on the target
    pub fn snap(&mut self) {
        self.value = self.target;
        self.velocity = 0.0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ratio_endpoints() {
        assert_eq!(scroll_ratio(0, 500), 0.0);
        assert_eq!(scroll_ratio(500, 500), 1.0);
        assert!((scroll_ratio(250, 500) - 0.5).abs() < 1e-9);
    }

    #[test]
    fn test_ratio_clamped_on_overscroll() {
        assert_eq!(scroll_ratio(900, 500), 1.0);
        assert_eq!(scroll_ratio(0, 0), 0.0);
        assert_eq!(scroll_ratio(10, 0), 0.0);
    }

    #[test]
    fn test_ratio_in_range() {
        let max = 1234;
        for offset in 0..=max {
            let r = scroll_ratio(offset, max);
            assert!((0.0..=1.0).contains(&r));
        }
    }

    #[test]
    fn test_default_spring_is_critical() {
        let spring = Spring::default();
        assert!((spring.damping - 20.0).abs() < 1e-9);
    }

    #[test]
    fn test_spring_converges_without_overshoot() {
        let mut progress = ScrollProgress::default();
        progress.set_scroll(300, 600);
        let mut prev = 0.0;
        for _ in 0..120 {
            let v = progress.update(Duration::from_millis(16));
            assert!(v >= prev - 1e-12, "moved backwards: {} -> {}", prev, v);
            assert!(v <= 0.5 + 1e-9, "overshot: {}", v);
            prev = v;
        }
        assert!(progress.is_settled());
        assert_eq!(progress.value(), 0.5);
    }

    #[test]
    fn test_underdamped_spring_stays_in_range() {
        let mut progress = ScrollProgress::new(Spring {
            stiffness: 400.0,
            damping: 2.0,
            rest_delta: 0.001,
        });
        progress.set_scroll(100, 100);
        for _ in 0..200 {
            let v = progress.update(Duration::from_millis(16));
            assert!((0.0..=1.0).contains(&v));
        }
    }

    #[test]
    fn test_snap() {
        let mut progress = ScrollProgress::default();
        progress.set_scroll(40, 100);
        progress.snap();
        assert!((progress.value() - 0.4).abs() < 1e-9);
        assert!(progress.is_settled());
    }
}
