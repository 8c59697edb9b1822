//! Viewport scroll controller: batches line/page steps and eases the
//! visible offset toward its target.

use std::time::Duration;

use folio_core::ScrollConfig;

use super::tween::Tween;

/// Keyboard scroll increments
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    LineDown,
    LineUp,
    HalfPageDown,
    HalfPageUp,
    PageDown,
    PageUp,
}

/// Scroll animation controller
///
/// Call `scroll_to()`/`scroll_by()` to request movement, then `update()`
/// once per frame to get the current interpolated row offset.
#[derive(Debug, Clone, Default)]
pub struct ScrollAnimator {
    animation: Option<Tween>,
    config: ScrollConfig,
    /// Current scroll position (always up-to-date)
    current_scroll: u32,
    /// Scroll delta batched until the next frame
    pending_delta: i64,
}

impl ScrollAnimator {
    pub fn new(config: ScrollConfig) -> Self {
        Self {
            config,
            ..Default::default()
        }
    }

    pub fn config(&self) -> &ScrollConfig {
        &self.config
    }

    #[inline]
    pub fn is_animating(&self) -> bool {
        self.animation.is_some()
    }

    /// Animation running or delta pending; the frame loop should tick fast
    #[inline]
    pub fn needs_update(&self) -> bool {
        self.animation.is_some() || self.pending_delta != 0
    }

    /// Final position once the running animation ends
    pub fn target_scroll(&self) -> u32 {
        self.animation
            .as_ref()
            .map(Tween::target)
            .unwrap_or(self.current_scroll)
    }

    #[inline]
    pub fn current_scroll(&self) -> u32 {
        self.current_scroll
    }

    /// Set scroll position immediately (no animation)
    pub fn set_scroll(&mut self, scroll: u32) {
        self.animation = None;
        self.current_scroll = scroll;
        self.pending_delta = 0;
    }

    /// Start an animation from the visible position to `target`.
    ///
    /// Jumps straight there when smooth scrolling is disabled.
    pub fn scroll_to(&mut self, target: u32, max_scroll: u32) {
        let target = target.min(max_scroll);
        self.pending_delta = 0;

        if !self.is_smooth() {
            self.current_scroll = target;
            self.animation = None;
            return;
        }

        if self.current_scroll == target {
            self.animation = None;
            return;
        }

        self.animation = Some(self.tween_to(target));
    }

    /// Scroll by a delta (positive = down). Deltas within one frame are batched.
    pub fn scroll_by(&mut self, delta: i64, max_scroll: u32) {
        if !self.is_smooth() {
            self.current_scroll = offset_by(self.current_scroll, delta, max_scroll);
            self.animation = None;
            return;
        }

        self.pending_delta += delta;
    }

    /// Apply a keyboard step. Line steps move one row at a time while
    /// smoothing (repeats batch up) and `scroll_lines` rows otherwise.
    pub fn step(&mut self, step: Step, viewport_height: u32, max_scroll: u32) {
        let line = if self.is_smooth() {
            1
        } else {
            self.config.scroll_lines.max(1) as i64
        };
        let half = (viewport_height / 2).max(1) as i64;
        let page = viewport_height as i64;
        let delta = match step {
            Step::LineDown => line,
            Step::LineUp => -line,
            Step::HalfPageDown => half,
            Step::HalfPageUp => -half,
            Step::PageDown => page,
            Step::PageUp => -page,
        };
        self.scroll_by(delta, max_scroll);
    }

    /// Advance the animation; call once per frame. Returns the visible offset.
    pub fn update(&mut self, max_scroll: u32) -> u32 {
        if self.pending_delta != 0 {
            let new_target = offset_by(self.target_scroll(), self.pending_delta, max_scroll);
            self.pending_delta = 0;

            self.animation =
                (new_target != self.current_scroll).then(|| self.tween_to(new_target));
        }

        if let Some(tween) = self.animation {
            match tween.sample() {
                Some(offset) => self.current_scroll = offset.min(max_scroll),
                None => {
                    self.current_scroll = tween.target().min(max_scroll);
                    self.animation = None;
                }
            }
        } else if self.current_scroll > max_scroll {
            // content shrank (resize)
            self.current_scroll = max_scroll;
        }

        self.current_scroll
    }
}

impl ScrollAnimator {
    /// Smooth only with a non-zero duration
    fn is_smooth(&self) -> bool {
        self.config.smooth_enabled && self.config.animation_duration_ms > 0
    }

    fn tween_to(&self, target: u32) -> Tween {
        Tween::new(
            self.current_scroll,
            target,
            Duration::from_millis(self.config.animation_duration_ms),
            self.config.easing,
        )
    }
}

fn offset_by(from: u32, delta: i64, max_scroll: u32) -> u32 {
    (from as i64 + delta).clamp(0, max_scroll as i64) as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    fn smooth(duration_ms: u64) -> ScrollAnimator {
        ScrollAnimator::new(ScrollConfig {
            smooth_enabled: true,
            animation_duration_ms: duration_ms,
            ..Default::default()
        })
    }

    #[test]
    fn test_instant_scroll_when_disabled() {
        let mut animator = ScrollAnimator::new(ScrollConfig {
            smooth_enabled: false,
            ..Default::default()
        });

        animator.scroll_to(100, 200);
        assert_eq!(animator.current_scroll(), 100);
        assert!(!animator.is_animating());
    }

    #[test]
    fn test_animation_starts() {
        let mut animator = smooth(100);
        animator.scroll_to(100, 200);
        assert!(animator.is_animating());
        assert_eq!(animator.target_scroll(), 100);
        assert_eq!(animator.current_scroll(), 0);
    }

    #[test]
    fn test_scroll_by_batching() {
        let mut animator = smooth(100);
        animator.scroll_by(10, 200);
        animator.scroll_by(10, 200);
        animator.scroll_by(10, 200);

        animator.update(200);
        assert_eq!(animator.target_scroll(), 30);
    }

    #[test]
    fn test_scroll_clamp_max() {
        let mut animator = ScrollAnimator::default();
        animator.set_scroll(50);
        animator.scroll_to(300, 100);
        animator.update(100);
        assert!(animator.target_scroll() <= 100);
    }

    #[test]
    fn test_scroll_up_never_underflows() {
        let mut animator = ScrollAnimator::new(ScrollConfig {
            smooth_enabled: false,
            scroll_lines: 3,
            ..Default::default()
        });
        animator.set_scroll(1);
        animator.step(Step::LineUp, 20, 100);
        assert_eq!(animator.current_scroll(), 0);
        animator.step(Step::LineDown, 20, 100);
        assert_eq!(animator.current_scroll(), 3);
        animator.step(Step::HalfPageDown, 20, 100);
        assert_eq!(animator.current_scroll(), 13);
        animator.step(Step::PageDown, 20, 100);
        assert_eq!(animator.current_scroll(), 33);
        animator.step(Step::PageUp, 20, 100);
        animator.step(Step::HalfPageUp, 1, 100);
        assert_eq!(animator.current_scroll(), 12);
    }

    #[test]
    fn test_zero_duration_completes_next_frame() {
        let mut animator = ScrollAnimator::new(ScrollConfig {
            smooth_enabled: true,
            animation_duration_ms: 0,
            ..Default::default()
        });
        // zero duration is not smooth: immediate jump
        animator.scroll_to(40, 100);
        assert_eq!(animator.current_scroll(), 40);
    }

    #[test]
    fn test_default_config_is_smooth() {
        let animator = ScrollAnimator::default();
        assert!(animator.is_smooth());
        assert_eq!(animator.config().animation_duration_ms, 150);
    }

    #[test]
    fn test_long_animation_finishes_at_target() {
        let mut animator = smooth(1);
        animator.scroll_to(40, 100);
        std::thread::sleep(Duration::from_millis(5));
        assert_eq!(animator.update(100), 40);
        assert!(!animator.is_animating());
    }

    #[test]
    fn test_shrinking_content_clamps() {
        let mut animator = ScrollAnimator::default();
        animator.set_scroll(80);
        assert_eq!(animator.update(50), 50);
    }
}
