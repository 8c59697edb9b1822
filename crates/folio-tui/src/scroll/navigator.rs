//! Section navigation on top of the scroll animator

use folio_core::page::{SectionId, SectionLayout};
use folio_core::ScrollConfig;
use tracing::debug;

use super::animation::ScrollAnimator;

/// Moves the viewport so a section's top lines up with the top of the view.
#[derive(Debug, Clone, Default)]
pub struct SmoothScroller {
    animator: ScrollAnimator,
}

impl SmoothScroller {
    pub fn new(config: ScrollConfig) -> Self {
        Self {
            animator: ScrollAnimator::new(config),
        }
    }

    pub fn animator(&self) -> &ScrollAnimator {
        &self.animator
    }

    pub fn animator_mut(&mut self) -> &mut ScrollAnimator {
        &mut self.animator
    }

    /// Start scrolling to `id`. Returns false, changing nothing, when the
    /// section is not in the layout or has no rendered height.
    pub fn navigate<L: SectionLayout + ?Sized>(
        &mut self,
        id: &SectionId,
        layout: &L,
        max_scroll: u32,
    ) -> bool {
        let Some(bounds) = layout.bounds(id).filter(|b| b.height > 0) else {
            debug!("Navigation to missing section '{}' ignored", id);
            return false;
        };
        debug!("Navigating to '{}' at row {}", id, bounds.top_offset);
        self.animator.scroll_to(bounds.top_offset, max_scroll);
        true
    }

    /// Advance one frame and return the visible offset
    pub fn update(&mut self, max_scroll: u32) -> u32 {
        self.animator.update(max_scroll)
    }

    pub fn offset(&self) -> u32 {
        self.animator.current_scroll()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_core::page::SectionBounds;

    fn layout() -> Vec<SectionBounds> {
        vec![
            SectionBounds::new("hero".into(), 0, 30),
            SectionBounds::new("about".into(), 30, 40),
            SectionBounds::new("empty".into(), 70, 0),
            SectionBounds::new("contact".into(), 70, 20),
        ]
    }

    #[test]
    fn test_navigate_targets_section_top() {
        let mut scroller = SmoothScroller::default();
        assert!(scroller.navigate(&"about".into(), &layout(), 60));
        assert!(scroller.animator().is_animating());
        assert_eq!(scroller.animator().target_scroll(), 30);
        assert_eq!(scroller.offset(), 0);
    }

    #[test]
    fn test_target_clamped_to_max_scroll() {
        let mut scroller = SmoothScroller::default();
        scroller.navigate(&"contact".into(), &layout(), 60);
        assert_eq!(scroller.animator().target_scroll(), 60);
    }

    #[test]
    fn test_missing_section_is_noop() {
        let mut scroller = SmoothScroller::default();
        scroller.animator_mut().set_scroll(12);
        assert!(!scroller.navigate(&"nowhere".into(), &layout(), 60));
        assert!(!scroller.navigate(&"empty".into(), &layout(), 60));
        assert!(!scroller.animator().is_animating());
        assert_eq!(scroller.offset(), 12);
    }

    #[test]
    fn test_instant_when_smooth_disabled() {
        let mut scroller = SmoothScroller::new(ScrollConfig {
            smooth_enabled: false,
            ..Default::default()
        });
        scroller.navigate(&"about".into(), &layout(), 60);
        assert_eq!(scroller.offset(), 30);
    }
}
