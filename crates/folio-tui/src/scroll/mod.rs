//! Smooth scrolling for the Folio page
//!
//! - `tween` - easing curves and a single timed move between two offsets
//! - `animation` - viewport controller that batches steps into tweens
//! - `navigator` - section navigation on top of the controller (`SmoothScroller`)
//!
//! ```ignore
//! use folio_tui::scroll::SmoothScroller;
//!
//! let mut scroller = SmoothScroller::new(config.ui.scroll.clone());
//!
//! // Unknown or empty sections are ignored
//! scroller.navigate(&"projects".into(), &layout, max_scroll);
//!
//! // Once per frame
//! let offset = scroller.update(max_scroll);
//! ```

pub mod animation;
pub mod navigator;
pub mod tween;

pub use animation::{ScrollAnimator, Step};
pub use navigator::SmoothScroller;
pub use tween::{ease, Tween};
