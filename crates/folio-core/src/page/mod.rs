//! Headless page behaviour: which section is in view, the typed headline and
//! the scroll progress ratio.
//!
//! Nothing here touches a terminal. The front end owns the layout (it
//! implements [`SectionLayout`]) and feeds scroll offsets and timer ticks in.

pub mod progress;
pub mod section;
pub mod spy;
pub mod typing;

pub use progress::{scroll_ratio, ScrollProgress, Spring};
pub use section::{SectionBounds, SectionId, SectionLayout};
pub use spy::ScrollSpy;
pub use typing::{Caret, TypingAnimator, TypingState, TypingTiming};
