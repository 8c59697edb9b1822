//! Scroll-spy: maps the scroll offset to the section being read.

use tokio::sync::watch;
use tracing::debug;

use super::section::{SectionId, SectionLayout};
use crate::config::SpyConfig;
use crate::{Error, Result};

/// Tracks the active section for navigation highlighting.
///
/// The spy owns the only sender of the active-section channel, so it is the
/// single writer; everything else observes through [`ScrollSpy::subscribe`].
#[derive(Debug)]
pub struct ScrollSpy {
    /// Scan order, fixed at construction
    order: Vec<SectionId>,
    /// Added to the scroll offset before probing
    lookahead_offset: u32,
    active: watch::Sender<SectionId>,
}

impl ScrollSpy {
    /// Create a spy over `order`. The first section starts active.
    pub fn new(order: Vec<SectionId>, lookahead_offset: u32) -> Result<Self> {
        let first = order
            .first()
            .cloned()
            .ok_or_else(|| Error::Config("at least one section must be configured".to_string()))?;
        let (active, _) = watch::channel(first);
        Ok(Self {
            order,
            lookahead_offset,
            active,
        })
    }

    pub fn from_config(config: &SpyConfig) -> Result<Self> {
        let order = config.sections.iter().map(|s| SectionId::new(s.as_str())).collect();
        Self::new(order, config.lookahead_offset)
    }

    pub fn order(&self) -> &[SectionId] {
        &self.order
    }

    pub fn lookahead_offset(&self) -> u32 {
        self.lookahead_offset
    }

    /// Read-only view of the active section that follows every change
    pub fn subscribe(&self) -> watch::Receiver<SectionId> {
        self.active.subscribe()
    }

    /// First section, in configured order, whose bounds contain the probe
    pub fn locate<L: SectionLayout + ?Sized>(&self, scroll_offset: u32, layout: &L) -> Option<SectionId> {
        let probe = scroll_offset.saturating_add(self.lookahead_offset);
        self.order
            .iter()
            .find(|id| layout.bounds(id).is_some_and(|b| b.contains(probe)))
            .cloned()
    }

    /// Re-scan for the given offset. Returns true when the active section changed.
    ///
    /// With no match the previous section stays active.
    pub fn observe<L: SectionLayout + ?Sized>(&self, scroll_offset: u32, layout: &L) -> bool {
        let Some(found) = self.locate(scroll_offset, layout) else {
            return false;
        };
        let changed = self.active.send_if_modified(|current| {
            if *current == found {
                false
            } else {
                *current = found.clone();
                true
            }
        });
        if changed {
            debug!("Active section -> {} (offset {})", found, scroll_offset);
        }
        changed
    }

    /// Next section after `id`, in scan order, that the layout renders
    pub fn next_after<L: SectionLayout + ?Sized>(&self, id: &SectionId, layout: &L) -> Option<&SectionId> {
        let idx = self.order.iter().position(|s| s == id)?;
        self.order[idx + 1..]
            .iter()
            .find(|s| is_rendered(layout, s))
    }

    /// Closest rendered section before `id` in scan order
    pub fn prev_before<L: SectionLayout + ?Sized>(&self, id: &SectionId, layout: &L) -> Option<&SectionId> {
        let idx = self.order.iter().position(|s| s == id)?;
        self.order[..idx]
            .iter()
            .rev()
            .find(|s| is_rendered(layout, s))
    }
}

fn is_rendered<L: SectionLayout + ?Sized>(layout: &L, id: &SectionId) -> bool {
    layout.bounds(id).is_some_and(|b| b.height > 0)
}
