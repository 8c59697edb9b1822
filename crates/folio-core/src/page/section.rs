use std::fmt;

use serde::{Deserialize, Serialize};

/// Name of a vertically stacked region of the page ("about", "skills", ...)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SectionId(String);

impl SectionId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Navigation label: the id with its first letter upper-cased
    pub fn label(&self) -> String {
        let mut chars = self.0.chars();
        match chars.next() {
            Some(first) => first.to_uppercase().chain(chars).collect(),
            None => String::new(),
        }
    }
}

impl fmt::Display for SectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for SectionId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

/// Rendered geometry of one section, read fresh on every scan
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SectionBounds {
    pub id: SectionId,
    pub top_offset: u32,
    pub height: u32,
}

impl SectionBounds {
    pub fn new(id: SectionId, top_offset: u32, height: u32) -> Self {
        Self {
            id,
            top_offset,
            height,
        }
    }

    /// Half-open containment: `top <= probe < top + height`.
    /// A zero-height section contains nothing.
    #[inline]
    pub fn contains(&self, probe: u32) -> bool {
        self.top_offset <= probe && probe < self.bottom()
    }

    #[inline]
    pub fn bottom(&self) -> u32 {
        self.top_offset.saturating_add(self.height)
    }
}

/// A live document that can report where each section currently sits.
///
/// Returning `None` means the section is not part of the document.
pub trait SectionLayout {
    fn bounds(&self, id: &SectionId) -> Option<SectionBounds>;
}

/// Fixed bounds, handy for tests and for callers that already measured the page
impl SectionLayout for [SectionBounds] {
    fn bounds(&self, id: &SectionId) -> Option<SectionBounds> {
        self.iter().find(|b| &b.id == id).cloned()
    }
}

impl SectionLayout for Vec<SectionBounds> {
    fn bounds(&self, id: &SectionId) -> Option<SectionBounds> {
        self.as_slice().bounds(id)
    }
}
