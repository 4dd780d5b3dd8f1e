//! Persisted window layout surface.
//!
//! The framework reads one [`WindowLayout`] per named top-level window when a
//! screen is opened and writes them back on gesture completion and on close.
//! Storage itself belongs to the host.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::layout::Rect;

/// Persisted geometry of one top-level window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct WindowLayout {
    /// Left edge.
    pub x: i32,
    /// Top edge.
    pub y: i32,
    /// Width.
    pub width: i32,
    /// Height.
    pub height: i32,
}

impl WindowLayout {
    /// Creates a layout record.
    #[must_use]
    pub const fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self { x, y, width, height }
    }

    /// Returns false for zero or negative sizes, which count as absent.
    #[must_use]
    pub const fn is_usable(&self) -> bool {
        self.width > 0 && self.height > 0
    }

    /// The record as a rectangle.
    #[must_use]
    pub const fn rect(&self) -> Rect {
        Rect::new(self.x, self.y, self.width, self.height)
    }
}

impl From<Rect> for WindowLayout {
    fn from(rect: Rect) -> Self {
        Self::new(rect.x, rect.y, rect.width, rect.height)
    }
}

/// Storage collaborator for window layouts.
pub trait LayoutStore {
    /// Returns the stored layout for `window`, if any.
    fn layout(&self, window: &str) -> Option<WindowLayout>;

    /// Overwrites the stored layout for `window`.
    fn commit(&mut self, window: &str, layout: WindowLayout);
}

/// In-memory layout store.
#[derive(Debug, Clone, Default)]
pub struct MemoryLayoutStore {
    layouts: BTreeMap<String, WindowLayout>,
}

impl MemoryLayoutStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored records.
    #[must_use]
    pub fn len(&self) -> usize {
        self.layouts.len()
    }

    /// Returns true if nothing is stored.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.layouts.is_empty()
    }
}

impl LayoutStore for MemoryLayoutStore {
    fn layout(&self, window: &str) -> Option<WindowLayout> {
        self.layouts.get(window).copied()
    }

    fn commit(&mut self, window: &str, layout: WindowLayout) {
        self.layouts.insert(window.to_owned(), layout);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_sized_layout_unusable() {
        assert!(WindowLayout::new(0, 0, 200, 150).is_usable());
        assert!(!WindowLayout::new(10, 10, 0, 150).is_usable());
        assert!(!WindowLayout::new(10, 10, 200, -1).is_usable());
        assert!(!WindowLayout::default().is_usable());
    }

    #[test]
    fn test_memory_store_overwrites() {
        let mut store = MemoryLayoutStore::new();
        store.commit("Combat", WindowLayout::new(1, 2, 3, 4));
        store.commit("Combat", WindowLayout::new(5, 6, 7, 8));

        assert_eq!(store.len(), 1);
        assert_eq!(store.layout("Combat"), Some(WindowLayout::new(5, 6, 7, 8)));
        assert_eq!(store.layout("Render"), None);
    }
}
