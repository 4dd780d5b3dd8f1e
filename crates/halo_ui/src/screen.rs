//! Root dispatcher over named top-level windows.
//!
//! Windows are kept in creation order. That order is used for update, for
//! render (later windows paint over earlier ones) and for offering pointer
//! presses, so overlap resolution is deterministic.

use crate::component::Component;
use crate::containers::Window;
use crate::context::{EventContext, RenderContext};
use crate::error::{UiError, UiResult};
use crate::input::{Frame, MouseButton, Pointer};
use crate::persistence::{LayoutStore, WindowLayout};

/// Named collection of windows driven once per frame by the host.
#[derive(Default)]
pub struct Screen {
    windows: Vec<(String, Window)>,
}

impl Screen {
    /// Creates an empty screen.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a window under a unique name.
    ///
    /// # Errors
    ///
    /// Returns [`UiError::DuplicateWindow`] if the name is taken.
    pub fn add_window(&mut self, name: impl Into<String>, window: Window) -> UiResult<()> {
        let name = name.into();
        if self.windows.iter().any(|(existing, _)| *existing == name) {
            return Err(UiError::DuplicateWindow(name));
        }
        self.windows.push((name, window));
        Ok(())
    }

    /// Looks up a window by name.
    #[must_use]
    pub fn window(&self, name: &str) -> Option<&Window> {
        self.windows.iter().find(|(n, _)| n == name).map(|(_, w)| w)
    }

    /// Looks up a window by name for mutation.
    pub fn window_mut(&mut self, name: &str) -> Option<&mut Window> {
        self.windows.iter_mut().find(|(n, _)| n == name).map(|(_, w)| w)
    }

    /// Window names in dispatch order.
    pub fn names(&self) -> impl Iterator<Item = &str> + '_ {
        self.windows.iter().map(|(name, _)| name.as_str())
    }

    /// Number of windows.
    #[must_use]
    pub fn len(&self) -> usize {
        self.windows.len()
    }

    /// Returns true if no window is registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.windows.is_empty()
    }

    /// Moves and resizes one window.
    ///
    /// # Errors
    ///
    /// Returns [`UiError::UnknownWindow`] if no window has that name.
    pub fn set_layout(&mut self, name: &str, layout: WindowLayout) -> UiResult<()> {
        let window = self
            .window_mut(name)
            .ok_or_else(|| UiError::UnknownWindow(name.to_owned()))?;
        window.apply_layout(layout);
        Ok(())
    }

    /// Applies stored layouts over the windows' constructed geometry.
    ///
    /// Missing records leave the window where it was built. Zero-sized
    /// records are treated as missing. Returns how many were applied.
    pub fn restore_layouts(&mut self, store: &dyn LayoutStore) -> usize {
        let mut restored = 0;
        for (name, window) in &mut self.windows {
            match store.layout(name) {
                Some(layout) if layout.is_usable() => {
                    window.apply_layout(layout);
                    restored += 1;
                }
                Some(layout) => {
                    tracing::warn!("Ignoring unusable stored layout for '{}': {:?}", name, layout);
                }
                None => {}
            }
        }
        restored
    }

    /// Writes every window's current geometry to `store`.
    pub fn commit_layouts(&self, store: &mut dyn LayoutStore) {
        for (name, window) in &self.windows {
            store.commit(name, window.layout());
        }
    }

    /// Returns true while any window is being dragged or resized.
    #[must_use]
    pub fn is_interacting(&self) -> bool {
        self.windows.iter().any(|(_, w)| !w.gesture().is_idle())
    }

    /// Advances every window.
    pub fn update(&mut self, frame: &Frame) {
        for (_, window) in &mut self.windows {
            window.update(frame);
        }
    }

    /// Draws every window.
    pub fn render(&self, frame: &Frame, cx: &mut RenderContext<'_>) {
        for (_, window) in &self.windows {
            window.render(frame, cx);
        }
    }

    /// One full frame: update, then render.
    pub fn frame(&mut self, frame: &Frame, cx: &mut RenderContext<'_>) {
        self.update(frame);
        self.render(frame, cx);
    }

    /// Offers a press to each window until one consumes it.
    pub fn pointer_down(&mut self, pointer: Pointer, button: MouseButton, cx: &mut EventContext<'_>) -> bool {
        self.windows
            .iter_mut()
            .any(|(_, window)| window.mouse_down(pointer, button, cx))
    }

    /// Delivers a release to every window.
    pub fn pointer_up(&mut self, pointer: Pointer, button: MouseButton) {
        for (_, window) in &mut self.windows {
            window.mouse_up(pointer, button);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::containers::Gesture;
    use crate::layout::Rect;
    use crate::persistence::MemoryLayoutStore;
    use crate::render::CommandList;
    use crate::testing::{frame, Harness};

    fn screen() -> Screen {
        let mut screen = Screen::new();
        screen.add_window("Combat", Window::new("Combat", Rect::new(0, 50, 200, 200))).unwrap();
        screen.add_window("Render", Window::new("Render", Rect::new(100, 50, 200, 150))).unwrap();
        screen
    }

    #[test]
    fn test_duplicate_name_rejected() {
        let mut screen = screen();
        let err = screen
            .add_window("Combat", Window::new("Again", Rect::new(0, 0, 200, 100)))
            .unwrap_err();
        assert_eq!(err, UiError::DuplicateWindow("Combat".into()));
        assert_eq!(screen.len(), 2);
    }

    #[test]
    fn test_press_goes_to_first_window_in_creation_order() {
        let mut screen = screen();
        let mut harness = Harness::new();

        // (150, 55) lies in both headers.
        let mut cx = harness.events();
        assert!(screen.pointer_down(Pointer::new(150, 55), MouseButton::Left, &mut cx));
        assert!(screen.window("Combat").unwrap().gesture().is_dragging());
        assert!(screen.window("Render").unwrap().gesture().is_idle());

        let mut cx = harness.events();
        assert!(!screen.pointer_down(Pointer::new(700, 500), MouseButton::Left, &mut cx));
    }

    #[test]
    fn test_release_reaches_every_window() {
        let mut screen = screen();
        let mut harness = Harness::new();
        let mut cx = harness.events();
        assert!(screen.pointer_down(Pointer::new(250, 55), MouseButton::Left, &mut cx));
        assert_eq!(
            screen.window("Render").unwrap().gesture(),
            Gesture::Dragging { offset: (150, 5) }
        );
        assert!(screen.is_interacting());

        screen.pointer_up(Pointer::new(0, 0), MouseButton::Left);
        assert!(!screen.is_interacting());
    }

    #[test]
    fn test_restore_skips_unusable_records() {
        let mut store = MemoryLayoutStore::new();
        store.commit("Combat", WindowLayout::new(300, 300, 250, 220));
        store.commit("Render", WindowLayout::new(5, 5, 0, 0));

        let mut screen = screen();
        assert_eq!(screen.restore_layouts(&store), 1);
        assert_eq!(screen.window("Combat").unwrap().bounds(), Rect::new(300, 300, 250, 220));
        assert_eq!(screen.window("Render").unwrap().bounds(), Rect::new(100, 50, 200, 150));
    }

    #[test]
    fn test_commit_then_unknown_layout() {
        let mut screen = screen();
        let mut store = MemoryLayoutStore::new();
        screen.commit_layouts(&mut store);
        assert_eq!(store.layout("Render"), Some(WindowLayout::new(100, 50, 200, 150)));

        assert_eq!(
            screen.set_layout("Missing", WindowLayout::new(0, 0, 200, 100)),
            Err(UiError::UnknownWindow("Missing".into()))
        );
    }

    #[test]
    fn test_frame_renders_in_creation_order() {
        let mut screen = screen();
        let harness = Harness::new();
        let mut list = CommandList::new();
        {
            let mut cx = RenderContext::new(&mut list, &harness.fonts, &harness.theme);
            screen.frame(&frame(0, 0), &mut cx);
        }
        let titles: Vec<_> = list.texts().filter(|t| t.len() > 1).collect();
        assert_eq!(titles, ["Combat", "Render"]);
    }
}
