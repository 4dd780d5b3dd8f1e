//! The overlay gate: opens the menu over the game, routes input while open,
//! and flushes layouts when it closes.

use halo_ui::{
    Animation, Argb, EventContext, Feedback, FontMetrics, Frame, MouseButton, Pointer, Rect,
    RenderContext, Renderer, Theme, UiResult, Viewport,
};

use crate::config::ConfigStore;
use crate::menu::Menu;

/// Product name drawn in the corner.
pub const PRODUCT_NAME: &str = "Halo";

const OPEN_RATE: f32 = 15.0;
const CLOSE_HINT: &str = "Press ESC to close";

/// Owns the menu while the overlay is open.
pub struct Overlay {
    store: ConfigStore,
    menu: Option<Menu>,
    open_anim: Animation,
    viewport: Viewport,
    theme: Theme,
}

impl Overlay {
    /// Creates a closed overlay over `store`.
    #[must_use]
    pub fn new(store: ConfigStore) -> Self {
        Self {
            store,
            menu: None,
            open_anim: Animation::new(0.0, OPEN_RATE),
            viewport: Viewport::default(),
            theme: Theme::DEFAULT,
        }
    }

    /// Builds the menu from the current configuration and fades it in.
    ///
    /// # Errors
    ///
    /// Propagates [`halo_ui::UiError`] from building the menu.
    pub fn open(&mut self, viewport: Viewport) -> UiResult<()> {
        let mut menu = Menu::build(&self.store.shared(), viewport)?;
        let restored = menu.screen_mut().restore_layouts(&self.store);

        self.theme = Theme::DEFAULT.with_accent(self.store.snapshot().accent_rgb());
        self.viewport = viewport;
        self.menu = Some(menu);
        self.open_anim = Animation::toward(0.0, 1.0, OPEN_RATE);
        tracing::info!("Overlay opened ({} stored layouts restored)", restored);
        Ok(())
    }

    /// Returns true between [`open`](Self::open) and [`close`](Self::close).
    #[must_use]
    pub fn is_open(&self) -> bool {
        self.menu.is_some()
    }

    /// Fade-in progress.
    #[must_use]
    pub fn open_progress(&self) -> f32 {
        self.open_anim.value()
    }

    /// The open menu, if any.
    #[must_use]
    pub fn menu(&self) -> Option<&Menu> {
        self.menu.as_ref()
    }

    /// Backing configuration.
    #[must_use]
    pub fn store(&self) -> &ConfigStore {
        &self.store
    }

    /// Theme in effect since the last open.
    #[must_use]
    pub fn theme(&self) -> &Theme {
        &self.theme
    }

    /// Advances and draws one frame. Does nothing while closed.
    pub fn frame(&mut self, frame: &Frame, renderer: &mut dyn Renderer, fonts: &dyn FontMetrics) {
        let Some(menu) = self.menu.as_mut() else {
            return;
        };
        self.viewport = frame.viewport;
        self.open_anim.update(frame.partial_ticks);
        let progress = self.open_anim.value();
        if progress < 0.01 {
            return;
        }

        let mut cx = RenderContext::new(renderer, fonts, &self.theme);
        let Viewport { width, height } = frame.viewport;

        cx.renderer.rounded_rect(
            Rect::new(0, 0, width, height),
            0,
            Argb::BLACK.with_alpha_fraction(progress, 200),
        );
        cx.renderer.text(PRODUCT_NAME, 10, 10, self.theme.accent.with_alpha_fraction(progress, 255));
        let version = concat!("v", env!("CARGO_PKG_VERSION"));
        cx.renderer.text(version, 10, 22, Argb::opaque(0xBB_BBBB).with_alpha_fraction(progress, 200));

        menu.screen_mut().frame(frame, &mut cx);

        if progress > 0.5 {
            let hint_x = (width - fonts.text_width(CLOSE_HINT)) / 2;
            cx.renderer.text(
                CLOSE_HINT,
                hint_x,
                height - 30,
                self.theme.text_muted.with_alpha_fraction(progress, 255),
            );
        }
    }

    /// Routes a press. Returns true if a window consumed it.
    pub fn pointer_down(
        &mut self,
        pointer: Pointer,
        button: MouseButton,
        fonts: &dyn FontMetrics,
        feedback: &mut dyn Feedback,
    ) -> bool {
        let Some(menu) = self.menu.as_mut() else {
            return false;
        };

        let consumed = {
            let mut cx = EventContext::new(fonts, feedback);
            menu.screen_mut().pointer_down(pointer, button, &mut cx)
        };

        if menu.take_reset_request() {
            if let Err(err) = menu.apply_default_layouts(self.viewport) {
                tracing::warn!("Failed to reset window layouts: {}", err);
            }
            self.store.clear_layouts();
            self.save();
            feedback.play_click(0.5, 1.2);
            tracing::info!("Window layouts reset to defaults");
        }

        consumed
    }

    /// Routes a release, then persists layouts and settings.
    pub fn pointer_up(&mut self, pointer: Pointer, button: MouseButton) {
        if let Some(menu) = self.menu.as_mut() {
            menu.screen_mut().pointer_up(pointer, button);
            menu.screen().commit_layouts(&mut self.store);
            self.save();
        }
    }

    /// Persists everything and drops the menu.
    pub fn close(&mut self) {
        if let Some(menu) = self.menu.take() {
            menu.screen().commit_layouts(&mut self.store);
            self.save();
            self.open_anim.set_value(0.0);
            tracing::info!("Overlay closed");
        }
    }

    fn save(&self) {
        if let Err(err) = self.store.save() {
            tracing::warn!("Failed to save config to {:?}: {}", self.store.path(), err);
        }
    }
}
