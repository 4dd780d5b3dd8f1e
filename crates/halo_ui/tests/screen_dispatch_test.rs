//! Integration test for the root dispatcher: a populated screen driven the
//! way a host drives it.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use halo_ui::{
    CommandList, EventContext, ExpandableMod, Feedback, Frame, LayoutStore, MemoryLayoutStore, MonospaceMetrics,
    MouseButton, Pointer, Rect, RenderCommand, RenderContext, Screen, Slider, Theme, Toggle, Viewport, Window,
    WindowLayout,
};

const VIEWPORT: Viewport = Viewport::new(854, 480);

#[derive(Default)]
struct Clicks(Vec<(f32, f32)>);

impl Feedback for Clicks {
    fn play_click(&mut self, volume: f32, pitch: f32) {
        self.0.push((volume, pitch));
    }
}

struct Host {
    screen: Screen,
    fonts: MonospaceMetrics,
    theme: Theme,
    clicks: Clicks,
}

impl Host {
    fn tick(&mut self, x: i32, y: i32) -> CommandList {
        let mut list = CommandList::new();
        let frame = Frame::new(Pointer::new(x, y), 1.0, VIEWPORT);
        let mut cx = RenderContext::new(&mut list, &self.fonts, &self.theme);
        self.screen.frame(&frame, &mut cx);
        list
    }

    fn press(&mut self, x: i32, y: i32, button: MouseButton) -> bool {
        let mut cx = EventContext::new(&self.fonts, &mut self.clicks);
        self.screen.pointer_down(Pointer::new(x, y), button, &mut cx)
    }

    fn release(&mut self, x: i32, y: i32) {
        self.screen.pointer_up(Pointer::new(x, y), MouseButton::Left);
    }
}

fn build_host(sprint: Rc<Cell<bool>>, cps: Rc<RefCell<Vec<f64>>>) -> Host {
    let mut screen = Screen::new();

    let combat = Window::new("Combat", Rect::new(27, 50, 200, 200)).with_child(
        ExpandableMod::new("Auto-Clicker", false).with_setting(
            Slider::new("Min CPS", 18.1, 1.0, 30.0).on_change(move |v| {
                cps.borrow_mut().push(v);
                None
            }),
        ),
    );
    let movement = Window::new("Movement", Rect::new(427, 50, 200, 150))
        .with_child(Toggle::new("Sprint", false).on_toggle(move |v| sprint.set(v)));

    screen.add_window("Combat", combat).unwrap();
    screen.add_window("Movement", movement).unwrap();

    Host {
        screen,
        fonts: MonospaceMetrics::default(),
        theme: Theme::DEFAULT,
        clicks: Clicks::default(),
    }
}

#[test]
fn test_toggle_through_screen() {
    let sprint = Rc::new(Cell::new(false));
    let mut host = build_host(Rc::clone(&sprint), Rc::default());
    host.tick(0, 0);

    // Movement's first child row starts at (435, 74).
    assert!(host.press(440, 78, MouseButton::Left));
    assert!(sprint.get());
    assert_eq!(host.clicks.0, [(0.3, 1.0)]);
}

#[test]
fn test_expand_then_drag_slider() {
    let cps = Rc::new(RefCell::new(Vec::new()));
    let mut host = build_host(Rc::default(), Rc::clone(&cps));
    host.tick(0, 0);

    // Open "Auto-Clicker" (label row at y = 74).
    assert!(host.press(40, 78, MouseButton::Right));
    for _ in 0..50 {
        host.tick(0, 0);
    }

    // Slider row: x = 35 + 8, y = 74 + 12 + 6; track starts 60 further right.
    let track_x = 43 + Slider::TRACK_OFFSET;
    assert!(host.press(track_x, 96, MouseButton::Left));
    host.tick(track_x + Slider::TRACK_WIDTH, 96);
    host.release(track_x + Slider::TRACK_WIDTH, 96);
    host.tick(track_x, 96);

    let seen = cps.borrow();
    assert_eq!(seen.first(), Some(&1.0));
    assert_eq!(seen.last(), Some(&30.0));
}

#[test]
fn test_drag_persists_through_layout_store() {
    let mut host = build_host(Rc::default(), Rc::default());
    let mut store = MemoryLayoutStore::new();

    assert!(host.press(437, 55, MouseButton::Left));
    host.tick(137, 105);
    host.release(137, 105);
    host.screen.commit_layouts(&mut store);

    assert_eq!(store.layout("Movement"), Some(WindowLayout::new(127, 100, 200, 150)));
    assert_eq!(store.layout("Combat"), Some(WindowLayout::new(27, 50, 200, 200)));

    let mut reopened = build_host(Rc::default(), Rc::default()).screen;
    assert_eq!(reopened.restore_layouts(&store), 2);
    assert_eq!(reopened.window("Movement").map(Window::layout), store.layout("Movement"));
}

#[test]
fn test_frame_emits_shadowed_windows() {
    let mut host = build_host(Rc::default(), Rc::default());
    let list = host.tick(0, 0);

    let shadows = list
        .commands()
        .iter()
        .filter(|c| matches!(c, RenderCommand::Shadow { .. }))
        .count();
    assert_eq!(shadows, 2);
    assert!(list.texts().any(|t| t == "Auto-Clicker"));
    assert!(list.texts().any(|t| t == "Sprint"));
}
