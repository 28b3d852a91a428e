use eframe::egui::{Pos2, Rect, Vec2, pos2};

pub const MIN_WINDOW_WIDTH: f32 = 400.0;
pub const MAX_WINDOW_WIDTH: f32 = 8000.0;
/// Toolbar zoom steps. Not multiplicative inverses, so a click in and a
/// click out do not exactly cancel.
pub const ZOOM_IN_FACTOR: f32 = 0.8;
pub const ZOOM_OUT_FACTOR: f32 = 1.25;

/// Rectangular world-coordinate window mapped onto the display surface.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewWindow {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl ViewWindow {
    pub const DEFAULT: Self = Self {
        x: -960.0,
        y: -540.0,
        w: 1920.0,
        h: 1080.0,
    };
}

#[derive(Clone, Copy, Debug)]
struct DragState {
    pointer_start: Pos2,
    origin_start: Pos2,
}

/// Owns the view window and maps gestures onto it. Pan is unbounded;
/// zoom keeps the window width inside [MIN_WINDOW_WIDTH, MAX_WINDOW_WIDTH]
/// and this is the only place that bound is enforced.
#[derive(Clone, Debug)]
pub struct Viewport {
    pub window: ViewWindow,
    drag: Option<DragState>,
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            window: ViewWindow::DEFAULT,
            drag: None,
        }
    }
}

impl Viewport {
    pub fn screen_to_world(&self, screen: Pos2, rect: Rect) -> Pos2 {
        pos2(
            self.window.x + (screen.x - rect.left()) / rect.width() * self.window.w,
            self.window.y + (screen.y - rect.top()) / rect.height() * self.window.h,
        )
    }

    pub fn world_to_screen(&self, world: Pos2, rect: Rect) -> Pos2 {
        pos2(
            rect.left() + (world.x - self.window.x) / self.window.w * rect.width(),
            rect.top() + (world.y - self.window.y) / self.window.h * rect.height(),
        )
    }

    /// Screen pixels per world unit at the current zoom.
    pub fn scale(&self, rect: Rect) -> f32 {
        rect.width() / self.window.w
    }

    /// Shift the window so the content follows a pointer moved by
    /// `screen_delta`.
    pub fn pan_by(&mut self, screen_delta: Vec2, rect: Rect) {
        self.window.x -= screen_delta.x * (self.window.w / rect.width());
        self.window.y -= screen_delta.y * (self.window.h / rect.height());
    }

    pub fn begin_drag(&mut self, pointer: Pos2) {
        self.drag = Some(DragState {
            pointer_start: pointer,
            origin_start: pos2(self.window.x, self.window.y),
        });
    }

    /// Continue an ongoing drag. Positions derive from the drag origin, not
    /// from accumulated deltas, so a drag cannot drift.
    pub fn drag_to(&mut self, pointer: Pos2, rect: Rect) {
        let Some(drag) = self.drag else {
            return;
        };
        let delta = pointer - drag.pointer_start;
        self.window.x = drag.origin_start.x - delta.x * (self.window.w / rect.width());
        self.window.y = drag.origin_start.y - delta.y * (self.window.h / rect.height());
    }

    pub fn end_drag(&mut self) {
        self.drag = None;
    }

    pub fn is_dragging(&self) -> bool {
        self.drag.is_some()
    }

    /// Anchor-preserving zoom: the world point under `anchor` stays under
    /// the same screen point after the resize. Factors above 1 zoom out.
    /// A resize that would leave the width bounds is rejected wholesale.
    pub fn zoom_at(&mut self, factor: f32, anchor: Pos2, rect: Rect) {
        let new_w = self.window.w * factor;
        let new_h = self.window.h * factor;
        if !(MIN_WINDOW_WIDTH..=MAX_WINDOW_WIDTH).contains(&new_w) {
            return;
        }

        let world = self.screen_to_world(anchor, rect);
        self.window.x = world.x - (world.x - self.window.x) * (new_w / self.window.w);
        self.window.y = world.y - (world.y - self.window.y) * (new_h / self.window.h);
        self.window.w = new_w;
        self.window.h = new_h;
    }

    pub fn zoom_in(&mut self, rect: Rect) {
        self.zoom_at(ZOOM_IN_FACTOR, rect.center(), rect);
    }

    pub fn zoom_out(&mut self, rect: Rect) {
        self.zoom_at(ZOOM_OUT_FACTOR, rect.center(), rect);
    }

    pub fn reset(&mut self) {
        self.window = ViewWindow::DEFAULT;
        self.drag = None;
    }

    /// Re-center the window on a world point without changing its size.
    pub fn center_on(&mut self, world: Pos2) {
        self.window.x = world.x - self.window.w / 2.0;
        self.window.y = world.y - self.window.h / 2.0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use eframe::egui::vec2;

    fn screen() -> Rect {
        Rect::from_min_size(pos2(0.0, 0.0), vec2(1920.0, 1080.0))
    }

    #[test]
    fn pan_then_inverse_pan_restores_window() {
        let mut viewport = Viewport::default();
        let original = viewport.window;
        viewport.pan_by(vec2(100.0, -48.0), screen());
        assert_ne!(viewport.window, original);
        viewport.pan_by(vec2(-100.0, 48.0), screen());
        assert_eq!(viewport.window, original);
    }

    #[test]
    fn drag_positions_derive_from_gesture_start() {
        let mut viewport = Viewport::default();
        viewport.begin_drag(pos2(500.0, 500.0));
        viewport.drag_to(pos2(620.0, 500.0), screen());
        viewport.drag_to(pos2(500.0, 500.0), screen());
        viewport.end_drag();
        assert_eq!(viewport.window, ViewWindow::DEFAULT);
        assert!(!viewport.is_dragging());
    }

    #[test]
    fn drag_without_begin_is_ignored() {
        let mut viewport = Viewport::default();
        viewport.drag_to(pos2(100.0, 100.0), screen());
        assert_eq!(viewport.window, ViewWindow::DEFAULT);
    }

    #[test]
    fn zoom_preserves_world_point_under_anchor() {
        let mut viewport = Viewport::default();
        let anchor = pos2(333.0, 777.0);
        let before = viewport.screen_to_world(anchor, screen());
        viewport.zoom_at(0.92, anchor, screen());
        let after = viewport.screen_to_world(anchor, screen());
        assert!((before.x - after.x).abs() < 1e-2, "{before:?} vs {after:?}");
        assert!((before.y - after.y).abs() < 1e-2);
    }

    #[test]
    fn repeated_zoom_in_stops_at_minimum_width() {
        let mut viewport = Viewport::default();
        let anchor = pos2(222.0, 444.0);
        for _ in 0..200 {
            viewport.zoom_at(0.92, anchor, screen());
        }
        let settled = viewport.window;
        assert!(settled.w >= MIN_WINDOW_WIDTH);
        assert!(settled.w * 0.92 < MIN_WINDOW_WIDTH);

        viewport.zoom_at(0.92, anchor, screen());
        assert_eq!(viewport.window, settled);
    }

    #[test]
    fn zoom_out_beyond_maximum_is_rejected() {
        let mut viewport = Viewport::default();
        for _ in 0..200 {
            viewport.zoom_at(1.25, pos2(960.0, 540.0), screen());
        }
        let settled = viewport.window;
        assert!(settled.w <= MAX_WINDOW_WIDTH);

        viewport.zoom_at(1.25, pos2(960.0, 540.0), screen());
        assert_eq!(viewport.window, settled);
    }

    #[test]
    fn reset_restores_default_framing() {
        let mut viewport = Viewport::default();
        viewport.pan_by(vec2(300.0, 200.0), screen());
        viewport.zoom_at(1.25, pos2(10.0, 10.0), screen());
        viewport.reset();
        assert_eq!(viewport.window, ViewWindow::DEFAULT);
    }

    #[test]
    fn center_on_keeps_window_size() {
        let mut viewport = Viewport::default();
        viewport.center_on(pos2(280.0, 0.0));
        assert_eq!(viewport.window.w, ViewWindow::DEFAULT.w);
        assert_eq!(viewport.window.x, 280.0 - ViewWindow::DEFAULT.w / 2.0);

        let mid = viewport.screen_to_world(screen().center(), screen());
        assert!((mid.x - 280.0).abs() < 1e-3);
        assert!(mid.y.abs() < 1e-3);
    }

    #[test]
    fn world_screen_round_trip() {
        let mut viewport = Viewport::default();
        viewport.pan_by(vec2(123.0, -45.0), screen());
        let world = pos2(280.0, -440.0);
        let round_trip = viewport.screen_to_world(viewport.world_to_screen(world, screen()), screen());
        assert!((round_trip.x - world.x).abs() < 1e-2);
        assert!((round_trip.y - world.y).abs() < 1e-2);
    }
}
