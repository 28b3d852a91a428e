use eframe::egui::{Pos2, Rect, Vec2};

use crate::layout::RadialLayout;
use crate::map::{GraphIndex, MapGraph};
use crate::selection::{FocusState, VisualState};
use crate::viewport::Viewport;

/// The abstract command surface. Every user gesture, panel link, and
/// keyboard binding resolves to one of these before touching state.
#[derive(Clone, Debug)]
pub enum Command {
    Select(String),
    SelectBranch(String),
    SelectCenter,
    Deselect,
    Pan(Vec2),
    ZoomAt { factor: f32, anchor: Pos2 },
    ZoomIn,
    ZoomOut,
    ResetView,
    ToggleConnections,
    /// Center the viewport on a node without changing the selection.
    Jump(String),
}

/// Single-owner session context: the graph, its derived read-only caches,
/// and the two mutable sub-states (focus, viewport). All commands run
/// synchronously to completion; there are no concurrent writers.
pub struct Session {
    pub graph: MapGraph,
    pub index: GraphIndex,
    pub layout: RadialLayout,
    pub viewport: Viewport,
    pub show_connections: bool,
    focus: FocusState,
    visuals: VisualState,
}

impl Session {
    pub fn new(graph: MapGraph) -> Self {
        let index = GraphIndex::build(&graph);
        let layout = RadialLayout::compute(&graph);
        let visuals = VisualState::compute(&FocusState::Idle, &graph, &index);
        Self {
            graph,
            index,
            layout,
            viewport: Viewport::default(),
            show_connections: true,
            focus: FocusState::Idle,
            visuals,
        }
    }

    pub fn focus(&self) -> &FocusState {
        &self.focus
    }

    pub fn visuals(&self) -> &VisualState {
        &self.visuals
    }

    /// `rect` is the screen area the map is drawn into; pan and zoom use it
    /// to convert between pixels and world units.
    pub fn apply(&mut self, command: Command, rect: Rect) {
        match command {
            Command::Select(id) => {
                if self.graph.node(&id).is_some() {
                    self.set_focus(FocusState::Node(id));
                }
            }
            Command::SelectBranch(key) => {
                if self.graph.branch(&key).is_some() {
                    self.set_focus(FocusState::Branch(key));
                }
            }
            Command::SelectCenter => self.set_focus(FocusState::Center),
            Command::Deselect => self.set_focus(FocusState::Idle),
            Command::Pan(delta) => self.viewport.pan_by(delta, rect),
            Command::ZoomAt { factor, anchor } => self.viewport.zoom_at(factor, anchor, rect),
            Command::ZoomIn => self.viewport.zoom_in(rect),
            Command::ZoomOut => self.viewport.zoom_out(rect),
            Command::ResetView => self.viewport.reset(),
            Command::ToggleConnections => self.show_connections = !self.show_connections,
            Command::Jump(id) => {
                if let Some(position) = self.layout.position(&id) {
                    self.viewport.center_on(position);
                }
            }
        }
    }

    /// Tiers are derived state: recomputed in full on every transition so a
    /// stale assignment can never survive a focus change.
    fn set_focus(&mut self, focus: FocusState) {
        self.focus = focus;
        self.visuals = VisualState::compute(&self.focus, &self.graph, &self.index);
    }
}
