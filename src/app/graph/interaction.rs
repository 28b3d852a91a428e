use eframe::egui::{self, Pos2, Rect, Ui};

use crate::layout::{BRANCH_RADIUS, CENTER_RADIUS, TOPIC_RADIUS};
use crate::map::{CENTER_ID, branch_anchor_id};
use crate::session::Command;

use super::super::RadialMapApp;

const SCROLL_ZOOM_IN: f32 = 0.92;
const SCROLL_ZOOM_OUT: f32 = 1.08;

#[derive(Clone, Debug, PartialEq, Eq)]
pub(in crate::app) enum Hit {
    Node(String),
    Branch(String),
    Center,
}

impl RadialMapApp {
    pub(in crate::app) fn handle_map_zoom(
        &mut self,
        ui: &Ui,
        rect: Rect,
        response: &egui::Response,
    ) {
        if !response.hovered() {
            return;
        }

        let pointer = ui
            .input(|input| input.pointer.hover_pos())
            .unwrap_or_else(|| rect.center());

        let scroll = ui.input(|input| input.raw_scroll_delta.y);
        if scroll.abs() > f32::EPSILON {
            let factor = if scroll > 0.0 {
                SCROLL_ZOOM_IN
            } else {
                SCROLL_ZOOM_OUT
            };
            self.session
                .apply(Command::ZoomAt { factor, anchor: pointer }, rect);
        }

        // Pinch arrives as a per-frame scale ratio; invert it because the
        // window grows when the fingers close.
        let pinch = ui.input(|input| input.zoom_delta());
        if (pinch - 1.0).abs() > f32::EPSILON {
            self.session.apply(
                Command::ZoomAt {
                    factor: 1.0 / pinch,
                    anchor: pointer,
                },
                rect,
            );
        }
    }

    pub(in crate::app) fn handle_map_pan(&mut self, rect: Rect, response: &egui::Response) {
        if response.drag_started_by(egui::PointerButton::Primary)
            || response.drag_started_by(egui::PointerButton::Middle)
        {
            if let Some(pointer) = response.interact_pointer_pos() {
                self.session.viewport.begin_drag(pointer);
            }
        }

        if response.dragged() && self.session.viewport.is_dragging() {
            if let Some(pointer) = response.interact_pointer_pos() {
                self.session.viewport.drag_to(pointer, rect);
            }
        }

        if response.drag_stopped() {
            self.session.viewport.end_drag();
        }
    }

    /// Entity under the pointer: topic nodes take precedence over branch
    /// circles, the center is checked last.
    pub(in crate::app) fn hit_test(&self, pointer: Pos2, rect: Rect) -> Option<Hit> {
        let viewport = &self.session.viewport;
        let scale = viewport.scale(rect);

        let mut nearest: Option<(f32, Hit)> = None;

        for node in &self.session.graph.nodes {
            let Some(world) = self.session.layout.position(&node.id) else {
                continue;
            };
            let radius = if node.ring == 1 {
                TOPIC_RADIUS
            } else {
                TOPIC_RADIUS - 2.0
            };
            let distance = viewport.world_to_screen(world, rect).distance(pointer);
            if distance <= radius * scale
                && nearest.as_ref().is_none_or(|(best, _)| distance < *best)
            {
                nearest = Some((distance, Hit::Node(node.id.clone())));
            }
        }
        if let Some((_, hit)) = nearest.take() {
            return Some(hit);
        }

        for key in &self.session.graph.branch_order {
            let Some(world) = self.session.layout.position(&branch_anchor_id(key)) else {
                continue;
            };
            let distance = viewport.world_to_screen(world, rect).distance(pointer);
            if distance <= BRANCH_RADIUS * scale
                && nearest.as_ref().is_none_or(|(best, _)| distance < *best)
            {
                nearest = Some((distance, Hit::Branch(key.clone())));
            }
        }
        if let Some((_, hit)) = nearest.take() {
            return Some(hit);
        }

        if let Some(world) = self.session.layout.position(CENTER_ID) {
            let center = viewport.world_to_screen(world, rect);
            if center.distance(pointer) <= CENTER_RADIUS * scale {
                return Some(Hit::Center);
            }
        }

        None
    }
}
