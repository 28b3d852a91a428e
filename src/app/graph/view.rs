use eframe::egui::{
    self, Align2, Color32, FontId, Pos2, Rect, Sense, Stroke, Ui, pos2,
    epaint::QuadraticBezierShape,
};

use crate::layout::{
    BRANCH_RADIUS, BRANCH_RING, CENTER_RADIUS, RING2_DISTANCE, SPOKE_OVERSHOOT, TOPIC_RADIUS,
};
use crate::map::{CENTER_ID, branch_anchor_id};
use crate::selection::FocusState;
use crate::session::Command;
use crate::util::wrap_title;

use super::super::RadialMapApp;
use super::super::render_utils::{
    CENTER_COLOR, CENTER_FILL, SPOKE_EXT_OPACITY, edge_stroke, entity_opacity, parse_hex_color,
    silver, spoke_stroke,
};
use super::Hit;

const BACKGROUND: Color32 = Color32::from_rgb(10, 14, 22);

impl RadialMapApp {
    pub(in crate::app) fn draw_map(&mut self, ui: &mut Ui) {
        let (rect, response) = ui.allocate_exact_size(ui.available_size(), Sense::click_and_drag());
        self.map_rect = rect;
        let painter = ui.painter_at(rect);
        painter.rect_filled(rect, 0.0, BACKGROUND);

        self.handle_map_zoom(ui, rect, &response);
        self.handle_map_pan(rect, &response);

        let hovered = ui
            .input(|input| input.pointer.hover_pos())
            .filter(|_| response.hovered())
            .and_then(|pointer| self.hit_test(pointer, rect));
        if hovered.is_some() {
            ui.output_mut(|output| {
                output.cursor_icon = egui::CursorIcon::PointingHand;
            });
        }

        let scale = self.session.viewport.scale(rect);
        let focus_color = self.focus_branch_color();

        if self.session.show_connections {
            self.draw_connections(&painter, rect, scale, focus_color);
        }
        self.draw_spokes(&painter, rect, scale);
        self.draw_branches(&painter, rect, scale, hovered.as_ref());
        self.draw_topics(&painter, rect, scale, hovered.as_ref());
        self.draw_center(&painter, rect, scale);

        if response.clicked_by(egui::PointerButton::Primary) {
            let command = match hovered {
                Some(Hit::Node(id)) => Command::Select(id),
                Some(Hit::Branch(key)) => Command::SelectBranch(key),
                Some(Hit::Center) => Command::SelectCenter,
                None => Command::Deselect,
            };
            self.session.apply(command, rect);
        }
    }

    /// Branch color backing the highlight tier of the current focus.
    fn focus_branch_color(&self) -> Color32 {
        let key = match self.session.focus() {
            FocusState::Node(id) => self.session.graph.node(id).map(|node| node.branch.as_str()),
            FocusState::Branch(key) => Some(key.as_str()),
            _ => None,
        };
        key.and_then(|key| self.session.graph.branch(key))
            .map(|branch| parse_hex_color(&branch.color))
            .unwrap_or(Color32::GRAY)
    }

    fn to_screen(&self, world: Pos2, rect: Rect) -> Pos2 {
        self.session.viewport.world_to_screen(world, rect)
    }

    /// Cross-connections curve toward the center for the spiderweb look:
    /// the control point is the chord midpoint pulled 45% inward.
    fn draw_connections(&self, painter: &egui::Painter, rect: Rect, scale: f32, focus: Color32) {
        let visuals = self.session.visuals();
        for (index, (a, b)) in self.session.graph.connections.iter().enumerate() {
            let (Some(p1), Some(p2)) = (
                self.session.layout.position(a),
                self.session.layout.position(b),
            ) else {
                continue;
            };

            let control = pos2(
                (p1.x + p2.x) / 2.0 * 0.55,
                (p1.y + p2.y) / 2.0 * 0.55,
            );
            let stroke = edge_stroke(visuals.edge(index), focus, scale);
            painter.add(QuadraticBezierShape::from_points_stroke(
                [
                    self.to_screen(p1, rect),
                    self.to_screen(control, rect),
                    self.to_screen(p2, rect),
                ],
                false,
                Color32::TRANSPARENT,
                stroke,
            ));
        }
    }

    fn draw_spokes(&self, painter: &egui::Painter, rect: Rect, scale: f32) {
        let visuals = self.session.visuals();
        let branch_focused = matches!(self.session.focus(), FocusState::Branch(_));
        let center = self.to_screen(pos2(0.0, 0.0), rect);

        for key in &self.session.graph.branch_order {
            let Some(anchor) = self.session.layout.position(&branch_anchor_id(key)) else {
                continue;
            };
            let branch = &self.session.graph.branches[key];
            let color = parse_hex_color(&branch.color);

            let stroke = spoke_stroke(visuals.spoke(key), color, branch_focused, scale);
            painter.line_segment([center, self.to_screen(anchor, rect)], stroke);

            // Faint extension through both node rings.
            let outer = anchor.to_vec2() * ((RING2_DISTANCE + SPOKE_OVERSHOOT) / BRANCH_RING);
            painter.line_segment(
                [
                    self.to_screen(anchor, rect),
                    self.to_screen(outer.to_pos2(), rect),
                ],
                Stroke::new(1.0 * scale, silver(SPOKE_EXT_OPACITY)),
            );
        }
    }

    fn draw_branches(&self, painter: &egui::Painter, rect: Rect, scale: f32, hovered: Option<&Hit>) {
        let visuals = self.session.visuals();
        let idle = self.session.focus() == &FocusState::Idle;

        for key in &self.session.graph.branch_order {
            let anchor_id = branch_anchor_id(key);
            let Some(world) = self.session.layout.position(&anchor_id) else {
                continue;
            };
            let branch = &self.session.graph.branches[key];
            let color = parse_hex_color(&branch.color);
            let opacity = entity_opacity(visuals.entity(&anchor_id));
            let is_hovered = idle && hovered == Some(&Hit::Branch(key.clone()));

            let position = self.to_screen(world, rect);
            let radius = BRANCH_RADIUS * scale;

            painter.circle_stroke(
                position,
                radius + 3.0 * scale,
                Stroke::new(1.5 * scale, color.gamma_multiply(0.3 * opacity)),
            );
            let fill = if is_hovered { 0.35 } else { 0.2 };
            painter.circle(
                position,
                radius,
                color.gamma_multiply(fill * opacity),
                Stroke::new(2.0 * scale, color.gamma_multiply(opacity)),
            );

            let count = self.session.graph.branch_nodes(key).count();
            painter.text(
                position,
                Align2::CENTER_CENTER,
                count.to_string(),
                FontId::proportional(14.0 * scale),
                color.gamma_multiply(opacity),
            );

            self.draw_branch_label(painter, rect, scale, branch.angle, &branch.label, color, opacity);
        }
    }

    fn draw_branch_label(
        &self,
        painter: &egui::Painter,
        rect: Rect,
        scale: f32,
        angle: f32,
        label: &str,
        color: Color32,
        opacity: f32,
    ) {
        let distance = BRANCH_RING + BRANCH_RADIUS + 20.0;
        let radians = angle.to_radians();
        let world = pos2(radians.cos() * distance, radians.sin() * distance);

        let anchor = if angle == 0.0 || angle == 90.0 || angle == 180.0 || angle == 270.0 {
            Align2::CENTER_CENTER
        } else if angle > 90.0 && angle < 270.0 {
            Align2::RIGHT_CENTER
        } else {
            Align2::LEFT_CENTER
        };

        painter.text(
            self.to_screen(world, rect),
            anchor,
            label,
            FontId::proportional(11.0 * scale),
            color.gamma_multiply(opacity),
        );
    }

    fn draw_topics(&self, painter: &egui::Painter, rect: Rect, scale: f32, hovered: Option<&Hit>) {
        let visuals = self.session.visuals();
        let focus = self.session.focus();

        for node in &self.session.graph.nodes {
            let Some(world) = self.session.layout.position(&node.id) else {
                continue;
            };
            let Some(branch) = self.session.graph.branch(&node.branch) else {
                continue;
            };
            let color = parse_hex_color(&branch.color);
            let opacity = entity_opacity(visuals.entity(&node.id));

            let is_hovered = hovered == Some(&Hit::Node(node.id.clone()))
                && focus != &FocusState::Node(node.id.clone());
            let base_radius = if node.ring == 1 {
                TOPIC_RADIUS
            } else {
                TOPIC_RADIUS - 2.0
            };
            let radius = if is_hovered {
                base_radius * 1.15
            } else {
                base_radius
            } * scale;
            let fill = if is_hovered { 0.35 } else { 0.15 };

            let position = self.to_screen(world, rect);
            painter.circle(
                position,
                radius,
                color.gamma_multiply(fill * opacity),
                Stroke::new(1.5 * scale, color.gamma_multiply(0.6 * opacity)),
            );

            let font_size = if node.ring == 1 { 9.0 } else { 8.0 } * scale;
            let label_color = Color32::WHITE.gamma_multiply(0.55 * opacity);
            let mut offset = base_radius + 14.0;
            for line in wrap_title(&node.title) {
                painter.text(
                    position + egui::vec2(0.0, offset * scale),
                    Align2::CENTER_CENTER,
                    line,
                    FontId::proportional(font_size),
                    label_color,
                );
                offset += 11.0;
            }
        }
    }

    fn draw_center(&self, painter: &egui::Painter, rect: Rect, scale: f32) {
        let Some(world) = self.session.layout.position(CENTER_ID) else {
            return;
        };
        let opacity = entity_opacity(self.session.visuals().entity(CENTER_ID));
        let position = self.to_screen(world, rect);
        let radius = CENTER_RADIUS * scale;

        painter.circle_filled(
            position,
            radius + 30.0 * scale,
            CENTER_COLOR.gamma_multiply(0.08 * opacity),
        );
        painter.circle_stroke(
            position,
            radius + 4.0 * scale,
            Stroke::new(1.5 * scale, CENTER_COLOR.gamma_multiply(0.3 * opacity)),
        );
        painter.circle(
            position,
            radius,
            CENTER_FILL.gamma_multiply(opacity),
            Stroke::new(2.5 * scale, CENTER_COLOR.gamma_multiply(opacity)),
        );

        let title_lines = wrap_title(&self.session.graph.center.title);
        let line_count = title_lines.len() as f32;
        let mut offset = -12.0 - (line_count - 1.0) * 9.0;
        for line in title_lines {
            painter.text(
                position + egui::vec2(0.0, offset * scale),
                Align2::CENTER_CENTER,
                line,
                FontId::proportional(14.0 * scale),
                Color32::WHITE.gamma_multiply(opacity),
            );
            offset += 18.0;
        }

        let subtitle = format!(
            "{} nodes \u{b7} {} branches",
            self.session.graph.node_count(),
            self.session.graph.branch_count()
        );
        painter.text(
            position + egui::vec2(0.0, 28.0 * scale),
            Align2::CENTER_CENTER,
            subtitle,
            FontId::proportional(9.0 * scale),
            Color32::WHITE.gamma_multiply(0.5 * opacity),
        );
    }
}
