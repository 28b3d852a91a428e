use eframe::egui::{Color32, RichText, Ui};

use crate::search::{SEARCH_RESULT_CAP, search_nodes};
use crate::session::Command;

use super::super::RadialMapApp;
use super::super::render_utils::parse_hex_color;

impl RadialMapApp {
    pub(in crate::app) fn draw_controls(&mut self, ui: &mut Ui) {
        ui.heading("Map Controls");
        ui.separator();
        ui.add_space(4.0);

        ui.label("Search (title, description, or id)");
        let response = ui.text_edit_singleline(&mut self.search_query);
        if self.focus_search {
            response.request_focus();
            self.focus_search = false;
        }
        if response.changed() {
            self.search_results =
                search_nodes(&self.session.graph, &self.search_query, SEARCH_RESULT_CAP);
        }

        if !self.search_query.trim().is_empty() {
            if self.search_results.is_empty() {
                ui.weak("No results found");
            }
            let rows = self
                .search_results
                .iter()
                .filter_map(|id| {
                    let node = self.session.graph.node(id)?;
                    let branch = self.session.graph.branch(&node.branch);
                    Some((
                        id.clone(),
                        node.title.clone(),
                        branch.map(|b| b.label.clone()).unwrap_or_default(),
                        branch
                            .map(|b| parse_hex_color(&b.color))
                            .unwrap_or(Color32::GRAY),
                    ))
                })
                .collect::<Vec<_>>();
            for (id, title, branch_label, color) in rows {
                ui.horizontal(|ui| {
                    ui.label(RichText::new("\u{25cf}").color(color));
                    if ui.link(title).on_hover_text(branch_label).clicked() {
                        self.queue(Command::Select(id.clone()));
                        self.queue(Command::Jump(id));
                        self.clear_search();
                    }
                });
            }
        }

        ui.separator();

        ui.horizontal_wrapped(|ui| {
            if ui.button("Reset view").clicked() {
                self.queue(Command::Deselect);
                self.queue(Command::ResetView);
            }
            if ui.button("Zoom in").clicked() {
                self.queue(Command::ZoomIn);
            }
            if ui.button("Zoom out").clicked() {
                self.queue(Command::ZoomOut);
            }
        });

        let mut show_connections = self.session.show_connections;
        if ui
            .checkbox(&mut show_connections, "Show cross-connections")
            .changed()
        {
            self.queue(Command::ToggleConnections);
        }

        ui.add_space(8.0);
        ui.separator();

        let graph = &self.session.graph;
        ui.weak(format!(
            "{} nodes \u{b7} {} branches \u{b7} {} cross-links",
            graph.node_count(),
            graph.branch_count(),
            graph.connections.len()
        ));
        if graph.dropped_connections > 0 {
            ui.weak(format!(
                "{} connection(s) skipped (unknown endpoints)",
                graph.dropped_connections
            ));
        }

        ui.add_space(8.0);
        ui.weak("Click a node, branch, or the center to focus it.");
        ui.weak("Drag to pan, scroll or pinch to zoom.");
        ui.weak("/ focuses search, Esc deselects.");
    }
}
