use eframe::egui::{Color32, RichText, Ui};

use crate::selection::FocusState;
use crate::session::Command;
use crate::util::truncate_description;

use super::super::RadialMapApp;
use super::super::render_utils::{CENTER_COLOR, parse_hex_color};

const DESCRIPTION_LIMIT: usize = 500;

struct LinkRow {
    command: Command,
    label: String,
    color: Color32,
}

impl RadialMapApp {
    pub(in crate::app) fn draw_details(&mut self, ui: &mut Ui) {
        match self.session.focus().clone() {
            FocusState::Idle => {
                ui.label("Select a node, branch, or the center.");
            }
            FocusState::Node(id) => self.draw_node_details(ui, &id),
            FocusState::Branch(key) => self.draw_branch_details(ui, &key),
            FocusState::Center => self.draw_center_details(ui),
        }
    }

    fn draw_node_details(&mut self, ui: &mut Ui, id: &str) {
        let Some(node) = self.session.graph.node(id) else {
            ui.label("The focused node is not part of the loaded map.");
            return;
        };

        let (branch_label, color) = match self.session.graph.branch(&node.branch) {
            Some(branch) => (branch.label.clone(), parse_hex_color(&branch.color)),
            None => (node.branch.clone(), Color32::GRAY),
        };
        let title = node.title.clone();
        let description = truncate_description(&node.description, DESCRIPTION_LIMIT);
        let evidence = node.evidence.clone();
        let sources = node.sources.clone();

        let connected = self
            .session
            .index
            .adjacent(id)
            .iter()
            .filter_map(|other| {
                let other_node = self.session.graph.node(other)?;
                let dot = self
                    .session
                    .graph
                    .branch(&other_node.branch)
                    .map(|branch| parse_hex_color(&branch.color))
                    .unwrap_or(Color32::GRAY);
                Some(LinkRow {
                    command: Command::Select(other.clone()),
                    label: other_node.title.clone(),
                    color: dot,
                })
            })
            .collect::<Vec<_>>();

        ui.label(RichText::new(branch_label).color(color).strong());
        ui.heading(title);
        ui.add_space(4.0);
        ui.label(description);

        if !evidence.is_empty() {
            ui.add_space(8.0);
            ui.label(RichText::new("Evidence").strong());
            for entry in &evidence {
                let tier = if entry.tier.is_empty() {
                    String::new()
                } else {
                    format!("[{}] ", entry.tier)
                };
                ui.label(format!("{tier}{}", entry.text));
                if !entry.source.is_empty() {
                    ui.weak(format!("\u{2014} {}", entry.source));
                }
            }
        }

        if !connected.is_empty() {
            ui.add_space(8.0);
            ui.label(RichText::new(format!("Connected nodes ({})", connected.len())).strong());
            self.draw_link_rows(ui, connected);
        }

        if !sources.is_empty() {
            ui.add_space(8.0);
            ui.label(RichText::new("Sources").strong());
            for source in &sources {
                ui.hyperlink_to(format!("{} \u{2197}", source.label), &source.url);
            }
        }
    }

    fn draw_branch_details(&mut self, ui: &mut Ui, key: &str) {
        let Some(branch) = self.session.graph.branch(key) else {
            ui.label("The focused branch is not part of the loaded map.");
            return;
        };
        let label = branch.label.clone();
        let color = parse_hex_color(&branch.color);

        let members = self
            .session
            .graph
            .branch_nodes(key)
            .map(|node| LinkRow {
                command: Command::Select(node.id.clone()),
                label: node.title.clone(),
                color,
            })
            .collect::<Vec<_>>();

        ui.label(RichText::new(label.clone()).color(color).strong());
        ui.heading(&label);
        ui.add_space(4.0);
        ui.label(format!(
            "This branch contains {} nodes exploring topics related to {}.",
            members.len(),
            label.to_lowercase()
        ));

        ui.add_space(8.0);
        ui.label(RichText::new(format!("Nodes ({})", members.len())).strong());
        self.draw_link_rows(ui, members);
    }

    fn draw_center_details(&mut self, ui: &mut Ui) {
        let center = &self.session.graph.center;
        let title = center.title.clone();
        let description = center.description.clone();
        let sources = center.sources.clone();

        let branches = self
            .session
            .graph
            .branch_order
            .iter()
            .filter_map(|key| {
                let branch = self.session.graph.branch(key)?;
                Some(LinkRow {
                    command: Command::SelectBranch(key.clone()),
                    label: branch.label.clone(),
                    color: parse_hex_color(&branch.color),
                })
            })
            .collect::<Vec<_>>();

        ui.label(RichText::new("Overview").color(CENTER_COLOR).strong());
        ui.heading(title);
        ui.add_space(4.0);
        ui.label(description);

        ui.add_space(8.0);
        ui.label(RichText::new(format!("Branches ({})", branches.len())).strong());
        self.draw_link_rows(ui, branches);

        if !sources.is_empty() {
            ui.add_space(8.0);
            ui.label(RichText::new("Key sources").strong());
            for source in &sources {
                ui.hyperlink_to(format!("{} \u{2197}", source.label), &source.url);
            }
        }
    }

    fn draw_link_rows(&mut self, ui: &mut Ui, rows: Vec<LinkRow>) {
        for row in rows {
            ui.horizontal(|ui| {
                ui.label(RichText::new("\u{25cf}").color(row.color));
                if ui.link(row.label).clicked() {
                    self.queue(row.command);
                }
            });
        }
    }
}
