use eframe::egui::{self, Context, Key, Rect, pos2, vec2};

use crate::map::MapGraph;
use crate::selection::FocusState;
use crate::session::{Command, Session};

mod graph;
mod render_utils;
mod ui;

pub struct RadialMapApp {
    session: Session,
    search_query: String,
    search_results: Vec<String>,
    focus_search: bool,
    /// Canvas rect from the last frame; panel-issued commands use it for
    /// pixel-to-world conversion.
    map_rect: Rect,
    pending: Vec<Command>,
}

impl RadialMapApp {
    pub fn new(_cc: &eframe::CreationContext<'_>, graph: MapGraph) -> Self {
        Self {
            session: Session::new(graph),
            search_query: String::new(),
            search_results: Vec::new(),
            focus_search: false,
            map_rect: Rect::from_min_size(pos2(0.0, 0.0), vec2(1920.0, 1080.0)),
            pending: Vec::new(),
        }
    }

    fn queue(&mut self, command: Command) {
        self.pending.push(command);
    }

    fn clear_search(&mut self) {
        self.search_query.clear();
        self.search_results.clear();
    }

    fn handle_keyboard(&mut self, ctx: &Context) {
        if ctx.input(|input| input.key_pressed(Key::Escape)) {
            self.queue(Command::Deselect);
            self.clear_search();
        }

        let typing = ctx.memory(|memory| memory.focused().is_some());
        if !typing && ctx.input(|input| input.key_pressed(Key::Slash)) {
            self.focus_search = true;
        }
    }
}

impl eframe::App for RadialMapApp {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        self.handle_keyboard(ctx);

        egui::SidePanel::left("map_controls")
            .default_width(260.0)
            .show(ctx, |ui| {
                self.draw_controls(ui);
            });

        if self.session.focus() != &FocusState::Idle {
            egui::SidePanel::right("map_details")
                .default_width(320.0)
                .show(ctx, |ui| {
                    egui::ScrollArea::vertical().show(ui, |ui| {
                        self.draw_details(ui);
                    });
                });
        }

        egui::CentralPanel::default()
            .frame(egui::Frame::NONE)
            .show(ctx, |ui| {
                self.draw_map(ui);
            });

        let rect = self.map_rect;
        for command in std::mem::take(&mut self.pending) {
            self.session.apply(command, rect);
        }
    }
}
