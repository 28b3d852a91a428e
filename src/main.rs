mod app;
mod layout;
mod map;
mod search;
mod selection;
mod session;
mod util;
mod viewport;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Args {
    /// JSON map dataset (center, branches, nodes, connections).
    #[arg(long, default_value = "data/sample-map.json")]
    dataset: PathBuf,
}

fn main() -> ExitCode {
    let args = Args::parse();

    let graph = match map::load_map_file(&args.dataset) {
        Ok(graph) => graph,
        Err(error) => {
            eprintln!("error: {error:#}");
            return ExitCode::FAILURE;
        }
    };

    let options = eframe::NativeOptions {
        viewport: eframe::egui::ViewportBuilder::default().with_inner_size([1440.0, 920.0]),
        ..Default::default()
    };

    let title = graph.center.title.clone();
    let result = eframe::run_native(
        &title,
        options,
        Box::new(move |cc| Ok(Box::new(app::RadialMapApp::new(cc, graph)))),
    );

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            eprintln!("error: {error}");
            ExitCode::FAILURE
        }
    }
}
