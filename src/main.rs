use eframe::egui;

use showcase_viewer::markup::{parser, Document};

mod app;
mod ui;

use app::ShowcaseApp;

/// Built-in sample document, used when no path is given or the given
/// path cannot be read.
const SAMPLE_DOCUMENT: &str = include_str!("../demos/mvc_showcase.html");

fn load_document() -> Document {
    let started = std::time::Instant::now();

    let html = match std::env::args().nth(1) {
        Some(path) => match std::fs::read_to_string(&path) {
            Ok(html) => html,
            Err(err) => {
                log::error!("cannot read {}: {} — falling back to sample", path, err);
                SAMPLE_DOCUMENT.to_string()
            }
        },
        None => SAMPLE_DOCUMENT.to_string(),
    };

    let doc = parser::parse_document(&html);
    log::info!(
        "parsed \"{}\": {} blocks, {} rows, {} links in {:?}",
        doc.title,
        doc.blocks.len(),
        doc.row_count(),
        doc.links.len(),
        started.elapsed()
    );
    doc
}

fn main() {
    env_logger::init();

    let doc = load_document();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default().with_inner_size([1280.0, 800.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Showcase Viewer",
        options,
        Box::new(move |_cc| Ok(Box::new(ShowcaseApp::new(doc)))),
    )
    .expect("Failed to start Showcase Viewer");
}
