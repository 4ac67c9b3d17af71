//! Stateless egui helpers shared by the app modules.
//!
//! These translate view-model nodes (`CodeBlock`, `Row`, `PanelContent`)
//! into egui widgets and report interactions back through the returned
//! `Response`; no state lives here.

use eframe::egui;

use showcase_viewer::engine::panel::PANEL_HEADER;
use showcase_viewer::markup::{CodeBlock, PanelContent, Row};

/// Draw a block header: collapse chevron plus title. The whole strip is
/// one click target.
pub fn render_block_header(ui: &mut egui::Ui, block: &CodeBlock) -> egui::Response {
    let chevron = if block.collapsed { "\u{25B6}" } else { "\u{25BC}" };
    let text = format!("{} {}", chevron, block.title);
    let response = ui.add(
        egui::Label::new(egui::RichText::new(text).size(18.0).strong())
            .sense(egui::Sense::click()),
    );
    if response.hovered() {
        ui.ctx().set_cursor_icon(egui::CursorIcon::PointingHand);
    }
    response
}

/// Draw one source row: line-number gutter plus monospace source, with a
/// highlight fill when the row is active.
pub fn render_row(ui: &mut egui::Ui, row: &Row) -> egui::Response {
    let fill = if row.active {
        ui.visuals().selection.bg_fill
    } else {
        egui::Color32::TRANSPARENT
    };

    let frame = egui::Frame::none()
        .fill(fill)
        .inner_margin(egui::Margin::symmetric(6.0, 2.0));

    let inner = frame.show(ui, |ui| {
        ui.horizontal(|ui| {
            ui.add_sized(
                [36.0, 16.0],
                egui::Label::new(
                    egui::RichText::new(&row.line_number)
                        .monospace()
                        .weak(),
                ),
            );
            ui.label(egui::RichText::new(&row.source).monospace());
            ui.allocate_space(egui::vec2(ui.available_width(), 0.0));
        });
    });

    let response = inner
        .response
        .interact(egui::Sense::click())
        .on_hover_cursor(egui::CursorIcon::PointingHand);
    response
}

/// Draw a block's explanation panel. An empty panel draws nothing.
pub fn render_panel(ui: &mut egui::Ui, panel: &PanelContent) {
    if panel.is_empty() {
        return;
    }

    egui::Frame::group(ui.style())
        .inner_margin(egui::Margin::same(8.0))
        .show(ui, |ui| {
            ui.label(egui::RichText::new(PANEL_HEADER).strong());
            ui.label(
                egui::RichText::new(panel.badge())
                    .monospace()
                    .color(ui.visuals().hyperlink_color),
            );
            ui.label(&panel.text);
        });
}
