//! Sidebar rendering for `ShowcaseApp`.
//!
//! Draws the nav-link list and feeds clicks into the engine. On narrow
//! viewports the same panel acts as the mobile drawer; the engine closes
//! it again after a link click.

use eframe::egui;

use showcase_viewer::engine::UiEvent;

use super::ShowcaseApp;

impl ShowcaseApp {
    /// Render the navigation sidebar / drawer.
    pub fn draw_sidebar(&mut self, ui: &mut egui::Ui) {
        ui.add_space(8.0);
        ui.heading("Navigation");
        ui.separator();

        let mut clicked = None;
        for (i, link) in self.engine.doc.links.iter().enumerate() {
            let mut rt = egui::RichText::new(&link.label);
            if link.active {
                rt = rt.strong().color(ui.visuals().hyperlink_color);
            }
            let response = ui.add(
                egui::Label::new(rt)
                    .sense(egui::Sense::click())
                    .wrap_mode(egui::TextWrapMode::Truncate),
            );
            if response.hovered() {
                ui.ctx().set_cursor_icon(egui::CursorIcon::PointingHand);
            }
            if response.clicked() {
                clicked = Some(i);
            }
        }

        if let Some(link) = clicked {
            self.dispatch(UiEvent::LinkClicked { link });
        }
    }
}
