//! Toolbar rendering for `ShowcaseApp`.
//!
//! Draws the menu button (narrow viewports), the document title, the
//! expand/collapse-all controls, and the dark-mode toggle.

use eframe::egui;

use showcase_viewer::engine::UiEvent;

use super::ShowcaseApp;

impl ShowcaseApp {
    /// Render the top toolbar strip.
    pub fn draw_toolbar(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.add_space(4.0);

            if self.is_mobile() && ui.button("\u{2630}").clicked() {
                self.dispatch(UiEvent::MenuToggled);
            }

            ui.label(
                egui::RichText::new(&self.engine.doc.title)
                    .strong()
                    .size(16.0),
            );

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                ui.add_space(4.0);

                if ui.selectable_label(self.dark_mode, "\u{1F319}").clicked() {
                    self.dark_mode = !self.dark_mode;
                }

                if ui.button("Tout replier").clicked() {
                    self.engine.toggle_all(false);
                }
                if ui.button("Tout déplier").clicked() {
                    self.engine.toggle_all(true);
                }
            });
        });
    }
}
