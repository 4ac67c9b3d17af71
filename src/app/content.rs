//! Content-area rendering for `ShowcaseApp`.
//!
//! Draws every code block: clickable header, source rows, and the
//! block's explanation panel. Row and header clicks are collected during
//! the draw and dispatched afterwards; block top edges are measured here
//! for the scroll-spy tick.

use eframe::egui;

use showcase_viewer::engine::{EngineEffect, UiEvent};

use crate::ui::{render_block_header, render_panel, render_row};
use super::ShowcaseApp;

impl ShowcaseApp {
    /// Render the scrollable block list.
    pub fn draw_content(&mut self, ui: &mut egui::Ui) {
        let scroll_target = match self.pending_scroll.take() {
            Some(EngineEffect::ScrollTo { block, offset }) => Some((block, offset)),
            None => None,
        };

        let mut tops = Vec::with_capacity(self.engine.doc.blocks.len());
        let mut clicked = None;

        egui::ScrollArea::vertical()
            .auto_shrink([false; 2])
            .show(ui, |ui| {
                for (b, block) in self.engine.doc.blocks.iter().enumerate() {
                    let header = render_block_header(ui, block);
                    tops.push(header.rect.top());

                    if let Some((target, offset)) = scroll_target {
                        if target == b {
                            // Leave `offset` px of headroom above the header
                            let rect = header.rect.translate(egui::vec2(0.0, -offset));
                            ui.scroll_to_rect(rect, Some(egui::Align::Min));
                        }
                    }
                    if header.clicked() {
                        clicked = Some(UiEvent::HeaderClicked { block: b });
                    }

                    if !block.collapsed {
                        for (r, row) in block.rows.iter().enumerate() {
                            if render_row(ui, row).clicked() {
                                clicked = Some(UiEvent::RowClicked { block: b, row: r });
                            }
                        }
                        render_panel(ui, &block.panel);
                    }

                    ui.add_space(12.0);
                }
            });

        self.block_tops = tops;

        if let Some(event) = clicked {
            self.dispatch(event);
        }
    }
}
