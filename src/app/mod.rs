//! `ShowcaseApp` — the top-level egui application state.
//!
//! This module declares the `ShowcaseApp` struct and its `eframe::App`
//! impl (the per-frame event pump). Drawing is split across the sibling
//! sub-modules:
//!
//! - `navigation` — sidebar / mobile drawer with the nav links
//! - `toolbar`    — expand/collapse-all, dark mode, menu button
//! - `content`    — code blocks, rows, explanation panels

pub mod content;
pub mod navigation;
pub mod toolbar;

use eframe::egui;

use showcase_viewer::engine::scrollspy::MOBILE_BREAKPOINT;
use showcase_viewer::engine::{EngineEffect, Key, ShowcaseEngine, UiEvent};
use showcase_viewer::markup::Document;

pub struct ShowcaseApp {
    pub engine: ShowcaseEngine,
    pub dark_mode: bool,
    /// Scroll request from the last dispatched event, consumed by
    /// `draw_content` on the next draw.
    pub pending_scroll: Option<EngineEffect>,
    /// Block top edges measured during the last content draw, in
    /// viewport coordinates. Input to the scroll-spy tick.
    pub block_tops: Vec<f32>,
    /// Set when raw scroll input arrived this frame and a spy
    /// recomputation is due.
    scroll_tick_due: bool,
}

impl ShowcaseApp {
    pub fn new(doc: Document) -> Self {
        Self {
            engine: ShowcaseEngine::new(doc, Default::default()),
            dark_mode: false,
            pending_scroll: None,
            block_tops: Vec::new(),
            scroll_tick_due: false,
        }
    }

    pub fn is_mobile(&self) -> bool {
        self.engine.viewport_width > 0.0 && self.engine.viewport_width <= MOBILE_BREAKPOINT
    }

    /// Dispatch an event and remember any scroll effect for the next draw.
    pub fn dispatch(&mut self, event: UiEvent) {
        if let Some(effect) = self.engine.dispatch(event) {
            self.pending_scroll = Some(effect);
        }
    }

    fn pump_input(&mut self, ctx: &egui::Context) {
        let text_input_focused = ctx.wants_keyboard_input();
        let keys = [
            (egui::Key::E, Key::ExpandAll),
            (egui::Key::C, Key::CollapseAll),
            (egui::Key::Escape, Key::Escape),
        ];
        for (raw, key) in keys {
            if ctx.input(|i| i.key_pressed(raw)) {
                self.dispatch(UiEvent::KeyPressed {
                    key,
                    text_input_focused,
                });
            }
        }

        // Coalesce raw scroll input into one spy tick per frame
        if ctx.input(|i| i.raw_scroll_delta.y != 0.0) && self.engine.schedule_scroll() {
            self.scroll_tick_due = true;
        }
    }
}

impl eframe::App for ShowcaseApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.engine.viewport_width = ctx.screen_rect().width();

        if self.dark_mode {
            ctx.set_visuals(egui::Visuals::dark());
        } else {
            ctx.set_visuals(egui::Visuals::light());
        }

        self.pump_input(ctx);

        egui::TopBottomPanel::top("toolbar").show(ctx, |ui| {
            self.draw_toolbar(ui);
        });

        // Sidebar: fixed on wide viewports, drawer-gated on narrow ones
        if !self.is_mobile() || self.engine.drawer.is_open() {
            egui::SidePanel::left("sidebar")
                .default_width(200.0)
                .show(ctx, |ui| {
                    self.draw_sidebar(ui);
                });
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            self.draw_content(ui);
        });

        // Spy tick runs after the draw measured fresh block tops
        if self.scroll_tick_due {
            self.scroll_tick_due = false;
            let block_tops = std::mem::take(&mut self.block_tops);
            self.dispatch(UiEvent::ScrollTicked { block_tops });
        }
    }
}
