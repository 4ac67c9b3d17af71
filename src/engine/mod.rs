//! `ShowcaseEngine` — the headless view-state engine.
//!
//! This module declares the engine struct, the typed event enum, and the
//! single `dispatch` entry point. The state-mutating methods are split
//! across the sibling sub-modules:
//!
//! - `selection`  — active-row tracking per block, global clear
//! - `panel`      — explanation panel content
//! - `visibility` — collapsed/expanded state, bulk toggles, key handling
//! - `scrollspy`  — nav-link activation from clicks and scroll position

pub mod panel;
pub mod scrollspy;
pub mod selection;
pub mod visibility;

use crate::markup::Document;
use crate::mobile::Drawer;

use self::scrollspy::ScrollSpyConfig;

/// Keys the engine reacts to. The shell maps whatever raw input it has
/// onto these; everything else never reaches the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    /// `e` — expand all blocks
    ExpandAll,
    /// `c` — collapse all blocks
    CollapseAll,
    /// Escape — clear every row highlight on the page
    Escape,
}

/// Typed user interactions consumed by `ShowcaseEngine::dispatch`.
///
/// Every event is safe on any state: out-of-range indices and unknown
/// targets degrade to no-ops.
#[derive(Debug, Clone, PartialEq)]
pub enum UiEvent {
    /// A source row was clicked.
    RowClicked { block: usize, row: usize },
    /// A sidebar nav link was clicked.
    LinkClicked { link: usize },
    /// A block header was clicked (toggles that block).
    HeaderClicked { block: usize },
    /// One coalesced scroll recomputation; `block_tops[i]` is the top edge
    /// of block `i` in viewport coordinates.
    ScrollTicked { block_tops: Vec<f32> },
    /// A key press, with whether a text input currently has focus.
    KeyPressed { key: Key, text_input_focused: bool },
    /// The mobile menu button was pressed.
    MenuToggled,
}

/// Side effect the shell must perform; the engine never touches the
/// rendering surface itself.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum EngineEffect {
    /// Smooth-scroll so that `block`'s top edge sits `offset` px below
    /// the viewport top.
    ScrollTo { block: usize, offset: f32 },
}

/// Owns the document view-model and all transient UI state.
pub struct ShowcaseEngine {
    pub doc: Document,
    pub drawer: Drawer,
    pub config: ScrollSpyConfig,
    /// Logical viewport width, updated by the shell each frame.
    pub viewport_width: f32,
    /// Scroll coalescing guard: set when a recomputation is pending,
    /// cleared when the `ScrollTicked` runs.
    scroll_scheduled: bool,
}

impl ShowcaseEngine {
    pub fn new(doc: Document, config: ScrollSpyConfig) -> Self {
        Self {
            doc,
            drawer: Drawer::default(),
            config,
            viewport_width: 0.0,
            scroll_scheduled: false,
        }
    }

    /// Called by the shell on raw scroll input. Returns `true` when the
    /// caller should produce a `ScrollTicked` for the next frame; further
    /// scroll input until then is coalesced into that one tick.
    pub fn schedule_scroll(&mut self) -> bool {
        if self.scroll_scheduled {
            return false;
        }
        self.scroll_scheduled = true;
        true
    }

    /// Apply one event to the state tree. All mutation is synchronous
    /// within this call; the returned effect, if any, is fire-and-forget
    /// for the shell.
    pub fn dispatch(&mut self, event: UiEvent) -> Option<EngineEffect> {
        log::debug!("dispatch: {:?}", event);
        match event {
            UiEvent::RowClicked { block, row } => {
                self.activate_row(block, row);
                None
            }
            UiEvent::LinkClicked { link } => self.click_link(link),
            UiEvent::HeaderClicked { block } => {
                self.toggle_block(block);
                None
            }
            UiEvent::ScrollTicked { block_tops } => {
                self.scroll_scheduled = false;
                self.recompute_scroll_spy(&block_tops);
                None
            }
            UiEvent::KeyPressed {
                key,
                text_input_focused,
            } => {
                self.handle_key(key, text_input_focused);
                None
            }
            UiEvent::MenuToggled => {
                self.drawer.toggle();
                None
            }
        }
    }
}
