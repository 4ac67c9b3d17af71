//! Nav-link activation for `ShowcaseEngine`.
//!
//! Two transitions: explicit link clicks (expand-on-navigate + scroll
//! request) and scroll-position recomputation (scroll-spy). Exactly one
//! link is active at a time, or none.

use super::{EngineEffect, ShowcaseEngine};

/// Viewport width at or below which the layout is treated as mobile.
pub const MOBILE_BREAKPOINT: f32 = 768.0;

/// Scroll-spy tuning. These are visual tuning values carried over from
/// the original page, not contracts.
#[derive(Debug, Clone, Copy)]
pub struct ScrollSpyConfig {
    /// Scroll target offset from the viewport top, in logical pixels.
    pub top_offset: f32,
    /// Extra tolerance below `top_offset` when deciding which block is
    /// "in view".
    pub slack: f32,
}

impl Default for ScrollSpyConfig {
    fn default() -> Self {
        Self {
            top_offset: 100.0,
            slack: 50.0,
        }
    }
}

impl ScrollSpyConfig {
    /// A block whose top edge is at or above this line counts as
    /// scrolled-past.
    pub fn threshold(&self) -> f32 {
        self.top_offset + self.slack
    }
}

impl ShowcaseEngine {
    /// Explicit navigation: expand the target block if collapsed, mark
    /// exactly this link active, and ask the shell to scroll. A link
    /// whose target matches no block is ignored entirely. On narrow
    /// viewports the mobile drawer closes as a side effect.
    pub fn click_link(&mut self, link: usize) -> Option<EngineEffect> {
        let target_id = self.doc.links.get(link)?.target_block_id.clone();
        let block = self.doc.block_by_id(&target_id)?;

        self.doc.blocks[block].collapsed = false;
        self.set_active_link(Some(link));

        if self.viewport_width > 0.0 && self.viewport_width <= MOBILE_BREAKPOINT {
            self.drawer.close();
        }

        Some(EngineEffect::ScrollTo {
            block,
            offset: self.config.top_offset,
        })
    }

    /// Scroll-spy recomputation. `block_tops[i]` is block `i`'s top edge
    /// in viewport coordinates. Among blocks whose top is at or above the
    /// threshold, the last one in document order wins. When none
    /// qualifies, link states are left untouched.
    pub fn recompute_scroll_spy(&mut self, block_tops: &[f32]) {
        let threshold = self.config.threshold();
        let current = block_tops
            .iter()
            .enumerate()
            .take(self.doc.blocks.len())
            .filter(|(_, top)| **top <= threshold)
            .map(|(i, _)| i)
            .last();

        let Some(block) = current else {
            return;
        };
        let link = self
            .doc
            .links
            .iter()
            .position(|l| l.target_block_id == self.doc.blocks[block].id);
        if link.is_some() {
            self.set_active_link(link);
        }
    }

    fn set_active_link(&mut self, active: Option<usize>) {
        for (i, link) in self.doc.links.iter_mut().enumerate() {
            link.active = Some(i) == active;
        }
    }
}
