//! Active-row tracking for `ShowcaseEngine`.
//!
//! Invariant maintained here: at most one row per block is active at any
//! time. Activation also feeds the block's explanation panel.

use super::panel;
use super::ShowcaseEngine;

impl ShowcaseEngine {
    /// Activate one row: every other row in the same block is
    /// deactivated, then the block's panel is rendered with the row's
    /// line number and explanation. Out-of-range indices are a no-op.
    pub fn activate_row(&mut self, block: usize, row: usize) {
        let Some(block) = self.doc.blocks.get_mut(block) else {
            return;
        };
        if row >= block.rows.len() {
            return;
        }

        for (i, r) in block.rows.iter_mut().enumerate() {
            r.active = i == row;
        }

        let target = &block.rows[row];
        block.panel = panel::render(&target.line_number, target.explanation.as_deref());
    }

    /// Escape: clear every row highlight on the whole page, not just one
    /// block, and reset every panel.
    pub fn clear_all_highlights(&mut self) {
        for block in &mut self.doc.blocks {
            for row in &mut block.rows {
                row.active = false;
            }
            block.panel = Default::default();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::super::tests::sample_engine;
    use crate::engine::{Key, UiEvent};

    #[test]
    fn activation_is_mutually_exclusive_per_block() {
        let mut engine = sample_engine();
        engine.activate_row(0, 0);
        engine.activate_row(0, 1);

        assert!(!engine.doc.blocks[0].rows[0].active);
        assert!(engine.doc.blocks[0].rows[1].active);
        assert_eq!(engine.doc.blocks[0].active_row(), Some(1));
    }

    #[test]
    fn activation_in_one_block_leaves_others_alone() {
        let mut engine = sample_engine();
        engine.activate_row(0, 0);
        engine.activate_row(1, 0);

        assert_eq!(engine.doc.blocks[0].active_row(), Some(0));
        assert_eq!(engine.doc.blocks[1].active_row(), Some(0));
    }

    #[test]
    fn escape_clears_every_block() {
        let mut engine = sample_engine();
        engine.activate_row(0, 0);
        engine.activate_row(1, 0);

        engine.dispatch(UiEvent::KeyPressed {
            key: Key::Escape,
            text_input_focused: false,
        });

        assert_eq!(engine.doc.blocks[0].active_row(), None);
        assert_eq!(engine.doc.blocks[1].active_row(), None);
        assert!(engine.doc.blocks[0].panel.is_empty());
        assert!(engine.doc.blocks[1].panel.is_empty());
    }
}
