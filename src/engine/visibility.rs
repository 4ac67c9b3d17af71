//! Collapsed/expanded state for `ShowcaseEngine`.
//!
//! Covers single-block toggling (header click), bulk expand/collapse, and
//! the `e` / `c` / Escape keyboard handling with its text-input guard.

use super::{Key, ShowcaseEngine};

impl ShowcaseEngine {
    /// Flip the collapsed state of exactly one block.
    pub fn toggle_block(&mut self, block: usize) {
        if let Some(block) = self.doc.blocks.get_mut(block) {
            block.collapsed = !block.collapsed;
        }
    }

    /// Set every block's collapsed state uniformly. The final state is
    /// all that matters; there is no observable per-block ordering.
    pub fn toggle_all(&mut self, expand: bool) {
        for block in &mut self.doc.blocks {
            block.collapsed = !expand;
        }
    }

    /// Keyboard shortcuts. `e` and `c` are plain typing keys, so both are
    /// suppressed while a text input has focus; Escape is not.
    pub fn handle_key(&mut self, key: Key, text_input_focused: bool) {
        match key {
            Key::ExpandAll if !text_input_focused => self.toggle_all(true),
            Key::CollapseAll if !text_input_focused => self.toggle_all(false),
            Key::Escape => self.clear_all_highlights(),
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::super::tests::sample_engine;
    use crate::engine::{Key, UiEvent};

    #[test]
    fn toggle_flips_one_block_only() {
        let mut engine = sample_engine();
        engine.toggle_block(0);
        assert!(engine.doc.blocks[0].collapsed);
        assert!(!engine.doc.blocks[1].collapsed);
        engine.toggle_block(0);
        assert!(!engine.doc.blocks[0].collapsed);
    }

    #[test]
    fn expand_then_collapse_leaves_everything_collapsed() {
        let mut engine = sample_engine();
        engine.toggle_all(true);
        engine.toggle_all(false);
        assert!(engine.doc.blocks.iter().all(|b| b.collapsed));
    }

    #[test]
    fn expand_key_guarded_by_text_input_focus() {
        let mut engine = sample_engine();
        engine.toggle_all(false);

        engine.dispatch(UiEvent::KeyPressed {
            key: Key::ExpandAll,
            text_input_focused: true,
        });
        assert!(engine.doc.blocks.iter().all(|b| b.collapsed));

        engine.dispatch(UiEvent::KeyPressed {
            key: Key::ExpandAll,
            text_input_focused: false,
        });
        assert!(engine.doc.blocks.iter().all(|b| !b.collapsed));
    }

    #[test]
    fn collapse_key_collapses_all() {
        let mut engine = sample_engine();
        engine.dispatch(UiEvent::KeyPressed {
            key: Key::CollapseAll,
            text_input_focused: false,
        });
        assert!(engine.doc.blocks.iter().all(|b| b.collapsed));
    }
}
