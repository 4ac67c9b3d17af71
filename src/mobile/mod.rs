//! Mobile navigation drawer.
//!
//! Binary open/closed state for the sidebar on narrow viewports. The
//! breakpoint check itself lives in the engine (`scrollspy::MOBILE_BREAKPOINT`);
//! this type only owns the state.

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Drawer {
    open: bool,
}

impl Drawer {
    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn toggle(&mut self) {
        self.open = !self.open;
    }

    pub fn close(&mut self) {
        self.open = false;
    }
}
