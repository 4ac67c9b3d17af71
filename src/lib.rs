pub mod engine;
pub mod markup;

// Mobile drawer state (always compiled, checked against the breakpoint at
// runtime)
pub mod mobile;
