//! Explanation panel content.
//!
//! Pure and idempotent: the same `(line_number, text)` pair always
//! produces the same `PanelContent`.

use crate::markup::PanelContent;

/// Header label of every explanation panel.
pub const PANEL_HEADER: &str = "Explication";

/// Shown when a row carries no explanation. Kept byte-for-byte as the
/// original page wrote it, missing apostrophe included.
pub const NO_EXPLANATION: &str = "Pas d explication disponible";

/// Build panel content for a line. Absent or empty text substitutes the
/// fixed placeholder.
pub fn render(line_number: &str, text: Option<&str>) -> PanelContent {
    let body = match text {
        Some(t) if !t.trim().is_empty() => t.to_string(),
        _ => NO_EXPLANATION.to_string(),
    };
    PanelContent {
        line_number: line_number.to_string(),
        text: body,
    }
}
