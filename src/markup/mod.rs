pub mod parser;

/// One source line inside a code block.
///
/// `line_number` stays a string: showcase documents label lines freely
/// ("12", "12a", "?"), so no numeric meaning is assumed.
#[derive(Debug, Clone)]
pub struct Row {
    pub line_number: String,
    pub source: String,
    pub explanation: Option<String>,
    pub active: bool,
}

impl Row {
    pub fn new(
        line_number: impl Into<String>,
        source: impl Into<String>,
        explanation: Option<String>,
    ) -> Self {
        Self {
            line_number: line_number.into(),
            source: source.into(),
            explanation,
            active: false,
        }
    }
}

/// Content of a block's explanation panel.
///
/// Empty `line_number` means the panel has never been rendered and shows
/// nothing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PanelContent {
    pub line_number: String,
    pub text: String,
}

impl PanelContent {
    pub fn is_empty(&self) -> bool {
        self.line_number.is_empty() && self.text.is_empty()
    }

    /// Badge label shown above the explanation body.
    pub fn badge(&self) -> String {
        format!("Ligne {}", self.line_number)
    }
}

/// A collapsible code block: identity, ordered rows, and its own
/// explanation panel.
#[derive(Debug, Clone)]
pub struct CodeBlock {
    pub id: String,
    pub title: String,
    pub collapsed: bool,
    pub rows: Vec<Row>,
    pub panel: PanelContent,
}

impl CodeBlock {
    pub fn new(id: impl Into<String>, title: impl Into<String>, rows: Vec<Row>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            collapsed: false,
            rows,
            panel: PanelContent::default(),
        }
    }

    /// Index of the currently active row, if any.
    pub fn active_row(&self) -> Option<usize> {
        self.rows.iter().position(|r| r.active)
    }
}

/// Sidebar navigation entry pointing at a code block by id.
#[derive(Debug, Clone)]
pub struct NavLink {
    pub label: String,
    pub target_block_id: String,
    pub active: bool,
}

impl NavLink {
    pub fn new(label: impl Into<String>, target_block_id: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            target_block_id: target_block_id.into(),
            active: false,
        }
    }
}

/// Parsed showcase document: the typed view-model the engine operates on.
///
/// Built once from markup at startup; all lookups afterwards are plain
/// index/id accesses, never markup traversal.
#[derive(Debug, Clone, Default)]
pub struct Document {
    pub title: String,
    pub blocks: Vec<CodeBlock>,
    pub links: Vec<NavLink>,
}

impl Document {
    /// Find a block by its unique id.
    pub fn block_by_id(&self, id: &str) -> Option<usize> {
        self.blocks.iter().position(|b| b.id == id)
    }

    /// Index of the currently active nav link, if any.
    pub fn active_link(&self) -> Option<usize> {
        self.links.iter().position(|l| l.active)
    }

    /// Total row count across all blocks.
    pub fn row_count(&self) -> usize {
        self.blocks.iter().map(|b| b.rows.len()).sum()
    }
}
