//! Render messages - requests queued by the provider and frames sent to the UI

use ratatui::text::Line;

/// Why a render was requested
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderReason {
    /// A provider instance was inserted into the tree
    Mount,
    /// `set_count` was called, whatever the value
    CountAssigned,
}

impl RenderReason {
    pub fn as_str(&self) -> &'static str {
        match self {
            RenderReason::Mount => "mount",
            RenderReason::CountAssigned => "assign",
        }
    }
}

/// A queued request to re-render the provider's subtree
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderRequest {
    pub seq: u64,
    pub reason: RenderReason,
}

/// Complete frame needed by the UI to draw
#[derive(Debug, Clone)]
pub struct RenderState {
    /// Sequence number of the request this frame answers (0 before the first render)
    pub seq: u64,
    pub reason: RenderReason,
    /// Count observed while rendering
    pub count: i64,
    /// Output of the provider's child content
    pub body: Vec<Line<'static>>,
    pub show_help: bool,
}

impl Default for RenderState {
    fn default() -> Self {
        RenderState {
            seq: 0,
            reason: RenderReason::Mount,
            count: crate::constants::INITIAL_COUNT,
            body: Vec::new(),
            show_help: false,
        }
    }
}
