//! Article parameters panel actions.
//!
//! # Design
//! - Capture user intent separate from rendering.
//! - Actions never perform side effects; commit requests are returned to the caller.

use crate::core::article::{ArticleParams, DEFAULT_ARTICLE_PARAMS, ParamChange};

/// User intents handled by the panel.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PanelAction {
    /// Flip panel visibility.
    Toggle,
    /// Replace one field of the draft.
    Change(ParamChange),
    /// Promote the draft to the committed selection.
    Submit,
    /// Restore the default selection in both draft and committed state.
    Reset,
    /// Document-level pointer press; `inside` is `None` when the panel node is unavailable.
    PointerDown {
        /// Whether the press landed inside the panel subtree.
        inside: Option<bool>,
    },
}

impl PanelAction {
    /// Committed selection the host should adopt, given the draft before the action.
    #[must_use]
    pub const fn commit_request(&self, draft: &ArticleParams) -> Option<ArticleParams> {
        match self {
            Self::Submit => Some(*draft),
            Self::Reset => Some(DEFAULT_ARTICLE_PARAMS),
            Self::Toggle | Self::Change(_) | Self::PointerDown { .. } => None,
        }
    }
}
