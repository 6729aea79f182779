//! Article parameters panel state.
//!
//! # Design
//! - Two plain slots: visibility and the draft selection.
//! - The committed selection is never stored here; commits are returned to the host.
//! - Visibility changes only through toggle and outside presses.

use crate::core::article::{ArticleParams, DEFAULT_ARTICLE_PARAMS};
use crate::features::article_params::actions::PanelAction;
use crate::features::article_params::logic::pointer_outside;

/// Local state of one panel instance.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ParamsPanelState {
    /// Whether the panel is expanded.
    pub open: bool,
    /// Selection being edited, not yet committed.
    pub draft: ArticleParams,
}

impl ParamsPanelState {
    /// Closed panel whose draft is seeded from the committed selection.
    #[must_use]
    pub const fn new(committed: ArticleParams) -> Self {
        Self {
            open: false,
            draft: committed,
        }
    }

    /// Apply `action`, returning the committed selection the host should adopt.
    pub const fn apply(&mut self, action: PanelAction) -> Option<ArticleParams> {
        let commit = action.commit_request(&self.draft);
        match action {
            PanelAction::Toggle => self.open = !self.open,
            PanelAction::Change(change) => self.draft = self.draft.with_change(change),
            PanelAction::Submit => {}
            PanelAction::Reset => self.draft = DEFAULT_ARTICLE_PARAMS,
            PanelAction::PointerDown { inside } => {
                if self.open && pointer_outside(inside) {
                    self.open = false;
                }
            }
        }
        commit
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::article::{
        ContentWidth, FontFamily, FontSize, ParamChange, ParamField, Swatch,
    };

    fn sample_committed() -> ArticleParams {
        ArticleParams {
            font_family: FontFamily::OpenSans,
            font_size: FontSize::Px18,
            font_color: Swatch::Black,
            background_color: Swatch::White,
            content_width: ContentWidth::Narrow,
        }
    }

    fn change_for(field: ParamField) -> ParamChange {
        match field {
            ParamField::FontFamily => ParamChange::FontFamily(FontFamily::Merriweather),
            ParamField::FontSize => ParamChange::FontSize(FontSize::Px25),
            ParamField::FontColor => ParamChange::FontColor(Swatch::Purple),
            ParamField::BackgroundColor => ParamChange::BackgroundColor(Swatch::Yellow),
            ParamField::ContentWidth => ParamChange::ContentWidth(ContentWidth::Wide),
        }
    }

    #[test]
    fn starts_closed_with_committed_draft() {
        let state = ParamsPanelState::new(sample_committed());
        assert!(!state.open);
        assert_eq!(state.draft, sample_committed());
    }

    #[test]
    fn toggle_parity_decides_visibility() {
        for count in 0..6 {
            let mut state = ParamsPanelState::new(sample_committed());
            for _ in 0..count {
                assert_eq!(state.apply(PanelAction::Toggle), None);
            }
            assert_eq!(state.open, count % 2 == 1);
        }
    }

    #[test]
    fn field_change_alters_only_that_field() {
        for field in ParamField::ALL {
            let committed = sample_committed();
            let mut state = ParamsPanelState::new(committed);
            state.apply(PanelAction::Toggle);
            let change = change_for(field);
            assert_eq!(state.apply(PanelAction::Change(change)), None);
            assert!(state.open);
            assert_eq!(state.draft, committed.with_change(change));
            for other in ParamField::ALL.into_iter().filter(|other| *other != field) {
                assert_eq!(state.draft.value_of(other), committed.value_of(other));
            }
            assert_ne!(state.draft.value_of(field), committed.value_of(field));
        }
    }

    #[test]
    fn submit_commits_the_pre_submit_draft_and_stays_open() {
        let mut state = ParamsPanelState::new(sample_committed());
        state.apply(PanelAction::Toggle);
        state.apply(PanelAction::Change(ParamChange::FontFamily(FontFamily::Ubuntu)));
        state.apply(PanelAction::Change(ParamChange::FontSize(FontSize::Px38)));
        let before = state.draft;
        assert_eq!(state.apply(PanelAction::Submit), Some(before));
        assert_eq!(state.draft, before);
        assert!(state.open);
    }

    #[test]
    fn reset_restores_default_in_draft_and_commit() {
        let mut state = ParamsPanelState::new(sample_committed());
        state.apply(PanelAction::Toggle);
        state.apply(PanelAction::Change(ParamChange::BackgroundColor(Swatch::Green)));
        assert_eq!(state.apply(PanelAction::Reset), Some(DEFAULT_ARTICLE_PARAMS));
        assert_eq!(state.draft, DEFAULT_ARTICLE_PARAMS);
        assert!(state.open);
    }

    #[test]
    fn outside_press_closes_and_keeps_draft() {
        let mut state = ParamsPanelState::new(sample_committed());
        state.apply(PanelAction::Toggle);
        state.apply(PanelAction::Change(ParamChange::FontColor(Swatch::Blue)));
        let draft = state.draft;
        assert_eq!(state.apply(PanelAction::PointerDown { inside: Some(false) }), None);
        assert!(!state.open);
        assert_eq!(state.draft, draft);
    }

    #[test]
    fn inside_press_or_missing_node_keeps_panel_open() {
        let mut state = ParamsPanelState::new(sample_committed());
        state.apply(PanelAction::Toggle);
        state.apply(PanelAction::PointerDown { inside: Some(true) });
        assert!(state.open);
        state.apply(PanelAction::PointerDown { inside: None });
        assert!(state.open);
    }

    #[test]
    fn closed_panel_ignores_presses() {
        let mut state = ParamsPanelState::new(sample_committed());
        state.apply(PanelAction::PointerDown { inside: Some(false) });
        assert!(!state.open);
        state.apply(PanelAction::PointerDown { inside: Some(true) });
        assert!(!state.open);
    }

    #[test]
    fn apply_font_change_scenario() {
        let mut committed = ArticleParams::default();
        let mut state = ParamsPanelState::new(committed);
        state.apply(PanelAction::Toggle);
        state.apply(PanelAction::Change(ParamChange::FontFamily(FontFamily::Ubuntu)));
        assert_eq!(committed, ArticleParams::default());
        if let Some(next) = state.apply(PanelAction::Submit) {
            committed = next;
        }
        assert_eq!(committed.font_family, FontFamily::Ubuntu);
        assert_eq!(
            committed,
            ArticleParams {
                font_family: FontFamily::Ubuntu,
                ..ArticleParams::default()
            }
        );
        assert!(state.open);
    }
}
