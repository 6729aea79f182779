//! Article parameters panel helpers.
//!
//! # Design
//! - Treat a missing panel node as "nothing to compare against".
//! - Resolve option labels through the translation bundle in one place.

use crate::core::article::ParamField;
use crate::i18n::TranslationBundle;

/// Whether a pointer press should dismiss the panel.
///
/// `inside` is the containment test result, or `None` when the panel node is
/// not mounted; only a definite outside press dismisses.
#[must_use]
pub const fn pointer_outside(inside: Option<bool>) -> bool {
    matches!(inside, Some(false))
}

/// `(value, label)` pairs for a field's control, in display order.
#[must_use]
pub fn option_labels(field: ParamField, bundle: &TranslationBundle) -> Vec<(String, String)> {
    field
        .options()
        .into_iter()
        .map(|option| {
            (
                option.value.to_string(),
                bundle.text(option.label_key, option.value),
            )
        })
        .collect()
}
