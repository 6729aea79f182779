//! Lightweight JSON-backed translations with per-locale bundles.

use serde_json::Value;
use std::sync::LazyLock;

/// Supported interface locales.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum LocaleCode {
    /// English.
    En,
    /// Russian.
    Ru,
}

impl LocaleCode {
    /// All supported locales in display order.
    #[must_use]
    pub const fn all() -> [Self; 2] {
        [Self::En, Self::Ru]
    }

    /// Two-letter language code.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::En => "en",
            Self::Ru => "ru",
        }
    }

    /// Map an arbitrary browser language tag to a supported locale.
    #[must_use]
    pub fn from_lang_tag(tag: &str) -> Option<Self> {
        let lowered = tag.trim().to_ascii_lowercase();
        let base = lowered.split(['-', '_']).next().unwrap_or_default();
        Self::all()
            .into_iter()
            .find(|locale| locale.code() == base)
    }
}

/// Default fallback locale.
pub const DEFAULT_LOCALE: LocaleCode = LocaleCode::En;

/// Translation bundle containing a parsed JSON tree for the locale.
#[derive(Clone, Debug)]
pub struct TranslationBundle {
    /// Locale backing this bundle.
    pub locale: LocaleCode,
    tree: Value,
}

impl PartialEq for TranslationBundle {
    fn eq(&self, other: &Self) -> bool {
        self.locale == other.locale
    }
}

impl TranslationBundle {
    /// Build a translation bundle for the given locale.
    ///
    /// Missing keys degrade to the English bundle, then to the caller default.
    #[must_use]
    pub fn new(locale: LocaleCode) -> Self {
        let tree: Value = serde_json::from_str(raw_locale(locale)).unwrap_or(Value::Null);
        Self { locale, tree }
    }

    /// Resolve a dotted path (`section.key`) with English fallback and caller default.
    #[must_use]
    pub fn text(&self, path: &str, default: &str) -> String {
        resolve(&self.tree, path)
            .or_else(|| resolve(&EN_FALLBACK.tree, path))
            .unwrap_or_else(|| default.to_string())
    }
}

static EN_FALLBACK: LazyLock<TranslationBundle> =
    LazyLock::new(|| TranslationBundle::new(LocaleCode::En));

fn resolve(tree: &Value, path: &str) -> Option<String> {
    let mut node = tree;
    for segment in path.split('.') {
        node = node.get(segment)?;
    }
    node.as_str().map(ToString::to_string)
}

const fn raw_locale(locale: LocaleCode) -> &'static str {
    match locale {
        LocaleCode::En => include_str!("../../i18n/en.json"),
        LocaleCode::Ru => include_str!("../../i18n/ru.json"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::article::ParamField;

    #[test]
    fn missing_key_falls_back_to_default() {
        let bundle = TranslationBundle::new(LocaleCode::Ru);
        assert_eq!(bundle.text("nonexistent.key", "fallback"), "fallback");
    }

    #[test]
    fn lang_tags_map_to_base_locale() {
        assert_eq!(LocaleCode::from_lang_tag("ru-RU"), Some(LocaleCode::Ru));
        assert_eq!(LocaleCode::from_lang_tag("EN_gb"), Some(LocaleCode::En));
        assert_eq!(LocaleCode::from_lang_tag("de"), None);
    }

    #[test]
    fn every_locale_code_maps_back_to_itself() {
        for locale in LocaleCode::all() {
            assert_eq!(LocaleCode::from_lang_tag(locale.code()), Some(locale));
        }
    }

    #[test]
    fn every_catalog_label_is_translated() {
        for locale in LocaleCode::all() {
            let bundle = TranslationBundle::new(locale);
            for field in ParamField::ALL {
                assert_ne!(bundle.text(field.title_key(), "<missing>"), "<missing>");
                for option in field.options() {
                    assert_ne!(bundle.text(option.label_key, "<missing>"), "<missing>");
                }
            }
        }
    }

    #[test]
    fn russian_bundle_overrides_english() {
        let en = TranslationBundle::new(LocaleCode::En);
        let ru = TranslationBundle::new(LocaleCode::Ru);
        assert_ne!(en.text("panel.apply", ""), ru.text("panel.apply", ""));
    }
}
