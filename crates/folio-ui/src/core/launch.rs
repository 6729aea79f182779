//! Launch configuration read from the page query string.
//!
//! # Design
//! - Seed the committed selection and locale only; nothing is written back.
//! - Unknown keys belong to the hosting page and are skipped.
//! - Unknown values fail the whole query so callers fall back to defaults.

use std::borrow::Cow;

use crate::core::article::{ArticleParams, ParamField};
use crate::core::error::ParamsError;
use crate::i18n::LocaleCode;

/// Query key selecting the interface locale.
pub const LOCALE_QUERY_KEY: &str = "locale";

/// Initial state resolved from the query string.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct LaunchOptions {
    /// Committed selection the article starts with.
    pub params: ArticleParams,
    /// Explicit locale request, if any.
    pub locale: Option<LocaleCode>,
}

/// Parse `font`, `size`, `color`, `background`, `width` and `locale` pairs.
///
/// A leading `?` is accepted. Fields that are not mentioned keep the default
/// configuration; later duplicates win.
///
/// # Errors
/// Returns [`ParamsError`] when a component cannot be decoded or names a value
/// outside its catalog.
pub fn parse_launch_query(query: &str) -> Result<LaunchOptions, ParamsError> {
    let mut options = LaunchOptions::default();
    let query = query.strip_prefix('?').unwrap_or(query);
    for pair in query.split('&').filter(|pair| !pair.is_empty()) {
        let (raw_key, raw_value) = pair.split_once('=').unwrap_or((pair, ""));
        let key = decode_component(raw_key)?;
        let value = decode_component(raw_value)?;
        if key == LOCALE_QUERY_KEY {
            let locale = LocaleCode::from_lang_tag(&value).ok_or_else(|| {
                ParamsError::UnknownLocale {
                    value: value.to_string(),
                }
            })?;
            options.locale = Some(locale);
        } else if let Some(field) = ParamField::from_key(&key) {
            options.params = options.params.with_value(field, value.trim())?;
        }
    }
    Ok(options)
}

fn decode_component(raw: &str) -> Result<Cow<'_, str>, ParamsError> {
    if raw.contains('+') {
        let spaced = raw.replace('+', " ");
        return urlencoding::decode(&spaced)
            .map(|decoded| Cow::Owned(decoded.into_owned()))
            .map_err(|_| ParamsError::Decode {
                raw: raw.to_string(),
            });
    }
    urlencoding::decode(raw).map_err(|_| ParamsError::Decode {
        raw: raw.to_string(),
    })
}
