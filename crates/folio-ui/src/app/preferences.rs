//! Launch configuration helpers for the app shell.

use crate::core::launch::{LaunchOptions, parse_launch_query};
use crate::i18n::{DEFAULT_LOCALE, LocaleCode};
use gloo::console;
use gloo::utils::window;

/// Launch options from `window.location.search`, or defaults when rejected.
pub(crate) fn load_launch_options() -> LaunchOptions {
    let search = window().location().search().unwrap_or_default();
    match parse_launch_query(&search) {
        Ok(options) => options,
        Err(err) => {
            console::error!("launch query rejected", search, err.to_string());
            LaunchOptions::default()
        }
    }
}

/// Locale requested by the query, else the browser language, else the default.
pub(crate) fn resolve_locale(requested: Option<LocaleCode>) -> LocaleCode {
    if let Some(locale) = requested {
        return locale;
    }
    if let Some(nav) = window().navigator().language() {
        if let Some(locale) = LocaleCode::from_lang_tag(&nav) {
            return locale;
        }
    }
    DEFAULT_LOCALE
}
