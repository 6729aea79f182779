//! Feature slices composed by the app shell.

pub mod article_params;
