//! Error types for the string boundaries of the article model.

use thiserror::Error;

use crate::core::article::ParamField;

/// Failure to turn untyped input into article parameters.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParamsError {
    /// Value is not part of the field's option catalog.
    #[error("unknown {} option `{value}`", .field.key())]
    UnknownOption {
        /// Field the value was offered for.
        field: ParamField,
        /// Offending value.
        value: String,
    },
    /// Locale tag is not supported.
    #[error("unsupported locale `{value}`")]
    UnknownLocale {
        /// Offending locale tag.
        value: String,
    },
    /// Query component was not valid percent-encoded UTF-8.
    #[error("undecodable query component `{raw}`")]
    Decode {
        /// Raw component as received.
        raw: String,
    },
}
