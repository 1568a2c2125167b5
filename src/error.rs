//! Error type shared by parsing, validation and teloxide conversion.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ButtonError {
    #[error("unknown poll type `{0}`, expected `quiz` or `regular`")]
    UnknownPollType(String),

    #[error("button label must not be empty")]
    EmptyLabel,

    #[error("invalid URL `{url}`: {source}")]
    InvalidUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },

    #[error("web app URL `{0}` must use https")]
    InsecureWebApp(String),

    #[error("`{field}` does not accept the `{scheme}` scheme")]
    UnsupportedUrlScheme { field: &'static str, scheme: String },

    #[error("callback data must be 1-64 bytes, got {0}")]
    CallbackDataLength(usize),

    #[error("`{0}` buttons only work in private chats")]
    PrivateChatOnly(&'static str),

    #[error("unknown validation mode `{0}`, expected `permissive` or `strict`")]
    UnknownValidationMode(String),

    #[error("teloxide `{0}` buttons have no counterpart here")]
    Unsupported(&'static str),
}
