//! Elysium Buttons - typed Telegram keyboard buttons.
//!
//! Builds the button records of the Telegram Bot API without hand-writing
//! field names.
//!
//! ## Architecture
//!
//! - `buttons` - Reply and inline button constructors
//! - `validate` - Optional strict checks against Bot API rules
//! - `compat` - Conversions to and from teloxide types
//! - `config` - Environment configuration for the preview binary
//! - `error` - Shared error type
//!
//! ```
//! use elysium_buttons::{InlineButton, ReplyButton};
//!
//! let open = ReplyButton::web_app("Open", "https://example.com/app");
//! let pay = InlineButton::pay("Pay now");
//!
//! assert_eq!(
//!     serde_json::to_string(&pay).unwrap(),
//!     r#"{"text":"Pay now","pay":true}"#
//! );
//! # let _ = open;
//! ```

pub mod buttons;
pub mod compat;
pub mod config;
pub mod error;
pub mod validate;

pub use buttons::{
    CallbackGame, InlineButton, InlineButtonKind, LoginTarget, LoginUrl, PollRequest, PollType,
    ReplyButton, ReplyButtonKind, True, WebAppInfo,
};
pub use error::ButtonError;
pub use validate::{ChatScope, ValidationMode, Validator};
