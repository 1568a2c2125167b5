//! Button constructors for reply and inline keyboards.
//!
//! - `reply` - buttons of a reply keyboard (replaces the text input)
//! - `inline` - buttons attached under a message
//! - `login` - login URL payloads used by inline login buttons
//! - `common` - payload types shared by both families

mod common;
mod inline;
mod login;
mod reply;

pub use common::{CallbackGame, True, WebAppInfo};
pub use inline::{InlineButton, InlineButtonKind};
pub use login::{LoginTarget, LoginUrl};
pub use reply::{PollRequest, PollType, ReplyButton, ReplyButtonKind};
