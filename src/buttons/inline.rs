//! Inline keyboard buttons.
//!
//! Inline buttons are attached under a single message and never replace the
//! user's keyboard. Every button carries exactly one action next to its label.

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

use super::common::{decode_action, split_button, CallbackGame, True, WebAppInfo};
use super::login::{LoginTarget, LoginUrl};

/// Action performed when an inline button is pressed.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InlineButtonKind {
    /// `http(s)://` or `tg://user?id=<id>` link
    Url(String),
    /// Payload sent back in a callback query
    CallbackData(String),
    WebApp(WebAppInfo),
    LoginUrl(LoginUrl),
    /// Starts an inline query in a chat picked by the user
    SwitchInlineQuery(String),
    /// Starts an inline query in the current chat
    SwitchInlineQueryCurrentChat(String),
    CallbackGame(CallbackGame),
    Pay(True),
}

/// One button of an inline keyboard (`InlineKeyboardButton` in the Bot API).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct InlineButton {
    /// Button text
    pub text: String,
    #[serde(flatten)]
    pub kind: InlineButtonKind,
}

/// Requires `text` plus exactly one known action field.
impl<'de> Deserialize<'de> for InlineButton {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let fields: Map<String, Value> = Map::deserialize(deserializer)?;
        let (text, action) = split_button(fields).map_err(D::Error::custom)?;
        let action = action.ok_or_else(|| D::Error::custom("inline button has no action"))?;
        let kind = decode_action::<InlineButtonKind>(action).map_err(D::Error::custom)?;

        Ok(Self { text, kind })
    }
}

impl InlineButton {
    fn new(text: impl Into<String>, kind: InlineButtonKind) -> Self {
        Self {
            text: text.into(),
            kind,
        }
    }

    /// Opens `url` when pressed. `tg://user?id=<id>` mentions a user by ID.
    pub fn url(text: impl Into<String>, url: impl Into<String>) -> Self {
        Self::new(text, InlineButtonKind::Url(url.into()))
    }

    /// Callback button whose payload is the label itself.
    pub fn text(text: impl Into<String>) -> Self {
        let text = text.into();
        let data = text.clone();
        Self::new(text, InlineButtonKind::CallbackData(data))
    }

    /// Callback button with a custom payload.
    pub fn callback(text: impl Into<String>, data: impl Into<String>) -> Self {
        Self::new(text, InlineButtonKind::CallbackData(data.into()))
    }

    pub fn web_app(text: impl Into<String>, url: impl Into<String>) -> Self {
        Self::new(text, InlineButtonKind::WebApp(WebAppInfo::new(url)))
    }

    /// Login button, a replacement for the Telegram Login Widget.
    ///
    /// Accepts a bare URL (`&str`/`String`) or a prepared [`LoginUrl`].
    pub fn login(text: impl Into<String>, target: impl Into<LoginTarget>) -> Self {
        Self::new(
            text,
            InlineButtonKind::LoginUrl(target.into().into_login_url()),
        )
    }

    /// Lets the user pick a chat and starts an empty inline query there.
    pub fn switch_inline(text: impl Into<String>) -> Self {
        Self::switch_inline_with(text, "")
    }

    pub fn switch_inline_with(text: impl Into<String>, query: impl Into<String>) -> Self {
        Self::new(text, InlineButtonKind::SwitchInlineQuery(query.into()))
    }

    /// Starts an empty inline query in the current chat.
    pub fn switch_inline_current(text: impl Into<String>) -> Self {
        Self::switch_inline_current_with(text, "")
    }

    pub fn switch_inline_current_with(text: impl Into<String>, query: impl Into<String>) -> Self {
        Self::new(
            text,
            InlineButtonKind::SwitchInlineQueryCurrentChat(query.into()),
        )
    }

    /// Game launch button. Must be the first button of the first row.
    pub fn game(text: impl Into<String>) -> Self {
        Self::new(text, InlineButtonKind::CallbackGame(CallbackGame {}))
    }

    /// Payment button. Must be the first button of the first row and is
    /// only valid in invoice messages.
    pub fn pay(text: impl Into<String>) -> Self {
        Self::new(text, InlineButtonKind::Pay(True))
    }

    /// Wire key of the action field.
    pub fn kind_name(&self) -> &'static str {
        match &self.kind {
            InlineButtonKind::Url(_) => "url",
            InlineButtonKind::CallbackData(_) => "callback_data",
            InlineButtonKind::WebApp(_) => "web_app",
            InlineButtonKind::LoginUrl(_) => "login_url",
            InlineButtonKind::SwitchInlineQuery(_) => "switch_inline_query",
            InlineButtonKind::SwitchInlineQueryCurrentChat(_) => {
                "switch_inline_query_current_chat"
            }
            InlineButtonKind::CallbackGame(_) => "callback_game",
            InlineButtonKind::Pay(_) => "pay",
        }
    }

    /// Game and pay buttons have to lead the keyboard.
    pub fn must_lead_keyboard(&self) -> bool {
        matches!(
            self.kind,
            InlineButtonKind::CallbackGame(_) | InlineButtonKind::Pay(_)
        )
    }

    pub fn callback_data(&self) -> Option<&str> {
        match &self.kind {
            InlineButtonKind::CallbackData(data) => Some(data),
            _ => None,
        }
    }
}
