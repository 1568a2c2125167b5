//! Reply keyboard buttons.
//!
//! A reply keyboard replaces the user's text input while it is shown. Each
//! button sends its label back as a plain message, or asks the client for a
//! piece of data (contact, location, poll) or opens a Web App.

use std::fmt;
use std::str::FromStr;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

use super::common::{decode_action, split_button, True, WebAppInfo};
use crate::error::ButtonError;

/// Kind of poll a user may create from a poll request button.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PollType {
    Quiz,
    Regular,
}

impl PollType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Quiz => "quiz",
            Self::Regular => "regular",
        }
    }
}

impl FromStr for PollType {
    type Err = ButtonError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "quiz" => Ok(Self::Quiz),
            "regular" => Ok(Self::Regular),
            _ => Err(ButtonError::UnknownPollType(s.to_string())),
        }
    }
}

impl fmt::Display for PollType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Payload of `request_poll`.
///
/// `poll_type: None` means any poll type is allowed; the `type` key is then
/// left out of the JSON entirely.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PollRequest {
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub poll_type: Option<PollType>,
}

/// What a reply button does besides sending its label.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReplyButtonKind {
    RequestContact(True),
    RequestLocation(True),
    RequestPoll(PollRequest),
    WebApp(WebAppInfo),
}

/// One button of a reply keyboard (`KeyboardButton` in the Bot API).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct ReplyButton {
    /// Label shown on the button
    pub text: String,
    /// `None` for a plain text button
    #[serde(flatten)]
    pub kind: Option<ReplyButtonKind>,
}

/// Accepts `text` plus at most one known request field. Unknown keys, a
/// second request field or a malformed payload are errors, never a plain
/// text button.
impl<'de> Deserialize<'de> for ReplyButton {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let fields: Map<String, Value> = Map::deserialize(deserializer)?;
        let (text, action) = split_button(fields).map_err(D::Error::custom)?;
        let kind = action
            .map(decode_action::<ReplyButtonKind>)
            .transpose()
            .map_err(D::Error::custom)?;

        Ok(Self { text, kind })
    }
}

impl ReplyButton {
    /// Plain text button. Pressing it sends `text` as a message.
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            kind: None,
        }
    }

    /// Sends the user's phone number as a contact. Private chats only.
    pub fn request_contact(text: impl Into<String>) -> Self {
        Self::with_kind(text, ReplyButtonKind::RequestContact(True))
    }

    /// Sends the user's current location. Private chats only.
    pub fn request_location(text: impl Into<String>) -> Self {
        Self::with_kind(text, ReplyButtonKind::RequestLocation(True))
    }

    /// Asks the user to create a poll and send it to the bot. Private chats only.
    ///
    /// Pass `None` to allow any poll type.
    pub fn request_poll(text: impl Into<String>, poll_type: impl Into<Option<PollType>>) -> Self {
        Self::with_kind(
            text,
            ReplyButtonKind::RequestPoll(PollRequest {
                poll_type: poll_type.into(),
            }),
        )
    }

    /// Opens a Web App that may answer with a `web_app_data` service message.
    /// Private chats only. The URL should be HTTPS; this is not checked here.
    pub fn web_app(text: impl Into<String>, url: impl Into<String>) -> Self {
        Self::with_kind(text, ReplyButtonKind::WebApp(WebAppInfo::new(url)))
    }

    fn with_kind(text: impl Into<String>, kind: ReplyButtonKind) -> Self {
        Self {
            text: text.into(),
            kind: Some(kind),
        }
    }

    /// Wire key of the discriminating field, `"text"` for plain buttons.
    pub fn kind_name(&self) -> &'static str {
        match &self.kind {
            None => "text",
            Some(ReplyButtonKind::RequestContact(_)) => "request_contact",
            Some(ReplyButtonKind::RequestLocation(_)) => "request_location",
            Some(ReplyButtonKind::RequestPoll(_)) => "request_poll",
            Some(ReplyButtonKind::WebApp(_)) => "web_app",
        }
    }

    /// Telegram only honours these buttons in one-to-one chats.
    pub fn private_chat_only(&self) -> bool {
        self.kind.is_some()
    }
}
