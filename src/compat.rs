//! Conversions to and from teloxide's keyboard types.
//!
//! Every variant is mapped explicitly, so nothing is dropped on the way:
//! a poll request without a type becomes `KeyboardButtonPollType::Any` and
//! comes back as `poll_type: None`.
//!
//! teloxide stores URLs as parsed `url::Url` values. Converting into teloxide
//! fails with [`ButtonError::InvalidUrl`] for unparsable URLs, and a round trip
//! returns the normalized form (`https://a` comes back as `https://a/`).
//! Buttons only teloxide models (user/chat requests, chosen-chat switches)
//! fail with [`ButtonError::Unsupported`].

use teloxide::types as tg;

use crate::buttons::{
    CallbackGame, InlineButton, InlineButtonKind, LoginUrl, PollRequest, PollType, ReplyButton,
    ReplyButtonKind, True, WebAppInfo,
};
use crate::error::ButtonError;
use crate::validate::parse_url;

fn to_poll_type(poll: PollRequest) -> tg::KeyboardButtonPollType {
    match poll.poll_type {
        None => tg::KeyboardButtonPollType::Any,
        Some(PollType::Quiz) => tg::KeyboardButtonPollType::Quiz,
        Some(PollType::Regular) => tg::KeyboardButtonPollType::Regular,
    }
}

fn from_poll_type(poll: tg::KeyboardButtonPollType) -> PollRequest {
    let poll_type = match poll {
        tg::KeyboardButtonPollType::Any => None,
        tg::KeyboardButtonPollType::Quiz => Some(PollType::Quiz),
        tg::KeyboardButtonPollType::Regular => Some(PollType::Regular),
    };
    PollRequest { poll_type }
}

fn to_web_app(info: &WebAppInfo) -> Result<tg::WebAppInfo, ButtonError> {
    Ok(tg::WebAppInfo {
        url: parse_url(&info.url)?,
    })
}

impl TryFrom<ReplyButton> for tg::KeyboardButton {
    type Error = ButtonError;

    fn try_from(button: ReplyButton) -> Result<Self, Self::Error> {
        let request = match &button.kind {
            None => None,
            Some(ReplyButtonKind::RequestContact(_)) => Some(tg::ButtonRequest::Contact),
            Some(ReplyButtonKind::RequestLocation(_)) => Some(tg::ButtonRequest::Location),
            Some(ReplyButtonKind::RequestPoll(poll)) => {
                Some(tg::ButtonRequest::Poll(to_poll_type(*poll)))
            }
            Some(ReplyButtonKind::WebApp(info)) => Some(tg::ButtonRequest::WebApp(to_web_app(info)?)),
        };

        Ok(Self {
            text: button.text,
            request,
        })
    }
}

impl TryFrom<tg::KeyboardButton> for ReplyButton {
    type Error = ButtonError;

    fn try_from(button: tg::KeyboardButton) -> Result<Self, Self::Error> {
        let kind = match button.request {
            None => None,
            Some(tg::ButtonRequest::Contact) => Some(ReplyButtonKind::RequestContact(True)),
            Some(tg::ButtonRequest::Location) => Some(ReplyButtonKind::RequestLocation(True)),
            Some(tg::ButtonRequest::Poll(poll)) => {
                Some(ReplyButtonKind::RequestPoll(from_poll_type(poll)))
            }
            Some(tg::ButtonRequest::WebApp(info)) => {
                Some(ReplyButtonKind::WebApp(WebAppInfo::new(info.url.to_string())))
            }
            Some(tg::ButtonRequest::RequestUsers(_)) => {
                return Err(ButtonError::Unsupported("request_users"));
            }
            Some(tg::ButtonRequest::RequestChat(_)) => {
                return Err(ButtonError::Unsupported("request_chat"));
            }
        };

        Ok(Self {
            text: button.text,
            kind,
        })
    }
}

impl TryFrom<InlineButton> for tg::InlineKeyboardButton {
    type Error = ButtonError;

    fn try_from(button: InlineButton) -> Result<Self, Self::Error> {
        let kind = match button.kind {
            InlineButtonKind::Url(url) => tg::InlineKeyboardButtonKind::Url(parse_url(&url)?),
            InlineButtonKind::CallbackData(data) => tg::InlineKeyboardButtonKind::CallbackData(data),
            InlineButtonKind::WebApp(info) => tg::InlineKeyboardButtonKind::WebApp(to_web_app(&info)?),
            InlineButtonKind::LoginUrl(login) => {
                tg::InlineKeyboardButtonKind::LoginUrl(tg::LoginUrl {
                    url: parse_url(&login.url)?,
                    forward_text: login.forward_text,
                    bot_username: login.bot_username,
                    request_write_access: login.request_write_access,
                })
            }
            InlineButtonKind::SwitchInlineQuery(query) => {
                tg::InlineKeyboardButtonKind::SwitchInlineQuery(query)
            }
            InlineButtonKind::SwitchInlineQueryCurrentChat(query) => {
                tg::InlineKeyboardButtonKind::SwitchInlineQueryCurrentChat(query)
            }
            InlineButtonKind::CallbackGame(_) => {
                tg::InlineKeyboardButtonKind::CallbackGame(tg::CallbackGame {})
            }
            InlineButtonKind::Pay(_) => tg::InlineKeyboardButtonKind::Pay(tg::True),
        };

        Ok(Self::new(button.text, kind))
    }
}

impl TryFrom<tg::InlineKeyboardButton> for InlineButton {
    type Error = ButtonError;

    fn try_from(button: tg::InlineKeyboardButton) -> Result<Self, Self::Error> {
        let kind = match button.kind {
            tg::InlineKeyboardButtonKind::Url(url) => InlineButtonKind::Url(url.to_string()),
            tg::InlineKeyboardButtonKind::CallbackData(data) => InlineButtonKind::CallbackData(data),
            tg::InlineKeyboardButtonKind::WebApp(info) => {
                InlineButtonKind::WebApp(WebAppInfo::new(info.url.to_string()))
            }
            tg::InlineKeyboardButtonKind::LoginUrl(login) => InlineButtonKind::LoginUrl(LoginUrl {
                url: login.url.to_string(),
                forward_text: login.forward_text,
                bot_username: login.bot_username,
                request_write_access: login.request_write_access,
            }),
            tg::InlineKeyboardButtonKind::SwitchInlineQuery(query) => {
                InlineButtonKind::SwitchInlineQuery(query)
            }
            tg::InlineKeyboardButtonKind::SwitchInlineQueryCurrentChat(query) => {
                InlineButtonKind::SwitchInlineQueryCurrentChat(query)
            }
            tg::InlineKeyboardButtonKind::SwitchInlineQueryChosenChat(_) => {
                return Err(ButtonError::Unsupported("switch_inline_query_chosen_chat"));
            }
            tg::InlineKeyboardButtonKind::CallbackGame(_) => {
                InlineButtonKind::CallbackGame(CallbackGame {})
            }
            tg::InlineKeyboardButtonKind::Pay(_) => InlineButtonKind::Pay(True),
        };

        Ok(Self {
            text: button.text,
            kind,
        })
    }
}
