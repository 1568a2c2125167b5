//! Opt-in checks against Bot API rules.
//!
//! Constructors never fail and never inspect their input. Bots that want to
//! catch mistakes before Telegram rejects a message can run buttons through a
//! [`Validator`] in [`ValidationMode::Strict`]. The default mode accepts
//! everything, matching what the constructors produce.

use std::str::FromStr;

use tracing::debug;
use url::Url;

use crate::buttons::{InlineButton, InlineButtonKind, ReplyButton, ReplyButtonKind};
use crate::error::ButtonError;

/// Maximum size of `callback_data` in bytes.
pub const MAX_CALLBACK_DATA_BYTES: usize = 64;

/// How strictly buttons are checked.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ValidationMode {
    #[default]
    Permissive,
    Strict,
}

impl FromStr for ValidationMode {
    type Err = ButtonError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "permissive" => Ok(Self::Permissive),
            "strict" => Ok(Self::Strict),
            _ => Err(ButtonError::UnknownValidationMode(s.to_string())),
        }
    }
}

/// Kind of chat a reply keyboard is sent to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChatScope {
    Private,
    Group,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct Validator {
    mode: ValidationMode,
}

impl Validator {
    pub fn new(mode: ValidationMode) -> Self {
        Self { mode }
    }

    pub fn strict() -> Self {
        Self::new(ValidationMode::Strict)
    }

    pub fn check_reply(&self, button: &ReplyButton) -> Result<(), ButtonError> {
        if self.mode == ValidationMode::Permissive {
            return Ok(());
        }

        let result = check_label(&button.text).and_then(|_| match &button.kind {
            Some(ReplyButtonKind::WebApp(info)) => check_web_app(&info.url),
            _ => Ok(()),
        });
        log_rejection(button.kind_name(), &button.text, &result);
        result
    }

    /// Like [`Validator::check_reply`], and also rejects private-only
    /// buttons in group chats.
    pub fn check_reply_for_chat(
        &self,
        button: &ReplyButton,
        chat: ChatScope,
    ) -> Result<(), ButtonError> {
        self.check_reply(button)?;

        if self.mode == ValidationMode::Strict
            && chat == ChatScope::Group
            && button.private_chat_only()
        {
            debug!("Rejected '{}' button in group chat", button.kind_name());
            return Err(ButtonError::PrivateChatOnly(button.kind_name()));
        }
        Ok(())
    }

    pub fn check_inline(&self, button: &InlineButton) -> Result<(), ButtonError> {
        if self.mode == ValidationMode::Permissive {
            return Ok(());
        }

        let result = check_label(&button.text).and_then(|_| match &button.kind {
            InlineButtonKind::Url(url) => check_scheme("url", url, &["http", "https", "tg"]),
            InlineButtonKind::CallbackData(data) => check_callback_data(data),
            InlineButtonKind::WebApp(info) => check_web_app(&info.url),
            InlineButtonKind::LoginUrl(login) => {
                check_scheme("login_url", &login.url, &["http", "https"])
            }
            _ => Ok(()),
        });
        log_rejection(button.kind_name(), &button.text, &result);
        result
    }
}

fn check_label(text: &str) -> Result<(), ButtonError> {
    if text.trim().is_empty() {
        return Err(ButtonError::EmptyLabel);
    }
    Ok(())
}

pub(crate) fn parse_url(raw: &str) -> Result<Url, ButtonError> {
    Url::parse(raw).map_err(|source| ButtonError::InvalidUrl {
        url: raw.to_string(),
        source,
    })
}

fn check_web_app(raw: &str) -> Result<(), ButtonError> {
    if parse_url(raw)?.scheme() != "https" {
        return Err(ButtonError::InsecureWebApp(raw.to_string()));
    }
    Ok(())
}

fn check_scheme(field: &'static str, raw: &str, allowed: &[&str]) -> Result<(), ButtonError> {
    let url = parse_url(raw)?;
    if !allowed.contains(&url.scheme()) {
        return Err(ButtonError::UnsupportedUrlScheme {
            field,
            scheme: url.scheme().to_string(),
        });
    }
    Ok(())
}

fn check_callback_data(data: &str) -> Result<(), ButtonError> {
    if data.is_empty() || data.len() > MAX_CALLBACK_DATA_BYTES {
        return Err(ButtonError::CallbackDataLength(data.len()));
    }
    Ok(())
}

fn log_rejection(kind: &str, text: &str, result: &Result<(), ButtonError>) {
    if let Err(e) = result {
        debug!("Rejected '{}' button '{}': {}", kind, text, e);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::buttons::{LoginUrl, PollType};

    #[test]
    fn test_permissive_accepts_everything() {
        let validator = Validator::default();

        assert!(validator.check_reply(&ReplyButton::web_app("", "http://insecure")).is_ok());
        assert!(validator.check_inline(&InlineButton::url("x", "not a url")).is_ok());
        assert!(validator
            .check_reply_for_chat(&ReplyButton::request_contact("x"), ChatScope::Group)
            .is_ok());
    }

    #[test]
    fn test_strict_rejects_empty_label() {
        let result = Validator::strict().check_reply(&ReplyButton::text("   "));
        assert!(matches!(result, Err(ButtonError::EmptyLabel)));
    }

    #[test]
    fn test_strict_web_app_requires_https() {
        let validator = Validator::strict();

        assert!(validator.check_reply(&ReplyButton::web_app("Open", "https://example.com")).is_ok());
        assert!(matches!(
            validator.check_reply(&ReplyButton::web_app("Open", "http://example.com")),
            Err(ButtonError::InsecureWebApp(_))
        ));
        assert!(matches!(
            validator.check_inline(&InlineButton::web_app("Open", "example.com")),
            Err(ButtonError::InvalidUrl { .. })
        ));
    }

    #[test]
    fn test_strict_url_schemes() {
        let validator = Validator::strict();

        assert!(validator.check_inline(&InlineButton::url("Me", "tg://user?id=1")).is_ok());
        assert!(validator.check_inline(&InlineButton::url("Site", "http://example.com")).is_ok());
        assert!(matches!(
            validator.check_inline(&InlineButton::url("Mail", "mailto:a@b.c")),
            Err(ButtonError::UnsupportedUrlScheme { field: "url", .. })
        ));
        assert!(matches!(
            validator.check_inline(&InlineButton::login("Login", LoginUrl::new("tg://login"))),
            Err(ButtonError::UnsupportedUrlScheme { field: "login_url", .. })
        ));
    }

    #[test]
    fn test_strict_callback_data_length() {
        let validator = Validator::strict();

        assert!(validator.check_inline(&InlineButton::callback("ok", "help:back")).is_ok());
        assert!(matches!(
            validator.check_inline(&InlineButton::callback("empty", "")),
            Err(ButtonError::CallbackDataLength(0))
        ));
        let long = "x".repeat(MAX_CALLBACK_DATA_BYTES + 1);
        assert!(matches!(
            validator.check_inline(&InlineButton::callback("long", long)),
            Err(ButtonError::CallbackDataLength(65))
        ));
    }

    #[test]
    fn test_strict_private_only_in_groups() {
        let validator = Validator::strict();
        let poll = ReplyButton::request_poll("Poll", PollType::Regular);

        assert!(validator.check_reply_for_chat(&poll, ChatScope::Private).is_ok());
        assert!(matches!(
            validator.check_reply_for_chat(&poll, ChatScope::Group),
            Err(ButtonError::PrivateChatOnly("request_poll"))
        ));
        assert!(validator
            .check_reply_for_chat(&ReplyButton::text("Hi"), ChatScope::Group)
            .is_ok());
    }

    #[test]
    fn test_mode_from_str() {
        assert_eq!("STRICT".parse::<ValidationMode>().unwrap(), ValidationMode::Strict);
        assert_eq!(" permissive ".parse::<ValidationMode>().unwrap(), ValidationMode::Permissive);
        assert!(matches!(
            "lenient".parse::<ValidationMode>(),
            Err(ButtonError::UnknownValidationMode(s)) if s == "lenient"
        ));
    }
}
