//! Login URL payloads for inline login buttons.

use serde::{Deserialize, Serialize};

/// Parameters of a Telegram Login button (`LoginUrl` in the Bot API).
///
/// Only `url` is required. The optional fields are passed to Telegram
/// untouched and are omitted from the JSON when unset.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LoginUrl {
    /// HTTP(S) URL opened with user authorization data appended
    pub url: String,

    /// New text of the button in forwarded messages
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub forward_text: Option<String>,

    /// Username of the bot used for authorization
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bot_username: Option<String>,

    /// Request permission for the bot to message the user
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub request_write_access: Option<bool>,
}

impl LoginUrl {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            forward_text: None,
            bot_username: None,
            request_write_access: None,
        }
    }

    pub fn forward_text(mut self, text: impl Into<String>) -> Self {
        self.forward_text = Some(text.into());
        self
    }

    /// Strips a leading `@` if present.
    pub fn bot_username(mut self, username: impl AsRef<str>) -> Self {
        self.bot_username = Some(username.as_ref().trim_start_matches('@').to_string());
        self
    }

    pub fn request_write_access(mut self, allow: bool) -> Self {
        self.request_write_access = Some(allow);
        self
    }
}

/// What a login button may be built from: a bare URL or a full [`LoginUrl`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoginTarget {
    Url(String),
    Config(LoginUrl),
}

impl LoginTarget {
    /// A bare URL becomes `{ url }`; a config passes through unchanged.
    pub fn into_login_url(self) -> LoginUrl {
        match self {
            Self::Url(url) => LoginUrl::new(url),
            Self::Config(config) => config,
        }
    }
}

impl From<&str> for LoginTarget {
    fn from(url: &str) -> Self {
        Self::Url(url.to_string())
    }
}

impl From<String> for LoginTarget {
    fn from(url: String) -> Self {
        Self::Url(url)
    }
}

impl From<LoginUrl> for LoginTarget {
    fn from(config: LoginUrl) -> Self {
        Self::Config(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_string_and_config_normalize_alike() {
        let from_str = LoginTarget::from("https://x").into_login_url();
        let from_config = LoginTarget::from(LoginUrl::new("https://x")).into_login_url();

        assert_eq!(from_str, from_config);
        assert_eq!(serde_json::to_value(&from_str).unwrap(), json!({ "url": "https://x" }));
    }

    #[test]
    fn test_config_passes_through() {
        let config = LoginUrl::new("https://example.com/auth")
            .forward_text("Log in")
            .bot_username("@elysium_bot")
            .request_write_access(true);

        let normalized = LoginTarget::from(config.clone()).into_login_url();
        assert_eq!(normalized, config);
        assert_eq!(
            serde_json::to_value(&normalized).unwrap(),
            json!({
                "url": "https://example.com/auth",
                "forward_text": "Log in",
                "bot_username": "elysium_bot",
                "request_write_access": true
            })
        );
    }
}
