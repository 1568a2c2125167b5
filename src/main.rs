//! button-preview - prints every button variant as Bot API JSON.
//!
//! Handy for checking what the constructors send to Telegram. Set
//! `BUTTON_VALIDATION=strict` to run the showcase through the validator.

use serde::Serialize;
use tracing::info;
use tracing_subscriber::EnvFilter;

use elysium_buttons::config::Config;
use elysium_buttons::{InlineButton, LoginUrl, PollType, ReplyButton, Validator};

#[derive(Serialize)]
struct Showcase {
    reply: Vec<ReplyButton>,
    inline: Vec<InlineButton>,
}

fn showcase() -> Showcase {
    Showcase {
        reply: vec![
            ReplyButton::text("📝 Notes"),
            ReplyButton::request_contact("📞 Share phone"),
            ReplyButton::request_location("📍 Share location"),
            ReplyButton::request_poll("📊 Any poll", None),
            ReplyButton::request_poll("❓ Quiz", PollType::Quiz),
            ReplyButton::web_app("🌐 Open app", "https://example.com/app"),
        ],
        inline: vec![
            InlineButton::url("👨‍💻 Developer", "https://github.com/ziyu4"),
            InlineButton::text("help:notes"),
            InlineButton::callback("🔙 Kembali", "help:back"),
            InlineButton::web_app("🌐 Open app", "https://example.com/app"),
            InlineButton::login(
                "🔑 Login",
                LoginUrl::new("https://example.com/auth").request_write_access(true),
            ),
            InlineButton::switch_inline("↗️ Share"),
            InlineButton::switch_inline_current_with("🔎 Search", "notes"),
            InlineButton::game("🎮 Play"),
            InlineButton::pay("💳 Pay now"),
        ],
    }
}

fn main() -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("elysium_buttons=info,button_preview=info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let config = Config::from_env();
    info!("Validation mode: {:?}", config.validation);

    let validator = Validator::new(config.validation);
    let showcase = showcase();

    for button in &showcase.reply {
        validator.check_reply(button)?;
    }
    for button in &showcase.inline {
        validator.check_inline(button)?;
    }
    info!(
        "Built {} reply and {} inline buttons",
        showcase.reply.len(),
        showcase.inline.len()
    );

    let output = if config.pretty {
        serde_json::to_string_pretty(&showcase)?
    } else {
        serde_json::to_string(&showcase)?
    };
    println!("{}", output);

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_showcase_passes_strict_validation() {
        let validator = Validator::strict();
        let showcase = showcase();

        assert!(showcase.reply.iter().all(|b| validator.check_reply(b).is_ok()));
        assert!(showcase.inline.iter().all(|b| validator.check_inline(b).is_ok()));
    }
}
