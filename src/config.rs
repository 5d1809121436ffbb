//! Process configuration.
//!
//! Settings are read once at startup from environment variables and passed
//! explicitly to the components that need them. Missing credentials fail
//! fast with [`Error::ConfigurationMissing`], naming every absent key.

use std::path::PathBuf;
use std::time::Duration;

use url::Url;

use crate::listing::{CategoryFilter, DocumentRules};
use crate::{Error, Result};

/// FIA Formula One 2025 season documents page.
pub const DEFAULT_SEASON_URL: &str =
    "https://www.fia.com/documents/championships/fia-formula-one-world-championship-14/season/season-2025-2071";

pub const DEFAULT_STATE_FILE: &str = "last_seen.txt";
pub const DEFAULT_TIMEOUT_SECS: u64 = 25;
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0";
pub const DEFAULT_TELEGRAM_API: &str = "https://api.telegram.org";

/// Environment variable names.
pub mod keys {
    pub const BOT_TOKEN: &str = "TELEGRAM_BOT_TOKEN";
    pub const CHAT_ID: &str = "TELEGRAM_CHAT_ID";
    pub const TELEGRAM_API_BASE: &str = "TELEGRAM_API_BASE";
    pub const SEASON_URL: &str = "SEASON_URL";
    pub const STATE_FILE: &str = "LAST_SEEN_FILE";
    pub const TIMEOUT_SECS: &str = "FETCH_TIMEOUT_SECS";
    pub const USER_AGENT: &str = "USER_AGENT";
    pub const ONLY_STEWARDS: &str = "ONLY_STEWARDS";
    pub const NOTIFY_WHEN_EMPTY: &str = "NOTIFY_WHEN_EMPTY";
}

/// How the listing page is fetched.
#[derive(Debug, Clone)]
pub struct FetchConfig {
    /// Season listing page, also the base for relative document links.
    pub season_url: Url,

    /// Value of the `User-Agent` header.
    pub user_agent: String,

    /// Bound on each network call.
    pub timeout: Duration,
}

/// Where notifications go.
#[derive(Debug, Clone)]
pub struct TelegramConfig {
    pub bot_token: String,
    pub chat_id: String,

    /// Bot API root, overridable for tests and proxies.
    pub api_base: String,
}

/// Full configuration of a watch run.
#[derive(Debug, Clone)]
pub struct Config {
    pub fetch: FetchConfig,
    pub telegram: TelegramConfig,

    /// Location of the seen-state file.
    pub state_path: PathBuf,

    /// Restrict notifications to documents issued by the stewards.
    ///
    /// Default: `false`
    pub only_stewards: bool,

    /// Send a notice when the page lists no documents at all.
    ///
    /// Default: `true`
    pub notify_when_empty: bool,

    pub rules: DocumentRules,
}

impl Config {
    /// Read the configuration from the process environment, after loading a
    /// `.env` file if one exists.
    pub fn from_env() -> Result<Self> {
        // A missing .env file is the normal case in CI.
        let _ = dotenvy::dotenv();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build and validate the configuration from a key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let lookup = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        let bot_token = lookup(keys::BOT_TOKEN);
        let chat_id = lookup(keys::CHAT_ID);
        let (bot_token, chat_id) = match (bot_token, chat_id) {
            (Some(token), Some(chat)) => (token, chat),
            (token, chat) => {
                let missing: Vec<&str> = [(keys::BOT_TOKEN, token.is_none()), (keys::CHAT_ID, chat.is_none())]
                    .into_iter()
                    .filter_map(|(key, absent)| absent.then_some(key))
                    .collect();
                return Err(Error::ConfigurationMissing(missing.join(", ")));
            }
        };

        Ok(Self {
            fetch: FetchConfig::from_lookup(lookup)?,
            telegram: TelegramConfig {
                bot_token,
                chat_id,
                api_base: lookup(keys::TELEGRAM_API_BASE)
                    .unwrap_or_else(|| DEFAULT_TELEGRAM_API.to_string()),
            },
            state_path: lookup(keys::STATE_FILE)
                .map_or_else(|| PathBuf::from(DEFAULT_STATE_FILE), PathBuf::from),
            only_stewards: parse_bool(keys::ONLY_STEWARDS, lookup(keys::ONLY_STEWARDS), false)?,
            notify_when_empty: parse_bool(
                keys::NOTIFY_WHEN_EMPTY,
                lookup(keys::NOTIFY_WHEN_EMPTY),
                true,
            )?,
            rules: DocumentRules::default(),
        })
    }

    /// The category post-filter selected by [`Config::only_stewards`].
    #[must_use]
    pub fn category_filter(&self) -> CategoryFilter {
        if self.only_stewards {
            CategoryFilter::stewards_only()
        } else {
            CategoryFilter::any()
        }
    }
}

impl FetchConfig {
    /// Fetch settings only; needs no credentials.
    pub fn from_env() -> Result<Self> {
        let _ = dotenvy::dotenv();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let lookup = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        let raw_url = lookup(keys::SEASON_URL).unwrap_or_else(|| DEFAULT_SEASON_URL.to_string());
        let season_url = Url::parse(raw_url.trim()).map_err(|e| {
            Error::InvalidConfiguration(format!("{}={raw_url}: {e}", keys::SEASON_URL))
        })?;

        let timeout_secs = match lookup(keys::TIMEOUT_SECS) {
            Some(raw) => raw.trim().parse::<u64>().map_err(|e| {
                Error::InvalidConfiguration(format!("{}={raw}: {e}", keys::TIMEOUT_SECS))
            })?,
            None => DEFAULT_TIMEOUT_SECS,
        };

        Ok(Self {
            season_url,
            user_agent: lookup(keys::USER_AGENT).unwrap_or_else(|| DEFAULT_USER_AGENT.to_string()),
            timeout: Duration::from_secs(timeout_secs),
        })
    }
}

fn parse_bool(key: &str, raw: Option<String>, default: bool) -> Result<bool> {
    let Some(raw) = raw else {
        return Ok(default);
    };

    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(Error::InvalidConfiguration(format!("{key}={raw}: expected a boolean"))),
    }
}
