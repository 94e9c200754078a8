use std::{env, time::Duration};

use anyhow::{Context as _, bail};

use pageturn_utils::pagination::{
    DEFAULT_REACTION_STAGGER, DEFAULT_REACTION_TTL, SESSION_TOKEN_TTL,
};

const TOKEN_VAR: &str = "DISCORD_TOKEN";
const STAGGER_VAR: &str = "PAGETURN_REACTION_STAGGER_MS";
const SESSION_TTL_VAR: &str = "PAGETURN_SESSION_TTL_SECS";
const REACTION_TTL_VAR: &str = "PAGETURN_REACTION_TTL_SECS";
const REGISTER_COMMANDS_VAR: &str = "PAGETURN_REGISTER_COMMANDS";

/// Runtime settings read once at startup.
#[derive(Clone, Debug)]
pub struct Config {
    pub discord_token: String,
    /// Delay between attaching the two navigation emoji.
    pub reaction_stagger: Duration,
    /// How long an interaction session stays usable.
    pub session_ttl: Duration,
    /// How long a reaction-bound paginator keeps answering reactions.
    pub reaction_ttl: Duration,
    /// Whether slash commands are registered on ready.
    pub register_commands: bool,
}

impl Config {
    /// Read the configuration from the process environment.
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Read the configuration through an arbitrary variable lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let discord_token = lookup(TOKEN_VAR)
            .filter(|token| !token.trim().is_empty())
            .with_context(|| format!("{TOKEN_VAR} is not set"))?;

        let reaction_stagger = match lookup(STAGGER_VAR) {
            Some(raw) => Duration::from_millis(parse_number(STAGGER_VAR, &raw)?),
            None => DEFAULT_REACTION_STAGGER,
        };

        let session_ttl = match lookup(SESSION_TTL_VAR) {
            Some(raw) => Duration::from_secs(parse_number(SESSION_TTL_VAR, &raw)?),
            None => SESSION_TOKEN_TTL,
        };

        let reaction_ttl = match lookup(REACTION_TTL_VAR) {
            Some(raw) => Duration::from_secs(parse_number(REACTION_TTL_VAR, &raw)?),
            None => DEFAULT_REACTION_TTL,
        };

        let register_commands = match lookup(REGISTER_COMMANDS_VAR) {
            Some(raw) => parse_flag(REGISTER_COMMANDS_VAR, &raw)?,
            None => true,
        };

        Ok(Self {
            discord_token,
            reaction_stagger,
            session_ttl,
            reaction_ttl,
            register_commands,
        })
    }
}

fn parse_number(key: &str, raw: &str) -> anyhow::Result<u64> {
    raw.trim()
        .parse::<u64>()
        .with_context(|| format!("{key} must be a whole number, got `{raw}`"))
}

fn parse_flag(key: &str, raw: &str) -> anyhow::Result<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => bail!("{key} must be a boolean, got `{raw}`"),
    }
}
