//! Layered configuration: defaults, `gitgather.toml`, environment, CLI
//!
//! Process-wide state is read here and nowhere else; the rest of the crate
//! receives a fully resolved [`Config`].

use crate::error::GatherError;
use figment::providers::{Env, Format, Serialized, Toml};
use figment::Figment;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;

mod merge;

pub use merge::{merge_cli_with_config, CliOverrides};

/// Config file looked up in the repository root when `--config` is absent
pub const CONFIG_FILE_NAME: &str = "gitgather.toml";

/// Prefix for environment overrides (`GITGATHER_NO_GIT=true`, ...)
pub const ENV_PREFIX: &str = "GITGATHER_";

const ENV_KEYS: &[&str] = &["no_git", "all", "no_dotfiles", "tree"];

/// Selection and rendering settings for one run
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Walk the filesystem instead of listing tracked files
    #[serde(default, deserialize_with = "deserialize_flag")]
    pub no_git: bool,

    /// Include dotfiles; overrides `no_dotfiles`
    #[serde(default, deserialize_with = "deserialize_flag")]
    pub all: bool,

    #[serde(default, deserialize_with = "deserialize_flag")]
    pub no_dotfiles: bool,

    /// Prepend a directory tree of the included files
    #[serde(default, deserialize_with = "deserialize_flag")]
    pub tree: bool,

    #[serde(default, deserialize_with = "deserialize_patterns")]
    pub include: Vec<String>,

    #[serde(default, deserialize_with = "deserialize_patterns")]
    pub exclude: Vec<String>,
}

/// Accept booleans plus the `1`/`0`/`yes`/`no` spellings common in env vars.
fn deserialize_flag<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: serde::Deserializer<'de>,
{
    use serde::de::{Unexpected, Visitor};

    struct FlagVisitor;

    impl<'de> Visitor<'de> for FlagVisitor {
        type Value = bool;

        fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
            formatter.write_str("a boolean (true/false, 1/0, yes/no)")
        }

        fn visit_bool<E>(self, value: bool) -> Result<Self::Value, E>
        where
            E: serde::de::Error,
        {
            Ok(value)
        }

        fn visit_u64<E>(self, value: u64) -> Result<Self::Value, E>
        where
            E: serde::de::Error,
        {
            match value {
                0 => Ok(false),
                1 => Ok(true),
                other => Err(E::invalid_value(Unexpected::Unsigned(other), &self)),
            }
        }

        fn visit_i64<E>(self, value: i64) -> Result<Self::Value, E>
        where
            E: serde::de::Error,
        {
            match value {
                0 => Ok(false),
                1 => Ok(true),
                other => Err(E::invalid_value(Unexpected::Signed(other), &self)),
            }
        }

        fn visit_str<E>(self, value: &str) -> Result<Self::Value, E>
        where
            E: serde::de::Error,
        {
            match value.trim().to_ascii_lowercase().as_str() {
                "true" | "1" | "yes" | "on" => Ok(true),
                "false" | "0" | "no" | "off" | "" => Ok(false),
                _ => Err(E::invalid_value(Unexpected::Str(value), &self)),
            }
        }
    }

    deserializer.deserialize_any(FlagVisitor)
}

/// Accept either a list of globs or one comma-separated string.
fn deserialize_patterns<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    use serde::de::{SeqAccess, Visitor};

    struct PatternsVisitor;

    impl<'de> Visitor<'de> for PatternsVisitor {
        type Value = Vec<String>;

        fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
            formatter.write_str("a comma-separated string or a list of glob patterns")
        }

        fn visit_str<E>(self, value: &str) -> Result<Self::Value, E>
        where
            E: serde::de::Error,
        {
            Ok(value
                .split(',')
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(str::to_string)
                .collect())
        }

        fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
        where
            A: SeqAccess<'de>,
        {
            let mut result = Vec::new();
            while let Some(pattern) = seq.next_element::<String>()? {
                let trimmed = pattern.trim();
                if !trimmed.is_empty() {
                    result.push(trimmed.to_string());
                }
            }
            Ok(result)
        }
    }

    deserializer.deserialize_any(PatternsVisitor)
}

/// Defaults layered with the config file, without environment overrides.
///
/// An explicit `config_path` must exist; otherwise `gitgather.toml` in
/// `anchor` is used when present.
pub fn config_figment(anchor: &Path, config_path: Option<&Path>) -> Result<Figment, GatherError> {
    let mut figment = Figment::from(Serialized::defaults(Config::default()));

    match config_path {
        Some(path) => {
            if !path.is_file() {
                return Err(GatherError::Config(Box::new(figment::Error::from(format!(
                    "config file '{}' does not exist",
                    path.display()
                )))));
            }
            figment = figment.merge(Toml::file(path));
        }
        None => {
            let default_path = anchor.join(CONFIG_FILE_NAME);
            if default_path.is_file() {
                figment = figment.merge(Toml::file(default_path));
            }
        }
    }

    Ok(figment)
}

/// Load the layered config, including `GITGATHER_*` environment overrides.
pub fn load_config(anchor: &Path, config_path: Option<&Path>) -> Result<Config, GatherError> {
    config_figment(anchor, config_path)?
        .merge(env_provider())
        .extract()
        .map_err(|e| GatherError::Config(Box::new(e)))
}

fn env_provider() -> Env {
    Env::prefixed(ENV_PREFIX).only(ENV_KEYS)
}
