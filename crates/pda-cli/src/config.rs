use std::collections::BTreeMap;
use std::path::Path;

use eyre::{eyre, WrapErr};
use program_address::{PublicKey, ASSOCIATED_TOKEN_PROGRAM_ID, TOKEN_PROGRAM_ID};
use serde::Deserialize;

/// Program aliases that resolve without a configuration file.
const BUILTIN_PROGRAMS: [(&str, PublicKey); 2] = [
    ("token", TOKEN_PROGRAM_ID),
    ("associated-token", ASSOCIATED_TOKEN_PROGRAM_ID),
];

/// Contents of the optional configuration file.
///
/// ```toml
/// [programs]
/// metadata = "metaqbxxUerdq28cj1RbAWkYQm3ybzjb6a8bt518x1s"
/// my-program = "$MY_PROGRAM_ID"
/// ```
#[derive(Deserialize, PartialEq, Default)]
#[cfg_attr(test, derive(Debug))]
pub(crate) struct Config {
    #[serde(default, deserialize_with = "serde_utils::deserialize_programs")]
    pub(crate) programs: BTreeMap<String, PublicKey>,
}

impl Config {
    pub(crate) fn from_file(path: &Path) -> eyre::Result<Self> {
        let config_file = std::fs::read_to_string(path)
            .wrap_err_with(|| format!("reading config file {}", path.display()))?;
        let config: Self = toml::from_str(&config_file)
            .wrap_err_with(|| format!("parsing config file {}", path.display()))?;
        tracing::debug!(path = %path.display(), programs = config.programs.len(), "loaded config");
        Ok(config)
    }

    /// Resolves a configured alias, a built-in alias or a literal Base58 key.
    pub(crate) fn resolve_program(&self, name: &str) -> eyre::Result<PublicKey> {
        if let Some(program_id) = self.programs.get(name) {
            return Ok(*program_id);
        }
        if let Some((_, program_id)) = BUILTIN_PROGRAMS.iter().find(|(alias, _)| *alias == name) {
            return Ok(*program_id);
        }
        name.parse().map_err(|err| {
            eyre!("`{name}` is neither a known program alias nor a valid public key: {err}")
        })
    }
}

mod serde_utils {
    use serde::de::Error as _;

    use super::*;

    pub(super) fn deserialize_programs<'de, D>(
        deserializer: D,
    ) -> Result<BTreeMap<String, PublicKey>, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let raw = BTreeMap::<String, String>::deserialize(deserializer)?;
        raw.into_iter()
            .map(|(alias, value)| {
                let value = from_env(&value).map_err(D::Error::custom)?;
                let program_id = value
                    .parse::<PublicKey>()
                    .map_err(|err| D::Error::custom(format!("program `{alias}`: {err}")))?;
                Ok((alias, program_id))
            })
            .collect()
    }

    /// Resolves a value as an environment variable if prefixed with `$`.
    fn from_env(raw_string: &str) -> Result<String, String> {
        if let Some(env_var) = raw_string.strip_prefix('$') {
            std::env::var(env_var).map_err(|err| format!("{env_var}: {err}"))
        } else {
            Ok(raw_string.to_owned())
        }
    }
}
