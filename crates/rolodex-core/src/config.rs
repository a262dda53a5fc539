use std::collections::HashMap;
use std::str::FromStr;

/// Errors raised while loading service configuration at startup.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("missing required environment variable `{0}`")]
    Missing(&'static str),
    #[error("invalid value {value:?} for environment variable `{name}`")]
    Invalid { name: &'static str, value: String },
}

/// Source of configuration values keyed by environment variable name.
///
/// Services read from [`ProcessEnv`]; tests pass a `HashMap` so they never
/// touch the real process environment.
pub trait EnvSource {
    fn get(&self, name: &str) -> Option<String>;
}

/// The real process environment.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnv;

impl EnvSource for ProcessEnv {
    fn get(&self, name: &str) -> Option<String> {
        std::env::var(name).ok()
    }
}

impl EnvSource for HashMap<String, String> {
    fn get(&self, name: &str) -> Option<String> {
        HashMap::get(self, name).cloned()
    }
}

/// Read a required variable. Unset and empty values are both rejected.
pub fn required(env: &impl EnvSource, name: &'static str) -> Result<String, ConfigError> {
    match env.get(name) {
        Some(value) if !value.is_empty() => Ok(value),
        _ => Err(ConfigError::Missing(name)),
    }
}

/// Read an optional variable, falling back to `default` when unset or empty.
pub fn optional(env: &impl EnvSource, name: &'static str, default: &str) -> String {
    env.get(name)
        .filter(|v| !v.is_empty())
        .unwrap_or_else(|| default.to_owned())
}

/// Parse an optional variable. A present but unparsable value is an error
/// rather than a silent fallback.
pub fn parsed_or<T: FromStr>(
    env: &impl EnvSource,
    name: &'static str,
    default: T,
) -> Result<T, ConfigError> {
    match env.get(name).filter(|v| !v.is_empty()) {
        Some(value) => value
            .parse()
            .map_err(|_| ConfigError::Invalid { name, value }),
        None => Ok(default),
    }
}
