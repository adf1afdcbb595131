use crate::modules::error::{Result, StepLogError};
use std::{collections::HashMap, env, path::PathBuf, str::FromStr};

pub const ENV_LOG_PATH: &str = "STEPLOG_PATH";
pub const ENV_LEVEL: &str = "STEPLOG_LEVEL";
pub const ENV_TEXT_COLOR: &str = "STEPLOG_TEXT_COLOR";
pub const ENV_HIGHLIGHT_COLOR: &str = "STEPLOG_HIGHLIGHT_COLOR";
pub const ENV_COLOR_MODE: &str = "STEPLOG_COLOR";
pub const ENV_TRACE: &str = "STEPLOG_TRACE";

pub fn parse_key_val(s: &str) -> std::result::Result<(String, String), String> {
    let mut split = s.splitn(2, '=');
    let key = split.next().unwrap_or("").trim();
    let value = split.next().unwrap_or("").to_string();
    if key.is_empty() {
        return Err("--env expects KEY=VALUE".to_string());
    }
    Ok((key.to_string(), value))
}

pub fn to_env_map(pairs: &[(String, String)]) -> HashMap<String, String> {
    let mut map = HashMap::new();
    for (k, v) in pairs {
        map.insert(k.clone(), v.clone());
    }
    map
}

/// Looks up `env_key` in the `--env` overrides first, then the process
/// environment. Blank values count as unset.
pub fn lookup(env_overrides: &HashMap<String, String>, env_key: &str) -> Option<String> {
    if let Some(value) = env_overrides.get(env_key)
        && !value.trim().is_empty()
    {
        return Some(value.clone());
    }
    if let Ok(value) = env::var(env_key)
        && !value.trim().is_empty()
    {
        return Some(value);
    }
    None
}

pub fn resolve_path(
    cli_value: Option<PathBuf>,
    env_overrides: &HashMap<String, String>,
    env_key: &str,
    name: &'static str,
) -> Result<PathBuf> {
    if let Some(value) = cli_value {
        return Ok(value);
    }
    lookup(env_overrides, env_key)
        .map(PathBuf::from)
        .ok_or(StepLogError::InvalidArgument { name })
}

pub fn resolve_parsed<T>(
    cli_value: Option<T>,
    env_overrides: &HashMap<String, String>,
    env_key: &str,
    name: &'static str,
    default: T,
) -> Result<T>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    if let Some(value) = cli_value {
        return Ok(value);
    }
    match lookup(env_overrides, env_key) {
        Some(raw) => raw
            .trim()
            .parse()
            .map_err(|e: T::Err| StepLogError::InvalidValue {
                name,
                reason: format!("{} ({}={})", e, env_key, raw),
            }),
        None => Ok(default),
    }
}
