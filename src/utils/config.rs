/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 2/11/25
******************************************************************************/
use std::env;
use std::fmt::Debug;
use std::str::FromStr;
use tracing::error;

/// Reads an environment variable, falling back to `default` when the
/// variable is absent or does not parse as `T`.
///
/// A present-but-unparseable value is logged before the default is used, so
/// a typo in `.env` is visible rather than silently ignored.
pub fn get_env_or_default<T: FromStr>(env_var: &str, default: T) -> T
where
    <T as FromStr>::Err: Debug,
{
    let Ok(raw) = env::var(env_var) else {
        return default;
    };
    raw.parse::<T>().unwrap_or_else(|_| {
        error!("Failed to parse {}: {}, using default", env_var, raw);
        default
    })
}

/// Reads and parses an environment variable, returning `None` when it is
/// absent or invalid.
pub fn get_env_or_none<T: FromStr>(env_var: &str) -> Option<T>
where
    <T as FromStr>::Err: Debug,
{
    env::var(env_var).ok().and_then(|raw| raw.parse::<T>().ok())
}
