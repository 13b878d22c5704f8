//! # Environment Variables
//!
//! Utilities for reading and parsing environment variables, with fallbacks for the
//! optional settings a desktop client ships defaults for.

use std::env;
use std::str::FromStr;

/// Get an environment variable by name.
pub fn get_env(name: &'static str) -> Result<String, Error> {
    env::var(name).map_err(|_| Error::MissingEnv(name))
}

/// Get an environment variable, or `default` when it is unset or blank.
pub fn get_env_or(name: &'static str, default: &str) -> String {
    match get_env(name) {
        Ok(val) if !val.trim().is_empty() => val,
        _ => default.to_string(),
    }
}

/// Get and parse an environment variable.
pub fn get_env_parse<T: FromStr>(name: &'static str) -> Result<T, Error> {
    let val = get_env(name)?;
    val.trim().parse::<T>().map_err(|_| Error::WrongFormat(name))
}

/// Get and parse an environment variable.
///
/// Unset falls back to `default`; a value that does not parse is an error rather than
/// a silent fallback.
pub fn get_env_parse_or<T: FromStr>(name: &'static str, default: T) -> Result<T, Error> {
    match get_env_parse(name) {
        Err(Error::MissingEnv(_)) => Ok(default),
        other => other,
    }
}

// region:    --- Error
#[derive(Debug, PartialEq, Eq)]
pub enum Error {
    MissingEnv(&'static str),
    WrongFormat(&'static str),
}

impl std::fmt::Display for Error {
    fn fmt(&self, fmt: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Error::MissingEnv(name) => write!(fmt, "missing environment variable {name}"),
            Error::WrongFormat(name) => write!(fmt, "environment variable {name} has the wrong format"),
        }
    }
}

impl std::error::Error for Error {}
// endregion: --- Error

#[cfg(test)]
mod tests {
    use super::*;

    // Each test uses its own variable name so they can run in parallel.

    #[test]
    fn test_get_env_or_falls_back_when_unset() {
        assert_eq!(get_env_or("LIB_UTILS_TEST_UNSET_A", "fallback"), "fallback");
    }

    #[test]
    fn test_get_env_parse_or_reports_bad_format() {
        env::set_var("LIB_UTILS_TEST_BAD_NUMBER", "ten");
        let result: Result<u64, Error> = get_env_parse_or("LIB_UTILS_TEST_BAD_NUMBER", 10);
        assert_eq!(result, Err(Error::WrongFormat("LIB_UTILS_TEST_BAD_NUMBER")));
    }

    #[test]
    fn test_get_env_parse_or_uses_default() {
        let result: Result<u64, Error> = get_env_parse_or("LIB_UTILS_TEST_UNSET_B", 30);
        assert_eq!(result, Ok(30));
    }
}
