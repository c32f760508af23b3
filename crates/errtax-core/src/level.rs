//! Severity levels for error definitions.
//!
//! [`Level`] follows the syslog priority set. It parses from either the long
//! lowercase names (`error`, `warning`, ...) or the classic short tokens used
//! by generated logging code (`ERR`, `WARNING`, ...), and always displays in
//! the short form.

use std::{fmt, str::FromStr};

use serde::{Serialize, Serializer};
use thiserror::Error;

/// Error returned when a level token is not part of the severity set.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid level `{0}`, valid values: EMERG, ALERT, CRIT, ERR, WARNING, NOTICE, INFO, DEBUG")]
pub struct InvalidLevel(pub String);

/// Severity of an error definition.
///
/// Variants are declared from most to least severe, so the derived ordering
/// matches syslog priorities (`Emergency < Debug`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Level {
    Emergency,
    Alert,
    Critical,
    Error,
    Warning,
    Notice,
    Info,
    Debug,
}

impl Level {
    /// Returns the syslog priority (0 = emergency, 7 = debug).
    pub fn priority(self) -> u8 {
        self as u8
    }

    /// Returns the short token used in generated code, e.g. `ERR`.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Emergency => "EMERG",
            Self::Alert => "ALERT",
            Self::Critical => "CRIT",
            Self::Error => "ERR",
            Self::Warning => "WARNING",
            Self::Notice => "NOTICE",
            Self::Info => "INFO",
            Self::Debug => "DEBUG",
        }
    }
}

impl FromStr for Level {
    type Err = InvalidLevel;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "emerg" | "emergency" => Ok(Self::Emergency),
            "alert" => Ok(Self::Alert),
            "crit" | "critical" => Ok(Self::Critical),
            "err" | "error" => Ok(Self::Error),
            "warning" | "warn" => Ok(Self::Warning),
            "notice" => Ok(Self::Notice),
            "info" => Ok(Self::Info),
            "debug" => Ok(Self::Debug),
            _ => Err(InvalidLevel(s.to_string())),
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for Level {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_short_tokens() {
        assert_eq!("ERR".parse::<Level>(), Ok(Level::Error));
        assert_eq!("CRIT".parse::<Level>(), Ok(Level::Critical));
        assert_eq!("EMERG".parse::<Level>(), Ok(Level::Emergency));
        assert_eq!("INFO".parse::<Level>(), Ok(Level::Info));
    }

    #[test]
    fn test_parse_long_names_case_insensitive() {
        assert_eq!("error".parse::<Level>(), Ok(Level::Error));
        assert_eq!("Warning".parse::<Level>(), Ok(Level::Warning));
        assert_eq!("critical".parse::<Level>(), Ok(Level::Critical));
        assert_eq!("debug".parse::<Level>(), Ok(Level::Debug));
    }

    #[test]
    fn test_parse_invalid() {
        let err = "fatal".parse::<Level>().unwrap_err();
        assert_eq!(err, InvalidLevel("fatal".to_string()));
        assert!(err.to_string().contains("`fatal`"));
    }

    #[test]
    fn test_priority_matches_syslog() {
        assert_eq!(Level::Emergency.priority(), 0);
        assert_eq!(Level::Error.priority(), 3);
        assert_eq!(Level::Debug.priority(), 7);
        assert!(Level::Critical < Level::Info);
    }

    #[test]
    fn test_display_parses_back() {
        for token in ["EMERG", "ALERT", "CRIT", "ERR", "WARNING", "NOTICE", "INFO", "DEBUG"] {
            let level: Level = token.parse().unwrap();
            assert_eq!(level.to_string(), token);
        }
    }
}
