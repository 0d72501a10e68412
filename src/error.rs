//! Error types for the configurable surfaces around the formatting engine.
//!
//! Editing itself never fails: every edit maps to a defined result. Errors
//! only come from building a field with an unusable configuration or from
//! parsing textual keystroke scripts.

use std::fmt;

/// Errors raised when configuring a field format.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// The separator glyph is a digit, so it could not be told apart from
    /// the digits it separates.
    DigitSeparator(char),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DigitSeparator(c) => {
                write!(f, "separator '{}' is a digit (separators must not be digits)", c)
            }
        }
    }
}

impl std::error::Error for ConfigError {}

/// Errors raised when parsing a keystroke from its textual form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeystrokeParseError {
    /// The input was empty.
    Empty,

    /// The keystroke name is not recognised.
    UnknownKey(String),

    /// The keystroke needs an argument (e.g. `key:3`) but none was given.
    MissingArgument {
        /// The keystroke name.
        key: &'static str,
    },

    /// `key:` was given something other than exactly one character.
    NotOneChar(String),

    /// `cursor:` was given something that is not an offset.
    InvalidOffset(String),
}

impl fmt::Display for KeystrokeParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "keystroke is empty"),

            Self::UnknownKey(key) => {
                write!(f, "unknown keystroke '{}'", key.escape_default())
            }

            Self::MissingArgument { key } => {
                write!(f, "keystroke '{}' needs an argument ('{}:...')", key, key)
            }

            Self::NotOneChar(arg) => {
                write!(
                    f,
                    "'key:' takes exactly one character, got '{}'",
                    arg.escape_default()
                )
            }

            Self::InvalidOffset(arg) => {
                write!(f, "invalid cursor offset '{}'", arg.escape_default())
            }
        }
    }
}

impl std::error::Error for KeystrokeParseError {}
