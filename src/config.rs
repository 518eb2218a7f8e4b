//! Execution settings for the inet column functions.

use std::fmt;
use std::str::FromStr;

use inetsql_core::KeyEncoding;

/// Environment variable selecting the stored key encoding.
pub const KEY_ENCODING_ENV: &str = "INETSQL_KEY_ENCODING";

/// Environment variable selecting the cast mode.
pub const CAST_MODE_ENV: &str = "INETSQL_CAST_MODE";

/// What a text-to-inet cast does with a row that fails to parse.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CastMode {
    /// Fail the whole batch with the first error (`CAST`).
    #[default]
    Strict,
    /// Null the row and carry on (`TRY_CAST`).
    Try,
}

impl fmt::Display for CastMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            CastMode::Strict => "strict",
            CastMode::Try => "try",
        })
    }
}

impl FromStr for CastMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "strict" | "cast" => Ok(CastMode::Strict),
            "try" | "try_cast" => Ok(CastMode::Try),
            other => Err(format!("unknown cast mode: {other}")),
        }
    }
}

/// Configuration for [`InetFunctions`](crate::InetFunctions).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ExecConfig {
    /// Encoding of keys in stored records.
    pub key_encoding: KeyEncoding,
    /// Behaviour of text-to-inet casts on bad rows.
    pub cast_mode: CastMode,
}

impl ExecConfig {
    pub fn new(key_encoding: KeyEncoding, cast_mode: CastMode) -> Self {
        Self {
            key_encoding,
            cast_mode,
        }
    }

    /// Read settings from `INETSQL_KEY_ENCODING` and `INETSQL_CAST_MODE`.
    ///
    /// Unset variables keep their defaults. Unrecognised values are logged
    /// and ignored.
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();
        if let Some(value) = lookup(KEY_ENCODING_ENV) {
            match value.parse() {
                Ok(encoding) => config.key_encoding = encoding,
                Err(e) => tracing::warn!("Ignoring {}: {}", KEY_ENCODING_ENV, e),
            }
        }
        if let Some(value) = lookup(CAST_MODE_ENV) {
            match value.parse() {
                Ok(mode) => config.cast_mode = mode,
                Err(e) => tracing::warn!("Ignoring {}: {}", CAST_MODE_ENV, e),
            }
        }
        tracing::debug!(
            key_encoding = %config.key_encoding,
            cast_mode = %config.cast_mode,
            "inet execution config"
        );
        config
    }
}
