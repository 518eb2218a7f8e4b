//! Column-at-a-time inet functions.
//!
//! - `CAST(varchar AS inet)` / `TRY_CAST` -> [`InetFunctions::cast_to_inet`]
//! - `CAST(inet AS varchar)` -> [`InetFunctions::cast_to_varchar`]
//! - `host(inet)` -> [`InetFunctions::host`]
//! - `inet + integer` -> [`InetFunctions::add`]
//! - `inet - integer` -> [`InetFunctions::subtract`]
//!
//! Columns are slices of `Option`s; `None` is SQL NULL and always maps to
//! `None`. Inet columns hold [`InetRecord`]s, the stored form, keyed with
//! the configured [`KeyEncoding`](inetsql_core::KeyEncoding).

// Loop indices needed for both null checks and slice access
#![allow(clippy::needless_range_loop)]

use compact_str::{CompactString, ToCompactString};

use inetsql_core::{Inet, InetRecord, ParseError, RangeError};

use crate::config::{CastMode, ExecConfig};
use crate::error::{Error, Result};

/// Output of a text-to-inet cast.
///
/// In [`CastMode::Try`] rows that failed to parse are `None`; the first
/// failure is kept so the caller can report why the batch was not fully
/// successful.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CastOutcome {
    values: Vec<Option<InetRecord>>,
    first_error: Option<ParseError>,
    failed_rows: usize,
}

impl CastOutcome {
    /// True when no non-null row was rejected.
    pub fn is_success(&self) -> bool {
        self.failed_rows == 0
    }

    pub fn values(&self) -> &[Option<InetRecord>] {
        &self.values
    }

    pub fn into_values(self) -> Vec<Option<InetRecord>> {
        self.values
    }

    pub fn first_error(&self) -> Option<&ParseError> {
        self.first_error.as_ref()
    }

    pub fn failed_rows(&self) -> usize {
        self.failed_rows
    }
}

/// The inet function set, bound to one [`ExecConfig`].
#[derive(Debug, Clone, Copy, Default)]
pub struct InetFunctions {
    config: ExecConfig,
}

impl InetFunctions {
    pub fn new(config: ExecConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ExecConfig {
        &self.config
    }

    /// Parse a column of strings into stored inet records.
    pub fn cast_to_inet<S: AsRef<str>>(&self, input: &[Option<S>]) -> Result<CastOutcome> {
        tracing::trace!(rows = input.len(), mode = %self.config.cast_mode, "cast varchar -> inet");

        let mut values = Vec::with_capacity(input.len());
        let mut first_error = None;
        let mut failed_rows = 0;

        for i in 0..input.len() {
            let Some(text) = input[i].as_ref() else {
                values.push(None);
                continue;
            };

            let text: &str = text.as_ref();
            match text.parse::<Inet>() {
                Ok(inet) => values.push(Some(InetRecord::encode(&inet, self.config.key_encoding))),
                Err(e) => {
                    if self.config.cast_mode == CastMode::Strict {
                        return Err(Error::from(e));
                    }
                    tracing::debug!(row = i, error = %e, "inet cast failed, row set to null");
                    failed_rows += 1;
                    first_error.get_or_insert(e);
                    values.push(None);
                }
            }
        }

        if failed_rows > 0 {
            tracing::debug!(failed_rows, rows = input.len(), "inet cast was not fully successful");
        }

        Ok(CastOutcome {
            values,
            first_error,
            failed_rows,
        })
    }

    /// Render a column of stored inet records as canonical text.
    pub fn cast_to_varchar(&self, input: &[Option<InetRecord>]) -> Result<Vec<Option<CompactString>>> {
        tracing::trace!(rows = input.len(), "cast inet -> varchar");
        self.map_records(input, |inet| inet.to_compact_string())
    }

    /// `host(inet)`: the address text without its prefix length.
    pub fn host(&self, input: &[Option<InetRecord>]) -> Result<Vec<Option<CompactString>>> {
        tracing::trace!(rows = input.len(), "host(inet)");
        self.map_records(input, |inet| inet.host().to_compact_string())
    }

    /// `inet + delta`, row by row.
    ///
    /// A result outside the family's range fails the whole batch.
    pub fn add(&self, inets: &[Option<InetRecord>], deltas: &[Option<i128>]) -> Result<Vec<Option<InetRecord>>> {
        self.offset_column("add", inets, deltas, inetsql_core::add)
    }

    /// `inet - delta`, row by row.
    pub fn subtract(
        &self,
        inets: &[Option<InetRecord>],
        deltas: &[Option<i128>],
    ) -> Result<Vec<Option<InetRecord>>> {
        self.offset_column("subtract", inets, deltas, inetsql_core::subtract)
    }

    fn map_records(
        &self,
        input: &[Option<InetRecord>],
        render: impl Fn(&Inet) -> CompactString,
    ) -> Result<Vec<Option<CompactString>>> {
        let mut out = Vec::with_capacity(input.len());
        for i in 0..input.len() {
            let Some(record) = input[i] else {
                out.push(None);
                continue;
            };
            let inet = record.decode(self.config.key_encoding)?;
            out.push(Some(render(&inet)));
        }
        Ok(out)
    }

    fn offset_column(
        &self,
        function: &'static str,
        inets: &[Option<InetRecord>],
        deltas: &[Option<i128>],
        op: impl Fn(&Inet, i128) -> std::result::Result<Inet, RangeError>,
    ) -> Result<Vec<Option<InetRecord>>> {
        if inets.len() != deltas.len() {
            return Err(Error::LengthMismatch {
                function,
                left: inets.len(),
                right: deltas.len(),
            });
        }
        tracing::trace!(rows = inets.len(), function, "inet offset");

        let encoding = self.config.key_encoding;
        let mut out = Vec::with_capacity(inets.len());
        for i in 0..inets.len() {
            let (Some(record), Some(delta)) = (inets[i], deltas[i]) else {
                out.push(None);
                continue;
            };

            let inet = record.decode(encoding)?;
            let moved = op(&inet, delta)
                .inspect_err(|e| tracing::debug!(row = i, function, error = %e, "inet offset out of range"))?;
            out.push(Some(InetRecord::encode(&moved, encoding)));
        }
        Ok(out)
    }
}
