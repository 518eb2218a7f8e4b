//! inetsql - Column functions for the `inet` network-address type.
//!
//! This crate applies the [`inetsql_core`] codec to whole columns the way a
//! SQL engine calls it: text casts in both directions, `host()`, and the
//! `+`/`-` offset operators, with NULL propagation and `TRY_CAST` semantics.
//!
//! # Example
//!
//! ```
//! use inetsql::{CastMode, ExecConfig, InetFunctions};
//! use inetsql::inetsql_core::KeyEncoding;
//!
//! let functions = InetFunctions::new(ExecConfig::new(KeyEncoding::Unsigned, CastMode::Try));
//!
//! let outcome = functions
//!     .cast_to_inet(&[Some("10.0.0.1/8"), None, Some("not an address")])
//!     .unwrap();
//! assert!(!outcome.is_success());
//!
//! let moved = functions.add(outcome.values(), &[Some(1), Some(1), Some(1)]).unwrap();
//! let text = functions.cast_to_varchar(&moved).unwrap();
//! assert_eq!(text[0].as_deref(), Some("10.0.0.2/8"));
//! assert_eq!(text[1], None);
//! assert_eq!(text[2], None);
//! ```

pub mod config;
pub mod error;
pub mod functions;

pub use config::{CastMode, ExecConfig};
pub use error::{Error, Result};
pub use functions::{CastOutcome, InetFunctions};
pub use inetsql_core;
