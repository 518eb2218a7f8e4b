//! # inetsql-core
//!
//! Engine-agnostic codec for the `inet` network-address type.
//!
//! This crate holds the value type and its pure operations, without any SQL
//! engine dependencies. Batch execution, null handling and logging live in
//! the `inetsql` crate.
//!
//! ## Quick Start
//!
//! ```rust
//! use inetsql_core::prelude::*;
//!
//! let inet: Inet = "::ffff:1.2.3.4/96".parse().unwrap();
//! assert_eq!(inet.family(), AddressFamily::Ipv6);
//! assert_eq!(inet.to_string(), "::ffff:1.2.3.4/96");
//!
//! let next = offset(&inet, 1).unwrap();
//! assert_eq!(next.to_string(), "::ffff:1.2.3.5/96");
//!
//! let record = InetRecord::encode(&next, KeyEncoding::Unsigned);
//! assert_eq!(record.decode(KeyEncoding::Unsigned).unwrap(), next);
//! ```
//!
//! ## Architecture
//!
//! ```text
//! +---------------------------------------------------------------------+
//! |                        inetsql-core                                 |
//! +---------------------------------------------------------------------+
//! |  address/   - Inet, AddressFamily                                   |
//! |  parse/     - text -> Inet (IPv4 and IPv6 grammars)                 |
//! |  format/    - Inet -> canonical text                                |
//! |  order/     - order-preserving keys, persisted record layout        |
//! |  arith/     - checked offsets                                       |
//! |  error/     - Error types                                           |
//! +---------------------------------------------------------------------+
//! ```
//!
//! Every operation is a pure function over `Copy` values and is safe to call
//! from any number of threads.

pub mod address;
pub mod arith;
pub mod error;
pub mod format;
pub mod order;
pub mod parse;
pub mod prelude;

pub use address::{AddressFamily, Inet, IPV4_BITS, IPV6_BITS};
pub use arith::{add, offset, offset_key, subtract};
pub use error::{InetError, ParseError, ParseErrorKind, RangeError, RecordError, Result};
pub use format::format;
pub use order::{InetRecord, KeyEncoding, OrderCodec, RECORD_SIZE};
pub use parse::parse;

/// Library version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
