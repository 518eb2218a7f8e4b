//! Convenient re-exports for common usage.
//!
//! # Example
//!
//! ```rust
//! use inetsql_core::prelude::*;
//!
//! let inet = parse(b"10.0.0.1").unwrap();
//! assert_eq!(format(&inet), "10.0.0.1");
//! ```

// Value types
pub use crate::address::{AddressFamily, Inet};

// Codec
pub use crate::format::format;
pub use crate::order::{InetRecord, KeyEncoding, OrderCodec};
pub use crate::parse::parse;

// Arithmetic
pub use crate::arith::{offset, subtract};

// Error types
pub use crate::error::{InetError, ParseError, RangeError, Result};
