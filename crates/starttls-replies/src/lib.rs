//! # starttls-replies
//!
//! Canonical SMTP reply catalog for proxy-side STARTTLS negotiation.
//!
//! An SMTP proxy mediating a STARTTLS upgrade must answer the client with
//! the exact reply a compliant server would send: `220` when it is ready to
//! begin the TLS handshake, `501` when the client sent STARTTLS with
//! parameters, and `454` when TLS is temporarily unavailable. This crate
//! owns that (code, text) contract so every consumer emits byte-identical
//! wire lines.
//!
//! ## Features
//!
//! - **Closed outcome enumeration**: [`StartTlsOutcome`] replaces raw table
//!   positions, so a reordering bug cannot silently change wire behavior
//! - **Const catalog**: entries are `'static` data, built at compile time,
//!   readable from any number of threads without synchronization
//! - **Validated construction**: [`ReplyEntry::new`] enforces the SMTP
//!   reply-code grammar and rejects text containing line terminators
//!
//! ## Quick Start
//!
//! ```
//! use starttls_replies::{ReplyCatalog, StartTlsOutcome};
//!
//! let catalog = ReplyCatalog::new();
//! let entry = catalog.get(StartTlsOutcome::TlsReady);
//!
//! assert_eq!(entry.code().as_u16(), 220);
//! assert_eq!(entry.to_wire(), "220 Ready to start TLS\r\n");
//! ```
//!
//! ## Modules
//!
//! - [`catalog`]: The fixed outcome-to-reply catalog
//! - [`types`]: Reply codes and reply entries

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![forbid(unsafe_code)]

pub mod catalog;
mod error;
pub mod types;

pub use catalog::{ReplyCatalog, StartTlsOutcome};
pub use error::{Error, Result};
pub use types::{ReplyCode, ReplyEntry};
