//! The fixed outcome-to-reply catalog.
//!
//! The proxy-side dispatcher decides how a STARTTLS negotiation went; this
//! module owns the exact reply sent back for each outcome. Entry order is
//! part of the contract with callers that still address entries by raw
//! position, so it is as load-bearing as the entry content itself.

use crate::types::{ReplyCode, ReplyEntry};

/// Outcome of a STARTTLS negotiation, as determined by the dispatcher.
///
/// The discriminants are the historical catalog positions; reordering the
/// variants is a breaking change to the wire contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(usize)]
pub enum StartTlsOutcome {
    /// STARTTLS accepted, proxy ready to begin the TLS handshake.
    TlsReady = 0,
    /// Client sent STARTTLS with unexpected parameters.
    SyntaxError = 1,
    /// Proxy cannot currently perform TLS, e.g. certificate or key
    /// material is unavailable.
    TlsUnavailable = 2,
}

impl StartTlsOutcome {
    /// All outcomes, in catalog order.
    pub const ALL: [Self; 3] = [Self::TlsReady, Self::SyntaxError, Self::TlsUnavailable];

    /// Returns the catalog position of this outcome.
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Returns the outcome at a raw catalog position, for callers still
    /// holding positional indices.
    #[must_use]
    pub const fn from_index(index: usize) -> Option<Self> {
        match index {
            0 => Some(Self::TlsReady),
            1 => Some(Self::SyntaxError),
            2 => Some(Self::TlsUnavailable),
            _ => None,
        }
    }
}

/// Hard-coded answers, in contract order.
static ENTRIES: [ReplyEntry; 3] = [
    ReplyEntry::from_static(ReplyCode::READY_TO_START_TLS, "Ready to start TLS"),
    ReplyEntry::from_static(
        ReplyCode::PARAMETER_ERROR,
        "Syntax error (no parameters allowed)",
    ),
    ReplyEntry::from_static(
        ReplyCode::TLS_UNAVAILABLE,
        "TLS not available due to temporary reason",
    ),
];

/// Read-only handle over the STARTTLS reply catalog.
///
/// The catalog is const data: construct the handle once at startup and pass
/// it to whatever needs it, or construct it on the spot; either way every
/// lookup returns the same `'static` entries, from any thread, with no
/// synchronization.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReplyCatalog;

impl ReplyCatalog {
    /// Creates a catalog handle.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Returns the reply for a negotiation outcome.
    #[must_use]
    pub const fn get(self, outcome: StartTlsOutcome) -> &'static ReplyEntry {
        &ENTRIES[outcome.index()]
    }

    /// Returns the reply at a raw catalog position, or `None` if the
    /// position is outside the catalog.
    #[must_use]
    pub fn get_index(self, index: usize) -> Option<&'static ReplyEntry> {
        ENTRIES.get(index)
    }

    /// Returns the number of catalog entries.
    #[must_use]
    pub const fn len(self) -> usize {
        ENTRIES.len()
    }

    /// Returns false; the catalog is never empty.
    #[must_use]
    pub const fn is_empty(self) -> bool {
        false
    }

    /// Iterates over the entries in contract order.
    pub fn iter(self) -> impl Iterator<Item = &'static ReplyEntry> {
        ENTRIES.iter()
    }
}
