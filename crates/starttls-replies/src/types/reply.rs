//! SMTP reply types.

use crate::error::{Error, Result};

/// SMTP reply code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ReplyCode(u16);

impl ReplyCode {
    /// Creates a new reply code.
    #[must_use]
    pub const fn new(code: u16) -> Self {
        Self(code)
    }

    /// Returns the numeric code.
    #[must_use]
    pub const fn as_u16(self) -> u16 {
        self.0
    }

    /// Returns true if the code matches the SMTP reply-code grammar:
    /// exactly three digits, first digit in 2..=5.
    #[must_use]
    pub const fn is_valid(self) -> bool {
        self.0 >= 200 && self.0 < 600
    }

    /// Returns true if this is a success code (2xx).
    #[must_use]
    pub const fn is_success(self) -> bool {
        self.0 >= 200 && self.0 < 300
    }

    /// Returns true if this is an intermediate reply (3xx).
    #[must_use]
    pub const fn is_intermediate(self) -> bool {
        self.0 >= 300 && self.0 < 400
    }

    /// Returns true if this is a transient error (4xx).
    #[must_use]
    pub const fn is_transient(self) -> bool {
        self.0 >= 400 && self.0 < 500
    }

    /// Returns true if this is a permanent error (5xx).
    #[must_use]
    pub const fn is_permanent(self) -> bool {
        self.0 >= 500 && self.0 < 600
    }
}

impl std::fmt::Display for ReplyCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

// Codes used by the STARTTLS catalog
impl ReplyCode {
    /// 220 Ready to start TLS
    pub const READY_TO_START_TLS: Self = Self(220);
    /// 454 TLS not available due to temporary reason
    pub const TLS_UNAVAILABLE: Self = Self(454);
    /// 501 Syntax error in parameters or arguments
    pub const PARAMETER_ERROR: Self = Self(501);
}

/// A single (code, text) reply pair.
///
/// The text never contains a line terminator, so the entry can always be
/// embedded in a single SMTP reply line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReplyEntry {
    code: ReplyCode,
    text: &'static str,
}

impl ReplyEntry {
    /// Creates a new reply entry, validating the code and text.
    ///
    /// # Errors
    ///
    /// Returns an error if the code does not match the SMTP reply-code
    /// grammar, or if the text contains a carriage return or line feed.
    pub fn new(code: ReplyCode, text: &'static str) -> Result<Self> {
        if !code.is_valid() {
            return Err(Error::InvalidReplyCode(code.as_u16()));
        }
        if text.contains(['\r', '\n']) {
            return Err(Error::InvalidReplyText(text));
        }
        Ok(Self { code, text })
    }

    /// Unvalidated const constructor for the built-in catalog entries,
    /// which are checked by test instead.
    pub(crate) const fn from_static(code: ReplyCode, text: &'static str) -> Self {
        Self { code, text }
    }

    /// Returns the reply code.
    #[must_use]
    pub const fn code(self) -> ReplyCode {
        self.code
    }

    /// Returns the human-readable text.
    #[must_use]
    pub const fn text(self) -> &'static str {
        self.text
    }

    /// Formats the entry as a complete single-line SMTP reply,
    /// `"<code> <text>\r\n"`.
    #[must_use]
    pub fn to_wire(self) -> String {
        format!("{} {}\r\n", self.code, self.text)
    }
}

impl std::fmt::Display for ReplyEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.code, self.text)
    }
}
