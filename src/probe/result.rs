//! Probe result model.

use std::fmt;

/// Outcome of a single probe invocation.
///
/// The value space is restricted to three members because orchestrators act
/// on a binary healthy/unhealthy signal; [`WARNING`](Self::WARNING) reports
/// "healthy enough to keep serving traffic" while leaving room for
/// diagnostic context.
///
/// Like `http::StatusCode`, this is an open newtype over its numeric code:
/// [`from_code`](Self::from_code) accepts any `u8`, and
/// [`validate`](Self::validate) rejects codes outside the three members.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ProbeResult(u8);

impl ProbeResult {
    /// The probe passed.
    pub const SUCCESS: ProbeResult = ProbeResult(0);

    /// The probe passed, but the implementation wants to surface
    /// diagnostic information.
    pub const WARNING: ProbeResult = ProbeResult(1);

    /// The probe failed.
    pub const FAILURE: ProbeResult = ProbeResult(2);

    /// Wraps a raw numeric code without validating it.
    pub const fn from_code(code: u8) -> ProbeResult {
        ProbeResult(code)
    }

    /// Raw numeric code.
    pub const fn code(self) -> u8 {
        self.0
    }

    /// Textual form: `"success"`, `"warning"` or `"failure"`.
    ///
    /// Codes outside the three members render as the empty string; this
    /// accessor never fails. Use [`validate`](Self::validate) to reject
    /// them instead.
    pub const fn as_str(self) -> &'static str {
        match self.0 {
            0 => "success",
            1 => "warning",
            2 => "failure",
            _ => "",
        }
    }

    /// Rejects codes outside the three supported members.
    pub fn validate(self) -> Result<(), UnsupportedResult> {
        match self.0 {
            0..=2 => Ok(()),
            code => Err(UnsupportedResult { code }),
        }
    }

    /// Returns true for [`SUCCESS`](Self::SUCCESS).
    pub fn is_success(self) -> bool {
        self == Self::SUCCESS
    }

    /// Returns true for [`WARNING`](Self::WARNING).
    pub fn is_warning(self) -> bool {
        self == Self::WARNING
    }

    /// Returns true for [`FAILURE`](Self::FAILURE).
    pub fn is_failure(self) -> bool {
        self == Self::FAILURE
    }
}

impl fmt::Display for ProbeResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Default for ProbeResult {
    /// [`SUCCESS`](Self::SUCCESS).
    fn default() -> Self {
        Self::SUCCESS
    }
}

/// Error returned by [`ProbeResult::validate`] for codes outside the
/// supported set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UnsupportedResult {
    /// The rejected code.
    pub code: u8,
}

impl fmt::Display for UnsupportedResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unsupported probe result: {}", self.code)
    }
}

impl std::error::Error for UnsupportedResult {}

/// A probe outcome: the [`ProbeResult`] plus an optional human-readable
/// diagnostic.
///
/// The diagnostic is data, not an error. It is rendered verbatim into the
/// response body and never influences the HTTP status, so a
/// [`success`](Self::success) report can still carry an explanatory message.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProbeReport {
    /// Probe outcome.
    pub result: ProbeResult,
    /// Optional diagnostic text, rendered into the response body.
    pub diagnostic: Option<String>,
}

impl ProbeReport {
    /// Report with the given result and no diagnostic.
    pub fn new(result: ProbeResult) -> Self {
        Self {
            result,
            diagnostic: None,
        }
    }

    /// Successful report.
    pub fn success() -> Self {
        Self::new(ProbeResult::SUCCESS)
    }

    /// Warning report.
    pub fn warning() -> Self {
        Self::new(ProbeResult::WARNING)
    }

    /// Failing report.
    pub fn failure() -> Self {
        Self::new(ProbeResult::FAILURE)
    }

    /// Attach diagnostic text.
    pub fn with_diagnostic(mut self, text: impl Into<String>) -> Self {
        self.diagnostic = Some(text.into());
        self
    }
}
