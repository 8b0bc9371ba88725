//! # Fetch-State Lifecycle
//!
//! Every data-bound view holds a [`FetchState`] for its payload and a
//! [`RequestSeq`] guarding it. The lifecycle is:
//!
//! ```text
//! States: Pending, Failed, Succeeded(T)
//! Initial: Pending
//! Pending -> Succeeded(T)   (response OK, body parsed)
//! Pending -> Failed         (non-OK status, transport or parse failure)
//! (param change) -> Pending (supersedes any prior state, new request starts)
//! ```
//!
//! In-flight requests are never cancelled. Instead every request is stamped
//! with a token from [`RequestSeq::begin`], and a response is applied only if
//! its token is still the latest. Rapid parameter changes therefore can't
//! let a slow stale response overwrite a newer result.

/// The three-way status a data-bound view holds for its payload.
///
/// "Empty" is not a variant: an empty result is `Succeeded` with an empty
/// payload, which views render distinctly from `Failed`.
#[derive(Debug, Clone, PartialEq)]
pub enum FetchState<T> {
    /// A request is in flight; render a skeleton placeholder.
    Pending,
    /// The request failed (any of the error taxonomy); details are in the log.
    Failed,
    /// The request resolved and the body parsed.
    Succeeded(T),
}

impl<T> FetchState<T> {
    pub fn is_pending(&self) -> bool {
        matches!(self, FetchState::Pending)
    }

    /// The payload, if the fetch succeeded.
    pub fn payload(&self) -> Option<&T> {
        match self {
            FetchState::Succeeded(value) => Some(value),
            _ => None,
        }
    }
}

/// Monotonic sequence guard for one fetch slot.
///
/// `begin()` stamps a new request; `is_current()` tells whether a completed
/// request is still the one the view is waiting for.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct RequestSeq {
    latest: u64,
}

impl RequestSeq {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts a new request, invalidating all earlier tokens.
    pub fn begin(&mut self) -> u64 {
        self.latest += 1;
        self.latest
    }

    /// True if `token` belongs to the most recently started request.
    pub fn is_current(&self, token: u64) -> bool {
        self.latest == token
    }
}
