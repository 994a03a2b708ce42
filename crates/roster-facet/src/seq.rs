//! Last-request-wins ordering for simulated or real async loads.
//!
//! A page that reloads on every keystroke can have several loads in
//! flight at once; a slow early response must not overwrite a fresher
//! one. [`RequestSeq`] provides that guarantee as a generation counter:
//! beginning a request invalidates every token issued before it.
//!
//! Single-threaded: the contract is scoped to one UI event
//! loop, so the counter is a [`Cell`], not an atomic.

use std::cell::Cell;

/// Issues request tokens and remembers which one is current.
///
/// # Example
///
/// ```
/// use roster_facet::RequestSeq;
///
/// let seq = RequestSeq::new();
///
/// let first = seq.begin();
/// let second = seq.begin(); // user typed again before the reply
///
/// // The stale reply arrives: its effect must be dropped.
/// assert!(!seq.is_current(first));
/// // The fresh reply lands.
/// assert!(seq.is_current(second));
/// ```
#[derive(Debug, Default)]
pub struct RequestSeq {
    latest: Cell<u64>,
}

/// A token identifying one begun request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RequestToken(u64);

impl RequestSeq {
    /// Creates a sequence with no outstanding request.
    pub fn new() -> Self {
        RequestSeq::default()
    }

    /// Begins a request, invalidating all earlier tokens.
    pub fn begin(&self) -> RequestToken {
        let next = self.latest.get() + 1;
        self.latest.set(next);
        RequestToken(next)
    }

    /// Returns `true` if `token` is the most recently begun request.
    ///
    /// A completion handler checks this before applying its result;
    /// `false` means a newer request superseded it and the result must
    /// be discarded.
    pub fn is_current(&self, token: RequestToken) -> bool {
        self.latest.get() == token.0
    }
}
