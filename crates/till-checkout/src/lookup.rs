//! # Stale Lookup Suppression
//!
//! Product and customer searches race: the user types, several requests
//! go out, and responses come back in any order. The rule is simple - a
//! newer search supersedes an older in-flight one, and a superseded
//! response is ignored. No cancellation tokens, no coordination with the
//! transport.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Superseded Lookup Flow                               │
//! │                                                                         │
//! │  type "co"   ──► begin() = ticket 1 ──► request A in flight            │
//! │  type "cok"  ──► begin() = ticket 2 ──► request B in flight            │
//! │                                                                         │
//! │  response B arrives ──► accepts(ticket 2)? yes ──► apply results       │
//! │  response A arrives ──► accepts(ticket 1)? no  ──► drop silently       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::sync::atomic::{AtomicU64, Ordering};

use tracing::debug;

/// Ticket identifying one lookup request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LookupTicket(u64);

/// Issues monotonically increasing tickets and accepts only the latest.
///
/// One sequencer per lookup surface (one for the product search box, one
/// for the customer search box) - superseding is per-surface, a product
/// search never invalidates a customer search.
#[derive(Debug, Default)]
pub struct LookupSequencer {
    latest: AtomicU64,
}

impl LookupSequencer {
    /// Creates a sequencer with no lookups issued.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a new lookup, superseding all earlier ones.
    pub fn begin(&self) -> LookupTicket {
        let ticket = self.latest.fetch_add(1, Ordering::Relaxed) + 1;
        LookupTicket(ticket)
    }

    /// Checks whether a response for `ticket` should be applied.
    ///
    /// True only if no newer lookup has been issued since. Call this when
    /// the response arrives, immediately before applying it.
    pub fn accepts(&self, ticket: LookupTicket) -> bool {
        let current = self.latest.load(Ordering::Relaxed);
        let accepted = ticket.0 == current;
        if !accepted {
            debug!(ticket = ticket.0, current, "dropping superseded lookup response");
        }
        accepted
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_lookup_is_accepted() {
        let seq = LookupSequencer::new();
        let t = seq.begin();
        assert!(seq.accepts(t));
        // Accepting is not consuming; a re-render can check again.
        assert!(seq.accepts(t));
    }

    #[test]
    fn test_newer_lookup_supersedes_older() {
        let seq = LookupSequencer::new();
        let older = seq.begin();
        let newer = seq.begin();

        // Out-of-order arrival: the newer response wins regardless.
        assert!(seq.accepts(newer));
        assert!(!seq.accepts(older));
    }

    #[test]
    fn test_late_response_after_many_lookups() {
        let seq = LookupSequencer::new();
        let first = seq.begin();
        for _ in 0..10 {
            seq.begin();
        }
        assert!(!seq.accepts(first));
    }

    #[test]
    fn test_sequencers_are_independent() {
        let products = LookupSequencer::new();
        let customers = LookupSequencer::new();

        let p = products.begin();
        customers.begin();
        // A customer search never invalidates a product search.
        assert!(products.accepts(p));
    }
}
