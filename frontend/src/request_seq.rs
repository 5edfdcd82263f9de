use std::cell::Cell;
use std::rc::Rc;

/// Monotonic tickets for page-level fetches. In-flight requests are never
/// cancelled, so a slow response can arrive after a newer request was issued;
/// a response is applied only while its ticket is still the latest.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RequestSeq {
    latest: Rc<Cell<u64>>,
}

impl RequestSeq {
    pub fn new() -> Self {
        Self::default()
    }

    /// Claim the next ticket; every previously issued ticket goes stale.
    pub fn issue(&self) -> u64 {
        let next = self.latest.get() + 1;
        self.latest.set(next);
        next
    }

    pub fn is_current(&self, ticket: u64) -> bool {
        self.latest.get() == ticket
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn newer_tickets_invalidate_older_ones() {
        let seq = RequestSeq::new();
        let first = seq.issue();
        assert!(seq.is_current(first));

        let second = seq.issue();
        assert!(!seq.is_current(first));
        assert!(seq.is_current(second));
    }

    #[test]
    fn clones_share_one_counter() {
        let seq = RequestSeq::new();
        let clone = seq.clone();
        let ticket = seq.issue();
        assert!(clone.is_current(ticket));
        clone.issue();
        assert!(!seq.is_current(ticket));
    }
}
