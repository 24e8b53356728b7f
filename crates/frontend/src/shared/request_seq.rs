//! Защита от гонок ответов: запросы списка помечаются монотонным номером,
//! устаревшие ответы отбрасываются.
//!
//! Летящие запросы не отменяются; быстрый ввод в поиск может получить ответы
//! не в порядке отправки, и без номера последний пришедший затёр бы более
//! новый результат.

use std::sync::atomic::{AtomicU64, Ordering};

#[derive(Debug, Default)]
pub struct RequestSequencer {
    issued: AtomicU64,
    committed: AtomicU64,
}

impl RequestSequencer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Tag a new outgoing request.
    pub fn begin(&self) -> u64 {
        self.issued.fetch_add(1, Ordering::Relaxed) + 1
    }

    /// True when the response for `tag` is still current and its payload may
    /// be applied. A response older than one already applied is stale.
    pub fn try_commit(&self, tag: u64) -> bool {
        let mut current = self.committed.load(Ordering::Acquire);
        loop {
            if tag <= current {
                return false;
            }
            match self.committed.compare_exchange(
                current,
                tag,
                Ordering::AcqRel,
                Ordering::Acquire,
            ) {
                Ok(_) => return true,
                Err(actual) => current = actual,
            }
        }
    }

    /// True when a newer response has already been applied for `tag`.
    /// A failure of a superseded request is not worth reporting.
    pub fn is_stale(&self, tag: u64) -> bool {
        tag <= self.committed.load(Ordering::Acquire)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tags_are_monotonic() {
        let seq = RequestSequencer::new();
        assert_eq!(seq.begin(), 1);
        assert_eq!(seq.begin(), 2);
        assert_eq!(seq.begin(), 3);
    }

    #[test]
    fn test_in_order_responses_commit() {
        let seq = RequestSequencer::new();
        let t1 = seq.begin();
        let t2 = seq.begin();
        assert!(seq.try_commit(t1));
        assert!(seq.try_commit(t2));
    }

    #[test]
    fn test_superseded_failure_is_stale() {
        // the first load fails (times out) after a newer one already
        // committed; its tag reads as stale so no error is surfaced
        let seq = RequestSequencer::new();
        let t1 = seq.begin();
        let t2 = seq.begin();
        assert!(!seq.is_stale(t1));
        assert!(seq.try_commit(t2));
        assert!(seq.is_stale(t1));
        assert!(seq.is_stale(t2));
    }

    #[test]
    fn test_stale_response_is_discarded() {
        // two search edits ("a" then "ab"); the response for "a" arrives
        // after the one for "ab" and must not be applied
        let seq = RequestSequencer::new();
        let t_a = seq.begin();
        let t_ab = seq.begin();
        assert!(seq.try_commit(t_ab));
        assert!(!seq.try_commit(t_a));
    }
}
