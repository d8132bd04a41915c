//! Element id generation.
//!
//! Show cards, radio/checkbox controls and toggles need element ids to link
//! a button or label to its target. An [`IdSource`] proposes ids; the render
//! context keeps track of what it has issued and guarantees uniqueness within
//! one pass.
//!
//! Sources are stateless. The pass owns the counter and hands each request's
//! sequence number (starting at 1) to the source, so one source can serve
//! any number of passes and concurrent renders.

/// Supplies candidate element ids.
pub trait IdSource: Send + Sync {
    /// Returns a candidate id for the `sequence`-th request of a pass.
    fn next_id(&self, sequence: u64) -> String;
}

/// Random ids: `ac-` followed by 8 hex characters of a v4 UUID.
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomIds;

impl IdSource for RandomIds {
    fn next_id(&self, _sequence: u64) -> String {
        let uuid = uuid::Uuid::new_v4().simple().to_string();
        format!("ac-{}", &uuid[..8])
    }
}

/// Counting ids (`ac-1`, `ac-2`, ...) for reproducible output.
///
/// Every pass starts again at `ac-1`, so rendering the same card twice
/// through one renderer yields identical trees.
#[derive(Debug, Clone, Copy, Default)]
pub struct SequentialIds;

impl SequentialIds {
    pub fn new() -> Self {
        Self
    }
}

impl IdSource for SequentialIds {
    fn next_id(&self, sequence: u64) -> String {
        format!("ac-{}", sequence)
    }
}

impl<F> IdSource for F
where
    F: Fn(u64) -> String + Send + Sync,
{
    fn next_id(&self, sequence: u64) -> String {
        (self)(sequence)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_random_id_shape() {
        let id = RandomIds.next_id(1);
        assert_eq!(id.len(), 11);
        assert!(id.starts_with("ac-"));
        assert!(id[3..].chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn test_sequential_ids_follow_sequence() {
        let ids = SequentialIds::new();
        assert_eq!(ids.next_id(1), "ac-1");
        assert_eq!(ids.next_id(2), "ac-2");
        assert_eq!(ids.next_id(1), "ac-1");
    }

    #[test]
    fn test_closure_source() {
        let source = |n: u64| format!("card-{}", n * 10);
        assert_eq!(source.next_id(3), "card-30");
    }
}
