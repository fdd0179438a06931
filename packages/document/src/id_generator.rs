use chrono::Utc;

/// Sequential id generator for document entries.
///
/// Produces `{prefix}-{millis}-{count}` tokens: a time-derived seed
/// plus a counter, so ids are unique within a batch and stable enough
/// across batches. Callers hold one generator per batch of inserts;
/// the editor itself never generates ids (callers supply them, which
/// keeps mutations deterministic and testable).
#[derive(Debug, Clone)]
pub struct IdGenerator {
    prefix: String,
    seed: i64,
    count: u32,
}

impl IdGenerator {
    pub fn new(prefix: &str) -> Self {
        Self::from_parts(prefix, Utc::now().timestamp_millis())
    }

    /// Fixed seed, for deterministic ids in tests.
    pub fn from_parts(prefix: &str, seed: i64) -> Self {
        Self {
            prefix: prefix.to_string(),
            seed,
            count: 0,
        }
    }

    /// Generate the next sequential id.
    pub fn new_id(&mut self) -> String {
        self.count += 1;
        format!("{}-{}-{}", self.prefix, self.seed, self.count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_are_unique_within_a_batch() {
        let mut ids = IdGenerator::from_parts("exp", 1700000000000);
        let first = ids.new_id();
        let second = ids.new_id();

        assert_eq!(first, "exp-1700000000000-1");
        assert_eq!(second, "exp-1700000000000-2");
        assert_ne!(first, second);
    }

    #[test]
    fn fresh_generators_restart_the_counter() {
        let mut a = IdGenerator::from_parts("edu", 42);
        let mut b = IdGenerator::from_parts("edu", 43);

        assert_ne!(a.new_id(), b.new_id());
    }
}
