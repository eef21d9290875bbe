//! Fixture data for the conformance suite.
//!
//! Seeded posts come from a [`FixtureSource`] so scenarios stay
//! deterministic: the default source derives every field from the fixture
//! index and fixed word lists, and the same index always yields the same
//! post. A randomized source can be plugged into the harness without
//! touching any scenario.

use quill_persistence::{Author, NewPost};

/// Supplies synthetic blog posts for seeding.
pub trait FixtureSource: Send + Sync {
    /// Returns the `n`th synthetic post.
    ///
    /// Implementations must be pure: the same index always yields the same
    /// post.
    fn post(&self, n: usize) -> NewPost;

    /// Returns the first `count` posts as a seed batch.
    fn batch(&self, count: usize) -> Vec<NewPost> {
        (0..count).map(|n| self.post(n)).collect()
    }
}

const FIRST_NAMES: &[&str] = &[
    "Ada", "Grace", "Edsger", "Barbara", "Donald", "Frances", "Alan", "Radia",
];

const LAST_NAMES: &[&str] = &[
    "Lovelace", "Hopper", "Dijkstra", "Liskov", "Knuth", "Allen", "Turing", "Perlman",
];

const TOPICS: &[&str] = &[
    "compilers", "databases", "networks", "typography", "gardening", "sourdough",
];

/// Word-list backed fixture source.
///
/// Titles carry the fixture index, so every post in a seed batch is
/// distinguishable from the others.
#[derive(Debug, Clone, Copy, Default)]
pub struct SequentialFixtures;

impl FixtureSource for SequentialFixtures {
    fn post(&self, n: usize) -> NewPost {
        let topic = TOPICS[n % TOPICS.len()];
        NewPost {
            author: Author::new(
                FIRST_NAMES[n % FIRST_NAMES.len()],
                LAST_NAMES[n % LAST_NAMES.len()],
            ),
            title: format!("On {}, part {}", topic, n + 1),
            content: format!(
                "Entry {} in a running series of notes about {}.",
                n + 1,
                topic
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_index_yields_same_post() {
        let fixtures = SequentialFixtures;
        let a = fixtures.post(4);
        let b = fixtures.post(4);

        assert_eq!(a.title, b.title);
        assert_eq!(a.content, b.content);
        assert_eq!(a.author, b.author);
    }

    #[test]
    fn test_batch_has_distinct_titles() {
        let batch = SequentialFixtures.batch(11);
        let titles: std::collections::HashSet<_> =
            batch.iter().map(|p| p.title.clone()).collect();

        assert_eq!(batch.len(), 11);
        assert_eq!(titles.len(), 11);
    }

    #[test]
    fn test_posts_are_well_formed() {
        for post in SequentialFixtures.batch(20) {
            assert!(!post.title.trim().is_empty());
            assert!(!post.author.first_name.is_empty());
            assert!(!post.author.last_name.is_empty());
        }
    }
}
