use serde::{Deserialize, Serialize};

/// Undirected friendship between two distinct users.
///
/// Stored once per pair with the ids in lexicographic order, so
/// `between(a, b) == between(b, a)` and a single row answers lookups
/// from either side.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq, Hash)]
pub struct Friendship {
    pub user_a: String,
    pub user_b: String,
}

impl Friendship {
    /// Returns `None` for a self-pair.
    pub fn between(first: &str, second: &str) -> Option<Self> {
        if first == second {
            return None;
        }

        let (user_a, user_b) = if first < second {
            (first, second)
        } else {
            (second, first)
        };

        Some(Self {
            user_a: user_a.to_string(),
            user_b: user_b.to_string(),
        })
    }

    pub fn involves(&self, user_id: &str) -> bool {
        self.user_a == user_id || self.user_b == user_id
    }

    /// The other side of the pair, if `user_id` is part of it.
    pub fn other(&self, user_id: &str) -> Option<&str> {
        if self.user_a == user_id {
            Some(&self.user_b)
        } else if self.user_b == user_id {
            Some(&self.user_a)
        } else {
            None
        }
    }
}
