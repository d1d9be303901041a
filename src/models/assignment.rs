use serde::{Deserialize, Serialize};

/// Links a trip to a user who took it. Many-to-many.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq, Hash)]
pub struct Assignment {
    pub user_id: String,
    pub trip_id: String,
}

impl Assignment {
    pub fn new(user_id: impl Into<String>, trip_id: impl Into<String>) -> Self {
        Self {
            user_id: user_id.into(),
            trip_id: trip_id.into(),
        }
    }
}
