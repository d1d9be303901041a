use serde::{Deserialize, Serialize};

/// A registered user as stored in the `users` collection.
///
/// Friendships are not attached here; they are looked up through
/// [`IdentityStore::friends_of`](crate::database::IdentityStore::friends_of).
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct User {
    pub user_id: String,  // PRIMARY IDENTIFIER
    pub username: String,
}

impl User {
    pub fn new(user_id: impl Into<String>, username: impl Into<String>) -> Self {
        Self {
            user_id: user_id.into(),
            username: username.into(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, utoipa::ToSchema)]
pub struct UserInfo {
    pub id: String,
    pub username: String,
}

impl From<User> for UserInfo {
    fn from(user: User) -> Self {
        Self {
            id: user.user_id,
            username: user.username,
        }
    }
}
