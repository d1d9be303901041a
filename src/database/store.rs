use crate::models::{Trip, User};
use crate::utils::AppError;
use async_trait::async_trait;

/// Users and the friendship relation.
#[async_trait]
pub trait IdentityStore: Send + Sync {
    async fn find_by_id(&self, user_id: &str) -> Result<Option<User>, AppError>;

    async fn find_by_username(&self, username: &str) -> Result<Option<User>, AppError>;

    /// Friends of `user_id`, whichever side of the stored pair it is on.
    async fn friends_of(&self, user_id: &str) -> Result<Vec<User>, AppError>;
}

/// Trips and their assignment to users.
#[async_trait]
pub trait TripStore: Send + Sync {
    /// Trips assigned to `user_id`, in the store's natural order.
    async fn trips_assigned_to(&self, user_id: &str) -> Result<Vec<Trip>, AppError>;
}

/// Write side used by seeding and tests. The services never write.
#[async_trait]
pub trait StoreWriter: IdentityStore + TripStore {
    async fn create_user(&self, username: &str) -> Result<User, AppError>;

    /// Persists a trip; the store assigns its id.
    async fn create_trip(&self, name: &str) -> Result<Trip, AppError>;

    /// Records a friendship between two distinct, existing users.
    /// Recording an existing friendship again is a no-op.
    async fn make_friends(&self, user_id: &str, friend_id: &str) -> Result<(), AppError>;

    /// Assigns an existing trip to an existing user. Idempotent.
    async fn assign_trip(&self, user_id: &str, trip_id: &str) -> Result<(), AppError>;
}
