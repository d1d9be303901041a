use crate::{
    database::{IdentityStore, TripStore},
    models::{Trip, User},
    services::CurrentUserResolver,
    utils::{AppError, ServiceError},
};
use std::sync::Arc;

/// Decides which trips the current user may see.
///
/// Trips of a target user are visible only to the target's friends.
/// Anyone else, the target included unless they are recorded as their own
/// friend, gets an empty list rather than an error.
pub struct TripService<C> {
    trip_store: Arc<dyn TripStore>,
    identity_store: Arc<dyn IdentityStore>,
    current_user: C,
}

impl<C: CurrentUserResolver> TripService<C> {
    pub fn new(
        trip_store: Arc<dyn TripStore>,
        identity_store: Arc<dyn IdentityStore>,
        current_user: C,
    ) -> Self {
        Self {
            trip_store,
            identity_store,
            current_user,
        }
    }

    pub async fn get_trips_by_user(&self, target: &User) -> Result<Vec<Trip>, ServiceError> {
        self.get_trips_by_user_id(&target.user_id).await
    }

    /// Same decision as [`get_trips_by_user`](Self::get_trips_by_user), keyed
    /// by id. An unknown id is never anyone's friend and yields an empty list.
    pub async fn get_trips_by_user_id(&self, target_id: &str) -> Result<Vec<Trip>, ServiceError> {
        let logged_user = self.current_user.get_current_user().await?;

        if !self.is_friend(&logged_user.user_id, target_id).await? {
            log::debug!("🔒 User {} is not a friend of {}", logged_user.user_id, target_id);
            return Ok(Vec::new());
        }

        Ok(self.trip_store.trips_assigned_to(target_id).await?)
    }

    async fn is_friend(&self, actor_id: &str, target_id: &str) -> Result<bool, AppError> {
        let friends = self.identity_store.friends_of(actor_id).await?;
        Ok(friends.iter().any(|friend| friend.user_id == target_id))
    }
}
