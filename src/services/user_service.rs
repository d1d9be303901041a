use crate::{
    auth::AuthenticationResolver,
    database::IdentityStore,
    models::User,
    utils::ServiceError,
};
use async_trait::async_trait;
use std::sync::Arc;

/// Loads the domain user behind the current request.
#[async_trait]
pub trait CurrentUserResolver: Send + Sync {
    async fn get_current_user(&self) -> Result<User, ServiceError>;
}

pub struct UserService<A> {
    identity_store: Arc<dyn IdentityStore>,
    authentication: A,
}

impl<A: AuthenticationResolver> UserService<A> {
    pub fn new(identity_store: Arc<dyn IdentityStore>, authentication: A) -> Self {
        Self {
            identity_store,
            authentication,
        }
    }
}

#[async_trait]
impl<A: AuthenticationResolver> CurrentUserResolver for UserService<A> {
    /// An authenticated identity without a stored user is reported as
    /// `UserNotLoggedIn`, same as no identity at all.
    async fn get_current_user(&self) -> Result<User, ServiceError> {
        let identity = self
            .authentication
            .resolve_current_identity()
            .map_err(|_| ServiceError::UserNotLoggedIn)?;

        match self.identity_store.find_by_id(&identity.id).await? {
            Some(user) => Ok(user),
            None => {
                log::warn!("⚠️ Authenticated user {} ({}) not found in store", identity.id, identity.username);
                Err(ServiceError::UserNotLoggedIn)
            }
        }
    }
}
