use crate::{
    auth::{JwtSettings, SecurityContext, SecurityContextResolver},
    database::{IdentityStore, TripStore},
    services::{TripService, UserService},
};
use std::sync::Arc;

/// Shared application state, registered as `web::Data<AppState>`.
#[derive(Clone)]
pub struct AppState {
    identity_store: Arc<dyn IdentityStore>,
    trip_store: Arc<dyn TripStore>,
    jwt: JwtSettings,
}

impl AppState {
    pub fn new<S>(store: Arc<S>, jwt: JwtSettings) -> Self
    where
        S: IdentityStore + TripStore + 'static,
    {
        Self {
            identity_store: store.clone(),
            trip_store: store,
            jwt,
        }
    }

    pub fn identity_store(&self) -> &dyn IdentityStore {
        self.identity_store.as_ref()
    }

    pub fn jwt(&self) -> &JwtSettings {
        &self.jwt
    }

    /// User service bound to the security context of one request.
    pub fn user_service(&self, context: SecurityContext) -> UserService<SecurityContextResolver> {
        UserService::new(self.identity_store.clone(), SecurityContextResolver::new(context))
    }

    pub fn trip_service(
        &self,
        context: SecurityContext,
    ) -> TripService<UserService<SecurityContextResolver>> {
        TripService::new(
            self.trip_store.clone(),
            self.identity_store.clone(),
            self.user_service(context),
        )
    }
}
