use crate::auth::{Authentication, SecurityContext};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// No usable authenticated identity.
///
/// Covers a missing authentication, one that failed verification and a
/// principal of unexpected shape. Callers cannot tell these apart.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[error("No authenticated user")]
pub struct NotAuthenticated;

/// Minimal identity carried by an active session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthenticatedIdentity {
    pub id: String,
    pub username: String,
}

/// The only principal shape we accept: a token subject plus a username.
#[derive(Debug, Deserialize)]
struct UserPrincipal {
    sub: String,
    username: String,
}

impl TryFrom<&Authentication> for AuthenticatedIdentity {
    type Error = NotAuthenticated;

    fn try_from(authentication: &Authentication) -> Result<Self, Self::Error> {
        if !authentication.is_authenticated() {
            return Err(NotAuthenticated);
        }

        let principal = UserPrincipal::deserialize(authentication.principal())
            .map_err(|_| NotAuthenticated)?;

        if principal.sub.is_empty() {
            return Err(NotAuthenticated);
        }

        Ok(AuthenticatedIdentity {
            id: principal.sub,
            username: principal.username,
        })
    }
}

pub trait AuthenticationResolver: Send + Sync {
    fn resolve_current_identity(&self) -> Result<AuthenticatedIdentity, NotAuthenticated>;
}

/// Resolves the identity from the security context of the current request.
#[derive(Debug, Clone)]
pub struct SecurityContextResolver {
    context: SecurityContext,
}

impl SecurityContextResolver {
    pub fn new(context: SecurityContext) -> Self {
        Self { context }
    }
}

impl AuthenticationResolver for SecurityContextResolver {
    fn resolve_current_identity(&self) -> Result<AuthenticatedIdentity, NotAuthenticated> {
        let authentication = self.context.authentication().ok_or(NotAuthenticated)?;
        AuthenticatedIdentity::try_from(authentication)
    }
}
