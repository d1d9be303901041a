use serde_json::Value;

/// Authentication state of a single request.
///
/// Written by [`AuthMiddleware`](crate::middleware::auth::AuthMiddleware)
/// into the request extensions and handed explicitly to the
/// authentication resolver. Never shared between requests.
#[derive(Debug, Clone, Default)]
pub struct SecurityContext {
    authentication: Option<Authentication>,
}

impl SecurityContext {
    /// No credentials were presented.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn with_authentication(authentication: Authentication) -> Self {
        Self {
            authentication: Some(authentication),
        }
    }

    pub fn authentication(&self) -> Option<&Authentication> {
        self.authentication.as_ref()
    }
}

/// Credentials presented with a request and whether they were accepted.
///
/// The principal is kept as the raw claim payload; its shape is only
/// checked when an identity is resolved from it.
#[derive(Debug, Clone)]
pub struct Authentication {
    authenticated: bool,
    principal: Value,
}

impl Authentication {
    pub fn new(authenticated: bool, principal: Value) -> Self {
        Self {
            authenticated,
            principal,
        }
    }

    /// Credentials that passed verification.
    pub fn verified(principal: Value) -> Self {
        Self::new(true, principal)
    }

    /// Credentials were presented but failed verification.
    pub fn rejected() -> Self {
        Self::new(false, Value::Null)
    }

    pub fn is_authenticated(&self) -> bool {
        self.authenticated
    }

    pub fn principal(&self) -> &Value {
        &self.principal
    }
}
