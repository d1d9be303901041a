use crate::{
    auth::{verify_token, Authentication, SecurityContext},
    state::AppState,
};
use actix_web::{
    dev::{forward_ready, Service, ServiceRequest, ServiceResponse, Transform},
    http::header::{HeaderValue, AUTHORIZATION},
    web, Error, HttpMessage,
};
use futures::future::LocalBoxFuture;
use std::future::{ready, Ready};

/// Builds the [`SecurityContext`] of each request from its bearer token.
///
/// Never rejects a request: a missing header yields an empty context, a
/// malformed or invalid token yields a rejected authentication. Handlers
/// decide what an unauthenticated caller gets.
pub struct AuthMiddleware;

impl<S, B> Transform<S, ServiceRequest> for AuthMiddleware
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type InitError = ();
    type Transform = AuthMiddlewareService<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(AuthMiddlewareService { service }))
    }
}

pub struct AuthMiddlewareService<S> {
    service: S,
}

impl<S, B> Service<ServiceRequest> for AuthMiddlewareService<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let context = match req.headers().get(AUTHORIZATION) {
            Some(header_value) => SecurityContext::with_authentication(authenticate(&req, header_value)),
            None => SecurityContext::empty(),
        };

        req.extensions_mut().insert(context);

        let fut = self.service.call(req);
        Box::pin(async move {
            let res = fut.await?;
            Ok(res)
        })
    }
}

fn authenticate(req: &ServiceRequest, header_value: &HeaderValue) -> Authentication {
    let token = match header_value.to_str().ok().and_then(|v| v.strip_prefix("Bearer ")) {
        Some(token) => token,
        None => {
            log::warn!("❌ Invalid token format");
            return Authentication::rejected();
        }
    };

    let Some(state) = req.app_data::<web::Data<AppState>>() else {
        log::error!("❌ AppState not registered, cannot verify tokens");
        return Authentication::rejected();
    };

    match verify_token(state.jwt(), token) {
        Ok(claims) => Authentication::verified(claims),
        Err(e) => {
            log::warn!("❌ Invalid token: {}", e);
            Authentication::rejected()
        }
    }
}
