pub mod auth;
pub mod health;
pub mod swagger;
pub mod trips;
pub mod users;

use crate::{auth::SecurityContext, middleware::AuthMiddleware, utils::ServiceError};
use actix_web::{web, HttpResponse};

/// Public routes. Everything under `/api/v1/users` runs behind the auth
/// middleware.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(health::health_check))
        .service(
            web::scope("/api/v1/users")
                .wrap(AuthMiddleware)
                .route("/me", web::get().to(users::get_me))
                .route("/{user_id}/trips", web::get().to(trips::get_user_trips)),
        );
}

/// Local development only: token issuing without credentials.
pub fn configure_dev_tokens(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/auth")
            .route("/dev-token", web::post().to(auth::dev_token)),
    );
}

/// Routes mounted without the auth middleware get an empty context.
fn security_context(context: Option<web::ReqData<SecurityContext>>) -> SecurityContext {
    context.map(web::ReqData::into_inner).unwrap_or_default()
}

fn service_error_response(error: &ServiceError) -> HttpResponse {
    match error {
        ServiceError::UserNotLoggedIn => HttpResponse::Unauthorized().json(serde_json::json!({
            "success": false,
            "error": error.to_string()
        })),
        ServiceError::Store(_) => HttpResponse::InternalServerError().json(serde_json::json!({
            "success": false,
            "error": error.to_string()
        })),
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use crate::{
        auth::{generate_jwt, JwtSettings},
        database::InMemoryStore,
        models::User,
        state::AppState,
    };
    use std::sync::Arc;

    pub fn jwt() -> JwtSettings {
        JwtSettings {
            secret: "api-test-secret".to_string(),
            issuer: "trip-service".to_string(),
            audience: "trip-api".to_string(),
            ttl_hours: 1,
        }
    }

    pub fn state(store: &Arc<InMemoryStore>) -> AppState {
        AppState::new(store.clone(), jwt())
    }

    pub fn bearer(user: &User) -> (&'static str, String) {
        let token = generate_jwt(&jwt(), user).expect("token");
        ("Authorization", format!("Bearer {}", token))
    }
}
