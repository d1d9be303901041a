use actix_web::{web, HttpResponse};
use crate::{
    auth::generate_jwt,
    database::IdentityStore,
    models::UserInfo,
    state::AppState,
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, utoipa::ToSchema)]
pub struct DevTokenRequest {
    pub user_id: String,
}

#[derive(Debug, Serialize, Deserialize, utoipa::ToSchema)]
pub struct DevTokenResponse {
    pub success: bool,
    pub token: String,
    pub user: UserInfo,
}

/// Dev token (for development only)
///
/// Issues a token for any existing user without checking credentials.
/// Only mounted when `DEV_TOKENS_ENABLED=true`.
#[utoipa::path(
    post,
    path = "/api/v1/auth/dev-token",
    tag = "Auth",
    request_body = DevTokenRequest,
    responses(
        (status = 200, description = "Token issued", body = DevTokenResponse),
        (status = 404, description = "User not found")
    )
)]
pub async fn dev_token(
    state: web::Data<AppState>,
    request: web::Json<DevTokenRequest>,
) -> HttpResponse {
    log::info!("🔧 POST /auth/dev-token - user_id: {}", request.user_id);

    let user = match state.identity_store().find_by_id(&request.user_id).await {
        Ok(Some(user)) => user,
        Ok(None) => {
            log::warn!("❌ Dev token requested for unknown user {}", request.user_id);
            return HttpResponse::NotFound().json(serde_json::json!({
                "success": false,
                "error": format!("User {} not found", request.user_id)
            }));
        }
        Err(e) => {
            log::error!("❌ Failed to load user {}: {}", request.user_id, e);
            return HttpResponse::InternalServerError().json(serde_json::json!({
                "success": false,
                "error": e.to_string()
            }));
        }
    };

    match generate_jwt(state.jwt(), &user) {
        Ok(token) => {
            log::info!("✅ Dev token issued for {}", user.username);
            HttpResponse::Ok().json(DevTokenResponse {
                success: true,
                token,
                user: UserInfo::from(user),
            })
        }
        Err(e) => {
            log::error!("❌ Failed to generate token: {}", e);
            HttpResponse::InternalServerError().json(serde_json::json!({
                "success": false,
                "error": format!("Failed to generate token: {}", e)
            }))
        }
    }
}
