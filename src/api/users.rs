use actix_web::{web, HttpResponse};
use crate::{
    auth::SecurityContext,
    models::UserInfo,
    services::CurrentUserResolver,
    state::AppState,
};

#[utoipa::path(
    get,
    path = "/api/v1/users/me",
    tag = "Users",
    responses(
        (status = 200, description = "Current user", body = UserInfo),
        (status = 401, description = "User not logged in")
    ),
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn get_me(
    state: web::Data<AppState>,
    context: Option<web::ReqData<SecurityContext>>,
) -> HttpResponse {
    log::info!("👤 GET /users/me");

    match state.user_service(super::security_context(context)).get_current_user().await {
        Ok(user) => {
            log::info!("✅ Current user: {}", user.user_id);
            HttpResponse::Ok().json(serde_json::json!({
                "success": true,
                "user": UserInfo::from(user)
            }))
        }
        Err(e) => {
            log::warn!("❌ Failed to resolve current user: {}", e);
            super::service_error_response(&e)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::{configure, test_support};
    use crate::database::{InMemoryStore, StoreWriter};
    use crate::models::User;
    use actix_web::{http::StatusCode, test, App};
    use std::sync::Arc;

    #[actix_web::test]
    async fn returns_logged_in_user() {
        let store = Arc::new(InMemoryStore::new());
        let alice = store.create_user("alice").await.unwrap();
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(test_support::state(&store)))
                .configure(configure),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/api/v1/users/me")
            .insert_header(test_support::bearer(&alice))
            .to_request();
        let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;

        assert_eq!(body["user"]["id"], alice.user_id.as_str());
        assert_eq!(body["user"]["username"], "alice");
    }

    #[actix_web::test]
    async fn token_for_deleted_user_is_unauthorized() {
        let store = Arc::new(InMemoryStore::new());
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(test_support::state(&store)))
                .configure(configure),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/api/v1/users/me")
            .insert_header(test_support::bearer(&User::new("999", "nonexistent")))
            .to_request();
        let res = test::call_service(&app, req).await;

        assert_eq!(res.status(), StatusCode::UNAUTHORIZED);
    }
}
