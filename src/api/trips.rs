use actix_web::{web, HttpResponse};
use crate::{
    auth::SecurityContext,
    models::TripListResponse,
    state::AppState,
};

/// GET /api/v1/users/{user_id}/trips - Trips of a user, visible to friends only
///
/// Not being a friend is not an error: the caller gets an empty list.
#[utoipa::path(
    get,
    path = "/api/v1/users/{user_id}/trips",
    tag = "Trips",
    params(
        ("user_id" = String, Path, description = "Id of the user whose trips are requested")
    ),
    responses(
        (status = 200, description = "Trips visible to the current user (empty when not friends)", body = TripListResponse),
        (status = 401, description = "User not logged in")
    ),
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn get_user_trips(
    state: web::Data<AppState>,
    context: Option<web::ReqData<SecurityContext>>,
    path: web::Path<String>,
) -> HttpResponse {
    let target_id = path.into_inner();

    log::info!("🧳 GET /users/{}/trips", target_id);

    match state
        .trip_service(super::security_context(context))
        .get_trips_by_user_id(&target_id)
        .await
    {
        Ok(trips) => {
            log::info!("✅ Returning {} trips of user {}", trips.len(), target_id);
            HttpResponse::Ok().json(TripListResponse::from(trips))
        }
        Err(e) => {
            log::warn!("❌ Failed to get trips of user {}: {}", target_id, e);
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
    use actix_web::{dev::ServiceResponse, http::StatusCode, test, App};
    use std::sync::Arc;

    struct World {
        store: Arc<InMemoryStore>,
        alice: User,
        bob: User,
        charlie: User,
        diana: User,
    }

    async fn world() -> World {
        let store = Arc::new(InMemoryStore::new());
        let alice = store.create_user("alice").await.unwrap();
        let bob = store.create_user("bob").await.unwrap();
        let charlie = store.create_user("charlie").await.unwrap();
        let diana = store.create_user("diana").await.unwrap();

        store.make_friends(&alice.user_id, &bob.user_id).await.unwrap();
        store.make_friends(&bob.user_id, &diana.user_id).await.unwrap();

        for (user, name) in [
            (&bob, "Trip to Paris"),
            (&bob, "London Business Trip"),
            (&charlie, "Trip to Paris"),
            (&diana, "Tokyo Adventure"),
        ] {
            let trip = store.create_trip(name).await.unwrap();
            store.assign_trip(&user.user_id, trip.id.as_deref().unwrap()).await.unwrap();
        }

        World { store, alice, bob, charlie, diana }
    }

    async fn get_trips(world: &World, as_user: Option<&User>, target: &str) -> ServiceResponse {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(test_support::state(&world.store)))
                .configure(configure),
        )
        .await;

        let mut req = test::TestRequest::get().uri(&format!("/api/v1/users/{}/trips", target));
        if let Some(user) = as_user {
            req = req.insert_header(test_support::bearer(user));
        }
        test::call_service(&app, req.to_request()).await
    }

    async fn trip_names(res: ServiceResponse) -> Vec<String> {
        assert_eq!(res.status(), StatusCode::OK);
        let body: TripListResponse = test::read_body_json(res).await;
        assert!(body.success);
        assert_eq!(body.total, body.trips.len());

        let mut names: Vec<String> = body.trips.into_iter().map(|trip| trip.name).collect();
        names.sort();
        names
    }

    #[actix_web::test]
    async fn friend_sees_trips() {
        let w = world().await;
        let res = get_trips(&w, Some(&w.alice), &w.bob.user_id).await;

        assert_eq!(trip_names(res).await, vec!["London Business Trip", "Trip to Paris"]);
    }

    #[actix_web::test]
    async fn non_friend_gets_empty_list() {
        let w = world().await;
        let res = get_trips(&w, Some(&w.alice), &w.charlie.user_id).await;

        assert!(trip_names(res).await.is_empty());
    }

    #[actix_web::test]
    async fn friend_of_friend_gets_empty_list() {
        let w = world().await;
        let res = get_trips(&w, Some(&w.alice), &w.diana.user_id).await;

        assert!(trip_names(res).await.is_empty());
    }

    #[actix_web::test]
    async fn missing_token_is_unauthorized() {
        let w = world().await;
        let res = get_trips(&w, None, &w.bob.user_id).await;

        assert_eq!(res.status(), StatusCode::UNAUTHORIZED);
        let body: serde_json::Value = test::read_body_json(res).await;
        assert_eq!(body["success"], false);
    }

    #[actix_web::test]
    async fn token_for_unknown_user_is_unauthorized() {
        let w = world().await;
        let ghost = User::new("999", "nonexistent");
        let res = get_trips(&w, Some(&ghost), &w.bob.user_id).await;

        assert_eq!(res.status(), StatusCode::UNAUTHORIZED);
    }

    #[actix_web::test]
    async fn unknown_target_is_an_empty_list() {
        let w = world().await;
        let res = get_trips(&w, Some(&w.alice), "12345").await;

        assert!(trip_names(res).await.is_empty());
    }
}
