use serde_json::json;
use std::sync::Arc;
use trip_service::{
    auth::{Authentication, JwtSettings, SecurityContext},
    database::{IdentityStore, InMemoryStore, StoreWriter},
    models::User,
    state::AppState,
    utils::ServiceError,
};

fn jwt() -> JwtSettings {
    JwtSettings {
        secret: "integration-secret".to_string(),
        issuer: "trip-service".to_string(),
        audience: "trip-api".to_string(),
        ttl_hours: 1,
    }
}

fn session_of(user: &User) -> SecurityContext {
    SecurityContext::with_authentication(Authentication::verified(json!({
        "sub": user.user_id,
        "username": user.username,
    })))
}

async fn assign(store: &InMemoryStore, user: &User, name: &str) {
    let trip = store.create_trip(name).await.unwrap();
    store
        .assign_trip(&user.user_id, trip.id.as_deref().unwrap())
        .await
        .unwrap();
}

fn sorted_names(trips: Vec<trip_service::models::Trip>) -> Vec<String> {
    let mut names: Vec<String> = trips.into_iter().map(|trip| trip.name).collect();
    names.sort();
    names
}

#[tokio::test]
async fn alice_sees_bobs_trips_but_not_charlies() {
    let store = Arc::new(InMemoryStore::new());
    let alice = store.create_user("alice").await.unwrap();
    let bob = store.create_user("bob").await.unwrap();
    let charlie = store.create_user("charlie").await.unwrap();
    assert_eq!((alice.user_id.as_str(), bob.user_id.as_str(), charlie.user_id.as_str()), ("1", "2", "3"));

    store.make_friends(&alice.user_id, &bob.user_id).await.unwrap();
    assign(&store, &bob, "Trip to Paris").await;
    assign(&store, &bob, "London Business Trip").await;
    assign(&store, &charlie, "Trip to Paris").await;

    let state = AppState::new(store.clone(), jwt());
    let service = state.trip_service(session_of(&alice));

    assert_eq!(
        sorted_names(service.get_trips_by_user(&bob).await.unwrap()),
        vec!["London Business Trip", "Trip to Paris"]
    );
    assert!(service.get_trips_by_user(&charlie).await.unwrap().is_empty());
}

#[tokio::test]
async fn no_friends_of_friends() {
    let store = Arc::new(InMemoryStore::new());
    let alice = store.create_user("alice").await.unwrap();
    let bob = store.create_user("bob").await.unwrap();
    let diana = store.create_user("diana").await.unwrap();

    store.make_friends(&alice.user_id, &bob.user_id).await.unwrap();
    store.make_friends(&bob.user_id, &diana.user_id).await.unwrap();
    assign(&store, &diana, "Tokyo Adventure").await;

    let state = AppState::new(store.clone(), jwt());

    assert!(state
        .trip_service(session_of(&alice))
        .get_trips_by_user(&diana)
        .await
        .unwrap()
        .is_empty());
    assert_eq!(
        sorted_names(state.trip_service(session_of(&bob)).get_trips_by_user(&diana).await.unwrap()),
        vec!["Tokyo Adventure"]
    );
}

#[tokio::test]
async fn friendship_reads_the_same_from_both_sides() {
    let store = Arc::new(InMemoryStore::new());
    let users = [
        store.create_user("alice").await.unwrap(),
        store.create_user("bob").await.unwrap(),
        store.create_user("charlie").await.unwrap(),
        store.create_user("diana").await.unwrap(),
    ];
    store.make_friends(&users[1].user_id, &users[0].user_id).await.unwrap();
    store.make_friends(&users[2].user_id, &users[3].user_id).await.unwrap();

    for a in &users {
        for b in &users {
            let a_has_b = store
                .friends_of(&a.user_id)
                .await
                .unwrap()
                .iter()
                .any(|friend| friend.user_id == b.user_id);
            let b_has_a = store
                .friends_of(&b.user_id)
                .await
                .unwrap()
                .iter()
                .any(|friend| friend.user_id == a.user_id);
            assert_eq!(a_has_b, b_has_a, "{} / {}", a.username, b.username);
        }
    }
}

#[tokio::test]
async fn own_trips_need_self_friendship() {
    let store = Arc::new(InMemoryStore::new());
    let alice = store.create_user("alice").await.unwrap();
    assign(&store, &alice, "Trip to Paris").await;

    let state = AppState::new(store.clone(), jwt());

    assert!(state
        .trip_service(session_of(&alice))
        .get_trips_by_user(&alice)
        .await
        .unwrap()
        .is_empty());
}

#[tokio::test]
async fn missing_or_stale_sessions_are_not_logged_in() {
    let store = Arc::new(InMemoryStore::new());
    let bob = store.create_user("bob").await.unwrap();
    let state = AppState::new(store.clone(), jwt());

    let sessions = [
        SecurityContext::empty(),
        SecurityContext::with_authentication(Authentication::rejected()),
        SecurityContext::with_authentication(Authentication::verified(json!({ "id": 1 }))),
        session_of(&User::new("999", "nonexistent")),
    ];

    for session in sessions {
        let result = state.trip_service(session).get_trips_by_user(&bob).await;
        assert!(matches!(result, Err(ServiceError::UserNotLoggedIn)));
    }
}
