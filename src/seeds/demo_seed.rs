use crate::database::{IdentityStore, StoreWriter};
use crate::utils::AppError;

const USERS: [&str; 4] = ["alice", "bob", "charlie", "diana"];

const FRIENDSHIPS: [(&str, &str); 2] = [("alice", "bob"), ("bob", "diana")];

const TRIPS: [(&str, &str); 4] = [
    ("bob", "Trip to Paris"),
    ("bob", "London Business Trip"),
    ("charlie", "Trip to Paris"),
    ("diana", "Tokyo Adventure"),
];

/// Seed de dados de demonstração.
/// Só insere se o usuário "alice" ainda não existir.
pub async fn seed_demo_data(store: &dyn StoreWriter) {
    match store.find_by_username(USERS[0]).await {
        Ok(Some(_)) => {
            log::info!("🌱 Demo data already present, skipping seed");
            return;
        }
        Ok(None) => {}
        Err(e) => {
            log::error!("   ❌ Failed to check for demo data: {}", e);
            return;
        }
    }

    log::info!("🌱 Seeding demo users, friendships and trips...");

    match insert_demo_data(store).await {
        Ok(()) => log::info!("   ✅ Demo data seeded"),
        Err(e) => log::error!("   ❌ Failed to seed demo data: {}", e),
    }
}

async fn insert_demo_data(store: &dyn StoreWriter) -> Result<(), AppError> {
    let mut users = Vec::with_capacity(USERS.len());
    for username in USERS {
        let user = store.create_user(username).await?;
        log::info!("   👤 {} → {}", user.username, user.user_id);
        users.push(user);
    }

    let id_of = |username: &str| -> Result<String, AppError> {
        users
            .iter()
            .find(|user| user.username == username)
            .map(|user| user.user_id.clone())
            .ok_or_else(|| AppError::NotFound(format!("Seed user {}", username)))
    };

    for (user, friend) in FRIENDSHIPS {
        store.make_friends(&id_of(user)?, &id_of(friend)?).await?;
    }

    // The same trip name for two users means two separate trips.
    for (username, name) in TRIPS {
        let trip = store.create_trip(name).await?;
        let trip_id = trip
            .id
            .ok_or_else(|| AppError::DatabaseError(format!("Trip {} has no id", name)))?;
        store.assign_trip(&id_of(username)?, &trip_id).await?;
    }

    Ok(())
}
