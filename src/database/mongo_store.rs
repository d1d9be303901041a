use crate::database::{IdentityStore, MongoDB, StoreWriter, TripStore, FRIENDSHIPS, TRIPS, USERS, USER_TRIPS};
use crate::models::{Assignment, Friendship, Trip, User};
use crate::utils::AppError;
use async_trait::async_trait;
use futures::stream::StreamExt;
use mongodb::bson::{doc, oid::ObjectId, Document};
use mongodb::Cursor;
use serde::de::DeserializeOwned;

/// MongoDB backed identity and trip store.
#[derive(Clone)]
pub struct MongoStore {
    db: MongoDB,
}

impl MongoStore {
    pub fn new(db: MongoDB) -> Self {
        Self { db }
    }

    async fn find_trip(&self, trip_id: &str) -> Result<Option<Trip>, AppError> {
        Ok(self
            .db
            .collection::<Trip>(TRIPS)
            .find_one(doc! { "_id": trip_id })
            .await?)
    }
}

async fn collect<T>(mut cursor: Cursor<T>) -> Result<Vec<T>, AppError>
where
    T: DeserializeOwned + Send + Sync + Unpin,
{
    let mut items = Vec::new();
    while let Some(result) = cursor.next().await {
        items.push(result?);
    }
    Ok(items)
}

#[async_trait]
impl IdentityStore for MongoStore {
    async fn find_by_id(&self, user_id: &str) -> Result<Option<User>, AppError> {
        Ok(self
            .db
            .collection::<User>(USERS)
            .find_one(doc! { "user_id": user_id })
            .await?)
    }

    async fn find_by_username(&self, username: &str) -> Result<Option<User>, AppError> {
        Ok(self
            .db
            .collection::<User>(USERS)
            .find_one(doc! { "username": username })
            .await?)
    }

    async fn friends_of(&self, user_id: &str) -> Result<Vec<User>, AppError> {
        let cursor = self
            .db
            .collection::<Friendship>(FRIENDSHIPS)
            .find(doc! {
                "$or": [
                    { "user_a": user_id },
                    { "user_b": user_id }
                ]
            })
            .await?;

        let friend_ids: Vec<String> = collect(cursor)
            .await?
            .iter()
            .filter_map(|friendship| friendship.other(user_id))
            .map(str::to_string)
            .collect();

        log::debug!("👥 {} friendship rows for user {}", friend_ids.len(), user_id);

        if friend_ids.is_empty() {
            return Ok(Vec::new());
        }

        let cursor = self
            .db
            .collection::<User>(USERS)
            .find(doc! { "user_id": { "$in": friend_ids } })
            .await?;

        collect(cursor).await
    }
}

#[async_trait]
impl TripStore for MongoStore {
    async fn trips_assigned_to(&self, user_id: &str) -> Result<Vec<Trip>, AppError> {
        let cursor = self
            .db
            .collection::<Assignment>(USER_TRIPS)
            .find(doc! { "user_id": user_id })
            .await?;

        let trip_ids: Vec<String> = collect(cursor)
            .await?
            .into_iter()
            .map(|assignment| assignment.trip_id)
            .collect();

        if trip_ids.is_empty() {
            return Ok(Vec::new());
        }

        let cursor = self
            .db
            .collection::<Trip>(TRIPS)
            .find(doc! { "_id": { "$in": trip_ids } })
            .await?;

        collect(cursor).await
    }
}

#[async_trait]
impl StoreWriter for MongoStore {
    async fn create_user(&self, username: &str) -> Result<User, AppError> {
        let user = User::new(ObjectId::new().to_hex(), username);

        self.db
            .collection::<User>(USERS)
            .insert_one(&user)
            .await
            .map_err(|e| AppError::DatabaseError(format!("Failed to create user: {}", e)))?;

        log::info!("✅ User created: {} ({})", user.username, user.user_id);
        Ok(user)
    }

    async fn create_trip(&self, name: &str) -> Result<Trip, AppError> {
        let trip = Trip::with_id(ObjectId::new().to_hex(), name);

        self.db
            .collection::<Trip>(TRIPS)
            .insert_one(&trip)
            .await
            .map_err(|e| AppError::DatabaseError(format!("Failed to create trip: {}", e)))?;

        Ok(trip)
    }

    async fn make_friends(&self, user_id: &str, friend_id: &str) -> Result<(), AppError> {
        let friendship = Friendship::between(user_id, friend_id).ok_or_else(|| {
            AppError::InvalidRequest(format!("User {} cannot befriend themselves", user_id))
        })?;

        for id in [user_id, friend_id] {
            if self.find_by_id(id).await?.is_none() {
                return Err(AppError::NotFound(format!("User {}", id)));
            }
        }

        let pair: Document = doc! { "user_a": &friendship.user_a, "user_b": &friendship.user_b };
        self.db
            .collection::<Friendship>(FRIENDSHIPS)
            .update_one(pair.clone(), doc! { "$setOnInsert": pair })
            .upsert(true)
            .await?;

        Ok(())
    }

    async fn assign_trip(&self, user_id: &str, trip_id: &str) -> Result<(), AppError> {
        if self.find_by_id(user_id).await?.is_none() {
            return Err(AppError::NotFound(format!("User {}", user_id)));
        }
        if self.find_trip(trip_id).await?.is_none() {
            return Err(AppError::NotFound(format!("Trip {}", trip_id)));
        }

        let assignment = doc! { "user_id": user_id, "trip_id": trip_id };
        self.db
            .collection::<Assignment>(USER_TRIPS)
            .update_one(assignment.clone(), doc! { "$setOnInsert": assignment })
            .upsert(true)
            .await?;

        Ok(())
    }
}
