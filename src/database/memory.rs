use crate::database::{IdentityStore, StoreWriter, TripStore};
use crate::models::{Assignment, Friendship, Trip, User};
use crate::utils::AppError;
use async_trait::async_trait;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

/// Process-local store used by tests and `STORE_BACKEND=memory`.
///
/// Ids are sequential per entity kind starting at 1. Every list keeps
/// insertion order, which is the natural order of the store.
#[derive(Default)]
pub struct InMemoryStore {
    inner: RwLock<Tables>,
}

#[derive(Default)]
struct Tables {
    users: Vec<User>,
    trips: Vec<Trip>,
    friendships: Vec<Friendship>,
    assignments: Vec<Assignment>,
    next_user_id: u64,
    next_trip_id: u64,
}

impl Tables {
    fn user(&self, user_id: &str) -> Option<&User> {
        self.users.iter().find(|user| user.user_id == user_id)
    }

    fn trip(&self, trip_id: &str) -> Option<&Trip> {
        self.trips.iter().find(|trip| trip.id.as_deref() == Some(trip_id))
    }
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, Tables>, AppError> {
        self.inner
            .read()
            .map_err(|_| AppError::DatabaseError("in-memory store lock poisoned".to_string()))
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, Tables>, AppError> {
        self.inner
            .write()
            .map_err(|_| AppError::DatabaseError("in-memory store lock poisoned".to_string()))
    }
}

#[async_trait]
impl IdentityStore for InMemoryStore {
    async fn find_by_id(&self, user_id: &str) -> Result<Option<User>, AppError> {
        Ok(self.read()?.user(user_id).cloned())
    }

    async fn find_by_username(&self, username: &str) -> Result<Option<User>, AppError> {
        Ok(self
            .read()?
            .users
            .iter()
            .find(|user| user.username == username)
            .cloned())
    }

    async fn friends_of(&self, user_id: &str) -> Result<Vec<User>, AppError> {
        let tables = self.read()?;
        Ok(tables
            .friendships
            .iter()
            .filter_map(|friendship| friendship.other(user_id))
            .filter_map(|friend_id| tables.user(friend_id).cloned())
            .collect())
    }
}

#[async_trait]
impl TripStore for InMemoryStore {
    async fn trips_assigned_to(&self, user_id: &str) -> Result<Vec<Trip>, AppError> {
        let tables = self.read()?;
        Ok(tables
            .assignments
            .iter()
            .filter(|assignment| assignment.user_id == user_id)
            .filter_map(|assignment| tables.trip(&assignment.trip_id).cloned())
            .collect())
    }
}

#[async_trait]
impl StoreWriter for InMemoryStore {
    async fn create_user(&self, username: &str) -> Result<User, AppError> {
        let mut tables = self.write()?;
        if tables.users.iter().any(|user| user.username == username) {
            return Err(AppError::InvalidRequest(format!("Username {} already taken", username)));
        }

        tables.next_user_id += 1;
        let user = User::new(tables.next_user_id.to_string(), username);
        tables.users.push(user.clone());
        Ok(user)
    }

    async fn create_trip(&self, name: &str) -> Result<Trip, AppError> {
        let mut tables = self.write()?;
        tables.next_trip_id += 1;
        let trip = Trip::with_id(tables.next_trip_id.to_string(), name);
        tables.trips.push(trip.clone());
        Ok(trip)
    }

    async fn make_friends(&self, user_id: &str, friend_id: &str) -> Result<(), AppError> {
        let friendship = Friendship::between(user_id, friend_id).ok_or_else(|| {
            AppError::InvalidRequest(format!("User {} cannot befriend themselves", user_id))
        })?;

        let mut tables = self.write()?;
        for id in [user_id, friend_id] {
            if tables.user(id).is_none() {
                return Err(AppError::NotFound(format!("User {}", id)));
            }
        }

        if !tables.friendships.contains(&friendship) {
            tables.friendships.push(friendship);
        }
        Ok(())
    }

    async fn assign_trip(&self, user_id: &str, trip_id: &str) -> Result<(), AppError> {
        let mut tables = self.write()?;
        if tables.user(user_id).is_none() {
            return Err(AppError::NotFound(format!("User {}", user_id)));
        }
        if tables.trip(trip_id).is_none() {
            return Err(AppError::NotFound(format!("Trip {}", trip_id)));
        }

        let assignment = Assignment::new(user_id, trip_id);
        if !tables.assignments.contains(&assignment) {
            tables.assignments.push(assignment);
        }
        Ok(())
    }
}
