pub mod memory;
pub mod mongo_store;
pub mod store;

pub use memory::InMemoryStore;
pub use mongo_store::MongoStore;
pub use store::*;

use mongodb::bson::doc;
use mongodb::options::IndexOptions;
use mongodb::{Client, Collection, Database, IndexModel};
use std::error::Error;

pub const USERS: &str = "users";
pub const TRIPS: &str = "trips";
pub const FRIENDSHIPS: &str = "friendships";
pub const USER_TRIPS: &str = "user_trips";

#[derive(Clone)]
pub struct MongoDB {
    db: Database,
}

impl MongoDB {
    pub async fn new(uri: &str) -> Result<Self, Box<dyn Error>> {
        let mut client_options = mongodb::options::ClientOptions::parse(uri).await?;

        // Connection pool
        client_options.max_pool_size = Some(20);
        client_options.min_pool_size = Some(5);
        client_options.max_idle_time = Some(std::time::Duration::from_secs(300));

        client_options.connect_timeout = Some(std::time::Duration::from_secs(5));
        client_options.server_selection_timeout = Some(std::time::Duration::from_secs(5));

        let client = Client::with_options(client_options)?;

        // Extract database name from URI or use default
        let db_name = uri
            .rsplit('/')
            .next()
            .and_then(|s| s.split('?').next())
            .filter(|s| !s.is_empty() && !s.contains(':'))
            .unwrap_or("trip_service");

        let db = client.database(db_name);

        // Test connection
        db.list_collection_names().await?;

        let mongodb = Self { db };
        mongodb.ensure_indexes().await?;

        Ok(mongodb)
    }

    /// Creates the indexes the store queries rely on.
    ///
    /// The unique indexes on `friendships` and `user_trips` keep each pair
    /// stored once.
    async fn ensure_indexes(&self) -> Result<(), Box<dyn Error>> {
        log::info!("🔧 Creating database indexes...");

        let indexes = [
            (USERS, doc! { "user_id": 1 }, true),
            (USERS, doc! { "username": 1 }, true),
            (FRIENDSHIPS, doc! { "user_a": 1, "user_b": 1 }, true),
            (FRIENDSHIPS, doc! { "user_b": 1 }, false),
            (USER_TRIPS, doc! { "user_id": 1, "trip_id": 1 }, true),
        ];

        for (collection, keys, unique) in indexes {
            let description = format!("{}({:?})", collection, keys.keys().collect::<Vec<_>>());
            let model = IndexModel::builder()
                .keys(keys)
                .options(IndexOptions::builder().unique(unique).build())
                .build();

            match self
                .database()
                .collection::<mongodb::bson::Document>(collection)
                .create_index(model)
                .await
            {
                Ok(_) => log::info!("   ✅ Index created: {}", description),
                Err(e) => log::debug!("   ℹ️  Index already exists: {}", e),
            }
        }

        log::info!("✅ Database indexes ready");

        Ok(())
    }

    pub fn collection<T: Send + Sync>(&self, name: &str) -> Collection<T> {
        self.db.collection(name)
    }

    pub fn database(&self) -> &Database {
        &self.db
    }
}
