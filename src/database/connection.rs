use mongodb::bson::doc;
use mongodb::options::IndexOptions;
use mongodb::{Client, Database, IndexModel};

use crate::config::AppConfig;
use crate::models::user::User;

pub async fn get_db_client(config: &AppConfig) -> Database {
    let client = Client::with_uri_str(&config.database_url)
        .await
        .expect("Failed to connect to MongoDB");

    let db = client.database(&config.database_name);

    match db.list_collection_names().await {
        Ok(collections) => {
            tracing::info!("Connected to database: {}", config.database_name);
            tracing::debug!("Collections found: {:?}", collections);
        }
        Err(e) => {
            tracing::error!(
                "Database '{}' may not exist or is inaccessible: {}",
                config.database_name,
                e
            );
        }
    }

    ensure_user_indexes(&db).await;

    db
}

/// Unique indexes on aadharCard and phoneNumber are the only atomicity the
/// registration flow relies on: two racing inserts resolve by the second one
/// failing with a duplicate-key error.
async fn ensure_user_indexes(db: &Database) {
    let users = db.collection::<User>("users");

    let indexes = [
        IndexModel::builder()
            .keys(doc! { "aadharCard": 1 })
            .options(IndexOptions::builder().unique(true).build())
            .build(),
        IndexModel::builder()
            .keys(doc! { "phoneNumber": 1 })
            .options(IndexOptions::builder().unique(true).build())
            .build(),
    ];

    for index in indexes {
        if let Err(e) = users.create_index(index).await {
            tracing::error!("Failed to create unique index on users: {}", e);
        }
    }
}
