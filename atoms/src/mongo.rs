use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::bson::{doc, Document};
use mongodb::{Client, Collection, Database};

use crate::store::{parse_id, title_pattern, DocumentStore, StoreError};

/// Database used when the connection string does not name one.
pub const DEFAULT_DATABASE: &str = "data";

/// [`DocumentStore`] backed by a MongoDB database.
///
/// The driver owns the connection pool; each call checks a connection out
/// and returns it when the operation finishes, failed or not.
#[derive(Debug, Clone)]
pub struct MongoStore {
    db: Database,
}

impl MongoStore {
    pub fn new(db: Database) -> Self {
        Self { db }
    }

    /// Parse `uri` and build a client. No server round trip happens here.
    pub async fn connect(uri: &str) -> Result<Self, StoreError> {
        let client = Client::with_uri_str(uri).await?;
        let db = client
            .default_database()
            .unwrap_or_else(|| client.database(DEFAULT_DATABASE));
        Ok(Self::new(db))
    }

    pub async fn ping(&self) -> Result<(), StoreError> {
        self.db.run_command(doc! { "ping": 1 }).await?;
        Ok(())
    }

    pub fn database_name(&self) -> &str {
        self.db.name()
    }

    fn collection(&self, name: &str) -> Collection<Document> {
        self.db.collection(name)
    }
}

#[async_trait]
impl DocumentStore for MongoStore {
    async fn fetch_all(&self, collection: &str) -> Result<Vec<Document>, StoreError> {
        let cursor = self.collection(collection).find(doc! {}).await?;
        Ok(cursor.try_collect().await?)
    }

    async fn fetch_by_id(
        &self,
        collection: &str,
        id: &str,
    ) -> Result<Option<Document>, StoreError> {
        let oid = parse_id(id)?;
        Ok(self.collection(collection).find_one(doc! { "_id": oid }).await?)
    }

    async fn search_by_title(
        &self,
        collection: &str,
        pattern: &str,
    ) -> Result<Vec<Document>, StoreError> {
        let filter = doc! {
            "title": { "$regex": title_pattern(pattern), "$options": "i" }
        };
        let cursor = self
            .collection(collection)
            .find(filter)
            .sort(doc! { "title": 1 })
            .await?;
        Ok(cursor.try_collect().await?)
    }
}
