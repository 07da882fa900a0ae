//! In-process [`DocumentStore`] for tests.

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{PoisonError, RwLock};

use async_trait::async_trait;
use lambda_http::Body;
use mongodb::bson::{oid::ObjectId, Document};
use regex::RegexBuilder;

use crate::store::{id_field, parse_id, title_pattern, DocumentStore, StoreError};

/// Collections of BSON documents kept in insertion order.
#[derive(Debug, Default)]
pub struct MemoryStore {
    collections: RwLock<HashMap<String, Vec<Document>>>,
    unavailable: AtomicBool,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `document` to `collection`, assigning an ObjectId `_id` only when
    /// the key is absent. Returns the id as responses render it.
    pub fn insert(&self, collection: &str, mut document: Document) -> String {
        if !document.contains_key("_id") {
            document.insert("_id", ObjectId::new());
        }
        let id = id_field(&document);
        self.collections
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .entry(collection.to_string())
            .or_default()
            .push(document);
        id
    }

    /// While set, every query fails with [`StoreError::Unavailable`].
    pub fn set_unavailable(&self, unavailable: bool) {
        self.unavailable.store(unavailable, Ordering::SeqCst);
    }

    fn documents(&self, collection: &str) -> Result<Vec<Document>, StoreError> {
        if self.unavailable.load(Ordering::SeqCst) {
            return Err(StoreError::Unavailable("memory store is offline".to_string()));
        }
        Ok(self
            .collections
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(collection)
            .cloned()
            .unwrap_or_default())
    }
}

#[async_trait]
impl DocumentStore for MemoryStore {
    async fn fetch_all(&self, collection: &str) -> Result<Vec<Document>, StoreError> {
        self.documents(collection)
    }

    async fn fetch_by_id(
        &self,
        collection: &str,
        id: &str,
    ) -> Result<Option<Document>, StoreError> {
        let oid = parse_id(id)?;
        Ok(self
            .documents(collection)?
            .into_iter()
            .find(|doc| doc.get_object_id("_id").ok() == Some(oid)))
    }

    async fn search_by_title(
        &self,
        collection: &str,
        pattern: &str,
    ) -> Result<Vec<Document>, StoreError> {
        let regex = RegexBuilder::new(&title_pattern(pattern))
            .case_insensitive(true)
            .build()
            .map_err(|e| StoreError::Query(e.to_string()))?;

        let mut matches: Vec<Document> = self
            .documents(collection)?
            .into_iter()
            .filter(|doc| doc.get_str("title").is_ok_and(|title| regex.is_match(title)))
            .collect();
        // Stable: equal titles keep insertion order.
        matches.sort_by(|a, b| a.get_str("title").ok().cmp(&b.get_str("title").ok()));
        Ok(matches)
    }
}

/// Response body as text; binary bodies are decoded lossily.
pub fn body_text(body: &Body) -> String {
    match body {
        Body::Empty => String::new(),
        Body::Text(text) => text.clone(),
        Body::Binary(bytes) => String::from_utf8_lossy(bytes).into_owned(),
    }
}
