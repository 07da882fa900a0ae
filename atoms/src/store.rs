use async_trait::async_trait;
use mongodb::bson::{oid::ObjectId, Bson, Document};
use mongodb::error::ErrorKind;

/// Collection holding catalog items.
pub const DETAILS_COLLECTION: &str = "details";
/// Collection holding banners.
pub const BANNERS_COLLECTION: &str = "banners";

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("malformed identifier: {0}")]
    MalformedId(String),
    #[error("document store unavailable: {0}")]
    Unavailable(String),
    #[error("document store query failed: {0}")]
    Query(String),
}

impl From<mongodb::error::Error> for StoreError {
    fn from(err: mongodb::error::Error) -> Self {
        match err.kind.as_ref() {
            ErrorKind::ServerSelection { .. } | ErrorKind::Io(_) => {
                StoreError::Unavailable(err.to_string())
            }
            _ => StoreError::Query(err.to_string()),
        }
    }
}

/// Read-only access to named document collections.
///
/// Every operation is idempotent. An empty collection is `Ok(vec![])`, never an
/// error; callers decide what emptiness means for them.
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// All documents of `collection` in store-native order.
    async fn fetch_all(&self, collection: &str) -> Result<Vec<Document>, StoreError>;

    /// The document whose `_id` equals `id`, or `None` when there is none.
    /// Ids that are not valid ObjectIds yield [`StoreError::MalformedId`].
    async fn fetch_by_id(&self, collection: &str, id: &str)
        -> Result<Option<Document>, StoreError>;

    /// Documents whose `title` contains `pattern` as a literal, case-insensitive
    /// substring, sorted ascending by `title`.
    async fn search_by_title(
        &self,
        collection: &str,
        pattern: &str,
    ) -> Result<Vec<Document>, StoreError>;
}

pub fn parse_id(id: &str) -> Result<ObjectId, StoreError> {
    ObjectId::parse_str(id).map_err(|_| StoreError::MalformedId(id.to_string()))
}

/// Regex source matching `pattern` literally.
pub fn title_pattern(pattern: &str) -> String {
    regex::escape(pattern)
}

/// Read `key` as a string. Scalars are cast the way a string schema casts them
/// (`2024` becomes `"2024"`); arrays, documents and nulls read as `None`.
pub fn string_field(doc: &Document, key: &str) -> Option<String> {
    match doc.get(key)? {
        Bson::String(s) => Some(s.clone()),
        Bson::Int32(n) => Some(n.to_string()),
        Bson::Int64(n) => Some(n.to_string()),
        Bson::Double(n) => Some(n.to_string()),
        Bson::Boolean(b) => Some(b.to_string()),
        Bson::ObjectId(oid) => Some(oid.to_hex()),
        _ => None,
    }
}

/// The document's `_id` as it appears in responses.
pub fn id_field(doc: &Document) -> String {
    string_field(doc, "_id").unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use mongodb::bson::doc;

    #[test]
    fn title_pattern_escapes_metacharacters() {
        assert_eq!(title_pattern("blue"), "blue");
        assert_eq!(title_pattern("a.c"), r"a\.c");
        assert_eq!(title_pattern("(.*)"), r"\(\.\*\)");
        assert_eq!(title_pattern("$5 [new]"), r"\$5 \[new\]");
    }

    #[test]
    fn string_field_casts_scalars() {
        let oid = ObjectId::parse_str("65f1c2a9e4b0a1b2c3d4e5f6").unwrap();
        let doc = doc! {
            "text": "Blue House",
            "year": 2024,
            "big": 9_000_000_000_i64,
            "ratio": 1.5,
            "flag": true,
            "ref": oid,
            "tags": ["a", "b"],
            "nested": { "title": "x" },
            "nothing": null,
        };

        assert_eq!(string_field(&doc, "text").as_deref(), Some("Blue House"));
        assert_eq!(string_field(&doc, "year").as_deref(), Some("2024"));
        assert_eq!(string_field(&doc, "big").as_deref(), Some("9000000000"));
        assert_eq!(string_field(&doc, "ratio").as_deref(), Some("1.5"));
        assert_eq!(string_field(&doc, "flag").as_deref(), Some("true"));
        assert_eq!(string_field(&doc, "ref").as_deref(), Some("65f1c2a9e4b0a1b2c3d4e5f6"));
        assert_eq!(string_field(&doc, "tags"), None);
        assert_eq!(string_field(&doc, "nested"), None);
        assert_eq!(string_field(&doc, "nothing"), None);
        assert_eq!(string_field(&doc, "absent"), None);
    }

    #[test]
    fn id_field_keeps_non_object_ids() {
        assert_eq!(id_field(&doc! { "_id": "custom-id" }), "custom-id");
        assert_eq!(id_field(&doc! { "_id": 7 }), "7");
        assert_eq!(id_field(&doc! {}), "");
    }

    #[test]
    fn io_errors_mean_unavailable() {
        let io = std::io::Error::new(std::io::ErrorKind::ConnectionRefused, "refused");
        let err = StoreError::from(mongodb::error::Error::from(io));

        assert!(matches!(err, StoreError::Unavailable(_)), "{err:?}");
    }

    #[test]
    fn other_driver_errors_mean_query_failure() {
        let err = StoreError::from(mongodb::error::Error::custom("bad filter"));

        assert!(matches!(err, StoreError::Query(_)), "{err:?}");
    }

    #[test]
    fn parse_id_rejects_non_object_ids() {
        assert!(parse_id("65f1c2a9e4b0a1b2c3d4e5f6").is_ok());
        assert!(matches!(parse_id("not-an-id"), Err(StoreError::MalformedId(id)) if id == "not-an-id"));
        assert!(matches!(parse_id(""), Err(StoreError::MalformedId(_))));
    }
}
