use mongodb::bson::Document;
use serde::Serialize;

use crate::store::{id_field, string_field};

/// Banner - one document of the `banners` collection
#[derive(Debug, Serialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Banner {
    #[serde(rename = "_id")]
    pub id: String,
    pub image_url: Option<String>,
}

impl From<&Document> for Banner {
    fn from(doc: &Document) -> Self {
        Self {
            id: id_field(doc),
            image_url: string_field(doc, "imageUrl"),
        }
    }
}
