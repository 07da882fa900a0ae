use mongodb::bson::Document;
use serde::Serialize;

use crate::store::{id_field, string_field};

/// Catalog item - one document of the `details` collection
///
/// Every field besides the id may be absent in the store and serializes as `null`.
#[derive(Debug, Serialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CatalogItem {
    #[serde(rename = "_id")]
    pub id: String,
    pub image_url: Option<String>,
    pub title: Option<String>,
    pub description: Option<String>,
    pub locate_us_url: Option<String>,
    pub apply_now_url: Option<String>,
    pub apply_now_button_name: Option<String>,
}

impl From<&Document> for CatalogItem {
    fn from(doc: &Document) -> Self {
        Self {
            id: id_field(doc),
            image_url: string_field(doc, "imageUrl"),
            title: string_field(doc, "title"),
            description: string_field(doc, "description"),
            locate_us_url: string_field(doc, "locateUsUrl"),
            apply_now_url: string_field(doc, "applyNowUrl"),
            apply_now_button_name: string_field(doc, "applyNowButtonName"),
        }
    }
}
