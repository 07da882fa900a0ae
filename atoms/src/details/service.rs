use crate::store::{DocumentStore, StoreError, DETAILS_COLLECTION};
use super::model::CatalogItem;

/// Every catalog item in store order
pub async fn load_catalog(store: &dyn DocumentStore) -> Result<Vec<CatalogItem>, StoreError> {
    let docs = store.fetch_all(DETAILS_COLLECTION).await?;
    Ok(docs.iter().map(CatalogItem::from).collect())
}

/// Items whose title contains `query` (any case), sorted by title
pub async fn search_catalog(
    store: &dyn DocumentStore,
    query: &str,
) -> Result<Vec<CatalogItem>, StoreError> {
    let docs = store.search_by_title(DETAILS_COLLECTION, query).await?;
    Ok(docs.iter().map(CatalogItem::from).collect())
}

pub async fn load_catalog_item(
    store: &dyn DocumentStore,
    id: &str,
) -> Result<Option<CatalogItem>, StoreError> {
    let doc = store.fetch_by_id(DETAILS_COLLECTION, id).await?;
    Ok(doc.as_ref().map(CatalogItem::from))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory::MemoryStore;
    use mongodb::bson::doc;

    fn store_with_titles(titles: &[&str]) -> MemoryStore {
        let store = MemoryStore::new();
        for title in titles {
            store.insert(DETAILS_COLLECTION, doc! { "title": *title });
        }
        store
    }

    fn titles(items: &[CatalogItem]) -> Vec<&str> {
        items.iter().filter_map(|i| i.title.as_deref()).collect()
    }

    #[tokio::test]
    async fn search_ignores_case() {
        let store = store_with_titles(&["Blue House", "Red Barn"]);

        for query in ["blue", "BLUE", "House"] {
            let items = search_catalog(&store, query).await.unwrap();
            assert_eq!(titles(&items), ["Blue House"], "query {query:?}");
        }
    }

    #[tokio::test]
    async fn search_sorts_by_title() {
        let store = store_with_titles(&["Zeta Loan", "Alpha Loan", "Mid Loan"]);

        let items = search_catalog(&store, "loan").await.unwrap();

        assert_eq!(titles(&items), ["Alpha Loan", "Mid Loan", "Zeta Loan"]);
    }

    #[tokio::test]
    async fn search_keeps_store_order_for_equal_titles() {
        let store = MemoryStore::new();
        store.insert(DETAILS_COLLECTION, doc! { "title": "Same", "description": "first" });
        store.insert(DETAILS_COLLECTION, doc! { "title": "Earlier" });
        store.insert(DETAILS_COLLECTION, doc! { "title": "Same", "description": "second" });

        let items = search_catalog(&store, "e").await.unwrap();

        let descriptions: Vec<_> = items.iter().map(|i| i.description.as_deref()).collect();
        assert_eq!(descriptions, [None, Some("first"), Some("second")]);
    }

    #[tokio::test]
    async fn search_treats_metacharacters_literally() {
        let store = store_with_titles(&["abc", "a.c", "a.*"]);

        assert_eq!(titles(&search_catalog(&store, "a.c").await.unwrap()), ["a.c"]);
        assert_eq!(titles(&search_catalog(&store, ".*").await.unwrap()), ["a.*"]);
        assert!(search_catalog(&store, "(").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn search_skips_items_without_title() {
        let store = store_with_titles(&["Alpha"]);
        store.insert(DETAILS_COLLECTION, doc! { "description": "Alpha" });

        assert_eq!(titles(&search_catalog(&store, "alpha").await.unwrap()), ["Alpha"]);
    }

    #[tokio::test]
    async fn load_catalog_keeps_store_order_and_missing_fields() {
        let store = store_with_titles(&["Zeta", "Alpha"]);
        store.insert(DETAILS_COLLECTION, doc! { "imageUrl": "https://img/1.png" });

        let items = load_catalog(&store).await.unwrap();

        assert_eq!(titles(&items), ["Zeta", "Alpha"]);
        assert_eq!(items[2].title, None);
        assert_eq!(items[2].image_url.as_deref(), Some("https://img/1.png"));
    }

    #[tokio::test]
    async fn mistyped_fields_do_not_spoil_the_list() {
        let store = store_with_titles(&["Blue House"]);
        store.insert(DETAILS_COLLECTION, doc! { "title": 2024, "imageUrl": "x", "description": ["a"] });

        let items = load_catalog(&store).await.unwrap();

        assert_eq!(titles(&items), ["Blue House", "2024"]);
        assert_eq!(items[1].image_url.as_deref(), Some("x"));
        assert_eq!(items[1].description, None);
    }

    #[tokio::test]
    async fn load_catalog_item_distinguishes_missing_and_malformed() {
        let store = MemoryStore::new();
        let id = store.insert(DETAILS_COLLECTION, doc! { "title": "Blue House" });

        let found = load_catalog_item(&store, &id).await.unwrap();
        assert_eq!(found.map(|i| i.id), Some(id));

        let missing = load_catalog_item(&store, "65f1c2a9e4b0a1b2c3d4e5f6").await.unwrap();
        assert!(missing.is_none());

        let malformed = load_catalog_item(&store, "42").await;
        assert!(matches!(malformed, Err(StoreError::MalformedId(_))));
    }
}
