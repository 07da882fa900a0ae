use crate::store::{DocumentStore, StoreError, BANNERS_COLLECTION};
use super::model::Banner;

pub async fn load_banners(store: &dyn DocumentStore) -> Result<Vec<Banner>, StoreError> {
    let docs = store.fetch_all(BANNERS_COLLECTION).await?;
    Ok(docs.iter().map(Banner::from).collect())
}
