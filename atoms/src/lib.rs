pub mod banners;
pub mod details;
pub mod mongo;
pub mod response;
pub mod store;

#[cfg(any(test, feature = "test-util"))]
pub mod memory;

pub use mongo::MongoStore;
pub use store::{DocumentStore, StoreError};
