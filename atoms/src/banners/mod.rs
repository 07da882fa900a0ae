pub mod model;
pub mod service;
pub mod http;

pub use model::Banner;
pub use http::*;
