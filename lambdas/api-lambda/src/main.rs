use catalog_atoms::MongoStore;
use catalog_shared::{AppState, Config};
use lambda_http::{run, service_fn, Error, Request};
use std::env;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod http_handler;
mod local;

#[tokio::main]
async fn main() -> Result<(), Error> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env();
    let store = MongoStore::connect(&config.database_uri()).await?;
    match store.ping().await {
        Ok(()) => tracing::info!("✅ MongoDB connected successfully ({})", store.database_name()),
        Err(e) => tracing::error!("❌ MongoDB connection error: {}", e),
    }

    let state = Arc::new(AppState::new(Arc::new(store)));

    if env::var("AWS_LAMBDA_RUNTIME_API").is_ok() {
        return run(service_fn(move |event: Request| {
            let state = state.clone();
            async move { http_handler::function_handler(event, state).await }
        }))
        .await;
    }

    local::serve(config.listen_addr(), state).await
}
