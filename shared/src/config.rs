use std::env;
use std::net::SocketAddr;

pub const DEFAULT_PORT: u16 = 5000;
pub const DEFAULT_MONGO_URI: &str = "mongodb://127.0.0.1:27017/";
/// Appended verbatim to `MONGO_URI`.
pub const DATABASE_NAME: &str = "data";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub port: u16,
    pub mongo_uri: String,
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let port = match lookup("PORT").filter(|v| !v.is_empty()) {
            Some(raw) => raw.parse().unwrap_or_else(|_| {
                tracing::warn!("Invalid PORT {:?}, using {}", raw, DEFAULT_PORT);
                DEFAULT_PORT
            }),
            None => DEFAULT_PORT,
        };
        let mongo_uri = lookup("MONGO_URI")
            .filter(|v| !v.is_empty())
            .unwrap_or_else(|| DEFAULT_MONGO_URI.to_string());

        Self { port, mongo_uri }
    }

    /// Connection string with the database name appended.
    pub fn database_uri(&self) -> String {
        format!("{}{}", self.mongo_uri, DATABASE_NAME)
    }

    pub fn listen_addr(&self) -> SocketAddr {
        SocketAddr::from(([0, 0, 0, 0], self.port))
    }
}
