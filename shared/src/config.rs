use anyhow::Result;
use std::env;

pub struct AppConfig {
    pub database: DatabaseConfig,
    pub redis: RedisConfig,
    pub auth: AuthConfig,
    pub ideas: IdeasConfig,
}

impl AppConfig {
    pub fn new() -> Result<Self> {
        let database = DatabaseConfig {
            host: env::var("DATABASE_HOST")?,
            port: env::var("DATABASE_PORT")?.parse()?,
            username: env::var("DATABASE_USERNAME")?,
            password: env::var("DATABASE_PASSWORD")?,
            database: env::var("DATABASE_NAME")?,
        };
        let redis = RedisConfig {
            host: env::var("REDIS_HOST")?,
            port: env::var("REDIS_PORT")?.parse()?,
        };
        let auth = AuthConfig {
            ttl: env::var("AUTH_TOKEN_TTL")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(86400),
        };
        let ideas = IdeasConfig {
            endpoint: env::var("IDEAS_ENDPOINT").unwrap_or_default(),
            api_key: env::var("IDEAS_API_KEY").unwrap_or_default(),
            cache_ttl: env::var("IDEAS_CACHE_TTL")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(3600),
        };
        Ok(Self {
            database,
            redis,
            auth,
            ideas,
        })
    }
}

pub struct DatabaseConfig {
    pub host: String,
    pub port: u16,
    pub username: String,
    pub password: String,
    pub database: String,
}

pub struct RedisConfig {
    pub host: String,
    pub port: u16,
}

pub struct AuthConfig {
    /// Access token lifetime in seconds.
    pub ttl: u64,
}

/// Settings for the external text-generation service that produces
/// conversation ideas.
pub struct IdeasConfig {
    pub endpoint: String,
    pub api_key: String,
    /// Lifetime in seconds of a user's cached idea list.
    pub cache_ttl: u64,
}
