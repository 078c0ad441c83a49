use std::{env, str::FromStr, time::Duration};

use crate::error::{AppError, Result};

#[derive(Debug, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub jwt: JwtConfig,
    pub store: StoreConfig,
    pub media: MediaConfig,
}

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub cors_allowed_origins: Vec<String>,
    pub max_concurrent_requests: usize,
}

#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
    pub min_connections: u32,
    pub connect_timeout: Duration,
    pub idle_timeout: Duration,
}

#[derive(Debug, Clone)]
pub struct JwtConfig {
    pub secret: String,
    pub access_token_ttl: Duration,
}

/// Checkout pricing knobs. All amounts are integer cents.
#[derive(Debug, Clone)]
pub struct StoreConfig {
    pub shipping_flat_cents: i64,
    pub tax_rate_percent: i64,
    pub default_page_size: u64,
    pub max_page_size: u64,
}

#[derive(Debug, Clone)]
pub struct MediaConfig {
    pub root: String,
}

impl MediaConfig {
    /// Image refs are stored relative to the media root and must stay inside
    /// it.
    pub fn accepts(&self, image_ref: &str) -> bool {
        !image_ref.is_empty()
            && !image_ref.starts_with('/')
            && !image_ref.split('/').any(|segment| segment == "..")
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();

        Ok(Self {
            server: ServerConfig {
                host: env_or_default("HOST", "127.0.0.1"),
                port: env_or_parse("PORT", 8080)?,
                cors_allowed_origins: env_list(
                    "CORS_ALLOWED_ORIGINS",
                    vec!["http://localhost:3000".into()],
                ),
                max_concurrent_requests: env_or_parse("SERVER_MAX_CONCURRENT_REQUESTS", 100)?,
            },
            database: DatabaseConfig {
                url: env_required("DATABASE_URL")?,
                max_connections: env_or_parse("DB_MAX_CONNECTIONS", 10)?,
                min_connections: env_or_parse("DB_MIN_CONNECTIONS", 5)?,
                connect_timeout: Duration::from_secs(env_or_parse("DB_CONNECT_TIMEOUT_SECS", 10)?),
                idle_timeout: Duration::from_secs(env_or_parse("DB_IDLE_TIMEOUT_SECS", 300)?),
            },
            jwt: JwtConfig {
                secret: env_required("JWT_SECRET")?,
                access_token_ttl: Duration::from_secs(env_or_parse("JWT_ACCESS_TTL_SECS", 900)?),
            },
            store: StoreConfig {
                shipping_flat_cents: env_or_parse("STORE_SHIPPING_FLAT_CENTS", 500)?,
                tax_rate_percent: env_or_parse("STORE_TAX_RATE_PERCENT", 20)?,
                default_page_size: env_or_parse("STORE_DEFAULT_PAGE_SIZE", 12)?,
                max_page_size: env_or_parse("STORE_MAX_PAGE_SIZE", 100)?,
            },
            media: MediaConfig {
                root: env_or_default("MEDIA_ROOT", "media"),
            },
        })
    }

    pub fn validate(&self) -> Result<()> {
        if self.jwt.secret.len() < 32 {
            return Err(AppError::InvalidParams(
                "JWT_SECRET must be at least 32 characters".into(),
            ));
        }

        if self.store.shipping_flat_cents < 0 {
            return Err(AppError::InvalidParams(
                "Shipping fee must not be negative".into(),
            ));
        }

        if !(0..=100).contains(&self.store.tax_rate_percent) {
            return Err(AppError::InvalidParams(
                "Tax rate must be between 0 and 100 percent".into(),
            ));
        }

        if self.store.default_page_size == 0 || self.store.max_page_size == 0 {
            return Err(AppError::InvalidParams(
                "Page sizes must be positive".into(),
            ));
        }

        if self.media.root.trim().is_empty() {
            return Err(AppError::InvalidParams("MEDIA_ROOT must not be empty".into()));
        }

        Ok(())
    }
}

fn env_or_default(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_string())
}

fn env_or_parse<T: FromStr>(key: &str, default: T) -> Result<T> {
    match env::var(key) {
        Ok(val) => val
            .parse()
            .map_err(|_| AppError::InvalidParams(format!("Invalid value for {key}"))),
        Err(_) => Ok(default),
    }
}

fn env_required(key: &str) -> Result<String> {
    env::var(key).map_err(|_| AppError::InvalidParams(format!("{key} is required")))
}

fn env_list(key: &str, default: Vec<String>) -> Vec<String> {
    env::var(key)
        .map(|val| {
            val.split(',')
                .map(|str_val| str_val.trim().to_string())
                .collect()
        })
        .unwrap_or(default)
}

#[cfg(test)]
mod tests {
    use super::MediaConfig;

    #[test]
    fn media_refs_cannot_escape_the_root() {
        let media = MediaConfig {
            root: "media".into(),
        };

        assert!(media.accepts("artworks/dawn.png"));
        assert!(!media.accepts(""));
        assert!(!media.accepts("/etc/passwd"));
        assert!(!media.accepts("artworks/../../secrets.png"));
    }
}
