use serde::Deserialize;

use tracing::warn;

use crate::recommend::rank::DEFAULT_TOP_PICKS;

#[derive(Debug, Clone, Deserialize)]
pub struct StorageConfig {
    pub endpoint: String,
    pub bucket: String,
    pub access_key: String,
    pub secret_key: String,
    pub region: String,
    /// Base of the public object URLs handed to clients.
    pub public_url: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub database_url: String,
    pub storage: StorageConfig,
    /// How many dishes are promoted to the top of a recommendation list.
    pub top_picks: usize,
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        let database_url = std::env::var("DATABASE_URL")?;

        let endpoint = std::env::var("STORAGE_ENDPOINT")?;
        let bucket = std::env::var("STORAGE_BUCKET").unwrap_or_else(|_| "food-images".into());
        let public_url = std::env::var("STORAGE_PUBLIC_URL")
            .unwrap_or_else(|_| format!("{}/{}", endpoint.trim_end_matches('/'), bucket));
        let storage = StorageConfig {
            access_key: std::env::var("STORAGE_ACCESS_KEY")?,
            secret_key: std::env::var("STORAGE_SECRET_KEY")?,
            region: std::env::var("STORAGE_REGION").unwrap_or_else(|_| "us-east-1".into()),
            endpoint,
            bucket,
            public_url,
        };

        let top_picks = parse_top_picks(std::env::var("RECOMMENDATION_TOP_PICKS").ok().as_deref());

        Ok(Self {
            database_url,
            storage,
            top_picks,
        })
    }
}

/// Unset means the default; an unparsable value is logged and also falls back.
fn parse_top_picks(raw: Option<&str>) -> usize {
    let Some(raw) = raw else {
        return DEFAULT_TOP_PICKS;
    };
    match raw.trim().parse::<usize>() {
        Ok(n) => n,
        Err(e) => {
            warn!(value = raw, error = %e, default = DEFAULT_TOP_PICKS, "invalid RECOMMENDATION_TOP_PICKS; using default");
            DEFAULT_TOP_PICKS
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn top_picks_from_env_value() {
        assert_eq!(parse_top_picks(None), DEFAULT_TOP_PICKS);
        assert_eq!(parse_top_picks(Some(" 5 ")), 5);
        assert_eq!(parse_top_picks(Some("1")), 1);
    }

    #[test]
    fn invalid_top_picks_fall_back_to_the_default() {
        assert_eq!(parse_top_picks(Some("three")), DEFAULT_TOP_PICKS);
        assert_eq!(parse_top_picks(Some("-1")), DEFAULT_TOP_PICKS);
    }
}
