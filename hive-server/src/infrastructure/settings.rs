use anyhow::{Context, Result, anyhow};

/// Development fallback so the demo starts with no environment at all.
/// Anything deployed for real must set JWT_SECRET.
const DEV_JWT_SECRET: &str = "hive-dev-secret-0123456789abcdef0123456789abcdef";

#[derive(Debug, Clone)]
pub struct Settings {
    pub port: u16,
    pub log_level: String,
    pub cors_origins: Vec<String>,
    pub jwt_secret: String,
    pub jwt_ttl_seconds: i64,
    pub rate_limit_window_secs: u64,
    pub rate_limit_max_requests: u32,
}

impl Settings {
    pub fn from_env() -> Result<Self> {
        let port: u16 = std::env::var("PORT")
            .unwrap_or_else(|_| "5000".to_string())
            .parse()
            .context("Failed to parse PORT, expecting integer")?;

        let log_level = std::env::var("LOG_LEVEL")
            .or_else(|_| std::env::var("RUST_LOG"))
            .unwrap_or_else(|_| "info".to_string());

        let cors_origins =
            parse_cors_origins(std::env::var("CORS_ORIGINS").unwrap_or_else(|_| "*".to_string()));

        let jwt_secret = std::env::var("JWT_SECRET")
            .ok()
            .map(|value| value.trim().to_string())
            .filter(|value| !value.is_empty())
            .unwrap_or_else(|| DEV_JWT_SECRET.to_string());
        if jwt_secret.chars().count() < 32 {
            return Err(anyhow!("JWT_SECRET must be at least 32 characters"));
        }

        let jwt_ttl_seconds: i64 = std::env::var("JWT_TTL_SECONDS")
            .unwrap_or_else(|_| "86400".to_string())
            .parse()
            .context("Failed to parse JWT_TTL_SECONDS, expecting integer")?;

        let rate_limit_window_secs = parse_u64_env("RATE_LIMIT_WINDOW_SECS", 15 * 60)?;
        let rate_limit_max_requests = parse_u32_env("RATE_LIMIT_MAX_REQUESTS", 100)?;

        Ok(Self {
            port,
            log_level,
            cors_origins,
            jwt_secret,
            jwt_ttl_seconds,
            rate_limit_window_secs,
            rate_limit_max_requests,
        })
    }
}

fn parse_cors_origins(raw: String) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
        .map(str::to_string)
        .collect()
}

fn parse_u64_env(key: &str, default: u64) -> Result<u64> {
    let value = std::env::var(key)
        .unwrap_or_else(|_| default.to_string())
        .parse::<u64>()
        .with_context(|| format!("Failed to parse {key}, expecting positive integer"))?;

    if value == 0 {
        return Err(anyhow!("{key} must be > 0"));
    }
    Ok(value)
}

fn parse_u32_env(key: &str, default: u32) -> Result<u32> {
    let value = std::env::var(key)
        .unwrap_or_else(|_| default.to_string())
        .parse::<u32>()
        .with_context(|| format!("Failed to parse {key}, expecting positive integer"))?;

    if value == 0 {
        return Err(anyhow!("{key} must be > 0"));
    }
    Ok(value)
}
