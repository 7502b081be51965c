//! Configuration module
//!
//! Server, upload, and CORS settings, read from the process environment (and an
//! optional `.env` file).

use std::env;

// Common constants
const SERVER_PORT: u16 = 3000;
const MAX_UPLOAD_SIZE_MB: usize = 50;
const HTTP_CONCURRENCY_LIMIT: usize = 1024;
const SERVICE_NAME: &str = "ExifEraser";
const STATIC_DIR: &str = "static";
const BYTES_PER_MB: usize = 1024 * 1024;

/// Application configuration.
#[derive(Clone, Debug)]
pub struct Config {
    pub server_port: u16,
    pub environment: String,
    pub cors_origins: Vec<String>,
    pub max_upload_size_mb: usize,
    pub service_name: String,
    pub static_dir: String,
    pub http_concurrency_limit: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server_port: SERVER_PORT,
            environment: "development".to_string(),
            cors_origins: vec!["*".to_string()],
            max_upload_size_mb: MAX_UPLOAD_SIZE_MB,
            service_name: SERVICE_NAME.to_string(),
            static_dir: STATIC_DIR.to_string(),
            http_concurrency_limit: HTTP_CONCURRENCY_LIMIT,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self, anyhow::Error> {
        dotenvy::dotenv().ok();
        Self::from_vars(|key| env::var(key).ok())
    }

    /// Build the configuration from an arbitrary variable source.
    pub fn from_vars<F>(var: F) -> Result<Self, anyhow::Error>
    where
        F: Fn(&str) -> Option<String>,
    {
        let environment = var("ENVIRONMENT")
            .or_else(|| var("APP_ENV"))
            .unwrap_or_else(|| "development".to_string());

        let cors_origins_str = var("CORS_ORIGINS").unwrap_or_else(|| "*".to_string());
        if is_production_name(&environment) && cors_origins_str.trim() == "*" {
            return Err(anyhow::anyhow!(
                "CORS_ORIGINS cannot be '*' in production. Please specify explicit origins."
            ));
        }

        let cors_origins: Vec<String> = cors_origins_str
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let config = Config {
            server_port: var("PORT")
                .unwrap_or_else(|| SERVER_PORT.to_string())
                .parse()
                .map_err(|_| anyhow::anyhow!("PORT must be a valid number"))?,
            environment,
            cors_origins,
            max_upload_size_mb: var("MAX_UPLOAD_SIZE_MB")
                .unwrap_or_else(|| MAX_UPLOAD_SIZE_MB.to_string())
                .parse()
                .map_err(|_| anyhow::anyhow!("MAX_UPLOAD_SIZE_MB must be a valid number"))?,
            service_name: var("SERVICE_NAME").unwrap_or_else(|| SERVICE_NAME.to_string()),
            static_dir: var("STATIC_DIR").unwrap_or_else(|| STATIC_DIR.to_string()),
            http_concurrency_limit: var("HTTP_CONCURRENCY_LIMIT")
                .and_then(|s| s.parse::<usize>().ok())
                .unwrap_or(HTTP_CONCURRENCY_LIMIT)
                .max(1),
        };

        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), anyhow::Error> {
        if self.server_port == 0 {
            return Err(anyhow::anyhow!("PORT must be greater than zero"));
        }

        if self.max_upload_size_mb == 0 {
            return Err(anyhow::anyhow!(
                "MAX_UPLOAD_SIZE_MB must be greater than zero"
            ));
        }

        if self.max_upload_size_mb.checked_mul(BYTES_PER_MB).is_none() {
            return Err(anyhow::anyhow!(
                "MAX_UPLOAD_SIZE_MB is too large: {}",
                self.max_upload_size_mb
            ));
        }

        if self.service_name.trim().is_empty() {
            return Err(anyhow::anyhow!("SERVICE_NAME must not be empty"));
        }

        Ok(())
    }

    /// Check if the application is running in production mode
    pub fn is_production(&self) -> bool {
        is_production_name(&self.environment)
    }

    pub fn server_port(&self) -> u16 {
        self.server_port
    }

    pub fn environment(&self) -> &str {
        &self.environment
    }

    pub fn cors_origins(&self) -> &[String] {
        &self.cors_origins
    }

    pub fn max_upload_size_mb(&self) -> usize {
        self.max_upload_size_mb
    }

    pub fn max_upload_size_bytes(&self) -> usize {
        self.max_upload_size_mb.saturating_mul(BYTES_PER_MB)
    }

    pub fn service_name(&self) -> &str {
        &self.service_name
    }

    pub fn static_dir(&self) -> &str {
        &self.static_dir
    }

    pub fn http_concurrency_limit(&self) -> usize {
        self.http_concurrency_limit
    }
}

fn is_production_name(environment: &str) -> bool {
    let environment = environment.to_lowercase();
    environment == "production" || environment == "prod"
}
