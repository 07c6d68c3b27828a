use crate::cors::{CorsConfiguration, CorsRule, DEFAULT_MAX_AGE_SECONDS};
use anyhow::Result;
use std::env;
use std::path::PathBuf;

pub const DEFAULT_BUCKET: &str = "rail-statistics.firebasestorage.app";
pub const DEFAULT_TOOL: &str = "gsutil";
pub const DEFAULT_TEMP_FILE: &str = "temp_cors.json";

#[derive(Debug, Clone)]
pub struct Config {
    pub bucket: String,
    pub tool: String,
    pub temp_file: PathBuf,
    pub policy: CorsConfiguration,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            bucket: DEFAULT_BUCKET.to_string(),
            tool: DEFAULT_TOOL.to_string(),
            temp_file: PathBuf::from(DEFAULT_TEMP_FILE),
            policy: CorsConfiguration::default(),
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        let max_age_seconds = env::var("CORS_MAX_AGE_SECONDS")
            .unwrap_or_else(|_| DEFAULT_MAX_AGE_SECONDS.to_string())
            .parse::<u32>()?;

        Ok(Config {
            bucket: env::var("CORS_BUCKET").unwrap_or_else(|_| DEFAULT_BUCKET.to_string()),
            tool: env::var("CORS_TOOL").unwrap_or_else(|_| DEFAULT_TOOL.to_string()),
            temp_file: PathBuf::from(
                env::var("CORS_TEMP_FILE").unwrap_or_else(|_| DEFAULT_TEMP_FILE.to_string()),
            ),
            policy: CorsConfiguration::new(vec![CorsRule::permissive(max_age_seconds)]),
        })
    }

    pub fn bucket_uri(&self) -> String {
        format!("gs://{}", self.bucket)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_firebase_bucket() {
        let config = Config::default();
        assert_eq!(config.bucket_uri(), "gs://rail-statistics.firebasestorage.app");
        assert_eq!(config.tool, "gsutil");
        assert_eq!(config.temp_file, PathBuf::from("temp_cors.json"));
        assert_eq!(config.policy, CorsConfiguration::default());
    }

    #[test]
    fn bucket_uri_uses_configured_bucket() {
        let config = Config {
            bucket: "assets.example.com".into(),
            ..Config::default()
        };
        assert_eq!(config.bucket_uri(), "gs://assets.example.com");
    }
}
