use crate::error::Result;
use serde::{Deserialize, Serialize};

pub const DEFAULT_MAX_AGE_SECONDS: u32 = 3600;

/// A bucket CORS document in the shape `gsutil cors set` reads: a bare JSON array of rules.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CorsConfiguration {
    pub rules: Vec<CorsRule>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CorsRule {
    pub origin: Vec<String>,
    pub method: Vec<String>,
    pub max_age_seconds: u32,
    pub response_header: Vec<String>,
}

impl CorsRule {
    /// Any origin, the five methods the web app uses, and the headers it reads back.
    pub fn permissive(max_age_seconds: u32) -> Self {
        Self {
            origin: vec!["*".to_string()],
            method: ["GET", "POST", "PUT", "DELETE", "HEAD"]
                .iter()
                .map(|m| m.to_string())
                .collect(),
            max_age_seconds,
            response_header: [
                "Content-Type",
                "Access-Control-Allow-Origin",
                "Access-Control-Allow-Methods",
                "Access-Control-Allow-Headers",
            ]
            .iter()
            .map(|h| h.to_string())
            .collect(),
        }
    }
}

impl CorsConfiguration {
    pub fn new(rules: Vec<CorsRule>) -> Self {
        Self { rules }
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

impl Default for CorsConfiguration {
    fn default() -> Self {
        Self::new(vec![CorsRule::permissive(DEFAULT_MAX_AGE_SECONDS)])
    }
}
