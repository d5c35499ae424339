// src/config.rs
use std::{env, time::Duration};
use thiserror::Error;

#[derive(Clone, Debug)]
pub struct AppConfig {
    listen_addr: String,
    site_url: String,
    revalidate: Duration,
    subscriber_source: String,
    sanity: SanityConfig,
}

/// Connection settings for the content backend.
#[derive(Clone, Debug)]
pub struct SanityConfig {
    pub project_id: String,
    pub dataset: String,
    pub api_version: String,
    /// Write token; reads work without one.
    pub token: Option<String>,
    /// Overrides `https://{project_id}.api.sanity.io`.
    pub api_host: Option<String>,
    pub timeout: Duration,
}

impl SanityConfig {
    pub fn api_host(&self) -> String {
        self.api_host
            .clone()
            .unwrap_or_else(|| format!("https://{}.api.sanity.io", self.project_id))
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing environment variable: {0}")]
    Missing(&'static str),
    #[error("invalid configuration: {0}")]
    Invalid(String),
}

fn default_listen_addr() -> String {
    "127.0.0.1:8080".into()
}

fn default_site_url() -> String {
    "https://trustedhomeessentials.com".into()
}

fn default_dataset() -> String {
    "production".into()
}

fn default_api_version() -> String {
    "2023-05-03".into()
}

fn default_subscriber_source() -> String {
    "maintenance-checklist".into()
}

const fn default_revalidate_secs() -> u64 {
    60
}

const fn default_timeout_secs() -> u64 {
    10
}

fn non_empty_var(key: &str) -> Option<String> {
    env::var(key)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn seconds_var(key: &'static str, default: u64) -> Result<Duration, ConfigError> {
    match non_empty_var(key) {
        Some(raw) => raw
            .parse::<u64>()
            .map(Duration::from_secs)
            .map_err(|_| ConfigError::Invalid(format!("{key} must be a whole number of seconds"))),
        None => Ok(Duration::from_secs(default)),
    }
}

impl AppConfig {
    /// Build configuration from environment variables. Uses sensible defaults
    /// for optional values and validates required keys.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let project_id = non_empty_var("SANITY_PROJECT_ID")
            .or_else(|| non_empty_var("NEXT_PUBLIC_SANITY_PROJECT_ID"))
            .ok_or(ConfigError::Missing("SANITY_PROJECT_ID"))?;
        if !project_id
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-')
        {
            return Err(ConfigError::Invalid(
                "SANITY_PROJECT_ID may only contain letters, digits and dashes".into(),
            ));
        }

        let dataset = non_empty_var("SANITY_DATASET")
            .or_else(|| non_empty_var("NEXT_PUBLIC_SANITY_DATASET"))
            .unwrap_or_else(default_dataset);
        let api_version = non_empty_var("SANITY_API_VERSION").unwrap_or_else(default_api_version);
        let token =
            non_empty_var("SANITY_API_TOKEN").or_else(|| non_empty_var("SANITY_API_WRITE_TOKEN"));
        let api_host = non_empty_var("SANITY_API_HOST");

        let site_url = non_empty_var("SITE_URL").unwrap_or_else(default_site_url);
        if url::Url::parse(&site_url).is_err() {
            return Err(ConfigError::Invalid(format!("SITE_URL is not a URL: {site_url}")));
        }

        Ok(Self {
            listen_addr: non_empty_var("LISTEN_ADDR").unwrap_or_else(default_listen_addr),
            site_url: site_url.trim_end_matches('/').to_string(),
            revalidate: seconds_var("REVALIDATE_SECONDS", default_revalidate_secs())?,
            subscriber_source: non_empty_var("SUBSCRIBER_SOURCE")
                .unwrap_or_else(default_subscriber_source),
            sanity: SanityConfig {
                project_id,
                dataset,
                api_version,
                token,
                api_host,
                timeout: seconds_var("HTTP_TIMEOUT_SECONDS", default_timeout_secs())?,
            },
        })
    }

    pub fn listen_addr(&self) -> &str {
        &self.listen_addr
    }

    pub fn site_url(&self) -> &str {
        &self.site_url
    }

    /// Freshness hint sent to caches in front of the site.
    pub fn revalidate(&self) -> Duration {
        self.revalidate
    }

    pub fn subscriber_source(&self) -> &str {
        &self.subscriber_source
    }

    pub fn sanity(&self) -> &SanityConfig {
        &self.sanity
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sanity(api_host: Option<&str>) -> SanityConfig {
        SanityConfig {
            project_id: "abc123".into(),
            dataset: "production".into(),
            api_version: "2023-05-03".into(),
            token: None,
            api_host: api_host.map(str::to_string),
            timeout: Duration::from_secs(10),
        }
    }

    #[test]
    fn api_host_defaults_to_project_subdomain() {
        assert_eq!(sanity(None).api_host(), "https://abc123.api.sanity.io");
        assert_eq!(
            sanity(Some("http://127.0.0.1:9999")).api_host(),
            "http://127.0.0.1:9999"
        );
    }
}
