use ::config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::PathBuf;

#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    pub server_addr: String,
    pub public_dir: PathBuf,
    pub request_timeout_secs: u64,

    pub supabase_url: Option<String>,
    pub supabase_anon_key: Option<String>,
    /// JSON file of posts served instead of querying Supabase
    pub local_store: Option<PathBuf>,
}

/// Where posts are read from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreConfig {
    Supabase { url: String, anon_key: String },
    Local(PathBuf),
}

impl AppConfig {
    /// `config.toml` in the working directory if present, overridden by
    /// `BLOG_*` environment variables.
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_builder(
            Config::builder()
                .add_source(File::with_name("config").required(false))
                .add_source(Environment::with_prefix("BLOG")),
        )
    }

    fn from_builder(
        builder: ::config::ConfigBuilder<::config::builder::DefaultState>,
    ) -> Result<Self, ConfigError> {
        builder
            .set_default("server_addr", "0.0.0.0:8010")?
            .set_default("public_dir", "public")?
            .set_default("request_timeout_secs", 10)?
            .build()?
            .try_deserialize()
    }

    pub fn request_timeout(&self) -> std::time::Duration {
        std::time::Duration::from_secs(self.request_timeout_secs)
    }

    pub fn store(&self) -> Result<StoreConfig, ConfigError> {
        if let Some(path) = &self.local_store {
            return Ok(StoreConfig::Local(path.clone()));
        }

        let url = self
            .supabase_url
            .clone()
            .ok_or_else(|| ConfigError::NotFound("supabase_url".to_owned()))?;
        let anon_key = self
            .supabase_anon_key
            .clone()
            .ok_or_else(|| ConfigError::NotFound("supabase_anon_key".to_owned()))?;

        Ok(StoreConfig::Supabase { url, anon_key })
    }
}
