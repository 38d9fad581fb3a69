use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use dotenv::dotenv;
use std::{env, fmt, str::FromStr, time::Duration};

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum AppEnvironment {
    Development,
    Production,
    Testing,
}

impl FromStr for AppEnvironment {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "development" => Ok(AppEnvironment::Development),
            "production" => Ok(AppEnvironment::Production),
            "testing" => Ok(AppEnvironment::Testing),
            _ => Err(ConfigError::Message(format!("Invalid environment: {}", s))),
        }
    }
}

/// Where the static content resources are read from.
#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum ContentSourceKind {
    Http,
    File,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(rename_all = "snake_case")]
pub struct AppConfig {
    #[serde(default = "default_env")]
    pub env: AppEnvironment,

    #[serde(default = "default_name")]
    pub name: String,

    #[serde(default = "default_port")]
    pub port: u16,

    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_worker_count")]
    pub worker_count: usize,

    #[serde(default = "default_content_source")]
    pub content_source: ContentSourceKind,

    #[serde(default)]
    pub content_base_url: String,

    #[serde(default = "default_content_dir")]
    pub content_dir: String,

    #[serde(default = "default_blog_resource")]
    pub blog_resource: String,

    #[serde(default = "default_portfolio_resource")]
    pub portfolio_resource: String,

    #[serde(default = "default_fetch_timeout")]
    pub fetch_timeout_secs: u64,

    #[serde(default = "default_cors_origins")]
    pub cors_allowed_origins: Vec<String>,
}

fn default_env() -> AppEnvironment {
    AppEnvironment::Development
}
fn default_name() -> String {
    "Portfolio-Site".to_string()
}
fn default_port() -> u16 {
    8080
}
fn default_host() -> String {
    "127.0.0.1".to_string()
}
fn default_worker_count() -> usize {
    num_cpus::get()
}
fn default_content_source() -> ContentSourceKind {
    ContentSourceKind::File
}
fn default_content_dir() -> String {
    "public".to_string()
}
fn default_blog_resource() -> String {
    "blog.json".to_string()
}
fn default_portfolio_resource() -> String {
    "portfolio.json".to_string()
}
fn default_fetch_timeout() -> u64 {
    10
}
fn default_cors_origins() -> Vec<String> {
    vec!["*".to_string()]
}

impl AppConfig {
    pub fn new() -> Result<Self, ConfigError> {
        dotenv().ok();

        let raw_env = env::var("APP_ENV").unwrap_or_else(|_| "development".into());
        let env_name = AppEnvironment::from_str(&raw_env)
            .map_err(|_| ConfigError::Message(format!("Invalid APP_ENV value: {}", raw_env)))?;

        let builder = Config::builder()
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{}", env_name)).required(false))
            .add_source(
                Environment::with_prefix("APP")
                    .prefix_separator("_")
                    .try_parsing(true)
                    .list_separator(",")
                    .with_list_parse_key("cors_allowed_origins")
                    .ignore_empty(true),
            );

        let mut config: Self = builder.build()?.try_deserialize()?;

        config.env = env_name;

        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let mut errors = Vec::new();

        match self.content_source {
            ContentSourceKind::Http => match url::Url::parse(&self.content_base_url) {
                Ok(url) if url.scheme() == "http" || url.scheme() == "https" => {}
                Ok(_) => errors.push("CONTENT_BASE_URL must use http or https".to_string()),
                Err(_) => errors.push("CONTENT_BASE_URL must be a valid URL when content_source is http".to_string()),
            },
            ContentSourceKind::File => {
                if self.content_dir.trim().is_empty() {
                    errors.push("CONTENT_DIR cannot be empty".to_string());
                }
            }
        }
        if self.blog_resource.trim().is_empty() {
            errors.push("BLOG_RESOURCE cannot be empty".to_string());
        }
        if self.portfolio_resource.trim().is_empty() {
            errors.push("PORTFOLIO_RESOURCE cannot be empty".to_string());
        }
        if self.fetch_timeout_secs == 0 {
            errors.push("FETCH_TIMEOUT_SECS must be greater than zero".to_string());
        }
        if self.is_production() && self.cors_origins().iter().any(|o| o == "*") {
            errors.push("Wildcard CORS (*) is not allowed in production".to_string());
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(ConfigError::Message(errors.join(", ")))
        }
    }

    pub fn is_production(&self) -> bool {
        self.env == AppEnvironment::Production
    }

    pub fn fetch_timeout(&self) -> Duration {
        Duration::from_secs(self.fetch_timeout_secs)
    }

    pub fn cors_origins(&self) -> Vec<String> {
        self.cors_allowed_origins
            .iter()
            .flat_map(|origin| origin.split(','))
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect()
    }
}

impl fmt::Display for AppEnvironment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            AppEnvironment::Development => "development",
            AppEnvironment::Production => "production",
            AppEnvironment::Testing => "testing",
        };
        write!(f, "{s}")
    }
}

impl fmt::Display for ContentSourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ContentSourceKind::Http => "http",
            ContentSourceKind::File => "file",
        };
        write!(f, "{s}")
    }
}
