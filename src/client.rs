use crate::error::{ClientError, Result};
use reqwest::{Client, ClientBuilder};
use std::time::Duration;
use url::Url;

/// Default request timeout (5 minutes)
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(300);
/// Default connect timeout
pub const DEFAULT_CONNECT_TIMEOUT: Duration = Duration::from_secs(10);
/// Default idle connections kept per host
pub const DEFAULT_POOL_MAX_IDLE_PER_HOST: usize = 50;

/// Create the HTTP client for REST API requests
/// with settings for connection pooling and timeouts taken from `config`
pub fn create_rest_client(config: &Config) -> Result<Client> {
    let mut builder = ClientBuilder::new()
        .pool_max_idle_per_host(config.pool_max_idle_per_host)
        .timeout(config.timeout)
        .connect_timeout(config.connect_timeout);

    if let Some(ref user_agent) = config.user_agent {
        builder = builder.user_agent(user_agent.as_str());
    }

    Ok(builder.build()?)
}

/// Configuration for the client
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Absolute URL that endpoint paths are resolved against
    pub base_url: Url,
    /// User-Agent sent by the default transport
    pub user_agent: Option<String>,
    /// Whole-request timeout
    pub timeout: Duration,
    /// Connection establishment timeout
    pub connect_timeout: Duration,
    /// Idle pooled connections kept per host
    pub pool_max_idle_per_host: usize,
}

impl Config {
    /// Create a new configuration for the given base URL.
    ///
    /// The URL must be absolute and able to anchor relative paths
    /// (`http://host:port`, not `mailto:...`).
    pub fn new(base_url: &str) -> Result<Self> {
        let base_url = Url::parse(base_url)?;
        if base_url.cannot_be_a_base() {
            return Err(ClientError::InvalidBaseUrl(base_url.to_string()));
        }

        Ok(Config {
            base_url,
            user_agent: None,
            timeout: DEFAULT_TIMEOUT,
            connect_timeout: DEFAULT_CONNECT_TIMEOUT,
            pool_max_idle_per_host: DEFAULT_POOL_MAX_IDLE_PER_HOST,
        })
    }

    /// Set the User-Agent
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    /// Set the request timeout
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the connect timeout
    pub fn with_connect_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout = timeout;
        self
    }

    /// Set the number of idle connections kept per host
    pub fn with_pool_max_idle_per_host(mut self, max: usize) -> Self {
        self.pool_max_idle_per_host = max;
        self
    }
}
