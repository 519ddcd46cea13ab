use std::net::SocketAddr;
use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("BLOG_ADDR {value:?} is not a socket address: {source}")]
    Addr {
        value: String,
        source: std::net::AddrParseError,
    },
    #[error("BLOG_STORE must be \"file\" or \"memory\", got {0:?}")]
    StoreBackend(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreConfig {
    File(PathBuf),
    Memory,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub addr: SocketAddr,
    pub store: StoreConfig,
}

impl Config {
    /// Load configuration from `BLOG_ADDR`, `BLOG_STORE` and `BLOG_STORE_PATH`
    pub fn from_env() -> Result<Config, ConfigError> {
        Config::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Config, ConfigError> {
        let addr = lookup("BLOG_ADDR").unwrap_or_else(|| crate::blog::DEFAULT_ADDR.to_owned());
        let addr = addr
            .parse::<SocketAddr>()
            .map_err(|source| ConfigError::Addr { value: addr, source })?;

        let store = match lookup("BLOG_STORE").as_deref().unwrap_or("file") {
            "file" => StoreConfig::File(
                lookup("BLOG_STORE_PATH")
                    .unwrap_or_else(|| crate::blog::DEFAULT_STORE_PATH.to_owned())
                    .into(),
            ),
            "memory" => StoreConfig::Memory,
            other => return Err(ConfigError::StoreBackend(other.to_owned())),
        };

        Ok(Config { addr, store })
    }
}
