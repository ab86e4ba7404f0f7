use anyhow::{Context, Result};
use secrecy::Secret;
use std::env;
use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;
use url::Url;
use validator::Validate;

#[derive(Debug, Clone, Validate)]
pub struct Settings {
    #[validate]
    pub server: ServerSettings,
    #[validate]
    pub apod: ApodSettings,
}

#[derive(Debug, Clone, Validate)]
pub struct ServerSettings {
    #[validate(custom = "validate_ip_addr")]
    pub bind_address: String,
    #[validate(range(min = 1024, max = 65535))]
    pub port: u16,
    /// Directory holding the page shell and the files served under /static
    pub assets_dir: PathBuf,
}

#[derive(Debug, Clone, Validate)]
pub struct ApodSettings {
    #[validate(custom = "validate_url")]
    pub endpoint: String,
    pub api_key: Secret<String>,
    #[validate(range(min = 1, max = 300))]
    pub timeout_seconds: u64,
}

impl Settings {
    /// Load configuration from environment variables. Every variable has a
    /// default, so the service runs with no configuration at all.
    pub fn load() -> Result<Self> {
        // Load .env file if it exists (for development)
        dotenv::dotenv().ok();

        let settings = Settings {
            server: ServerSettings::from_env()?,
            apod: ApodSettings::from_env()?,
        };

        settings
            .validate_all()
            .context("Configuration validation failed")?;

        Ok(settings)
    }

    pub fn validate_all(&self) -> Result<(), validator::ValidationErrors> {
        self.validate()?;
        self.server.validate()?;
        self.apod.validate()?;
        Ok(())
    }
}

impl ServerSettings {
    fn from_env() -> Result<Self> {
        let listen_address = env::var("LISTEN_ADDRESS")
            .unwrap_or_else(|_| "127.0.0.1:3000".to_string());

        let socket_addr: SocketAddr = listen_address
            .parse()
            .context("Invalid LISTEN_ADDRESS format. Expected format: 'host:port'")?;

        Ok(ServerSettings {
            bind_address: socket_addr.ip().to_string(),
            port: socket_addr.port(),
            assets_dir: env::var("ASSETS_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from("assets")),
        })
    }

    pub fn bind(&self) -> Result<SocketAddr> {
        format!("{}:{}", self.bind_address, self.port)
            .parse()
            .context("Invalid listen address")
    }
}

impl ApodSettings {
    fn from_env() -> Result<Self> {
        Ok(ApodSettings {
            endpoint: env::var("APOD_ENDPOINT")
                .unwrap_or_else(|_| "https://api.nasa.gov/planetary/apod".to_string()),
            api_key: Secret::new(
                env::var("APOD_API_KEY").unwrap_or_else(|_| "DEMO_KEY".to_string()),
            ),
            timeout_seconds: env::var("APOD_TIMEOUT_SECONDS")
                .map(|v| v.parse().unwrap_or(30))
                .unwrap_or(30),
        })
    }
}

fn validate_ip_addr(addr: &str) -> Result<(), validator::ValidationError> {
    addr.parse::<IpAddr>()
        .map(|_| ())
        .map_err(|_| validator::ValidationError::new("invalid_ip_address"))
}

fn validate_url(url: &str) -> Result<(), validator::ValidationError> {
    Url::parse(url)
        .map(|_| ())
        .map_err(|_| validator::ValidationError::new("invalid_url"))
}
