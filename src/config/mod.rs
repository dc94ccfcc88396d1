//! Configuration module for the portfolio backend.
//!
//! All configuration is loaded from environment variables with sensible defaults.

use std::env;
use std::net::SocketAddr;
use std::time::Duration;

/// Password accepted when `PORTFOLIO_ADMIN_PASSWORD` is unset.
pub const DEFAULT_ADMIN_PASSWORD: &str = "admin123";

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Password that unlocks admin mode
    pub admin_password: String,
    /// Address to bind the server to
    pub bind_addr: SocketAddr,
    /// Log level (trace, debug, info, warn, error)
    pub log_level: String,
    /// Simulated processing time for contact form submissions
    pub contact_delay: Duration,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let admin_password = env::var("PORTFOLIO_ADMIN_PASSWORD")
            .unwrap_or_else(|_| DEFAULT_ADMIN_PASSWORD.to_string());

        let bind_addr = env::var("PORTFOLIO_BIND_ADDR")
            .unwrap_or_else(|_| "127.0.0.1:8080".to_string())
            .parse()
            .expect("Invalid PORTFOLIO_BIND_ADDR format");

        let log_level = env::var("PORTFOLIO_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        let contact_delay = env::var("PORTFOLIO_CONTACT_DELAY_MS")
            .ok()
            .and_then(|v| v.parse::<u64>().ok())
            .map(Duration::from_millis)
            .unwrap_or(Duration::from_millis(1500));

        Self {
            admin_password,
            bind_addr,
            log_level,
            contact_delay,
        }
    }
}
