use std::net::SocketAddr;
use std::path::PathBuf;
use std::time::Duration;

use anyhow::{bail, Context, Result};

pub const DEFAULT_LISTEN_ADDR: &str = "127.0.0.1:3000";
pub const DEFAULT_VK_PATH: &str = "verification_key.json";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    pub listen_addr: SocketAddr,
    pub vk_path: PathBuf,
    pub verify_timeout: Duration,
    /// Load the key once at startup instead of on every request
    pub cache_vk: bool,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let env_or = |key: &str, default: &str| lookup(key).unwrap_or_else(|| default.into());

        let listen_addr = env_or("PV_LISTEN_ADDR", DEFAULT_LISTEN_ADDR);
        let listen_addr: SocketAddr = listen_addr
            .parse()
            .with_context(|| format!("PV_LISTEN_ADDR: invalid address '{listen_addr}'"))?;

        let secs = env_or(
            "PV_VERIFY_TIMEOUT_SECS",
            &pv_core::DEFAULT_TIMEOUT.as_secs().to_string(),
        );
        let secs: u64 = secs
            .parse()
            .with_context(|| format!("PV_VERIFY_TIMEOUT_SECS: not a number '{secs}'"))?;
        if secs == 0 {
            bail!("PV_VERIFY_TIMEOUT_SECS must be at least 1");
        }

        let cache_vk = match env_or("PV_CACHE_VK", "false").to_ascii_lowercase().as_str() {
            "1" | "true" | "yes" => true,
            "0" | "false" | "no" => false,
            other => bail!("PV_CACHE_VK: expected true or false, got '{other}'"),
        };

        Ok(Self {
            listen_addr,
            vk_path: PathBuf::from(env_or("PV_VK_PATH", DEFAULT_VK_PATH)),
            verify_timeout: Duration::from_secs(secs),
            cache_vk,
        })
    }
}
