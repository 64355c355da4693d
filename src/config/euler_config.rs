// src/config/euler_config.rs

use serde::{Deserialize, Serialize};
use config::{Config, ConfigBuilder, ConfigError, Environment, File};
use config::builder::DefaultState;
use std::path::Path;

/// Main toolkit configuration structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EulerConfig {
    /// Logging level (error, warn, info, debug, trace)
    pub log_level: String,

    /// Matrix file used by the path-sum report
    pub matrix_path: Option<String>,

    /// Growable prime list tuning
    pub prime_cache: PrimeCacheConfig,

    /// Limited-range primality tester tuning
    pub primality: PrimalityConfig,
}

/// Growth policy for the cached prime list
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PrimeCacheConfig {
    /// Number of primes appended each time the cache runs short (default: 1000)
    pub increment: usize,
}

/// Tuning for the two-tier trial division tester
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PrimalityConfig {
    /// Decimal digits of the precomputed prime table (default: 4, i.e. primes below 10^4)
    pub tuning: u32,
}

impl Default for EulerConfig {
    fn default() -> Self {
        EulerConfig {
            log_level: "info".to_string(),
            matrix_path: None,
            prime_cache: PrimeCacheConfig::default(),
            primality: PrimalityConfig::default(),
        }
    }
}

impl Default for PrimeCacheConfig {
    fn default() -> Self {
        PrimeCacheConfig { increment: 1000 }
    }
}

impl Default for PrimalityConfig {
    fn default() -> Self {
        PrimalityConfig { tuning: 4 }
    }
}

impl EulerConfig {
    fn defaults() -> Result<ConfigBuilder<DefaultState>, ConfigError> {
        Config::builder()
            .set_default("log_level", "info")?
            .set_default("prime_cache.increment", 1000)?
            .set_default("primality.tuning", 4)
    }

    fn finish(builder: ConfigBuilder<DefaultState>) -> Result<Self, ConfigError> {
        // Override with environment variables (prefix: EULER_, nesting: __)
        let config = builder
            .add_source(
                Environment::with_prefix("EULER")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;
        config.try_deserialize()
    }

    /// Load configuration with precedence: config file → env vars → defaults
    pub fn load() -> Result<Self, ConfigError> {
        let mut builder = Self::defaults()?;

        // Try to load from config files (TOML preferred, YAML fallback)
        if Path::new("euler.toml").exists() {
            builder = builder.add_source(File::with_name("euler.toml"));
        } else if Path::new("euler.yaml").exists() {
            builder = builder.add_source(File::with_name("euler.yaml"));
        }

        Self::finish(builder)
    }

    /// Load configuration with custom file path
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let mut builder = Self::defaults()?;

        if path.as_ref().exists() {
            builder = builder.add_source(File::from(path.as_ref()));
        }

        Self::finish(builder)
    }
}
