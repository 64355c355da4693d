// src/config/mod.rs

pub mod euler_config;

// Re-export main types for convenience
pub use euler_config::{EulerConfig, PrimeCacheConfig, PrimalityConfig};
