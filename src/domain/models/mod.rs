pub mod config;
pub mod document;

pub use config::{
    CacheConfig, Config, LogFormat, LoggingConfig, RotationPolicy, ServerConfig, StorageConfig,
};
pub use document::{validate_id, Document, MAX_ID_LEN};
