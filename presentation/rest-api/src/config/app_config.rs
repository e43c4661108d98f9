use super::{cors_config, import_config::ImportConfig, server_config::ServerConfig};
use persistence::backend::StorageConfig;
use poem::middleware::Cors;

pub struct AppConfig {
    pub server: ServerConfig,
    pub cors: Cors,
    pub storage: StorageConfig,
    pub import: ImportConfig,
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self {
            server: ServerConfig::from_env(),
            cors: cors_config::init_cors(),
            storage: StorageConfig::from_env(),
            import: ImportConfig::from_env(),
        }
    }
}
