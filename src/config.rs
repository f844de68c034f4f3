use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid configuration: {0}")]
    ValidationError(String),
}

#[derive(Debug, Clone)]
pub struct Config {
    /// Shared secret gating upload and delete actions. Always injected at
    /// startup, never compiled in.
    pub admin_password: String,
    /// Path of the catalog JSON document.
    pub catalog_path: String,
    /// Maximum upload size in bytes.
    pub max_upload_size: u64,
    pub port: u16,
    /// Directory holding the uploaded files.
    pub upload_dir: String,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn load() -> Result<Self, ConfigError> {
        let admin_password = std::env::var("ADMIN_PASSWORD").unwrap_or_default();

        let catalog_path =
            std::env::var("CATALOG_PATH").unwrap_or_else(|_| "./books.json".to_string());

        let max_upload_size = std::env::var("MAX_UPLOAD_SIZE")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(50 * 1024 * 1024); // 50MB

        let port = std::env::var("PORT")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(3001);

        let upload_dir = std::env::var("UPLOAD_DIR").unwrap_or_else(|_| "./uploads".to_string());

        let config = Config {
            admin_password,
            catalog_path,
            max_upload_size,
            port,
            upload_dir,
        };

        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.admin_password.is_empty() {
            return Err(ConfigError::ValidationError(
                "ADMIN_PASSWORD must be set".to_string(),
            ));
        }

        Ok(())
    }
}
