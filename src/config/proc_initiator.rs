use crate::config::settings::{LogFormat, LoggingConfig};
use crate::config::types::ServiceConfig;

pub fn initiate_default_values(mut config: ServiceConfig) -> ServiceConfig {
    config.client.origin = config.client.origin.trim().trim_end_matches('/').to_owned();
    config.client.base_path = config.client.base_path.trim().to_owned();
    config.storage.token_key = config.storage.token_key.trim().to_owned();

    if config.logging.is_none() {
        config.logging = Some(LoggingConfig::new("info".to_owned(), LogFormat::from_env()));
    }

    config
}
