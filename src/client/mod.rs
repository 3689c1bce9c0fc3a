pub mod api_client;
pub mod auth;
pub mod base_path;
pub mod options;

pub use api_client::ApiClient;
pub use base_path::BasePath;
pub use options::ClientOptions;
