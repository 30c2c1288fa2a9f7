use serde::Deserialize;

/// Configuration options of the Shelf server, read from `config/*.yaml`
/// and `APP_*` environment variables.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// Interface the HTTP server binds to.
    pub address: String,
    pub port: u16,
    /// Path of the SQLite database file.
    pub database_url: String,
    /// Glob of Tera templates, e.g. `templates/**/*`.
    pub templates_dir: String,
    /// Directory served under `/assets`.
    pub static_dir: String,
}
