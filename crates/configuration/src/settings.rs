use crate::error::ConfigError;
use serde::Deserialize;

/// The root configuration structure for the entire application.
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub server: ServerSettings,
    pub database: DatabaseSettings,
    pub templates: TemplateSettings,
}

/// Contains parameters for the HTTP listener.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    /// The interface to bind (e.g., "127.0.0.1" for local development).
    pub host: String,
    /// The TCP port to listen on.
    pub port: u16,
}

/// Contains parameters for the SQLite store.
#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseSettings {
    /// Path to the store file. The schema is owned and populated by an
    /// external collaborator; this application only reads it.
    pub path: String,
}

/// Contains parameters for the view-rendering layer.
#[derive(Debug, Clone, Deserialize)]
pub struct TemplateSettings {
    /// Glob from which the Tera template set is loaded at startup
    /// (e.g., "templates/**/*.html").
    pub glob: String,
}

impl Settings {
    /// Checks the invariants that deserialization alone cannot express.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.database.path.trim().is_empty() {
            return Err(ConfigError::Validation(
                "database.path must not be empty".to_string(),
            ));
        }
        if self.templates.glob.trim().is_empty() {
            return Err(ConfigError::Validation(
                "templates.glob must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}

impl ServerSettings {
    /// The listen address in `host:port` form.
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
