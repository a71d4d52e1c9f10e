use figment::{
    providers::{Env, Format, Toml},
    Figment,
};
use serde::Deserialize;

/// Application configuration, derived from `Quiz.toml` and `QUIZ_*`
/// environment variables.
#[derive(Debug, Deserialize)]
pub struct Config {
    // secrets
    db_uri: String,
}

impl Config {
    /// Load the configuration, with environment variables taking precedence
    /// over the config file.
    pub fn load() -> crate::error::Result<Self> {
        let config = Figment::new()
            .merge(Toml::file("Quiz.toml"))
            .merge(Env::prefixed("QUIZ_"))
            .extract()?;
        Ok(config)
    }

    /// Connection URI for the backing MongoDB store.
    /// Configured via `QUIZ_DB_URI`.
    pub fn db_uri(&self) -> &str {
        &self.db_uri
    }
}

#[cfg(test)]
mod examples {
    use super::*;

    impl Config {
        pub fn example() -> Self {
            Self {
                db_uri: "mongodb://localhost:27017".to_string(),
            }
        }
    }
}
