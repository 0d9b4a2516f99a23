use serde::Deserialize;

/// Application configuration. The storage location is the only
/// setting; everything else about the app is fixed.
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub database_url: String,
}

impl AppConfig {
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();
        let database_url = std::env::var("DATABASE_URL")
            .unwrap_or_else(|_| "sqlite://mindcheck.db".into());
        Self { database_url }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn falls_back_to_local_file() {
        // DATABASE_URL may be set in the environment; only assert the
        // default when it is absent.
        if std::env::var("DATABASE_URL").is_err() {
            let config = AppConfig::from_env();
            assert_eq!(config.database_url, "sqlite://mindcheck.db");
        }
    }
}
