#![allow(dead_code)]

use std::path::PathBuf;

use recipebox::{
    Config,
    cli::App,
    config::{AuthConfig, CalendarConfig, DatabaseConfig, ObservabilityConfig},
};
use recipebox_store::Store;

pub fn test_config(path: PathBuf) -> Config {
    Config {
        database: DatabaseConfig {
            url: format!("sqlite:{}", path.display()),
            max_connections: 1,
        },
        observability: ObservabilityConfig::default(),
        calendar: CalendarConfig {
            timezone: "UTC".to_string(),
            home_preview_limit: None,
        },
        auth: AuthConfig::default(),
    }
}

pub async fn setup_test_app(path: PathBuf) -> anyhow::Result<App> {
    let config = test_config(path);
    let pool = recipebox::create_pool(&config.database.url, 1).await?;
    recipebox::db::run_migrations(&pool).await?;

    Ok(App::new(config, Store(pool)))
}
