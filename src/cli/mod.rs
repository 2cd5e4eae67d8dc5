pub mod calendar;
pub mod home;
pub mod recipe;
pub mod request;
pub mod schedule;
pub mod upcoming;

use anyhow::Result;
use recipebox_store::Store;
use time::Date;

use crate::{access_control::AccessControl, config::Config};

/// Everything a command needs: configuration, the storage gateway and the
/// login gate over it.
pub struct App {
    pub config: Config,
    pub store: Store,
    pub access: AccessControl,
}

impl App {
    pub fn new(config: Config, store: Store) -> Self {
        let access = AccessControl::new(config.auth.clone(), store.clone());

        Self {
            config,
            store,
            access,
        }
    }

    /// Opens the configured database, applying pending migrations first.
    pub async fn open(config: Config) -> Result<Self> {
        let pool = crate::db::create_pool(&config.database.url, config.database.max_connections)
            .await?;
        crate::db::run_migrations(&pool).await?;

        Ok(Self::new(config, Store(pool)))
    }

    pub fn today(&self) -> Date {
        recipebox_calendar::today(&self.config.calendar.timezone)
    }
}
