//! Local login gate for the builder commands.
//!
//! Credentials come from the `auth` config section. A successful login sets
//! the persisted session flag; builder commands call [`AccessControl::require_login`]
//! before touching recipes, the schedule or the request inbox.

use recipebox_shared::Error;
use recipebox_store::Store;

use crate::config::AuthConfig;

#[derive(Clone)]
pub struct AccessControl {
    auth: AuthConfig,
    store: Store,
}

impl AccessControl {
    pub fn new(auth: AuthConfig, store: Store) -> Self {
        Self { auth, store }
    }

    pub async fn login(&self, username: &str, password: &str) -> recipebox_shared::Result<()> {
        if username.trim() != self.auth.username || password != self.auth.password {
            tracing::warn!(username, "login rejected");
            return Err(Error::Forbidden);
        }

        self.store.set_logged_in(true).await?;
        tracing::info!(username, "logged in");

        Ok(())
    }

    pub async fn logout(&self) -> recipebox_shared::Result<()> {
        self.store.set_logged_in(false).await?;
        tracing::info!("logged out");

        Ok(())
    }

    pub async fn require_login(&self) -> recipebox_shared::Result<()> {
        if self.store.is_logged_in().await? {
            return Ok(());
        }

        tracing::debug!("builder command without session");

        Err(Error::Forbidden)
    }
}
