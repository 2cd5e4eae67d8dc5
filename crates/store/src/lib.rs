//! Storage gateway over the key-value `storage` table.
//!
//! Every persisted record kind is read and written through [`Store`], so the
//! schedule is normalized in exactly one place and malformed documents
//! degrade to empty collections instead of errors.

use recipebox_db::table::Storage;
use recipebox_shared::{
    recipe::Recipe,
    request::MealRequest,
    schedule::{self, Schedule, ScheduleEntry},
};
use sea_query::{Expr, ExprTrait, OnConflict, Query, SqliteQueryBuilder};
use sea_query_sqlx::SqlxBinder;
use serde::{Serialize, de::DeserializeOwned};
use serde_json::Value;
use sqlx::SqlitePool;
use time::OffsetDateTime;

pub const RECIPES_KEY: &str = "recipes";
pub const SCHEDULE_KEY: &str = "schedule";
pub const REQUESTS_KEY: &str = "requests";
pub const SESSION_KEY: &str = "session";

#[derive(Clone)]
pub struct Store(pub SqlitePool);

impl Store {
    pub async fn get(&self, key: &str) -> recipebox_shared::Result<Option<String>> {
        let statement = Query::select()
            .columns([Storage::Value])
            .from(Storage::Table)
            .and_where(Expr::col(Storage::Key).eq(key))
            .limit(1)
            .to_owned();

        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);

        let row = sqlx::query_as_with::<_, (String,), _>(&sql, values)
            .fetch_optional(&self.0)
            .await?;

        Ok(row.map(|(value,)| value))
    }

    pub async fn set(&self, key: &str, value: impl Into<String>) -> recipebox_shared::Result<()> {
        let value: String = value.into();
        let statement = Query::insert()
            .into_table(Storage::Table)
            .columns([Storage::Key, Storage::Value, Storage::UpdatedAt])
            .values_panic([
                key.into(),
                value.into(),
                OffsetDateTime::now_utc().unix_timestamp().into(),
            ])
            .on_conflict(
                OnConflict::column(Storage::Key)
                    .update_columns([Storage::Value, Storage::UpdatedAt])
                    .to_owned(),
            )
            .to_owned();

        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
        sqlx::query_with(&sql, values).execute(&self.0).await?;

        Ok(())
    }

    pub async fn delete(&self, key: &str) -> recipebox_shared::Result<()> {
        let statement = Query::delete()
            .from_table(Storage::Table)
            .and_where(Expr::col(Storage::Key).eq(key))
            .to_owned();

        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
        sqlx::query_with(&sql, values).execute(&self.0).await?;

        Ok(())
    }

    pub async fn recipes(&self) -> recipebox_shared::Result<Vec<Recipe>> {
        let raw = self.get(RECIPES_KEY).await?;

        Ok(decode_list(RECIPES_KEY, raw.as_deref()))
    }

    pub async fn save_recipes(&self, recipes: &[Recipe]) -> recipebox_shared::Result<()> {
        self.set_json(RECIPES_KEY, &recipes).await
    }

    /// Normalized schedule; legacy bare-string values come back as recipe
    /// references.
    pub async fn schedule(&self) -> recipebox_shared::Result<Schedule> {
        let raw = self.get(SCHEDULE_KEY).await?;

        Ok(decode_schedule(raw.as_deref()))
    }

    pub async fn save_schedule(&self, schedule: &Schedule) -> recipebox_shared::Result<()> {
        self.set_json(SCHEDULE_KEY, schedule).await
    }

    pub async fn set_schedule_entry(
        &self,
        date: impl Into<String>,
        entry: ScheduleEntry,
    ) -> recipebox_shared::Result<()> {
        let date = date.into();
        let mut schedule = self.schedule().await?;
        tracing::info!(date = %date, ?entry, "schedule entry saved");
        schedule.insert(date, entry);

        self.save_schedule(&schedule).await
    }

    /// Removes the entry for `date`. Returns whether one existed.
    pub async fn delete_schedule_entry(&self, date: &str) -> recipebox_shared::Result<bool> {
        let mut schedule = self.schedule().await?;
        let removed = schedule.remove(date).is_some();
        if removed {
            tracing::info!(date, "schedule entry deleted");
        }

        self.save_schedule(&schedule).await?;

        Ok(removed)
    }

    pub async fn requests(&self) -> recipebox_shared::Result<Vec<MealRequest>> {
        let raw = self.get(REQUESTS_KEY).await?;

        Ok(decode_list(REQUESTS_KEY, raw.as_deref()))
    }

    pub async fn save_requests(&self, requests: &[MealRequest]) -> recipebox_shared::Result<()> {
        self.set_json(REQUESTS_KEY, &requests).await
    }

    pub async fn is_logged_in(&self) -> recipebox_shared::Result<bool> {
        Ok(self.get(SESSION_KEY).await?.as_deref() == Some("true"))
    }

    pub async fn set_logged_in(&self, logged_in: bool) -> recipebox_shared::Result<()> {
        if logged_in {
            self.set(SESSION_KEY, "true").await
        } else {
            self.delete(SESSION_KEY).await
        }
    }

    async fn set_json<T: Serialize + ?Sized>(
        &self,
        key: &str,
        value: &T,
    ) -> recipebox_shared::Result<()> {
        let value = serde_json::to_string(value)?;

        self.set(key, value).await
    }
}

/// Parses a JSON array document. A missing or malformed document is an
/// empty list.
pub fn decode_list<T: DeserializeOwned>(key: &str, raw: Option<&str>) -> Vec<T> {
    let Some(raw) = raw else {
        return vec![];
    };

    match serde_json::from_str::<Option<Vec<T>>>(raw) {
        Ok(list) => list.unwrap_or_default(),
        Err(err) => {
            tracing::error!(key, error = %err, "failed to parse stored document");
            vec![]
        }
    }
}

pub fn decode_schedule(raw: Option<&str>) -> Schedule {
    let Some(raw) = raw else {
        return Schedule::new();
    };

    match serde_json::from_str::<Value>(raw) {
        Ok(value) => schedule::normalize(&value),
        Err(err) => {
            tracing::error!(key = SCHEDULE_KEY, error = %err, "failed to parse stored document");
            Schedule::new()
        }
    }
}
