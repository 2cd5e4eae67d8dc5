use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

/// A visitor's meal request as persisted under the `requests` key.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MealRequest {
    pub id: String,
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub recipe_id: Option<String>,
    #[serde(default)]
    pub suggestion: String,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
}
