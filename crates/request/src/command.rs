use recipebox_shared::request::MealRequest;
use recipebox_store::Store;
use time::OffsetDateTime;
use validator::Validate;

/// What the visitor asks for: an existing recipe or a free-text idea.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Selection {
    Recipe(String),
    Suggestion(String),
}

#[derive(Validate, Clone, Debug)]
pub struct RequestInput {
    #[validate(length(min = 1))]
    pub name: String,
    #[validate(length(min = 1))]
    pub email: String,
    pub selection: Selection,
}

#[derive(Clone)]
pub struct Command(pub Store);

impl Command {
    pub async fn submit(&self, input: RequestInput) -> recipebox_shared::Result<String> {
        let input = RequestInput {
            name: input.name.trim().to_owned(),
            email: input.email.trim().to_owned(),
            selection: input.selection,
        };
        input.validate()?;

        let (recipe_id, suggestion) = match input.selection {
            Selection::Recipe(id) => (Some(id), String::new()),
            Selection::Suggestion(text) => {
                let text = text.trim().to_owned();
                if text.is_empty() {
                    recipebox_shared::bail!("a suggestion is required when no recipe is chosen");
                }
                (None, text)
            }
        };

        let id = ulid::Ulid::new().to_string();
        let mut requests = self.0.requests().await?;
        requests.push(MealRequest {
            id: id.to_owned(),
            name: input.name,
            email: input.email,
            recipe_id,
            suggestion,
            created_at: OffsetDateTime::now_utc(),
        });
        self.0.save_requests(&requests).await?;

        tracing::info!(id = %id, "meal request submitted");

        Ok(id)
    }

    /// Marks a request as handled by removing it. Returns whether it existed.
    pub async fn complete(&self, id: &str) -> recipebox_shared::Result<bool> {
        let mut requests = self.0.requests().await?;
        let before = requests.len();
        requests.retain(|r| r.id != id);

        let completed = requests.len() != before;
        if completed {
            self.0.save_requests(&requests).await?;
            tracing::info!(id, "meal request completed");
        }

        Ok(completed)
    }
}
