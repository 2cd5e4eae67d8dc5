use recipebox_shared::{
    recipe::{self, Recipe},
    request::MealRequest,
};
use recipebox_store::Store;

pub const UNKNOWN_RECIPE_LABEL: &str = "Onbekend recept";
pub const NO_SUGGESTION_LABEL: &str = "Geen suggestie";

#[derive(Clone, Debug, PartialEq)]
pub struct RequestRow {
    pub request: MealRequest,
    /// Requested recipe title, or the visitor's own suggestion.
    pub label: String,
}

pub fn label(request: &MealRequest, recipes: &[Recipe]) -> String {
    match request.recipe_id.as_deref() {
        Some(id) if !id.is_empty() => recipe::find(recipes, id)
            .map(|r| r.title.to_owned())
            .unwrap_or_else(|| UNKNOWN_RECIPE_LABEL.to_owned()),
        _ if request.suggestion.is_empty() => NO_SUGGESTION_LABEL.to_owned(),
        _ => request.suggestion.to_owned(),
    }
}

#[derive(Clone)]
pub struct Query(pub Store);

impl Query {
    pub async fn list(&self) -> recipebox_shared::Result<Vec<RequestRow>> {
        let requests = self.0.requests().await?;
        let recipes = self.0.recipes().await?;

        Ok(requests
            .into_iter()
            .map(|request| RequestRow {
                label: label(&request, &recipes),
                request,
            })
            .collect())
    }
}
