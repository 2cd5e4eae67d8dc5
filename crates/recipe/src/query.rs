use recipebox_shared::recipe::{self, Recipe};
use recipebox_store::Store;

/// Number of recipes shown in the trending strip.
pub const TRENDING_LIMIT: usize = 8;

#[derive(Debug, Clone, Default)]
pub struct Filter {
    pub query: Option<String>,
    pub tag: Option<String>,
}

impl Filter {
    pub fn matches(&self, recipe: &Recipe) -> bool {
        let matches_query = match self.query.as_deref().map(str::trim) {
            Some(query) if !query.is_empty() => {
                searchable_text(recipe).contains(&query.to_lowercase())
            }
            _ => true,
        };

        let matches_tag = match self.tag.as_deref() {
            Some(tag) => recipe.has_tag(tag),
            None => true,
        };

        matches_query && matches_tag
    }
}

fn searchable_text(recipe: &Recipe) -> String {
    format!(
        "{} {} {} {} {}",
        recipe.title,
        recipe.description,
        recipe.ingredients,
        recipe.herbs,
        recipe.tags.join(" ")
    )
    .to_lowercase()
}

pub fn filter<'a>(recipes: &'a [Recipe], filter: &Filter) -> Vec<&'a Recipe> {
    recipes.iter().filter(|r| filter.matches(r)).collect()
}

/// Distinct non-blank tags across all recipes, alphabetically regardless of case.
pub fn unique_tags(recipes: &[Recipe]) -> Vec<String> {
    let mut tags: Vec<&str> = recipes
        .iter()
        .flat_map(|r| r.tags.iter())
        .map(String::as_str)
        .filter(|tag| !tag.trim().is_empty())
        .collect();

    tags.sort_by_cached_key(|tag| (tag.to_lowercase(), *tag));
    tags.dedup();

    tags.into_iter().map(str::to_owned).collect()
}

#[derive(Clone)]
pub struct Query(pub Store);

impl Query {
    pub async fn all(&self) -> recipebox_shared::Result<Vec<Recipe>> {
        self.0.recipes().await
    }

    pub async fn find(&self, id: &str) -> recipebox_shared::Result<Option<Recipe>> {
        let recipes = self.0.recipes().await?;

        Ok(recipe::find(&recipes, id).cloned())
    }

    pub async fn filter(&self, input: &Filter) -> recipebox_shared::Result<Vec<Recipe>> {
        let recipes = self.0.recipes().await?;

        Ok(filter(&recipes, input).into_iter().cloned().collect())
    }

    pub async fn tags(&self) -> recipebox_shared::Result<Vec<String>> {
        let recipes = self.0.recipes().await?;

        Ok(unique_tags(&recipes))
    }

    pub async fn trending(&self) -> recipebox_shared::Result<Vec<Recipe>> {
        let mut recipes = self.0.recipes().await?;
        recipes.truncate(TRENDING_LIMIT);

        Ok(recipes)
    }
}
