use recipebox_shared::recipe::Recipe;
use recipebox_store::Store;
use validator::Validate;

use crate::tagging;

#[derive(Validate, Clone, Debug, Default)]
pub struct RecipeInput {
    #[validate(length(min = 1))]
    pub title: String,
    pub description: String,
    pub ingredients: String,
    pub herbs: String,
    pub tags: Vec<String>,
    pub image: Option<String>,
}

impl RecipeInput {
    fn trimmed(self) -> Self {
        Self {
            title: self.title.trim().to_owned(),
            description: self.description.trim().to_owned(),
            ingredients: self.ingredients.trim().to_owned(),
            herbs: self.herbs.trim().to_owned(),
            tags: self.tags,
            image: self.image.filter(|image| !image.is_empty()),
        }
    }

    fn tags_with_labels(&self) -> Vec<String> {
        let text = format!(
            "{} {} {} {}",
            self.title, self.description, self.ingredients, self.herbs
        );

        tagging::auto_tag(self.tags.clone(), &text)
    }
}

#[derive(Clone)]
pub struct Command(pub Store);

impl Command {
    pub async fn create(&self, input: RecipeInput) -> recipebox_shared::Result<String> {
        let input = input.trimmed();
        input.validate()?;

        let id = ulid::Ulid::new().to_string();
        let mut recipes = self.0.recipes().await?;
        recipes.push(Recipe {
            id: id.to_owned(),
            tags: input.tags_with_labels(),
            title: input.title,
            description: input.description,
            ingredients: input.ingredients,
            herbs: input.herbs,
            image: input.image,
            ratings: vec![],
        });
        self.0.save_recipes(&recipes).await?;

        tracing::info!(id = %id, "recipe created");

        Ok(id)
    }

    /// Replaces the editable fields of a recipe; id and ratings are kept.
    pub async fn update(&self, id: &str, input: RecipeInput) -> recipebox_shared::Result<()> {
        let input = input.trimmed();
        input.validate()?;

        let mut recipes = self.0.recipes().await?;
        let Some(recipe) = recipes.iter_mut().find(|r| r.id == id) else {
            return Err(recipebox_shared::Error::NotFound("recipe".to_owned()));
        };

        recipe.tags = input.tags_with_labels();
        recipe.title = input.title;
        recipe.description = input.description;
        recipe.ingredients = input.ingredients;
        recipe.herbs = input.herbs;
        recipe.image = input.image;

        self.0.save_recipes(&recipes).await?;

        tracing::info!(id, "recipe updated");

        Ok(())
    }

    /// Removes a recipe. Schedule entries pointing at it are left in place.
    pub async fn delete(&self, id: &str) -> recipebox_shared::Result<()> {
        let mut recipes = self.0.recipes().await?;
        let before = recipes.len();
        recipes.retain(|r| r.id != id);

        if recipes.len() == before {
            return Err(recipebox_shared::Error::NotFound("recipe".to_owned()));
        }

        self.0.save_recipes(&recipes).await?;

        tracing::info!(id, "recipe deleted");

        Ok(())
    }

    pub async fn rate(&self, id: &str, value: u8) -> recipebox_shared::Result<Recipe> {
        if !(1..=5).contains(&value) {
            recipebox_shared::bail!("rating must be between 1 and 5, got {value}");
        }

        let mut recipes = self.0.recipes().await?;
        let Some(recipe) = recipes.iter_mut().find(|r| r.id == id) else {
            return Err(recipebox_shared::Error::NotFound("recipe".to_owned()));
        };

        recipe.ratings.push(value);
        let rated = recipe.clone();

        self.0.save_recipes(&recipes).await?;

        tracing::info!(id, value, "recipe rated");

        Ok(rated)
    }
}
