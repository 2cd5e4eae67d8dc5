use std::path::PathBuf;

use anyhow::Result;
use clap::{Args, Subcommand};
use recipebox_recipe::{Command, Filter, Query, RecipeInput, tagging};
use recipebox_shared::{Error, recipe::Recipe};

use super::App;

#[derive(Subcommand, Debug)]
pub enum RecipeCommand {
    /// List recipes, optionally filtered
    List {
        #[arg(long)]
        query: Option<String>,
        #[arg(long)]
        tag: Option<String>,
    },
    /// Show one recipe in full
    Show { id: String },
    /// List every tag in use
    Tags,
    /// Show the trending strip
    Trending,
    /// Add a recipe
    Add(RecipeFields),
    /// Change a recipe, keeping fields that are not given
    Edit {
        id: String,
        #[command(flatten)]
        fields: RecipeFields,
    },
    /// Delete a recipe
    Delete { id: String },
    /// Rate a recipe from 1 to 5
    Rate {
        id: String,
        #[arg(value_parser = clap::value_parser!(u8).range(1..=5))]
        value: u8,
    },
}

#[derive(Args, Debug, Default)]
pub struct RecipeFields {
    #[arg(long)]
    pub title: Option<String>,
    #[arg(long)]
    pub description: Option<String>,
    /// One ingredient per line
    #[arg(long)]
    pub ingredients: Option<String>,
    /// One herb per line
    #[arg(long)]
    pub herbs: Option<String>,
    /// Comma separated
    #[arg(long)]
    pub tags: Option<String>,
    /// Image file, embedded as a data URI
    #[arg(long)]
    pub image: Option<PathBuf>,
}

impl RecipeFields {
    async fn into_input(self, base: RecipeInput) -> Result<RecipeInput> {
        let image = match self.image {
            Some(path) => Some(recipebox_recipe::image::data_uri(path).await?),
            None => base.image,
        };

        Ok(RecipeInput {
            title: self.title.unwrap_or(base.title),
            description: self.description.unwrap_or(base.description),
            ingredients: self.ingredients.unwrap_or(base.ingredients),
            herbs: self.herbs.unwrap_or(base.herbs),
            tags: self
                .tags
                .map(|raw| tagging::parse_tags(&raw))
                .unwrap_or(base.tags),
            image,
        })
    }
}

fn input_from(recipe: Recipe) -> RecipeInput {
    RecipeInput {
        title: recipe.title,
        description: recipe.description,
        ingredients: recipe.ingredients,
        herbs: recipe.herbs,
        tags: recipe.tags,
        image: recipe.image,
    }
}

pub async fn run(app: &App, command: RecipeCommand) -> Result<()> {
    let query = Query(app.store.clone());
    let cmd = Command(app.store.clone());

    match command {
        RecipeCommand::List { query: text, tag } => {
            let recipes = query.filter(&Filter { query: text, tag }).await?;
            print!("{}", render_list(&recipes));
        }
        RecipeCommand::Show { id } => {
            let Some(recipe) = query.find(&id).await? else {
                return Err(Error::NotFound("recipe".to_owned()).into());
            };
            print!("{}", render_detail(&recipe));
        }
        RecipeCommand::Tags => {
            for tag in query.tags().await? {
                println!("{tag}");
            }
        }
        RecipeCommand::Trending => {
            print!("{}", render_list(&query.trending().await?));
        }
        RecipeCommand::Add(fields) => {
            app.access.require_login().await?;
            let input = fields.into_input(RecipeInput::default()).await?;
            let id = cmd.create(input).await?;
            println!("{id}");
        }
        RecipeCommand::Edit { id, fields } => {
            app.access.require_login().await?;
            let Some(recipe) = query.find(&id).await? else {
                return Err(Error::NotFound("recipe".to_owned()).into());
            };
            let input = fields.into_input(input_from(recipe)).await?;
            cmd.update(&id, input).await?;
        }
        RecipeCommand::Delete { id } => {
            app.access.require_login().await?;
            cmd.delete(&id).await?;
        }
        RecipeCommand::Rate { id, value } => {
            let recipe = cmd.rate(&id, value).await?;
            println!("{}", stars(&recipe));
        }
    }

    Ok(())
}

pub fn stars(recipe: &Recipe) -> String {
    let filled = recipe.stars().min(5) as usize;

    format!("{}{}", "★".repeat(filled), "☆".repeat(5 - filled))
}

pub fn render_list(recipes: &[Recipe]) -> String {
    recipes
        .iter()
        .map(|recipe| {
            let mut line = format!("{}  {}  {}", recipe.id, recipe.title, stars(recipe));
            if !recipe.tags.is_empty() {
                line.push_str(&format!("  [{}]", recipe.tags.join(", ")));
            }
            line.push('\n');
            line
        })
        .collect()
}

pub fn render_detail(recipe: &Recipe) -> String {
    let mut out = format!("{}  {}\n", recipe.title, stars(recipe));

    if !recipe.description.is_empty() {
        out.push_str(&format!("\n{}\n", recipe.description));
    }

    for (label, lines) in [
        ("Ingrediënten", recipe.ingredient_lines()),
        ("Kruiden", recipe.herb_lines()),
    ] {
        if lines.is_empty() {
            continue;
        }
        out.push_str(&format!("\n{label}:\n"));
        for line in lines {
            out.push_str(&format!("- {line}\n"));
        }
    }

    if !recipe.tags.is_empty() {
        out.push_str(&format!("\nTags: {}\n", recipe.tags.join(", ")));
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stars() {
        let mut recipe = Recipe::default();
        assert_eq!(stars(&recipe), "☆☆☆☆☆");

        recipe.ratings = vec![4, 5];
        assert_eq!(stars(&recipe), "★★★★★");

        recipe.ratings = vec![3];
        assert_eq!(stars(&recipe), "★★★☆☆");
    }

    #[test]
    fn test_render_list() {
        let recipes = vec![
            Recipe {
                id: "r1".to_owned(),
                title: "Hutspot".to_owned(),
                tags: vec!["Hollands".to_owned(), "Winter".to_owned()],
                ..Default::default()
            },
            Recipe {
                id: "r2".to_owned(),
                title: "Friet".to_owned(),
                ratings: vec![2],
                ..Default::default()
            },
        ];

        assert_eq!(
            render_list(&recipes),
            "r1  Hutspot  ☆☆☆☆☆  [Hollands, Winter]\nr2  Friet  ★★☆☆☆\n"
        );
    }

    #[test]
    fn test_render_detail() {
        let recipe = Recipe {
            id: "r1".to_owned(),
            title: "Hutspot".to_owned(),
            ingredients: "wortel\n\n ui \n".to_owned(),
            tags: vec!["Hollands".to_owned()],
            ..Default::default()
        };

        assert_eq!(
            render_detail(&recipe),
            "Hutspot  ☆☆☆☆☆\n\nIngrediënten:\n- wortel\n- ui\n\nTags: Hollands\n"
        );
    }
}
