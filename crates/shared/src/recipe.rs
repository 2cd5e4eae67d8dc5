use serde::{Deserialize, Serialize};

/// A catalog recipe as persisted under the `recipes` key.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Recipe {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub ingredients: String,
    #[serde(default)]
    pub herbs: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub ratings: Vec<u8>,
}

impl Recipe {
    pub fn average_rating(&self) -> Option<f32> {
        if self.ratings.is_empty() {
            return None;
        }

        let total: u32 = self.ratings.iter().map(|r| *r as u32).sum();

        Some(total as f32 / self.ratings.len() as f32)
    }

    /// Number of filled stars out of five.
    pub fn stars(&self) -> u8 {
        self.average_rating()
            .map(|avg| avg.round() as u8)
            .unwrap_or_default()
    }

    pub fn ingredient_lines(&self) -> Vec<&str> {
        non_empty_lines(&self.ingredients)
    }

    pub fn herb_lines(&self) -> Vec<&str> {
        non_empty_lines(&self.herbs)
    }

    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }
}

fn non_empty_lines(value: &str) -> Vec<&str> {
    value
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect()
}

pub fn find<'a>(recipes: &'a [Recipe], id: &str) -> Option<&'a Recipe> {
    recipes.iter().find(|r| r.id == id)
}
