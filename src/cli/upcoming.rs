use anyhow::Result;
use clap::Args;
use recipebox_calendar::{
    UpcomingMeal,
    focus::{self, Extent},
};

use super::App;

pub const EMPTY_MESSAGE: &str = "Er zijn nog geen geplande maaltijden.";

/// Options shared by every surface that lists upcoming meals.
#[derive(Args, Debug, Default)]
pub struct UpcomingArgs {
    /// Show at most this many meals
    #[arg(long)]
    pub limit: Option<usize>,

    /// Scroll offset of the viewport, in lines
    #[arg(long, requires = "window")]
    pub scroll: Option<f32>,

    /// Height of the viewport, in lines
    #[arg(long, requires = "scroll")]
    pub window: Option<f32>,
}

impl UpcomingArgs {
    pub fn viewport(&self) -> Option<Extent> {
        self.scroll
            .zip(self.window)
            .map(|(scroll, window)| Extent::new(scroll, window))
    }
}

/// Upcoming meals from today onwards, at most `limit` of them.
pub async fn load(app: &App, limit: Option<usize>) -> Result<Vec<UpcomingMeal>> {
    let schedule = app.store.schedule().await?;
    let recipes = app.store.recipes().await?;

    Ok(
        recipebox_calendar::project_upcoming(&schedule, &recipes, app.today())
            .take(limit.unwrap_or(usize::MAX))
            .collect(),
    )
}

pub async fn run(app: &App, args: UpcomingArgs) -> Result<()> {
    let meals = load(app, args.limit).await?;

    print!("{}", render(&meals, args.viewport()));

    Ok(())
}

/// One meal per line. With a viewport, the line nearest its center is
/// marked with `>`.
pub fn render(meals: &[UpcomingMeal], viewport: Option<Extent>) -> String {
    if meals.is_empty() {
        return format!("{EMPTY_MESSAGE}\n");
    }

    let focused = viewport
        .and_then(|viewport| focus::closest_to_center(viewport, &focus::uniform(meals.len(), 1.0)));

    meals
        .iter()
        .enumerate()
        .map(|(index, meal)| {
            let marker = if focused == Some(index) { '>' } else { ' ' };
            format!(
                "{marker} {}  {}\n",
                recipebox_calendar::long_date(meal.date),
                meal.display_title()
            )
        })
        .collect()
}
