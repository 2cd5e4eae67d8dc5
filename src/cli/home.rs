use anyhow::Result;
use recipebox_calendar::{UpcomingMeal, focus::Extent};
use recipebox_recipe::Query;
use recipebox_shared::recipe::Recipe;

use super::{App, upcoming::UpcomingArgs};

pub async fn run(app: &App, args: UpcomingArgs) -> Result<()> {
    let trending = Query(app.store.clone()).trending().await?;
    let limit = args.limit.or(app.config.calendar.home_preview_limit);
    let upcoming = super::upcoming::load(app, limit).await?;

    print!("{}", render(&trending, &upcoming, args.viewport()));

    Ok(())
}

pub fn render(trending: &[Recipe], upcoming: &[UpcomingMeal], viewport: Option<Extent>) -> String {
    let mut out = String::from("Populair\n");
    if trending.is_empty() {
        out.push_str("Nog geen recepten.\n");
    }
    for recipe in trending {
        out.push_str(&format!(
            "- {}  {}\n",
            recipe.title,
            super::recipe::stars(recipe)
        ));
    }

    out.push_str("\nBinnenkort\n");
    out.push_str(&super::upcoming::render(upcoming, viewport));

    out
}

#[cfg(test)]
mod tests {
    use time::macros::date;

    use super::*;

    fn meal(date: time::Date, title: &str) -> UpcomingMeal {
        UpcomingMeal {
            date,
            key: recipebox_calendar::date_key(date),
            title: title.to_owned(),
        }
    }

    #[test]
    fn test_render_empty_home() {
        assert_eq!(
            render(&[], &[], None),
            "Populair\nNog geen recepten.\n\nBinnenkort\nEr zijn nog geen geplande maaltijden.\n"
        );
    }

    #[test]
    fn test_render_home() {
        let trending = vec![Recipe {
            id: "r1".to_owned(),
            title: "Pannenkoeken".to_owned(),
            ratings: vec![5],
            ..Default::default()
        }];
        let upcoming = vec![meal(date!(2024 - 03 - 15), "Pannenkoeken")];

        let out = render(&trending, &upcoming, None);

        assert!(out.contains("- Pannenkoeken  ★★★★★\n"));
        assert!(out.ends_with("  vrijdag 15 maart 2024  Pannenkoeken\n"));
    }

    #[test]
    fn test_home_lists_every_meal_and_marks_centered_one() {
        let upcoming = vec![
            meal(date!(2024 - 03 - 15), "Friet"),
            meal(date!(2024 - 03 - 16), "Soep"),
            meal(date!(2024 - 03 - 17), "Stamppot"),
            meal(date!(2024 - 03 - 18), "Pizza"),
        ];

        let out = render(&[], &upcoming, Some(Extent::new(2.0, 1.0)));
        let meals: Vec<&str> = out
            .lines()
            .skip_while(|line| *line != "Binnenkort")
            .skip(1)
            .collect();

        assert_eq!(meals.len(), 4);
        assert_eq!(meals[2], "> zondag 17 maart 2024  Stamppot");
        assert_eq!(meals.iter().filter(|line| line.starts_with('>')).count(), 1);
    }
}
