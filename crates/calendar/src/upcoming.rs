use recipebox_shared::{
    recipe::Recipe,
    schedule::{Schedule, UNKNOWN_TITLE},
};
use time::Date;

use crate::date::parse_date_key;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpcomingMeal {
    pub date: Date,
    pub key: String,
    pub title: String,
}

impl UpcomingMeal {
    /// Title for list surfaces, which show the placeholder instead of a blank.
    pub fn display_title(&self) -> &str {
        if self.title.is_empty() {
            UNKNOWN_TITLE
        } else {
            &self.title
        }
    }
}

/// Date-ordered planned meals from today onwards.
#[derive(Debug, Clone)]
pub struct Upcoming(std::vec::IntoIter<UpcomingMeal>);

impl Iterator for Upcoming {
    type Item = UpcomingMeal;

    fn next(&mut self) -> Option<Self::Item> {
        self.0.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.0.size_hint()
    }
}

impl ExactSizeIterator for Upcoming {}

/// Projects the schedule onto the meals still ahead of `today`, inclusive.
///
/// Keys that do not parse as a date are skipped. Titles are resolved the
/// same way the calendar does, without shortening.
pub fn project_upcoming(schedule: &Schedule, recipes: &[Recipe], today: Date) -> Upcoming {
    let mut meals = schedule
        .iter()
        .filter_map(|(key, entry)| {
            let date = parse_date_key(key)?;
            if date < today {
                return None;
            }

            Some(UpcomingMeal {
                date,
                key: key.to_owned(),
                title: entry.title(recipes),
            })
        })
        .collect::<Vec<_>>();

    meals.sort_by_key(|meal| meal.date);

    Upcoming(meals.into_iter())
}
