use recipebox_shared::{recipe::Recipe, schedule::Schedule, truncate};
use time::{Date, Duration};

use crate::{MonthCursor, date::date_key};

pub const ROWS: usize = 6;
pub const COLUMNS: usize = 7;
/// Longest scheduled title shown inside a day cell before it is shortened.
pub const TITLE_LIMIT: usize = 18;
pub const WEEKDAY_LABELS: [&str; COLUMNS] = ["ma", "di", "wo", "do", "vr", "za", "zo"];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DayCell {
    pub date: Date,
    pub key: String,
    pub title: Option<String>,
}

impl DayCell {
    pub fn day(&self) -> u8 {
        self.date.day()
    }
}

/// A month laid out Monday-first over a fixed 6×7 matrix.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    pub cursor: MonthCursor,
    pub rows: Vec<Vec<Option<DayCell>>>,
}

impl Grid {
    pub fn cells(&self) -> impl Iterator<Item = &Option<DayCell>> {
        self.rows.iter().flatten()
    }

    pub fn days(&self) -> impl Iterator<Item = &DayCell> {
        self.cells().flatten()
    }

    pub fn find(&self, key: &str) -> Option<&DayCell> {
        self.days().find(|cell| cell.key == key)
    }
}

/// Column of the month's first day, Monday = 0 through Sunday = 6.
pub fn first_column(cursor: MonthCursor) -> usize {
    let from_sunday = cursor.first_day().weekday().number_days_from_sunday() as usize;

    (from_sunday + 6) % COLUMNS
}

pub fn build_grid(cursor: MonthCursor, schedule: &Schedule, recipes: &[Recipe]) -> Grid {
    let offset = first_column(cursor);
    let days_in_month = cursor.days_in_month();
    let first_day = cursor.first_day();

    let mut rows = Vec::with_capacity(ROWS);
    let mut day = 1u8;

    for row in 0..ROWS {
        let mut cells = Vec::with_capacity(COLUMNS);
        for col in 0..COLUMNS {
            if (row == 0 && col < offset) || day > days_in_month {
                cells.push(None);
                continue;
            }

            let date = first_day + Duration::days(i64::from(day) - 1);
            let key = date_key(date);
            let title = schedule
                .get(&key)
                .map(|entry| entry.title(recipes))
                .filter(|title| !title.is_empty())
                .map(|title| truncate(&title, TITLE_LIMIT));

            cells.push(Some(DayCell { date, key, title }));
            day += 1;
        }
        rows.push(cells);
    }

    Grid { cursor, rows }
}

#[cfg(test)]
mod tests {
    use recipebox_shared::schedule::ScheduleEntry;
    use time::Month;

    use super::*;

    fn recipe(id: &str, title: &str) -> Recipe {
        Recipe {
            id: id.to_owned(),
            title: title.to_owned(),
            ..Default::default()
        }
    }

    #[test]
    fn test_first_column_is_monday_based() {
        // 2024-01-01 is a Monday, 2023-10-01 a Sunday, 2024-03-01 a Friday
        assert_eq!(first_column(MonthCursor::new(2024, Month::January).unwrap()), 0);
        assert_eq!(first_column(MonthCursor::new(2023, Month::October).unwrap()), 6);
        assert_eq!(first_column(MonthCursor::new(2024, Month::March).unwrap()), 4);
    }

    #[test]
    fn test_every_month_has_42_cells_and_contiguous_days() {
        for year in [2023, 2024, 2025] {
            for month in 1..=12u8 {
                let cursor = MonthCursor::new(year, Month::try_from(month).unwrap()).unwrap();
                let grid = build_grid(cursor, &Schedule::new(), &[]);

                assert_eq!(grid.rows.len(), ROWS);
                assert!(grid.rows.iter().all(|row| row.len() == COLUMNS));

                let cells: Vec<_> = grid.cells().collect();
                assert_eq!(cells.len(), 42);

                let offset = first_column(cursor);
                let days = cursor.days_in_month() as usize;
                for (i, cell) in cells.iter().enumerate() {
                    let expected = i >= offset && i < offset + days;
                    assert_eq!(cell.is_some(), expected, "{year}-{month} cell {i}");
                }

                let numbers: Vec<u8> = grid.days().map(DayCell::day).collect();
                assert_eq!(numbers, (1..=cursor.days_in_month()).collect::<Vec<_>>());
            }
        }
    }

    #[test]
    fn test_titles() {
        let recipes = vec![recipe("r1", "Boerenkool")];
        let mut schedule = Schedule::new();
        schedule.insert("2024-03-01".to_owned(), ScheduleEntry::recipe("r1"));
        schedule.insert(
            "2024-03-15".to_owned(),
            ScheduleEntry::custom("Taco night with friends"),
        );
        schedule.insert("2024-03-20".to_owned(), ScheduleEntry::Unknown);
        schedule.insert("2024-03-21".to_owned(), ScheduleEntry::recipe("deleted"));

        let grid = build_grid(
            MonthCursor::new(2024, Month::March).unwrap(),
            &schedule,
            &recipes,
        );

        let title = |key: &str| grid.find(key).unwrap().title.clone();
        assert_eq!(title("2024-03-01").as_deref(), Some("Boerenkool"));
        assert_eq!(title("2024-03-15").as_deref(), Some("Taco night with fr…"));
        assert_eq!(title("2024-03-20").as_deref(), Some("Onbekend"));
        assert_eq!(title("2024-03-21"), None);
        assert_eq!(title("2024-03-02"), None);
    }

    #[test]
    fn test_legacy_id_mismatch_shows_day_only() {
        let recipes = vec![recipe("r1title", "Soep")];
        let schedule = recipebox_shared::schedule::normalize(
            &serde_json_value(r#"{"2024-03-01":"r1"}"#),
        );

        let grid = build_grid(
            MonthCursor::new(2024, Month::March).unwrap(),
            &schedule,
            &recipes,
        );

        let cell = grid.find("2024-03-01").unwrap();
        assert_eq!(cell.day(), 1);
        assert_eq!(cell.title, None);
    }

    fn serde_json_value(raw: &str) -> serde_json::Value {
        serde_json::from_str(raw).unwrap()
    }
}
