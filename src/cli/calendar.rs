use anyhow::Result;
use clap::Args;
use recipebox_calendar::{DayCell, Grid, MonthCursor, TITLE_LIMIT, WEEKDAY_LABELS};
use time::Date;

use super::App;

/// Day number, today marker, a space and the longest shortened title.
const CELL_WIDTH: usize = 2 + 1 + 1 + TITLE_LIMIT + 1;

#[derive(Args, Debug)]
pub struct CalendarArgs {
    /// Month to show as YYYY-MM, defaults to the current month
    #[arg(long)]
    pub month: Option<MonthCursor>,

    /// Months to move forward (or backward when negative)
    #[arg(long, default_value_t = 0, allow_hyphen_values = true)]
    pub offset: i32,
}

pub async fn run(app: &App, args: CalendarArgs) -> Result<()> {
    let cursor = args
        .month
        .unwrap_or_else(|| MonthCursor::current(&app.config.calendar.timezone))
        .shift(args.offset);

    let schedule = app.store.schedule().await?;
    let recipes = app.store.recipes().await?;
    let grid = recipebox_calendar::build_grid(cursor, &schedule, &recipes);

    print!("{}", render(&grid, app.today()));

    Ok(())
}

pub fn render(grid: &Grid, today: Date) -> String {
    let header: String = WEEKDAY_LABELS
        .iter()
        .map(|label| format!("{label:<CELL_WIDTH$}"))
        .collect();

    let mut out = format!("{}\n{}\n", grid.cursor, header.trim_end());

    for row in &grid.rows {
        let line: String = row
            .iter()
            .map(|cell| {
                let text = cell
                    .as_ref()
                    .map(|cell| cell_text(cell, today))
                    .unwrap_or_default();
                format!("{text:<CELL_WIDTH$}")
            })
            .collect();
        out.push_str(line.trim_end());
        out.push('\n');
    }

    out
}

fn cell_text(cell: &DayCell, today: Date) -> String {
    let marker = if cell.date == today { '*' } else { ' ' };

    match &cell.title {
        Some(title) => format!("{:>2}{marker} {title}", cell.day()),
        None => format!("{:>2}{marker}", cell.day()),
    }
}

#[cfg(test)]
mod tests {
    use recipebox_shared::schedule::{Schedule, ScheduleEntry};
    use time::{Month, macros::date};

    use super::*;

    #[test]
    fn test_render_march_2024() {
        let mut schedule = Schedule::new();
        schedule.insert(
            "2024-03-15".to_owned(),
            ScheduleEntry::custom("Taco night with friends"),
        );
        let cursor = MonthCursor::new(2024, Month::March).unwrap();
        let grid = recipebox_calendar::build_grid(cursor, &schedule, &[]);

        let out = render(&grid, date!(2024 - 03 - 04));
        let lines: Vec<&str> = out.lines().collect();

        assert_eq!(lines.len(), 8);
        assert_eq!(lines[0], "maart 2024");
        assert!(lines[1].starts_with("ma"));
        // March 2024 starts on a Friday
        assert!(lines[2].starts_with(&" ".repeat(CELL_WIDTH * 4)));
        assert!(lines[2].contains(" 1 "));
        assert!(lines[3].starts_with(" 4*"));
        assert!(lines[4].contains("15  Taco night with fr…"));
    }
}
