//! Per-date schedule editor.
//!
//! Opening a date preselects the current entry; saving a [`Choice`] sets or
//! removes exactly one key of the schedule.

use recipebox_shared::schedule::{Schedule, ScheduleEntry};
use recipebox_store::Store;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Choice {
    #[default]
    Unset,
    Recipe(String),
    Unknown,
    Custom(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Change {
    Keep,
    Set(ScheduleEntry),
    Remove,
}

impl Choice {
    pub fn change(self) -> Change {
        match self {
            Choice::Unset => Change::Keep,
            Choice::Unknown => Change::Set(ScheduleEntry::Unknown),
            Choice::Recipe(id) if id.is_empty() => Change::Keep,
            Choice::Recipe(id) => Change::Set(ScheduleEntry::Recipe { id }),
            Choice::Custom(name) => match name.trim() {
                "" => Change::Remove,
                name => Change::Set(ScheduleEntry::custom(name)),
            },
        }
    }
}

impl From<&ScheduleEntry> for Choice {
    fn from(value: &ScheduleEntry) -> Self {
        match value {
            ScheduleEntry::Recipe { id } => Choice::Recipe(id.to_owned()),
            ScheduleEntry::Custom { name } => Choice::Custom(name.to_owned()),
            ScheduleEntry::Unknown => Choice::Unknown,
            ScheduleEntry::Unrecognized(_) => Choice::Unset,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditorState {
    pub date: String,
    pub choice: Choice,
    pub can_delete: bool,
}

impl EditorState {
    pub fn open(schedule: &Schedule, date: impl Into<String>) -> Self {
        let date = date.into();
        let entry = schedule.get(&date);

        Self {
            choice: entry.map(Choice::from).unwrap_or_default(),
            can_delete: entry.is_some(),
            date,
        }
    }
}

/// Applies `choice` to an in-memory schedule and reports what changed.
pub fn apply(schedule: &mut Schedule, date: &str, choice: Choice) -> Change {
    let change = choice.change();
    match &change {
        Change::Keep => {}
        Change::Set(entry) => {
            schedule.insert(date.to_owned(), entry.clone());
        }
        Change::Remove => {
            remove(schedule, date);
        }
    }

    change
}

/// Drops the entry for `date` from an in-memory schedule. Returns whether
/// one existed.
pub fn remove(schedule: &mut Schedule, date: &str) -> bool {
    schedule.remove(date).is_some()
}

pub async fn save(store: &Store, date: &str, choice: Choice) -> recipebox_shared::Result<Change> {
    let change = choice.change();
    match &change {
        Change::Keep => tracing::debug!(date, "nothing chosen, schedule unchanged"),
        Change::Set(entry) => store.set_schedule_entry(date, entry.clone()).await?,
        Change::Remove => {
            store.delete_schedule_entry(date).await?;
        }
    }

    Ok(change)
}

pub async fn delete(store: &Store, date: &str) -> recipebox_shared::Result<bool> {
    store.delete_schedule_entry(date).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_open_preselects_entry() {
        let mut schedule = Schedule::new();
        schedule.insert("2024-03-01".to_owned(), ScheduleEntry::custom("Pizza"));

        let state = EditorState::open(&schedule, "2024-03-01");
        assert_eq!(state.choice, Choice::Custom("Pizza".to_owned()));
        assert!(state.can_delete);

        let state = EditorState::open(&schedule, "2024-03-02");
        assert_eq!(state.choice, Choice::Unset);
        assert!(!state.can_delete);
    }

    #[test]
    fn test_apply_choices() {
        let mut schedule = Schedule::new();

        apply(&mut schedule, "2024-03-01", Choice::Recipe("r1".to_owned()));
        assert_eq!(schedule["2024-03-01"], ScheduleEntry::recipe("r1"));

        apply(&mut schedule, "2024-03-01", Choice::Unset);
        assert_eq!(schedule["2024-03-01"], ScheduleEntry::recipe("r1"));

        apply(&mut schedule, "2024-03-01", Choice::Unknown);
        assert_eq!(schedule["2024-03-01"], ScheduleEntry::Unknown);

        apply(&mut schedule, "2024-03-01", Choice::Custom("  Friet  ".to_owned()));
        assert_eq!(schedule["2024-03-01"], ScheduleEntry::custom("Friet"));
    }

    #[test]
    fn test_empty_custom_name_removes_entry() {
        let mut schedule = Schedule::new();
        schedule.insert("2024-03-01".to_owned(), ScheduleEntry::Unknown);

        let change = apply(&mut schedule, "2024-03-01", Choice::Custom("   ".to_owned()));

        assert_eq!(change, Change::Remove);
        assert!(schedule.is_empty());
    }

    #[test]
    fn test_remove() {
        let mut schedule = Schedule::new();
        schedule.insert("2024-03-01".to_owned(), ScheduleEntry::recipe("r1"));

        assert!(remove(&mut schedule, "2024-03-01"));
        assert!(!remove(&mut schedule, "2024-03-01"));
        assert!(schedule.is_empty());
    }

    #[test]
    fn test_open_unrecognized_entry() {
        let mut schedule = Schedule::new();
        schedule.insert(
            "2024-03-01".to_owned(),
            ScheduleEntry::Unrecognized(serde_json::json!({})),
        );

        let state = EditorState::open(&schedule, "2024-03-01");
        assert_eq!(state.choice, Choice::Unset);
        assert!(state.can_delete);
    }
}
