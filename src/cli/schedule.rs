use anyhow::Result;
use clap::{ArgGroup, Args, Subcommand};
use recipebox_calendar::editor::{self, Change, Choice, EditorState};
use recipebox_shared::{bail, recipe::Recipe, schedule::UNKNOWN_TITLE};

use super::App;

#[derive(Subcommand, Debug)]
pub enum ScheduleCommand {
    /// Show what is planned for a date
    Show { date: String },
    /// Plan a meal for a date
    Set(SetArgs),
    /// Clear a date
    Delete { date: String },
}

#[derive(Args, Debug)]
#[command(group(ArgGroup::new("choice").required(true).args(["recipe", "unknown", "custom"])))]
pub struct SetArgs {
    pub date: String,
    #[arg(long)]
    pub recipe: Option<String>,
    /// Mark the meal as still undecided
    #[arg(long)]
    pub unknown: bool,
    /// Free-text meal; an empty name clears the date
    #[arg(long)]
    pub custom: Option<String>,
}

impl SetArgs {
    fn choice(&self) -> Choice {
        if let Some(id) = &self.recipe {
            return Choice::Recipe(id.to_owned());
        }

        if self.unknown {
            return Choice::Unknown;
        }

        self.custom
            .as_ref()
            .map(|name| Choice::Custom(name.to_owned()))
            .unwrap_or_default()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::Display)]
#[strum(serialize_all = "lowercase")]
pub enum ChoiceKind {
    Leeg,
    Recept,
    Onbekend,
    Eigen,
}

impl From<&Choice> for ChoiceKind {
    fn from(value: &Choice) -> Self {
        match value {
            Choice::Unset => ChoiceKind::Leeg,
            Choice::Recipe(_) => ChoiceKind::Recept,
            Choice::Unknown => ChoiceKind::Onbekend,
            Choice::Custom(_) => ChoiceKind::Eigen,
        }
    }
}

/// Canonical `YYYY-MM-DD` key for user input.
fn date_key(raw: &str) -> recipebox_shared::Result<String> {
    match recipebox_calendar::parse_date_key(raw) {
        Some(date) => Ok(recipebox_calendar::date_key(date)),
        None => bail!("invalid date '{raw}', expected YYYY-MM-DD"),
    }
}

pub async fn run(app: &App, command: ScheduleCommand) -> Result<()> {
    match command {
        ScheduleCommand::Show { date } => {
            let key = date_key(&date)?;
            let schedule = app.store.schedule().await?;
            let recipes = app.store.recipes().await?;
            let state = EditorState::open(&schedule, key);

            println!("{}", render_state(&state, &recipes));
        }
        ScheduleCommand::Set(args) => {
            app.access.require_login().await?;
            let key = date_key(&args.date)?;

            match editor::save(&app.store, &key, args.choice()).await? {
                Change::Keep => println!("{key}: ongewijzigd"),
                Change::Set(_) => println!("{key}: opgeslagen"),
                Change::Remove => println!("{key}: gewist"),
            }
        }
        ScheduleCommand::Delete { date } => {
            app.access.require_login().await?;
            let key = date_key(&date)?;

            if editor::delete(&app.store, &key).await? {
                println!("{key}: gewist");
            } else {
                println!("{key}: niets gepland");
            }
        }
    }

    Ok(())
}

pub fn render_state(state: &EditorState, recipes: &[Recipe]) -> String {
    let kind = ChoiceKind::from(&state.choice);

    let detail = match &state.choice {
        Choice::Unset => String::new(),
        Choice::Recipe(id) => match recipebox_shared::recipe::find(recipes, id) {
            Some(recipe) => format!(" {} ({id})", recipe.title),
            None => format!(" ({id})"),
        },
        Choice::Unknown => format!(" {UNKNOWN_TITLE}"),
        Choice::Custom(name) => format!(" {name}"),
    };

    format!("{}: {kind}{detail}", state.date)
}
