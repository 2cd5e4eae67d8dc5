use anyhow::Result;
use clap::{ArgGroup, Args, Subcommand};
use recipebox_request::{Command, Query, RequestInput, RequestRow, Selection};

use super::App;

#[derive(Subcommand, Debug)]
pub enum RequestCommand {
    /// Ask for a recipe or suggest a meal
    Submit(SubmitArgs),
    /// Show the request inbox
    List,
    /// Mark a request as handled
    Complete { id: String },
}

#[derive(Args, Debug)]
#[command(group(ArgGroup::new("selection").required(true).args(["recipe", "suggestion"])))]
pub struct SubmitArgs {
    #[arg(long)]
    pub name: String,
    #[arg(long)]
    pub email: String,
    #[arg(long)]
    pub recipe: Option<String>,
    #[arg(long)]
    pub suggestion: Option<String>,
}

impl From<SubmitArgs> for RequestInput {
    fn from(value: SubmitArgs) -> Self {
        let selection = match value.recipe {
            Some(id) => Selection::Recipe(id),
            None => Selection::Suggestion(value.suggestion.unwrap_or_default()),
        };

        RequestInput {
            name: value.name,
            email: value.email,
            selection,
        }
    }
}

pub async fn run(app: &App, command: RequestCommand) -> Result<()> {
    match command {
        RequestCommand::Submit(args) => {
            let id = Command(app.store.clone()).submit(args.into()).await?;
            println!("{id}");
        }
        RequestCommand::List => {
            app.access.require_login().await?;
            let rows = Query(app.store.clone()).list().await?;
            print!("{}", render(&rows));
        }
        RequestCommand::Complete { id } => {
            app.access.require_login().await?;
            if !Command(app.store.clone()).complete(&id).await? {
                println!("{id}: onbekend verzoek");
            }
        }
    }

    Ok(())
}

pub fn render(rows: &[RequestRow]) -> String {
    if rows.is_empty() {
        return "Geen verzoeken.\n".to_owned();
    }

    rows.iter()
        .map(|row| {
            format!(
                "{}  {} <{}>  {}\n",
                row.request.id, row.request.name, row.request.email, row.label
            )
        })
        .collect()
}
