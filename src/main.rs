use anyhow::Result;
use clap::{Parser, Subcommand};
use recipebox::cli::{
    self, App, calendar::CalendarArgs, recipe::RecipeCommand, request::RequestCommand,
    schedule::ScheduleCommand, upcoming::UpcomingArgs,
};

/// recipebox - family recipe catalog and meal planner
#[derive(Parser)]
#[command(name = "recipebox")]
#[command(about = "Recipe catalog and meal planning calendar", long_about = None)]
struct Cli {
    /// Path to configuration file
    #[arg(long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run database migrations
    Migrate,
    /// Drop database if exists and recreate with migrations
    Reset,
    /// Unlock the builder commands
    Login {
        #[arg(long)]
        username: String,
        #[arg(long)]
        password: String,
    },
    Logout,
    /// Browse and manage recipes
    #[command(subcommand)]
    Recipe(RecipeCommand),
    /// Print the month grid
    Calendar(CalendarArgs),
    /// Edit the meal schedule
    #[command(subcommand)]
    Schedule(ScheduleCommand),
    /// Planned meals from today onwards
    Upcoming(UpcomingArgs),
    /// Trending recipes and the upcoming meals
    Home(UpcomingArgs),
    /// Visitor meal requests
    #[command(subcommand)]
    Request(RequestCommand),
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = recipebox::Config::load(cli.config.clone())?;
    config.validate().map_err(|e| anyhow::anyhow!(e))?;

    recipebox::observability::init_observability(
        "recipebox",
        env!("CARGO_PKG_VERSION"),
        &config.observability.log_level,
    )?;

    let open = || App::open(config.clone());

    match cli.command {
        Commands::Migrate => recipebox::db::migrate(&config).await,
        Commands::Reset => recipebox::db::reset(&config).await,
        Commands::Login { username, password } => {
            open().await?.access.login(&username, &password).await?;
            println!("Ingelogd.");
            Ok(())
        }
        Commands::Logout => {
            open().await?.access.logout().await?;
            println!("Uitgelogd.");
            Ok(())
        }
        Commands::Recipe(command) => cli::recipe::run(&open().await?, command).await,
        Commands::Calendar(args) => cli::calendar::run(&open().await?, args).await,
        Commands::Schedule(command) => cli::schedule::run(&open().await?, command).await,
        Commands::Upcoming(args) => cli::upcoming::run(&open().await?, args).await,
        Commands::Home(args) => cli::home::run(&open().await?, args).await,
        Commands::Request(command) => cli::request::run(&open().await?, command).await,
    }
}
