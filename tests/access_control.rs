use recipebox_shared::Error;
use temp_dir::TempDir;

mod helpers;

#[tokio::test]
async fn test_login_unlocks_builder() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let app = helpers::setup_test_app(dir.child("db.sqlite3")).await?;

    assert!(matches!(
        app.access.require_login().await,
        Err(Error::Forbidden)
    ));

    app.access.login("chef", "lekker").await?;
    app.access.require_login().await?;
    assert!(app.store.is_logged_in().await?);

    app.access.logout().await?;
    assert!(matches!(
        app.access.require_login().await,
        Err(Error::Forbidden)
    ));

    Ok(())
}

#[tokio::test]
async fn test_wrong_credentials_are_rejected() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let app = helpers::setup_test_app(dir.child("db.sqlite3")).await?;

    assert!(matches!(
        app.access.login("chef", "vies").await,
        Err(Error::Forbidden)
    ));
    assert!(matches!(
        app.access.login("gast", "lekker").await,
        Err(Error::Forbidden)
    ));
    assert!(!app.store.is_logged_in().await?);

    Ok(())
}

#[tokio::test]
async fn test_builder_commands_require_login() -> anyhow::Result<()> {
    use recipebox::cli::schedule::{ScheduleCommand, SetArgs};

    let dir = TempDir::new()?;
    let app = helpers::setup_test_app(dir.child("db.sqlite3")).await?;

    let result = recipebox::cli::schedule::run(
        &app,
        ScheduleCommand::Set(SetArgs {
            date: "2024-03-15".to_owned(),
            recipe: None,
            unknown: true,
            custom: None,
        }),
    )
    .await;

    let err = result.unwrap_err();
    assert!(matches!(err.downcast_ref::<Error>(), Some(Error::Forbidden)));
    assert!(app.store.schedule().await?.is_empty());

    app.access.login("chef", "lekker").await?;
    recipebox::cli::schedule::run(
        &app,
        ScheduleCommand::Set(SetArgs {
            date: "2024-03-15".to_owned(),
            recipe: None,
            unknown: true,
            custom: None,
        }),
    )
    .await?;
    assert_eq!(app.store.schedule().await?.len(), 1);

    Ok(())
}
