//! Command dispatch.

use std::sync::Arc;

use tracing::debug;

use super::navigator::ConsoleNavigator;
use super::{auth, class, class_subject, config, grade, layout, session, subject};
use super::{Cli, Commands, ConfigCommand};
use crate::error::Result;
use crate::infrastructure::{App, Config};

/// Run one parsed command line to completion.
///
/// # Errors
///
/// Returns the first failure: configuration, prompt I/O, or the store
/// operation the command performed.
pub async fn execute(cli: Cli) -> Result<()> {
    if let Commands::Config(ConfigCommand::Check) = cli.command {
        return config::check(&cli.config);
    }

    let config = Config::load_or_default(&cli.config)?;
    config.init_logging();

    let navigator = Arc::new(ConsoleNavigator::new());
    let app = App::build(&config, navigator)?;
    debug!(command = ?cli.command, "Dispatching");

    if needs_warm_cache(&cli.command) && app.auth.is_logged_in() {
        app.init().await;
    }

    match cli.command {
        Commands::Login(args) => auth::login(&app, args.username).await,
        Commands::Logout => auth::logout(&app).await,
        Commands::Whoami => auth::whoami(&app).await,
        Commands::Refresh => auth::refresh(&app).await,
        Commands::ChangePassword => auth::change_password(&app).await,
        Commands::Sessions(command) => session::execute(&app, command).await,
        Commands::Classes(command) => class::execute(&app, command).await,
        Commands::Subjects(command) => subject::execute(&app, command).await,
        Commands::ClassSubjects(command) => class_subject::execute(&app, command).await,
        Commands::Grades(command) => grade::execute(&app, command).await,
        Commands::Layout(command) => layout::execute(&app, command),
        Commands::Config(ConfigCommand::Check) => config::check(&cli.config),
    }
}

/// Commands that read academic data start from the same warm caches a
/// long-lived client would have.
fn needs_warm_cache(command: &Commands) -> bool {
    matches!(
        command,
        Commands::Sessions(_)
            | Commands::Classes(_)
            | Commands::Subjects(_)
            | Commands::ClassSubjects(_)
    )
}
