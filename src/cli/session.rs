//! `schooldesk sessions ...`

use tabled::Tabled;

use super::outcome::Recorded;
use super::{output, ListArgs, SessionCommand};
use crate::domain::Session;
use crate::error::Result;
use crate::infrastructure::App;

#[derive(Tabled)]
struct SessionRow {
    #[tabled(rename = "ID")]
    id: i64,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Start")]
    start: String,
    #[tabled(rename = "End")]
    end: String,
    #[tabled(rename = "Status")]
    status: String,
}

impl From<&Session> for SessionRow {
    fn from(session: &Session) -> Self {
        Self {
            id: session.id,
            name: session.session_name.clone(),
            start: session.start_date.to_string(),
            end: session.end_date.to_string(),
            status: session.status.to_string(),
        }
    }
}

pub async fn execute(app: &App, command: SessionCommand) -> Result<()> {
    let store = &app.sessions;
    match command {
        SessionCommand::List(args) => list(app, &args).await,
        SessionCommand::Show(arg) => {
            let session = store
                .load_session_by_id(arg.id)
                .await
                .recorded(store.error())?;
            show(&session);
            Ok(())
        }
        SessionCommand::Active => active(app).await,
        SessionCommand::Activate(arg) => {
            store
                .activate_session(arg.id)
                .await
                .recorded(store.error())?;
            output::ok(&format!("Session {} activated", arg.id));
            Ok(())
        }
        SessionCommand::Deactivate(arg) => {
            store
                .deactivate_session(arg.id)
                .await
                .recorded(store.error())?;
            output::ok(&format!("Session {} deactivated", arg.id));
            Ok(())
        }
        SessionCommand::Archive(arg) => {
            store
                .archive_session(arg.id)
                .await
                .recorded(store.error())?;
            output::ok(&format!("Session {} archived", arg.id));
            Ok(())
        }
        SessionCommand::Delete(arg) => {
            store
                .delete_session(arg.id)
                .await
                .recorded(store.error())?;
            output::ok(&format!("Session {} deleted", arg.id));
            Ok(())
        }
    }
}

async fn list(app: &App, args: &ListArgs) -> Result<()> {
    let store = &app.sessions;
    let sessions = store
        .load_sessions(&args.params())
        .await
        .recorded(store.error())?;

    output::table(
        sessions.iter().map(SessionRow::from).collect(),
        "No sessions found.",
    );
    let pagination = store.pagination();
    output::note(&format!(
        "Page {} of {} ({} total)",
        store.current_page() + 1,
        store.total_pages().max(1),
        pagination.total_elements
    ));
    if store.can_load_more() {
        output::note(&format!("Next page: --page {}", store.current_page() + 1));
    }
    Ok(())
}

async fn active(app: &App) -> Result<()> {
    let store = &app.sessions;
    let (active, upcoming) = tokio::join!(
        store.load_active_session(),
        store.load_upcoming_session()
    );

    output::section("Current sessions");
    match active {
        Ok(session) => output::key_value("Active", &session.session_name),
        Err(_) => output::key_value("Active", "-"),
    }
    match upcoming {
        Ok(session) => output::key_value("Upcoming", &session.session_name),
        Err(_) => output::key_value("Upcoming", "-"),
    }
    Ok(())
}

fn show(session: &Session) {
    output::section(&session.session_name);
    output::key_value("ID", session.id);
    output::key_value("Start", session.start_date);
    output::key_value("End", session.end_date);
    output::key_value("Status", session.status);
    output::key_value("Created", output::or_dash(session.created_at));
    output::key_value("Updated", output::or_dash(session.updated_at));
}
