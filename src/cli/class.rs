//! `schooldesk classes ...`

use tabled::Tabled;

use super::outcome::Recorded;
use super::{output, ClassCommand, ClassListArgs};
use crate::domain::SchoolClass;
use crate::error::Result;
use crate::infrastructure::App;
use crate::view;

#[derive(Tabled)]
struct ClassRow {
    #[tabled(rename = "ID")]
    id: i64,
    #[tabled(rename = "Class")]
    name: String,
    #[tabled(rename = "Session")]
    session: String,
    #[tabled(rename = "Capacity")]
    capacity: String,
    #[tabled(rename = "Active")]
    active: &'static str,
}

impl From<&SchoolClass> for ClassRow {
    fn from(class: &SchoolClass) -> Self {
        let name = if class.display_name.is_empty() {
            class.class_name.clone()
        } else {
            class.display_name.clone()
        };
        Self {
            id: class.id,
            name,
            session: class.session_name.clone(),
            capacity: output::or_dash(class.capacity),
            active: if class.is_active { "yes" } else { "no" },
        }
    }
}

pub async fn execute(app: &App, command: ClassCommand) -> Result<()> {
    let store = &app.classes;
    match command {
        ClassCommand::List(args) => list(app, &args).await,
        ClassCommand::Show(arg) => {
            let class = store
                .load_class_by_id(arg.id)
                .await
                .recorded(store.error())?;
            output::section(&class.display_name);
            output::key_value("ID", class.id);
            output::key_value("Class", &class.class_name);
            output::key_value("Section", output::or_dash(class.section.as_deref()));
            output::key_value("Session", &class.session_name);
            output::key_value("Capacity", output::or_dash(class.capacity));
            output::key_value("Active", class.is_active);
            Ok(())
        }
        ClassCommand::Activate(arg) => {
            store.activate_class(arg.id).await.recorded(store.error())?;
            output::ok(&format!("Class {} activated", arg.id));
            Ok(())
        }
        ClassCommand::Deactivate(arg) => {
            store
                .deactivate_class(arg.id)
                .await
                .recorded(store.error())?;
            output::ok(&format!("Class {} deactivated", arg.id));
            Ok(())
        }
        ClassCommand::Delete(arg) => {
            store.delete_class(arg.id).await.recorded(store.error())?;
            output::ok(&format!("Class {} deleted", arg.id));
            Ok(())
        }
    }
}

async fn list(app: &App, args: &ClassListArgs) -> Result<()> {
    let store = &app.classes;
    let classes = match args.session {
        Some(session_id) if args.active => {
            let active = store
                .load_active_classes_by_session(session_id)
                .await
                .recorded(store.error())?;
            view::filter_classes(&active, args.list.search.as_deref().unwrap_or_default())
        }
        Some(session_id) => store
            .load_classes_by_session(session_id, args.list.page, args.list.size)
            .await
            .recorded(store.error())?,
        None => store
            .load_classes(&args.list.params())
            .await
            .recorded(store.error())?,
    };

    output::table(
        classes.iter().map(ClassRow::from).collect(),
        "No classes found.",
    );
    if !args.active && store.can_load_more() {
        output::note(&format!("More results: --page {}", args.list.page + 1));
    }
    Ok(())
}
