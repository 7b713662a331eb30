//! `schooldesk subjects ...`

use tabled::Tabled;

use super::outcome::Recorded;
use super::{output, SubjectCommand, SubjectListArgs};
use crate::domain::Subject;
use crate::error::Result;
use crate::infrastructure::App;
use crate::view;

#[derive(Tabled)]
struct SubjectRow {
    #[tabled(rename = "ID")]
    id: i64,
    #[tabled(rename = "Code")]
    code: String,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Active")]
    active: &'static str,
}

impl From<&Subject> for SubjectRow {
    fn from(subject: &Subject) -> Self {
        Self {
            id: subject.id,
            code: subject.subject_code.clone(),
            name: subject.subject_name.clone(),
            active: if subject.is_active { "yes" } else { "no" },
        }
    }
}

pub async fn execute(app: &App, command: SubjectCommand) -> Result<()> {
    let store = &app.subjects;
    match command {
        SubjectCommand::List(args) => list(app, &args).await,
        SubjectCommand::Show(arg) => {
            let subject = store
                .load_subject_by_id(arg.id)
                .await
                .recorded(store.error())?;
            output::section(&subject.subject_name);
            output::key_value("ID", subject.id);
            output::key_value("Code", &subject.subject_code);
            output::key_value("Active", subject.is_active);
            output::key_value("Created", output::or_dash(subject.created_at));
            Ok(())
        }
        SubjectCommand::Activate(arg) => {
            store
                .activate_subject(arg.id)
                .await
                .recorded(store.error())?;
            output::ok(&format!("Subject {} activated", arg.id));
            Ok(())
        }
        SubjectCommand::Deactivate(arg) => {
            store
                .deactivate_subject(arg.id)
                .await
                .recorded(store.error())?;
            output::ok(&format!("Subject {} deactivated", arg.id));
            Ok(())
        }
        SubjectCommand::Delete(arg) => {
            store
                .delete_subject(arg.id)
                .await
                .recorded(store.error())?;
            output::ok(&format!("Subject {} deleted", arg.id));
            Ok(())
        }
    }
}

async fn list(app: &App, args: &SubjectListArgs) -> Result<()> {
    let store = &app.subjects;
    let subjects = if args.active {
        let active = store
            .load_active_subjects()
            .await
            .recorded(store.error())?;
        view::filter_subjects(&active, args.list.search.as_deref().unwrap_or_default())
    } else {
        store
            .load_subjects(&args.list.params())
            .await
            .recorded(store.error())?
    };

    output::table(
        subjects.iter().map(SubjectRow::from).collect(),
        "No subjects found.",
    );
    if !args.active && store.can_load_more() {
        output::note(&format!("More results: --page {}", args.list.page + 1));
    }
    Ok(())
}
