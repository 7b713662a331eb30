//! `schooldesk class-subjects ...`

use tabled::Tabled;

use super::outcome::Recorded;
use super::{output, ClassSubjectCommand, ClassSubjectListArgs};
use crate::domain::{ClassSubject, ClassSubjectRequest};
use crate::error::Result;
use crate::infrastructure::App;
use crate::view;

#[derive(Tabled)]
struct ClassSubjectRow {
    #[tabled(rename = "ID")]
    id: i64,
    #[tabled(rename = "Class")]
    class: String,
    #[tabled(rename = "Subject")]
    subject: String,
    #[tabled(rename = "Code")]
    code: String,
    #[tabled(rename = "Total")]
    total_marks: String,
    #[tabled(rename = "Pass")]
    passing_marks: String,
}

impl From<&ClassSubject> for ClassSubjectRow {
    fn from(link: &ClassSubject) -> Self {
        let class = match &link.section {
            Some(section) => format!("{} {section}", link.class_name),
            None => link.class_name.clone(),
        };
        Self {
            id: link.id,
            class,
            subject: link.subject_name.clone(),
            code: link.subject_code.clone(),
            total_marks: output::or_dash(link.total_marks),
            passing_marks: output::or_dash(link.passing_marks),
        }
    }
}

fn render(links: &[ClassSubject]) {
    output::table(
        links.iter().map(ClassSubjectRow::from).collect(),
        "No assignments found.",
    );
}

pub async fn execute(app: &App, command: ClassSubjectCommand) -> Result<()> {
    let store = &app.class_subjects;
    match command {
        ClassSubjectCommand::List(args) => list(app, &args).await,
        ClassSubjectCommand::Assign(args) => {
            let request = ClassSubjectRequest {
                total_marks: args.total_marks,
                passing_marks: args.passing_marks,
                ..ClassSubjectRequest::new(args.class_id, args.subject_id)
            };
            let link = store
                .assign_subject_to_class(&request)
                .await
                .recorded(store.error())?;
            output::ok(&format!(
                "Assigned {} to {} (id {})",
                link.subject_name, link.class_name, link.id
            ));
            Ok(())
        }
        ClassSubjectCommand::BulkAssign(args) => {
            let links = store
                .bulk_assign_subjects_to_class(args.class_id, &args.subject_ids)
                .await
                .recorded(store.error())?;
            output::ok(&format!(
                "Assigned {} subject(s) to class {}",
                links.len(),
                args.class_id
            ));
            render(&links);
            Ok(())
        }
        ClassSubjectCommand::Copy(args) => {
            let links = store
                .copy_subjects_from_class(args.source_class_id, args.target_class_id)
                .await
                .recorded(store.error())?;
            output::ok(&format!(
                "Copied {} subject(s) from class {} to class {}",
                links.len(),
                args.source_class_id,
                args.target_class_id
            ));
            render(&links);
            Ok(())
        }
        ClassSubjectCommand::Remove(arg) => {
            store
                .remove_subject_from_class(arg.id)
                .await
                .recorded(store.error())?;
            output::ok(&format!("Assignment {} removed", arg.id));
            Ok(())
        }
    }
}

async fn list(app: &App, args: &ClassSubjectListArgs) -> Result<()> {
    let store = &app.class_subjects;
    let links = match (args.class, args.subject) {
        (Some(class_id), _) => store
            .load_subjects_by_class(class_id)
            .await
            .recorded(store.error())?,
        (None, Some(subject_id)) => store
            .load_classes_by_subject(subject_id)
            .await
            .recorded(store.error())?,
        (None, None) => Vec::new(),
    };

    let term = args.filter.as_deref().unwrap_or_default();
    render(&view::filter_class_subjects(&links, term, args.class));
    Ok(())
}
