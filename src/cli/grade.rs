//! `schooldesk grades ...`

use rust_decimal::Decimal;
use tabled::Tabled;

use super::outcome::Recorded;
use super::{output, GradeCommand};
use crate::domain::GradeBoundary;
use crate::error::Result;
use crate::infrastructure::App;
use crate::view;

#[derive(Tabled)]
struct GradeRow {
    #[tabled(rename = "ID")]
    id: i64,
    #[tabled(rename = "Grade")]
    grade: String,
    #[tabled(rename = "Range (%)")]
    range: String,
    #[tabled(rename = "Passing")]
    passing: &'static str,
}

impl From<&GradeBoundary> for GradeRow {
    fn from(boundary: &GradeBoundary) -> Self {
        Self {
            id: boundary.id,
            grade: boundary.grade.clone(),
            range: format!(
                "{} - {}",
                boundary.min_percentage.normalize(),
                boundary.max_percentage.normalize()
            ),
            passing: if boundary.is_passing { "yes" } else { "no" },
        }
    }
}

pub async fn execute(app: &App, command: GradeCommand) -> Result<()> {
    let store = &app.grade_boundaries;
    match command {
        GradeCommand::List(arg) => {
            let boundaries = store
                .load_grade_boundaries()
                .await
                .recorded(store.error())?;
            let term = arg.filter.as_deref().unwrap_or_default();
            let rows = view::filter_grade_boundaries(&boundaries, term);
            output::table(
                rows.iter().map(GradeRow::from).collect(),
                "No grade boundaries configured. Run `schooldesk grades setup-defaults`.",
            );
            Ok(())
        }
        GradeCommand::Calculate(args) => calculate(app, args.percentage).await,
        GradeCommand::SetupDefaults => {
            let boundaries = store
                .setup_default_grade_boundaries()
                .await
                .recorded(store.error())?;
            output::ok(&format!("Installed {} grade boundaries", boundaries.len()));
            output::table(
                store
                    .sorted_grade_boundaries()
                    .iter()
                    .map(GradeRow::from)
                    .collect(),
                "No grade boundaries returned.",
            );
            Ok(())
        }
        GradeCommand::Delete(arg) => {
            store
                .delete_grade_boundary(arg.id)
                .await
                .recorded(store.error())?;
            output::ok(&format!("Grade boundary {} deleted", arg.id));
            Ok(())
        }
    }
}

async fn calculate(app: &App, percentage: Decimal) -> Result<()> {
    let store = &app.grade_boundaries;
    let grade = store
        .calculate_grade(percentage)
        .await
        .recorded(store.error())?;
    output::key_value(&format!("{}%", percentage.normalize()), grade);
    Ok(())
}
