//! Command-line interface definitions.
//!
//! Every command builds the application once, runs a single store operation
//! and renders the resulting state. Auth state persisted by one invocation is
//! restored by the next, so `login` only has to happen once.

pub mod auth;
pub mod class;
pub mod class_subject;
pub mod config;
pub mod grade;
pub mod layout;
pub mod navigator;
pub mod outcome;
pub mod output;
pub mod run;
pub mod session;
pub mod subject;

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use rust_decimal::Decimal;

use crate::domain::layout::LayoutMode;
use crate::domain::{ListParams, SortDir};
use crate::infrastructure::config::DEFAULT_CONFIG_PATH;

/// School administration client for the academic backend.
#[derive(Parser, Debug)]
#[command(name = "schooldesk")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long, global = true, default_value = DEFAULT_CONFIG_PATH)]
    pub config: PathBuf,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Sign in and remember the session
    Login(LoginArgs),

    /// Sign out and forget the session
    Logout,

    /// Show the signed-in user
    Whoami,

    /// Exchange the refresh token for fresh tokens
    Refresh,

    /// Change the signed-in user's password
    ChangePassword,

    /// Academic sessions
    #[command(subcommand)]
    Sessions(SessionCommand),

    /// School classes
    #[command(subcommand)]
    Classes(ClassCommand),

    /// Subjects
    #[command(subcommand)]
    Subjects(SubjectCommand),

    /// Subjects assigned to classes
    #[command(subcommand)]
    ClassSubjects(ClassSubjectCommand),

    /// Grade boundaries
    #[command(subcommand)]
    Grades(GradeCommand),

    /// Layout preferences
    #[command(subcommand)]
    Layout(LayoutCommand),

    /// Configuration utilities
    #[command(subcommand)]
    Config(ConfigCommand),
}

/// Subcommands for `schooldesk sessions`
#[derive(Subcommand, Debug)]
pub enum SessionCommand {
    /// List sessions
    List(ListArgs),
    /// Show one session
    Show(IdArg),
    /// Show the active and upcoming sessions
    Active,
    /// Mark a session active
    Activate(IdArg),
    /// Mark a session inactive
    Deactivate(IdArg),
    /// Archive a session
    Archive(IdArg),
    /// Delete a session
    Delete(IdArg),
}

/// Subcommands for `schooldesk classes`
#[derive(Subcommand, Debug)]
pub enum ClassCommand {
    /// List classes, optionally of one session
    List(ClassListArgs),
    /// Show one class
    Show(IdArg),
    /// Mark a class active
    Activate(IdArg),
    /// Mark a class inactive
    Deactivate(IdArg),
    /// Delete a class
    Delete(IdArg),
}

/// Subcommands for `schooldesk subjects`
#[derive(Subcommand, Debug)]
pub enum SubjectCommand {
    /// List subjects
    List(SubjectListArgs),
    /// Show one subject
    Show(IdArg),
    /// Mark a subject active
    Activate(IdArg),
    /// Mark a subject inactive
    Deactivate(IdArg),
    /// Delete a subject
    Delete(IdArg),
}

/// Subcommands for `schooldesk class-subjects`
#[derive(Subcommand, Debug)]
pub enum ClassSubjectCommand {
    /// List the subjects of a class or the classes of a subject
    List(ClassSubjectListArgs),
    /// Assign a subject to a class
    Assign(AssignArgs),
    /// Assign several subjects to a class at once
    BulkAssign(BulkAssignArgs),
    /// Copy every subject of one class to another
    Copy(CopyArgs),
    /// Remove a subject assignment
    Remove(IdArg),
}

/// Subcommands for `schooldesk grades`
#[derive(Subcommand, Debug)]
pub enum GradeCommand {
    /// List grade boundaries, highest first
    List(SearchArg),
    /// Grade letter for a percentage
    Calculate(CalculateArgs),
    /// Install the default grade scale
    SetupDefaults,
    /// Delete a grade boundary
    Delete(IdArg),
}

/// Subcommands for `schooldesk layout`
#[derive(Subcommand, Debug)]
pub enum LayoutCommand {
    /// Show the stored preferences and derived attributes
    Show,
    /// Switch between light and dark mode
    Mode(ModeArgs),
    /// Restore default preferences
    Reset,
}

/// Subcommands for `schooldesk config`
#[derive(Subcommand, Debug)]
pub enum ConfigCommand {
    /// Validate the configuration and show effective values
    Check,
}

#[derive(Args, Debug)]
pub struct LoginArgs {
    /// Username; prompted when omitted
    pub username: Option<String>,
}

#[derive(Args, Debug)]
pub struct IdArg {
    /// Backend id
    pub id: i64,
}

#[derive(Args, Debug)]
pub struct SearchArg {
    /// Only show rows containing this text
    #[arg(long)]
    pub filter: Option<String>,
}

/// Paging, sorting and search for list commands.
#[derive(Args, Debug)]
pub struct ListArgs {
    /// Zero-based page number
    #[arg(long, default_value = "0")]
    pub page: u32,

    /// Page size
    #[arg(long)]
    pub size: Option<u32>,

    /// Field to sort by
    #[arg(long)]
    pub sort_by: Option<String>,

    /// Sort descending
    #[arg(long)]
    pub desc: bool,

    /// Server-side search term
    #[arg(long)]
    pub search: Option<String>,
}

impl ListArgs {
    #[must_use]
    pub fn params(&self) -> ListParams {
        ListParams {
            page: self.page,
            size: self.size,
            sort_by: self.sort_by.clone(),
            sort_dir: if self.desc { SortDir::Desc } else { SortDir::Asc },
            search: self.search.clone(),
        }
    }
}

#[derive(Args, Debug)]
pub struct ClassListArgs {
    #[command(flatten)]
    pub list: ListArgs,

    /// Only classes of this session
    #[arg(long)]
    pub session: Option<i64>,

    /// With --session, only active classes
    #[arg(long, requires = "session")]
    pub active: bool,
}

#[derive(Args, Debug)]
pub struct SubjectListArgs {
    #[command(flatten)]
    pub list: ListArgs,

    /// Only active subjects
    #[arg(long)]
    pub active: bool,
}

#[derive(Args, Debug)]
pub struct ClassSubjectListArgs {
    /// Subjects of this class
    #[arg(long, conflicts_with = "subject", required_unless_present = "subject")]
    pub class: Option<i64>,

    /// Classes of this subject
    #[arg(long)]
    pub subject: Option<i64>,

    /// Only show rows containing this text
    #[arg(long)]
    pub filter: Option<String>,
}

#[derive(Args, Debug)]
pub struct AssignArgs {
    pub class_id: i64,
    pub subject_id: i64,

    #[arg(long)]
    pub total_marks: Option<u32>,

    #[arg(long)]
    pub passing_marks: Option<u32>,
}

#[derive(Args, Debug)]
pub struct BulkAssignArgs {
    pub class_id: i64,

    /// Subject ids to assign
    #[arg(required = true, num_args = 1..)]
    pub subject_ids: Vec<i64>,
}

#[derive(Args, Debug)]
pub struct CopyArgs {
    /// Class to copy subjects from
    pub source_class_id: i64,
    /// Class to copy subjects to
    pub target_class_id: i64,
}

#[derive(Args, Debug)]
pub struct CalculateArgs {
    /// Percentage, e.g. 72.5
    pub percentage: Decimal,
}

#[derive(Args, Debug)]
pub struct ModeArgs {
    /// `light` or `dark`
    pub mode: LayoutMode,
}
