//! Derived views over store state.
//!
//! Pure projections recomputed on read, plus the search debouncer that
//! coalesces keystrokes before a reload.

mod debounce;
mod filter;

pub use debounce::{SearchDebouncer, SearchInput, DEFAULT_QUIET_PERIOD};
pub use filter::{
    filter_class_subjects, filter_classes, filter_grade_boundaries, filter_sessions,
    filter_subjects, sort_by_min_percentage_desc,
};
