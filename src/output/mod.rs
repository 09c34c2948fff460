pub mod formatter;

pub use formatter::{
    format_created_at, format_open_time, format_pr_table, format_repo_pr_table, TableStyle,
};
