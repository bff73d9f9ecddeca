//! Output of resolved records.
//!
//! This module turns `"<TYPE> <data>"` record strings into two-column rows
//! and writes them either as a terminal table or as a per-domain CSV file.

mod csv;
mod row;
mod table;

pub use self::csv::{csv_file_name, export_csv};
pub use row::{record_rows, split_record};
pub use table::render_table;
