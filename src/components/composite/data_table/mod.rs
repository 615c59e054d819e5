//! DataTable
//!
//! A lazy-loading data table: column definitions, the table entity with
//! checkbox row selection, and the pagination footer.

pub mod column;
#[allow(clippy::module_inception)]
pub mod data_table;
pub mod pagination;

pub use column::Column;
pub use data_table::DataTable;
pub use pagination::Pagination;
