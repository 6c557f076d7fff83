//! DataTable - Generic collection view with pagination
//!
//! `DataTable` renders rows (or cards on narrow windows) and raises sort and
//! row intents; `Pagination` renders page metadata and raises page intents.
//! Both are pure renderers over state owned by the page that embeds them.

pub mod column;
pub mod data_provider;
pub mod data_table;
pub mod intent;
pub mod pagination;
pub mod sort;
pub mod state;
pub mod viewport;

pub use column::{Column, ColumnWidth};
pub use data_provider::{DataProvider, PagedResponse, VecDataProvider, total_pages};
pub use data_table::{DataTable, DataTableEvent, RowTone, data_table};
pub use intent::{PageChangeRequest, SortChangeRequest};
pub use pagination::{PageItem, PageSummary, Pagination, PaginationProps, page_items};
pub use sort::{SortDirection, SortEntry, SortState};
pub use state::{TableBody, TableState};
pub use viewport::LayoutMode;
