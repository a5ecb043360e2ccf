pub mod aggregate;
pub mod filter;

pub use aggregate::{SaleRecord, SaleRecordDto};
pub use filter::{filter_sales, SalesFilter, StatusFilter};
