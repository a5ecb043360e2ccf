pub mod aggregate;
pub mod filter;

pub use aggregate::{StockItem, StockItemDto};
pub use filter::{filter_stock, unique_suppliers, ObservationFilter, StockFilter};
