pub mod range_filter;

pub use range_filter::{filter_by_range, FilteredTable};
