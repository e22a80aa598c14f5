pub mod aggregate;
pub mod query;

pub use aggregate::{parse_amount, AmountParseError, OrderListItemDto, OrderStatus, MAX_AMOUNT};
pub use query::{
    ExportType, OrderListQuery, OrderListResponse, OrderSortField, SortOrder, DEFAULT_PAGE_SIZE,
    PAGE_SIZE_OPTIONS,
};
