use super::aggregate::{OrderListItemDto, OrderStatus, MAX_AMOUNT};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

pub const DEFAULT_PAGE_SIZE: usize = 20;
pub const PAGE_SIZE_OPTIONS: [usize; 4] = [10, 20, 50, 100];

/// Columns the server can sort orders by
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OrderSortField {
    #[serde(rename = "orderDate")]
    OrderDate,
    #[serde(rename = "amount")]
    Amount,
}

impl OrderSortField {
    pub fn code(&self) -> &'static str {
        match self {
            OrderSortField::OrderDate => "orderDate",
            OrderSortField::Amount => "amount",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    Asc,
    #[default]
    Desc,
}

impl SortOrder {
    pub fn toggled(self) -> Self {
        match self {
            SortOrder::Asc => SortOrder::Desc,
            SortOrder::Desc => SortOrder::Asc,
        }
    }
}

/// Export formats offered by the data source
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportType {
    Csv,
    Xlsx,
    Json,
}

impl ExportType {
    pub fn all() -> Vec<ExportType> {
        vec![ExportType::Csv, ExportType::Xlsx, ExportType::Json]
    }

    pub fn code(&self) -> &'static str {
        match self {
            ExportType::Csv => "csv",
            ExportType::Xlsx => "xlsx",
            ExportType::Json => "json",
        }
    }

    /// Menu label, e.g. `CSV`
    pub fn label(&self) -> String {
        self.code().to_uppercase()
    }

    pub fn mime_type(&self) -> &'static str {
        match self {
            ExportType::Csv => "text/csv;charset=utf-8;",
            ExportType::Xlsx => {
                "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet"
            }
            ExportType::Json => "application/json",
        }
    }
}

/// Query parameters of the orders list endpoint.
///
/// The same parameters (plus `format`) drive the export endpoint, so an export
/// always matches what the table currently shows.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderListQuery {
    /// 1-indexed
    pub page: usize,
    pub page_size: usize,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub search: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub statuses: Vec<OrderStatus>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_from: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_to: Option<NaiveDate>,
    pub min_amount: f64,
    pub max_amount: f64,
    pub sort_by: OrderSortField,
    pub sort_order: SortOrder,
}

impl Default for OrderListQuery {
    fn default() -> Self {
        Self {
            page: 1,
            page_size: DEFAULT_PAGE_SIZE,
            search: String::new(),
            statuses: Vec::new(),
            date_from: None,
            date_to: None,
            min_amount: 0.0,
            max_amount: MAX_AMOUNT,
            sort_by: OrderSortField::OrderDate,
            sort_order: SortOrder::Desc,
        }
    }
}

/// One page of orders. The server keeps `orders`, `total` and `total_pages` consistent.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderListResponse {
    pub orders: Vec<OrderListItemDto>,
    pub total: usize,
    pub page: usize,
    pub page_size: usize,
    pub total_pages: usize,
}
