use chrono::NaiveDate;
use contracts::domain::a025_order::{
    OrderListQuery, OrderListResponse, OrderSortField, OrderStatus, SortOrder, MAX_AMOUNT,
};
use leptos::prelude::*;

pub const SEARCH_DEBOUNCE_MS: u32 = 300;

/// State of the orders page: the query being shown plus the last server answer.
///
/// Every reducer that changes what is filtered resets `page` to 1.
#[derive(Clone, Debug, PartialEq)]
pub struct OrdersPageState {
    pub query: OrderListQuery,
    pub response: OrderListResponse,
    pub is_loading: bool,
    pub is_exporting: bool,
    pub error: Option<String>,
    pub export_error: Option<String>,
    /// Incremented per list request; only the latest response is applied
    pub request_seq: u64,
}

impl Default for OrdersPageState {
    fn default() -> Self {
        Self {
            query: OrderListQuery::default(),
            response: OrderListResponse::default(),
            is_loading: true,
            is_exporting: false,
            error: None,
            export_error: None,
            request_seq: 0,
        }
    }
}

impl OrdersPageState {
    pub fn set_search(&mut self, search: String) {
        self.query.search = search;
        self.query.page = 1;
    }

    pub fn set_statuses(&mut self, statuses: Vec<OrderStatus>) {
        self.query.statuses = statuses;
        self.query.page = 1;
    }

    pub fn set_date_from(&mut self, date: Option<NaiveDate>) {
        self.query.date_from = date;
        self.query.page = 1;
    }

    pub fn set_date_to(&mut self, date: Option<NaiveDate>) {
        self.query.date_to = date;
        self.query.page = 1;
    }

    /// An inverted pair is stored with `min` lowered to `max`
    pub fn set_amount_range(&mut self, min: f64, max: f64) {
        let max = max.clamp(0.0, MAX_AMOUNT);
        self.query.min_amount = min.clamp(0.0, max);
        self.query.max_amount = max;
        self.query.page = 1;
    }

    /// Drops status, date and amount filters. Search and sort stay.
    pub fn clear_filters(&mut self) {
        let defaults = OrderListQuery::default();
        self.query.statuses = defaults.statuses;
        self.query.date_from = defaults.date_from;
        self.query.date_to = defaults.date_to;
        self.query.min_amount = defaults.min_amount;
        self.query.max_amount = defaults.max_amount;
        self.query.page = 1;
    }

    /// Same column flips the direction; another column starts descending.
    pub fn sort_by(&mut self, field: OrderSortField) {
        if self.query.sort_by == field {
            self.query.sort_order = self.query.sort_order.toggled();
        } else {
            self.query.sort_by = field;
            self.query.sort_order = SortOrder::Desc;
        }
    }

    pub fn set_page(&mut self, page: usize) {
        self.query.page = page.max(1);
    }

    pub fn set_page_size(&mut self, page_size: usize) {
        if page_size > 0 {
            self.query.page_size = page_size;
            self.query.page = 1;
        }
    }

    /// Marks a list request as started and returns its sequence number
    pub fn begin_request(&mut self) -> u64 {
        self.request_seq += 1;
        self.is_loading = true;
        self.error = None;
        self.request_seq
    }

    /// Applies a finished request. Returns `false` if a newer request has
    /// started meanwhile, in which case nothing changes.
    pub fn finish_request(&mut self, seq: u64, result: Result<OrderListResponse, String>) -> bool {
        if seq != self.request_seq {
            return false;
        }
        self.is_loading = false;
        match result {
            Ok(response) => {
                self.response = response;
                self.error = None;
            }
            Err(message) => {
                self.response = OrderListResponse::default();
                self.error = Some(message);
            }
        }
        true
    }

    /// Returns `false` if an export is already running
    pub fn begin_export(&mut self) -> bool {
        if self.is_exporting {
            return false;
        }
        self.is_exporting = true;
        self.export_error = None;
        true
    }

    pub fn finish_export(&mut self, result: Result<(), String>) {
        self.is_exporting = false;
        self.export_error = result.err();
    }
}

pub fn create_state() -> RwSignal<OrdersPageState> {
    RwSignal::new(OrdersPageState::default())
}
