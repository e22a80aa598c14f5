use crate::shared::components::table::format_usd_f64;
use crate::shared::date_utils::format_short_naive_date;
use chrono::NaiveDate;
use contracts::domain::a025_order::{parse_amount, OrderListItemDto, OrderStatus, MAX_AMOUNT};

pub const EMPTY_TITLE: &str = "No orders found";
pub const EMPTY_HINT_FILTERED: &str = "Try adjusting your filters";
pub const EMPTY_HINT_FRESH: &str = "Create your first order to get started";

/// Placeholder shape shown while loading; does not depend on the row count
pub const SKELETON_ROWS: usize = 5;
pub const SKELETON_CELL_CLASSES: [&str; 5] = [
    "skeleton skeleton--w32",
    "skeleton skeleton--w48",
    "skeleton skeleton--w20 skeleton--tall",
    "skeleton skeleton--w24",
    "skeleton skeleton--w24",
];

/// Snapshot of the filter props the table receives
#[derive(Clone, Debug, PartialEq)]
pub struct OrderFilterState {
    pub search_query: String,
    pub selected_statuses: Vec<OrderStatus>,
    pub date_from: Option<NaiveDate>,
    pub date_to: Option<NaiveDate>,
    pub min_amount: f64,
    pub max_amount: f64,
}

impl Default for OrderFilterState {
    fn default() -> Self {
        Self {
            search_query: String::new(),
            selected_statuses: Vec::new(),
            date_from: None,
            date_to: None,
            min_amount: 0.0,
            max_amount: MAX_AMOUNT,
        }
    }
}

/// A filter dimension that can be reset from its badge
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterRemoval {
    Status(OrderStatus),
    DateFrom,
    DateTo,
    AmountRange,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FilterTagSpec {
    pub label: String,
    pub removal: FilterRemoval,
}

impl OrderFilterState {
    pub fn is_amount_narrowed(&self) -> bool {
        self.min_amount > 0.0 || self.max_amount < MAX_AMOUNT
    }

    /// Search is not counted here; it has its own input.
    pub fn active_filters_count(&self) -> usize {
        self.selected_statuses.len()
            + usize::from(self.date_from.is_some())
            + usize::from(self.date_to.is_some())
            + usize::from(self.is_amount_narrowed())
    }

    /// Drives "Clear all" and the filter tag row
    pub fn has_active_filters(&self) -> bool {
        self.active_filters_count() > 0
    }

    pub fn is_filtering(&self) -> bool {
        !self.search_query.is_empty() || self.active_filters_count() > 0
    }

    /// Removable badges for every active filter, in display order
    pub fn filter_tags(&self) -> Vec<FilterTagSpec> {
        let mut tags: Vec<FilterTagSpec> = self
            .selected_statuses
            .iter()
            .map(|status| FilterTagSpec {
                label: format!("Status: {}", status.display_name()),
                removal: FilterRemoval::Status(*status),
            })
            .collect();

        if let Some(from) = self.date_from {
            tags.push(FilterTagSpec {
                label: format!("From: {}", format_short_naive_date(from)),
                removal: FilterRemoval::DateFrom,
            });
        }
        if let Some(to) = self.date_to {
            tags.push(FilterTagSpec {
                label: format!("To: {}", format_short_naive_date(to)),
                removal: FilterRemoval::DateTo,
            });
        }
        if self.is_amount_narrowed() {
            tags.push(FilterTagSpec {
                label: format!(
                    "Amount: {} – {}",
                    format_usd_f64(self.min_amount),
                    format_usd_f64(self.max_amount)
                ),
                removal: FilterRemoval::AmountRange,
            });
        }
        tags
    }
}

/// New status selection after a checkbox change; keeps the order of `OrderStatus::all()`
pub fn toggle_status(selected: &[OrderStatus], status: OrderStatus, checked: bool) -> Vec<OrderStatus> {
    OrderStatus::all()
        .into_iter()
        .filter(|s| if *s == status { checked } else { selected.contains(s) })
        .collect()
}

/// Parses an amount bound typed by the user. An empty field means `default`
/// (no bound); anything else unusable keeps `previous`.
pub fn parse_amount_bound(text: &str, previous: f64, default: f64) -> f64 {
    let text = text.trim();
    if text.is_empty() {
        return default;
    }
    match text.parse::<f64>() {
        Ok(v) if v.is_finite() && v >= 0.0 => v.min(MAX_AMOUNT),
        _ => previous,
    }
}

/// One message per order whose amount does not parse
pub fn amount_error_messages(orders: &[OrderListItemDto]) -> Vec<String> {
    orders
        .iter()
        .filter_map(|order| {
            parse_amount(&order.amount)
                .err()
                .map(|err| format!("order {}: {}", order.id, err))
        })
        .collect()
}

/// What the table body shows, in order of precedence
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableBodyState {
    Loading,
    Empty { title: &'static str, hint: &'static str },
    Rows,
}

impl TableBodyState {
    pub fn resolve(is_loading: bool, row_count: usize, is_filtering: bool) -> Self {
        if is_loading {
            TableBodyState::Loading
        } else if row_count == 0 {
            TableBodyState::Empty {
                title: EMPTY_TITLE,
                hint: if is_filtering {
                    EMPTY_HINT_FILTERED
                } else {
                    EMPTY_HINT_FRESH
                },
            }
        } else {
            TableBodyState::Rows
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, 5).unwrap()
    }

    #[test]
    fn test_default_filters_are_inactive() {
        let filters = OrderFilterState::default();
        assert_eq!(filters.active_filters_count(), 0);
        assert!(!filters.is_filtering());
        assert!(filters.filter_tags().is_empty());
    }

    #[test]
    fn test_active_filters_count() {
        let filters = OrderFilterState {
            selected_statuses: vec![OrderStatus::Paid],
            date_from: None,
            date_to: Some(today()),
            min_amount: 0.0,
            max_amount: MAX_AMOUNT,
            ..Default::default()
        };
        assert_eq!(filters.active_filters_count(), 2);
    }

    #[test]
    fn test_amount_range_counts_once() {
        let filters = OrderFilterState {
            min_amount: 10.0,
            max_amount: 500.0,
            ..Default::default()
        };
        assert_eq!(filters.active_filters_count(), 1);
        let only_max = OrderFilterState {
            max_amount: 500.0,
            ..Default::default()
        };
        assert!(only_max.is_amount_narrowed());
    }

    #[test]
    fn test_search_alone_is_filtering_but_not_counted() {
        let filters = OrderFilterState {
            search_query: "foo".to_string(),
            ..Default::default()
        };
        assert_eq!(filters.active_filters_count(), 0);
        assert!(filters.is_filtering());
    }

    #[test]
    fn test_filter_tags() {
        let filters = OrderFilterState {
            selected_statuses: vec![OrderStatus::Pending, OrderStatus::Shipped],
            date_from: Some(NaiveDate::from_ymd_opt(2024, 3, 1).unwrap()),
            date_to: Some(today()),
            min_amount: 0.0,
            max_amount: 250.5,
            ..Default::default()
        };
        let labels: Vec<String> = filters.filter_tags().into_iter().map(|t| t.label).collect();
        assert_eq!(
            labels,
            vec![
                "Status: Pending",
                "Status: Shipped",
                "From: Mar 1, 2024",
                "To: Mar 5, 2024",
                "Amount: $0.00 – $250.50",
            ]
        );
        assert_eq!(
            filters.filter_tags()[1].removal,
            FilterRemoval::Status(OrderStatus::Shipped)
        );
    }

    #[test]
    fn test_toggle_status() {
        let selected = vec![OrderStatus::Shipped];
        assert_eq!(
            toggle_status(&selected, OrderStatus::Pending, true),
            vec![OrderStatus::Pending, OrderStatus::Shipped]
        );
        assert!(toggle_status(&selected, OrderStatus::Shipped, false).is_empty());
        assert_eq!(
            toggle_status(&selected, OrderStatus::Shipped, true),
            vec![OrderStatus::Shipped]
        );
    }

    #[test]
    fn test_parse_amount_bound() {
        assert_eq!(parse_amount_bound("250", 0.0, 0.0), 250.0);
        assert_eq!(parse_amount_bound(" 12.5 ", 0.0, 0.0), 12.5);
        assert_eq!(parse_amount_bound("-5", 40.0, 0.0), 40.0);
        assert_eq!(parse_amount_bound("abc", 40.0, 0.0), 40.0);
        assert_eq!(parse_amount_bound("999999", 0.0, 0.0), MAX_AMOUNT);
    }

    #[test]
    fn test_empty_amount_bound_resets_to_default() {
        assert_eq!(parse_amount_bound("", 40.0, 0.0), 0.0);
        assert_eq!(parse_amount_bound("  ", 40.0, MAX_AMOUNT), MAX_AMOUNT);
    }

    #[test]
    fn test_has_active_filters() {
        assert!(!OrderFilterState::default().has_active_filters());
        let filters = OrderFilterState {
            date_from: Some(today()),
            ..Default::default()
        };
        assert!(filters.has_active_filters());
        let searching = OrderFilterState {
            search_query: "foo".to_string(),
            ..Default::default()
        };
        assert!(!searching.has_active_filters());
    }

    #[test]
    fn test_amount_error_messages() {
        use chrono::{TimeZone, Utc};
        let row = |id: &str, amount: &str| OrderListItemDto {
            id: id.to_string(),
            customer_name: "Ada".to_string(),
            status: "paid".to_string(),
            amount: amount.to_string(),
            order_date: Utc.with_ymd_and_hms(2024, 3, 5, 0, 0, 0).unwrap(),
        };
        let messages = amount_error_messages(&[row("ord_1", "10.00"), row("ord_2", "N/A")]);
        assert_eq!(messages.len(), 1);
        assert!(messages[0].starts_with("order ord_2: "));
        assert!(messages[0].contains("\"N/A\""));
    }

    #[test]
    fn test_loading_wins_over_everything() {
        assert_eq!(TableBodyState::resolve(true, 0, false), TableBodyState::Loading);
        assert_eq!(TableBodyState::resolve(true, 20, true), TableBodyState::Loading);
    }

    #[test]
    fn test_empty_state_messages() {
        let fresh = OrderFilterState::default();
        assert_eq!(
            TableBodyState::resolve(false, 0, fresh.is_filtering()),
            TableBodyState::Empty {
                title: EMPTY_TITLE,
                hint: "Create your first order to get started",
            }
        );

        let searching = OrderFilterState {
            search_query: "foo".to_string(),
            ..Default::default()
        };
        assert_eq!(
            TableBodyState::resolve(false, 0, searching.is_filtering()),
            TableBodyState::Empty {
                title: EMPTY_TITLE,
                hint: "Try adjusting your filters",
            }
        );
    }

    #[test]
    fn test_rows_state() {
        assert_eq!(TableBodyState::resolve(false, 3, true), TableBodyState::Rows);
    }
}
