//! Column definitions for the orders table.
//!
//! `build_order_columns` maps action callbacks and the current sort state to an
//! ordered list of column descriptors. Descriptors are plain data plus the
//! callbacks they report to; turning them into DOM is left to the table view.

use crate::shared::components::table::format_currency;
use crate::shared::components::ui::BadgeVariant;
use crate::shared::date_utils::format_short_date;
use contracts::domain::a025_order::{
    AmountParseError, OrderListItemDto, OrderSortField, OrderStatus, SortOrder,
};
use leptos::prelude::*;
use std::sync::Arc;

/// Callbacks fired by the per-row actions, each receiving the order id
#[derive(Clone, Copy)]
pub struct OrderRowActions {
    pub on_view: Callback<String>,
    pub on_edit: Callback<String>,
    pub on_delete: Callback<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowAction {
    View,
    Edit,
    Delete,
}

impl RowAction {
    pub fn all() -> [RowAction; 3] {
        [RowAction::View, RowAction::Edit, RowAction::Delete]
    }

    pub fn label(&self) -> &'static str {
        match self {
            RowAction::View => "View",
            RowAction::Edit => "Edit",
            RowAction::Delete => "Delete",
        }
    }

    pub fn icon_name(&self) -> &'static str {
        match self {
            RowAction::View => "eye",
            RowAction::Edit => "edit",
            RowAction::Delete => "trash",
        }
    }

    pub fn is_destructive(&self) -> bool {
        matches!(self, RowAction::Delete)
    }
}

impl OrderRowActions {
    pub fn dispatch(&self, action: RowAction, id: &str) {
        let callback = match action {
            RowAction::View => self.on_view,
            RowAction::Edit => self.on_edit,
            RowAction::Delete => self.on_delete,
        };
        callback.run(id.to_string());
    }
}

/// Where inside a data row a click landed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowClickTarget {
    /// Anywhere on the row outside the actions menu
    Row,
    /// The "..." button that opens the actions menu
    MenuTrigger,
    MenuItem(RowAction),
}

/// Handles a click on `target` inside the row of order `id`.
///
/// Returns `true` when the event must not propagate to the row: clicks inside
/// the actions menu never also open the order.
pub fn route_row_click(target: RowClickTarget, id: &str, actions: &OrderRowActions) -> bool {
    match target {
        RowClickTarget::Row => {
            actions.on_view.run(id.to_string());
            false
        }
        RowClickTarget::MenuTrigger => true,
        RowClickTarget::MenuItem(action) => {
            actions.dispatch(action, id);
            true
        }
    }
}

/// Sort state as seen by the headers. `on_sort` receives the clicked column;
/// deciding the resulting direction is up to the owner.
#[derive(Clone, Copy)]
pub struct OrderColumnSorting {
    pub sort_by: OrderSortField,
    pub sort_order: SortOrder,
    pub on_sort: Callback<OrderSortField>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OrderColumnKey {
    Id,
    CustomerName,
    Status,
    Amount,
    OrderDate,
    Actions,
}

impl OrderColumnKey {
    pub fn id(&self) -> &'static str {
        match self {
            OrderColumnKey::Id => "id",
            OrderColumnKey::CustomerName => "customerName",
            OrderColumnKey::Status => "status",
            OrderColumnKey::Amount => "amount",
            OrderColumnKey::OrderDate => "orderDate",
            OrderColumnKey::Actions => "actions",
        }
    }
}

#[derive(Clone)]
pub enum ColumnHeader {
    Label {
        title: &'static str,
        icon: &'static str,
    },
    Sortable {
        title: &'static str,
        icon: &'static str,
        column: OrderSortField,
        /// Only set on the active sort column
        direction: Option<SortOrder>,
        on_sort: Callback<OrderSortField>,
    },
    Empty,
}

impl ColumnHeader {
    fn sortable(
        title: &'static str,
        icon: &'static str,
        column: OrderSortField,
        sorting: &OrderColumnSorting,
    ) -> Self {
        ColumnHeader::Sortable {
            title,
            icon,
            column,
            direction: (sorting.sort_by == column).then_some(sorting.sort_order),
            on_sort: sorting.on_sort,
        }
    }

    pub fn title(&self) -> Option<&'static str> {
        match self {
            ColumnHeader::Label { title, .. } | ColumnHeader::Sortable { title, .. } => {
                Some(*title)
            }
            ColumnHeader::Empty => None,
        }
    }

    pub fn is_sortable(&self) -> bool {
        matches!(self, ColumnHeader::Sortable { .. })
    }

    pub fn direction(&self) -> Option<SortOrder> {
        match self {
            ColumnHeader::Sortable { direction, .. } => *direction,
            _ => None,
        }
    }

    /// Reports a header click. Returns `false` for non-interactive headers.
    pub fn click(&self) -> bool {
        match self {
            ColumnHeader::Sortable {
                column, on_sort, ..
            } => {
                on_sort.run(*column);
                true
            }
            _ => false,
        }
    }
}

/// What a cell shows, independent of how it is drawn
#[derive(Debug, Clone, PartialEq)]
pub enum CellContent {
    Text { text: String, emphasis: bool },
    Badge { label: String, variant: BadgeVariant },
    Money(Result<String, AmountParseError>),
    Date(String),
    Actions { row_id: String },
}

pub fn status_badge_variant(status: OrderStatus) -> BadgeVariant {
    match status {
        OrderStatus::Pending => BadgeVariant::Warning,
        OrderStatus::Paid => BadgeVariant::Success,
        OrderStatus::Shipped => BadgeVariant::Primary,
        OrderStatus::Cancelled => BadgeVariant::Error,
    }
}

/// Badge for a raw status value. Unknown values keep their text and use the neutral style.
pub fn status_badge(raw: &str) -> CellContent {
    let variant = OrderStatus::from_code(raw)
        .map(status_badge_variant)
        .unwrap_or(BadgeVariant::Neutral);
    CellContent::Badge {
        label: raw.to_string(),
        variant,
    }
}

#[derive(Clone)]
pub struct OrderColumn {
    pub key: OrderColumnKey,
    pub header: ColumnHeader,
    actions: Option<OrderRowActions>,
}

impl OrderColumn {
    pub fn project(&self, order: &OrderListItemDto) -> CellContent {
        match self.key {
            OrderColumnKey::Id => CellContent::Text {
                text: order.id.clone(),
                emphasis: true,
            },
            OrderColumnKey::CustomerName => CellContent::Text {
                text: order.customer_name.clone(),
                emphasis: false,
            },
            OrderColumnKey::Status => status_badge(&order.status),
            OrderColumnKey::Amount => CellContent::Money(format_currency(&order.amount)),
            OrderColumnKey::OrderDate => CellContent::Date(format_short_date(&order.order_date)),
            OrderColumnKey::Actions => CellContent::Actions {
                row_id: order.id.clone(),
            },
        }
    }

    /// Row actions, present on the actions column only
    pub fn actions(&self) -> Option<OrderRowActions> {
        self.actions
    }
}

pub fn build_order_columns(
    actions: OrderRowActions,
    sorting: OrderColumnSorting,
) -> Vec<OrderColumn> {
    let plain = |key, header| OrderColumn {
        key,
        header,
        actions: None,
    };

    vec![
        plain(
            OrderColumnKey::Id,
            ColumnHeader::Label {
                title: "Order",
                icon: "hash",
            },
        ),
        plain(
            OrderColumnKey::CustomerName,
            ColumnHeader::Label {
                title: "Customer",
                icon: "user",
            },
        ),
        plain(
            OrderColumnKey::Status,
            ColumnHeader::Label {
                title: "Status",
                icon: "info",
            },
        ),
        plain(
            OrderColumnKey::Amount,
            ColumnHeader::sortable("Amount", "circle-dollar", OrderSortField::Amount, &sorting),
        ),
        plain(
            OrderColumnKey::OrderDate,
            ColumnHeader::sortable("Date", "calendar", OrderSortField::OrderDate, &sorting),
        ),
        OrderColumn {
            key: OrderColumnKey::Actions,
            header: ColumnHeader::Empty,
            actions: Some(actions),
        },
    ]
}

/// Memoized column set.
///
/// Callback props do not change during a component's lifetime, so the cache
/// is bound to them once and rebuilds only when the sort state changes. This
/// keeps the grid's per-column state (widths) across unrelated re-renders.
pub struct ColumnCache {
    actions: OrderRowActions,
    on_sort: Callback<OrderSortField>,
    cached: Option<((OrderSortField, SortOrder), Arc<Vec<OrderColumn>>)>,
    builds: usize,
}

impl ColumnCache {
    pub fn new(actions: OrderRowActions, on_sort: Callback<OrderSortField>) -> Self {
        Self {
            actions,
            on_sort,
            cached: None,
            builds: 0,
        }
    }

    pub fn columns(&mut self, sort_by: OrderSortField, sort_order: SortOrder) -> Arc<Vec<OrderColumn>> {
        let deps = (sort_by, sort_order);
        if let Some((cached_deps, columns)) = &self.cached {
            if *cached_deps == deps {
                return Arc::clone(columns);
            }
        }

        let columns = Arc::new(build_order_columns(
            self.actions,
            OrderColumnSorting {
                sort_by,
                sort_order,
                on_sort: self.on_sort,
            },
        ));
        self.builds += 1;
        self.cached = Some((deps, Arc::clone(&columns)));
        columns
    }

    /// How many times the column list has been built
    pub fn builds(&self) -> usize {
        self.builds
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use std::sync::Mutex;

    fn recorder<T: Send + Sync + 'static>() -> (Callback<T>, Arc<Mutex<Vec<T>>>) {
        let calls = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&calls);
        (Callback::new(move |v: T| sink.lock().unwrap().push(v)), calls)
    }

    struct Harness {
        actions: OrderRowActions,
        viewed: Arc<Mutex<Vec<String>>>,
        edited: Arc<Mutex<Vec<String>>>,
        deleted: Arc<Mutex<Vec<String>>>,
        on_sort: Callback<OrderSortField>,
        sorted: Arc<Mutex<Vec<OrderSortField>>>,
    }

    fn harness() -> Harness {
        let (on_view, viewed) = recorder();
        let (on_edit, edited) = recorder();
        let (on_delete, deleted) = recorder();
        let (on_sort, sorted) = recorder();
        Harness {
            actions: OrderRowActions {
                on_view,
                on_edit,
                on_delete,
            },
            viewed,
            edited,
            deleted,
            on_sort,
            sorted,
        }
    }

    fn columns(h: &Harness, sort_by: OrderSortField, sort_order: SortOrder) -> Vec<OrderColumn> {
        build_order_columns(
            h.actions,
            OrderColumnSorting {
                sort_by,
                sort_order,
                on_sort: h.on_sort,
            },
        )
    }

    fn column(cols: &[OrderColumn], key: OrderColumnKey) -> &OrderColumn {
        cols.iter().find(|c| c.key == key).unwrap()
    }

    fn order(status: &str, amount: &str) -> OrderListItemDto {
        OrderListItemDto {
            id: "ord_1".to_string(),
            customer_name: "Ada Lovelace".to_string(),
            status: status.to_string(),
            amount: amount.to_string(),
            order_date: Utc.with_ymd_and_hms(2024, 3, 5, 10, 0, 0).unwrap(),
        }
    }

    /// Delivers a click to `path[0]` and lets it bubble outwards until a handler stops it
    fn click(path: &[RowClickTarget], actions: &OrderRowActions) {
        for target in path {
            if route_row_click(*target, "ord_1", actions) {
                break;
            }
        }
    }

    #[test]
    fn test_six_columns_in_fixed_order() {
        let h = harness();
        let keys: Vec<OrderColumnKey> = columns(&h, OrderSortField::OrderDate, SortOrder::Desc)
            .iter()
            .map(|c| c.key)
            .collect();
        assert_eq!(
            keys,
            vec![
                OrderColumnKey::Id,
                OrderColumnKey::CustomerName,
                OrderColumnKey::Status,
                OrderColumnKey::Amount,
                OrderColumnKey::OrderDate,
                OrderColumnKey::Actions,
            ]
        );
    }

    #[test]
    fn test_only_amount_and_date_are_sortable() {
        let h = harness();
        let cols = columns(&h, OrderSortField::OrderDate, SortOrder::Desc);
        let sortable: Vec<OrderColumnKey> = cols
            .iter()
            .filter(|c| c.header.is_sortable())
            .map(|c| c.key)
            .collect();
        assert_eq!(sortable, vec![OrderColumnKey::Amount, OrderColumnKey::OrderDate]);
        assert!(column(&cols, OrderColumnKey::Actions).actions().is_some());
        assert!(column(&cols, OrderColumnKey::Id).actions().is_none());
        assert_eq!(column(&cols, OrderColumnKey::Actions).header.title(), None);
    }

    #[test]
    fn test_direction_shown_only_on_active_column() {
        let h = harness();
        let cols = columns(&h, OrderSortField::Amount, SortOrder::Asc);
        assert_eq!(
            column(&cols, OrderColumnKey::Amount).header.direction(),
            Some(SortOrder::Asc)
        );
        assert_eq!(column(&cols, OrderColumnKey::OrderDate).header.direction(), None);
    }

    #[test]
    fn test_amount_header_click_reports_once() {
        let h = harness();
        let cols = columns(&h, OrderSortField::OrderDate, SortOrder::Desc);
        assert!(column(&cols, OrderColumnKey::Amount).header.click());
        assert_eq!(*h.sorted.lock().unwrap(), vec![OrderSortField::Amount]);
    }

    #[test]
    fn test_active_header_click_does_not_toggle_locally() {
        let h = harness();
        let cols = columns(&h, OrderSortField::OrderDate, SortOrder::Desc);
        let date = column(&cols, OrderColumnKey::OrderDate);
        date.header.click();
        assert_eq!(*h.sorted.lock().unwrap(), vec![OrderSortField::OrderDate]);
        assert_eq!(date.header.direction(), Some(SortOrder::Desc));
    }

    #[test]
    fn test_label_header_click_is_ignored() {
        let h = harness();
        let cols = columns(&h, OrderSortField::OrderDate, SortOrder::Desc);
        assert!(!column(&cols, OrderColumnKey::Status).header.click());
        assert!(h.sorted.lock().unwrap().is_empty());
    }

    #[test]
    fn test_status_badge_variants() {
        let expected = [
            (OrderStatus::Pending, BadgeVariant::Warning),
            (OrderStatus::Paid, BadgeVariant::Success),
            (OrderStatus::Shipped, BadgeVariant::Primary),
            (OrderStatus::Cancelled, BadgeVariant::Error),
        ];
        for (status, variant) in expected {
            assert_eq!(
                status_badge(status.code()),
                CellContent::Badge {
                    label: status.code().to_string(),
                    variant,
                }
            );
        }
    }

    #[test]
    fn test_unknown_status_renders_raw_text() {
        let h = harness();
        let cols = columns(&h, OrderSortField::OrderDate, SortOrder::Desc);
        assert_eq!(
            column(&cols, OrderColumnKey::Status).project(&order("on_hold", "1")),
            CellContent::Badge {
                label: "on_hold".to_string(),
                variant: BadgeVariant::Neutral,
            }
        );
    }

    #[test]
    fn test_amount_and_date_cells() {
        let h = harness();
        let cols = columns(&h, OrderSortField::OrderDate, SortOrder::Desc);
        let row = order("paid", "1234.5");
        assert_eq!(
            column(&cols, OrderColumnKey::Amount).project(&row),
            CellContent::Money(Ok("$1,234.50".to_string()))
        );
        assert_eq!(
            column(&cols, OrderColumnKey::OrderDate).project(&row),
            CellContent::Date("Mar 5, 2024".to_string())
        );
        assert_eq!(
            column(&cols, OrderColumnKey::Actions).project(&row),
            CellContent::Actions {
                row_id: "ord_1".to_string()
            }
        );
    }

    #[test]
    fn test_malformed_amount_is_an_error() {
        let h = harness();
        let cols = columns(&h, OrderSortField::OrderDate, SortOrder::Desc);
        let cell = column(&cols, OrderColumnKey::Amount).project(&order("paid", "N/A"));
        match cell {
            CellContent::Money(Err(err)) => assert_eq!(err.value, "N/A"),
            other => panic!("expected an amount error, got {:?}", other),
        }
    }

    #[test]
    fn test_row_click_views_order() {
        let h = harness();
        click(&[RowClickTarget::Row], &h.actions);
        assert_eq!(*h.viewed.lock().unwrap(), vec!["ord_1".to_string()]);
    }

    #[test]
    fn test_delete_menu_item_does_not_view() {
        let h = harness();
        click(
            &[RowClickTarget::MenuItem(RowAction::Delete), RowClickTarget::Row],
            &h.actions,
        );
        assert_eq!(*h.deleted.lock().unwrap(), vec!["ord_1".to_string()]);
        assert!(h.viewed.lock().unwrap().is_empty());
    }

    #[test]
    fn test_menu_trigger_and_items_stop_propagation() {
        let h = harness();
        click(&[RowClickTarget::MenuTrigger, RowClickTarget::Row], &h.actions);
        click(
            &[RowClickTarget::MenuItem(RowAction::Edit), RowClickTarget::Row],
            &h.actions,
        );
        click(
            &[RowClickTarget::MenuItem(RowAction::View), RowClickTarget::Row],
            &h.actions,
        );
        assert_eq!(*h.edited.lock().unwrap(), vec!["ord_1".to_string()]);
        // only the explicit "View" item
        assert_eq!(*h.viewed.lock().unwrap(), vec!["ord_1".to_string()]);
    }

    #[test]
    fn test_column_cache_rebuilds_on_sort_change_only() {
        let h = harness();
        let mut cache = ColumnCache::new(h.actions, h.on_sort);

        let first = cache.columns(OrderSortField::OrderDate, SortOrder::Desc);
        let again = cache.columns(OrderSortField::OrderDate, SortOrder::Desc);
        assert!(Arc::ptr_eq(&first, &again));
        assert_eq!(cache.builds(), 1);

        let flipped = cache.columns(OrderSortField::OrderDate, SortOrder::Asc);
        assert!(!Arc::ptr_eq(&first, &flipped));
        cache.columns(OrderSortField::Amount, SortOrder::Asc);
        assert_eq!(cache.builds(), 3);
    }
}
