use super::state::{parse_amount_bound, toggle_status, FilterRemoval, OrderFilterState};
use crate::shared::components::filter_panel::{FilterPopover, FilterTag};
use crate::shared::components::ui::{Checkbox, Input};
use crate::shared::date_utils::{format_input_date, parse_input_date};
use chrono::NaiveDate;
use contracts::domain::a025_order::{OrderStatus, MAX_AMOUNT};
use leptos::prelude::*;

/// Filter intents reported to the owner
#[derive(Clone, Copy)]
pub struct FilterHandlers {
    pub on_statuses_change: Callback<Vec<OrderStatus>>,
    pub on_date_from_change: Callback<Option<NaiveDate>>,
    pub on_date_to_change: Callback<Option<NaiveDate>>,
    /// `(min, max)`
    pub on_amount_range_change: Callback<(f64, f64)>,
}

impl FilterHandlers {
    pub fn toggle_status(&self, current: &OrderFilterState, status: OrderStatus, checked: bool) {
        self.on_statuses_change
            .run(toggle_status(&current.selected_statuses, status, checked));
    }

    /// Resets one filter dimension, as done by the "x" on its badge
    pub fn remove(&self, current: &OrderFilterState, removal: FilterRemoval) {
        match removal {
            FilterRemoval::Status(status) => self.toggle_status(current, status, false),
            FilterRemoval::DateFrom => self.on_date_from_change.run(None),
            FilterRemoval::DateTo => self.on_date_to_change.run(None),
            FilterRemoval::AmountRange => self.on_amount_range_change.run((0.0, MAX_AMOUNT)),
        }
    }

    /// Min never goes above the current max; an empty field drops the bound
    pub fn set_min_amount(&self, current: &OrderFilterState, text: &str) {
        let min = parse_amount_bound(text, current.min_amount, 0.0).min(current.max_amount);
        self.on_amount_range_change.run((min, current.max_amount));
    }

    /// Max never goes below the current min; an empty field drops the bound
    pub fn set_max_amount(&self, current: &OrderFilterState, text: &str) {
        let max = parse_amount_bound(text, current.max_amount, MAX_AMOUNT).max(current.min_amount);
        self.on_amount_range_change.run((current.min_amount, max));
    }
}

fn amount_text(value: f64) -> String {
    value.to_string()
}

/// Filters trigger and panel: status checkboxes, date bounds, amount range
#[component]
pub fn OrderFilters(
    #[prop(into)] filters: Signal<OrderFilterState>,
    handlers: FilterHandlers,
    is_expanded: RwSignal<bool>,
) -> impl IntoView {
    let active_count = Signal::derive(move || filters.with(|f| f.active_filters_count()));

    view! {
        <FilterPopover is_expanded=is_expanded active_filters_count=active_count>
            <div class="filter-popover__section">
                <span class="form__label">"Status"</span>
                {OrderStatus::all()
                    .into_iter()
                    .map(|status| {
                        view! {
                            <Checkbox
                                id=format!("order-status-{}", status.code())
                                label=status.display_name().to_string()
                                checked=Signal::derive(move || {
                                    filters.with(|f| f.selected_statuses.contains(&status))
                                })
                                on_change=Callback::new(move |checked: bool| {
                                    handlers.toggle_status(&filters.get_untracked(), status, checked)
                                })
                            />
                        }
                    })
                    .collect_view()}
            </div>
            <div class="filter-popover__section filter-popover__row">
                <Input
                    id="order-date-from"
                    label="From"
                    input_type="date"
                    value=Signal::derive(move || format_input_date(filters.with(|f| f.date_from)))
                    on_input=Callback::new(move |text: String| {
                        handlers.on_date_from_change.run(parse_input_date(&text))
                    })
                />
                <Input
                    id="order-date-to"
                    label="To"
                    input_type="date"
                    value=Signal::derive(move || format_input_date(filters.with(|f| f.date_to)))
                    on_input=Callback::new(move |text: String| {
                        handlers.on_date_to_change.run(parse_input_date(&text))
                    })
                />
            </div>
            <div class="filter-popover__section filter-popover__row">
                <Input
                    id="order-amount-min"
                    label="Min amount"
                    input_type="number"
                    value=Signal::derive(move || amount_text(filters.with(|f| f.min_amount)))
                    on_input=Callback::new(move |text: String| {
                        handlers.set_min_amount(&filters.get_untracked(), &text)
                    })
                />
                <Input
                    id="order-amount-max"
                    label="Max amount"
                    input_type="number"
                    value=Signal::derive(move || amount_text(filters.with(|f| f.max_amount)))
                    on_input=Callback::new(move |text: String| {
                        handlers.set_max_amount(&filters.get_untracked(), &text)
                    })
                />
            </div>
        </FilterPopover>
    }
}

/// One removable tag per active filter
#[component]
pub fn ActiveFilterBadges(
    #[prop(into)] filters: Signal<OrderFilterState>,
    handlers: FilterHandlers,
) -> impl IntoView {
    view! {
        <div class="filter-tags">
            {move || {
                filters
                    .get()
                    .filter_tags()
                    .into_iter()
                    .map(|tag| {
                        let removal = tag.removal;
                        view! {
                            <FilterTag
                                label=tag.label
                                on_remove=Callback::new(move |_| {
                                    handlers.remove(&filters.get_untracked(), removal)
                                })
                            />
                        }
                    })
                    .collect_view()
            }}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    fn recorder<T: Send + Sync + 'static>() -> (Callback<T>, Arc<Mutex<Vec<T>>>) {
        let calls = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&calls);
        (Callback::new(move |v: T| sink.lock().unwrap().push(v)), calls)
    }

    struct Recorded {
        handlers: FilterHandlers,
        statuses: Arc<Mutex<Vec<Vec<OrderStatus>>>>,
        date_from: Arc<Mutex<Vec<Option<NaiveDate>>>>,
        date_to: Arc<Mutex<Vec<Option<NaiveDate>>>>,
        amounts: Arc<Mutex<Vec<(f64, f64)>>>,
    }

    fn recorded() -> Recorded {
        let (on_statuses_change, statuses) = recorder();
        let (on_date_from_change, date_from) = recorder();
        let (on_date_to_change, date_to) = recorder();
        let (on_amount_range_change, amounts) = recorder();
        Recorded {
            handlers: FilterHandlers {
                on_statuses_change,
                on_date_from_change,
                on_date_to_change,
                on_amount_range_change,
            },
            statuses,
            date_from,
            date_to,
            amounts,
        }
    }

    fn active() -> OrderFilterState {
        OrderFilterState {
            selected_statuses: vec![OrderStatus::Paid, OrderStatus::Cancelled],
            date_from: NaiveDate::from_ymd_opt(2024, 1, 1),
            date_to: NaiveDate::from_ymd_opt(2024, 2, 1),
            min_amount: 50.0,
            max_amount: 900.0,
            ..Default::default()
        }
    }

    #[test]
    fn test_remove_status_keeps_the_others() {
        let r = recorded();
        r.handlers
            .remove(&active(), FilterRemoval::Status(OrderStatus::Paid));
        assert_eq!(
            *r.statuses.lock().unwrap(),
            vec![vec![OrderStatus::Cancelled]]
        );
        assert!(r.amounts.lock().unwrap().is_empty());
    }

    #[test]
    fn test_remove_date_bounds_and_amount_range() {
        let r = recorded();
        let current = active();
        r.handlers.remove(&current, FilterRemoval::DateFrom);
        r.handlers.remove(&current, FilterRemoval::DateTo);
        r.handlers.remove(&current, FilterRemoval::AmountRange);
        assert_eq!(*r.date_from.lock().unwrap(), vec![None]);
        assert_eq!(*r.date_to.lock().unwrap(), vec![None]);
        assert_eq!(*r.amounts.lock().unwrap(), vec![(0.0, MAX_AMOUNT)]);
    }

    #[test]
    fn test_every_tag_removal_clears_its_dimension() {
        let r = recorded();
        let current = active();
        for tag in current.filter_tags() {
            r.handlers.remove(&current, tag.removal);
        }
        assert_eq!(r.statuses.lock().unwrap().len(), 2);
        assert_eq!(r.date_from.lock().unwrap().len(), 1);
        assert_eq!(r.date_to.lock().unwrap().len(), 1);
        assert_eq!(r.amounts.lock().unwrap().len(), 1);
    }

    #[test]
    fn test_amount_inputs_keep_the_other_bound() {
        let r = recorded();
        let current = active();
        r.handlers.set_min_amount(&current, "75");
        r.handlers.set_max_amount(&current, "oops");
        assert_eq!(
            *r.amounts.lock().unwrap(),
            vec![(75.0, 900.0), (50.0, 900.0)]
        );
    }

    #[test]
    fn test_amount_bounds_never_cross() {
        let r = recorded();
        let current = OrderFilterState {
            min_amount: 50.0,
            max_amount: 100.0,
            ..Default::default()
        };
        r.handlers.set_min_amount(&current, "500");
        r.handlers.set_max_amount(&current, "10");
        assert_eq!(
            *r.amounts.lock().unwrap(),
            vec![(100.0, 100.0), (50.0, 50.0)]
        );
    }

    #[test]
    fn test_cleared_amount_input_drops_the_bound() {
        let r = recorded();
        let current = OrderFilterState {
            min_amount: 50.0,
            max_amount: 100.0,
            ..Default::default()
        };
        r.handlers.set_min_amount(&current, "");
        r.handlers.set_max_amount(&current, " ");
        assert_eq!(
            *r.amounts.lock().unwrap(),
            vec![(0.0, 100.0), (50.0, MAX_AMOUNT)]
        );
    }

    #[test]
    fn test_toggle_status_adds_in_canonical_order() {
        let r = recorded();
        r.handlers
            .toggle_status(&active(), OrderStatus::Pending, true);
        assert_eq!(
            *r.statuses.lock().unwrap(),
            vec![vec![
                OrderStatus::Pending,
                OrderStatus::Paid,
                OrderStatus::Cancelled
            ]]
        );
    }
}
