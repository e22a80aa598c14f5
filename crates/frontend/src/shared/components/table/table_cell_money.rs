//! Table cell for currency values

use contracts::domain::a025_order::AmountParseError;
use leptos::prelude::*;
use thaw::*;

/// Shows a formatted amount, or an explicit error marker when the amount could
/// not be parsed. The raw value is kept in the tooltip for diagnosis.
#[component]
pub fn TableCellMoney(value: Result<String, AmountParseError>) -> impl IntoView {
    match value {
        Ok(text) => view! {
            <TableCell class="text-right">
                <TableCellLayout>{text}</TableCellLayout>
            </TableCell>
        }
        .into_any(),
        Err(err) => view! {
            <TableCell class="text-right table__cell--error">
                <TableCellLayout>
                    <span title=err.to_string() style="color: var(--color-error-700);">
                        "Invalid amount"
                    </span>
                </TableCellLayout>
            </TableCell>
        }
        .into_any(),
    }
}
