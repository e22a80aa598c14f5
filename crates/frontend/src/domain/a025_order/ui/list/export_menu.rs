use crate::shared::components::ui::{Button, ButtonVariant};
use crate::shared::icons::icon;
use contracts::domain::a025_order::ExportType;
use leptos::prelude::*;

#[derive(Debug, Clone, PartialEq)]
pub struct ExportMenuItem {
    pub export_type: ExportType,
    pub label: String,
    pub disabled: bool,
}

/// One item per export format; all disabled while an export is running
pub fn export_menu_items(is_exporting: bool) -> Vec<ExportMenuItem> {
    ExportType::all()
        .into_iter()
        .map(|export_type| ExportMenuItem {
            export_type,
            label: export_type.label(),
            disabled: is_exporting,
        })
        .collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExportTrigger {
    pub label: &'static str,
    pub disabled: bool,
    pub busy: bool,
}

pub fn export_trigger(is_exporting: bool) -> ExportTrigger {
    ExportTrigger {
        label: if is_exporting { "Exporting..." } else { "Export" },
        disabled: is_exporting,
        busy: is_exporting,
    }
}

/// Reports the choice unless the item is disabled. Returns whether it fired.
pub fn select_export(item: &ExportMenuItem, on_export: Callback<ExportType>) -> bool {
    if item.disabled {
        return false;
    }
    on_export.run(item.export_type);
    true
}

#[component]
pub fn ExportMenu(
    #[prop(into)] is_exporting: Signal<bool>,
    on_export: Callback<ExportType>,
    /// Last export failure, shown next to the trigger
    #[prop(optional, into)]
    export_error: MaybeProp<String>,
) -> impl IntoView {
    let is_open = RwSignal::new(false);
    let trigger = Memo::new(move |_| export_trigger(is_exporting.get()));

    view! {
        <div class="export-menu">
            <Button
                variant=ButtonVariant::Outline
                disabled=Signal::derive(move || trigger.get().disabled)
                busy=Signal::derive(move || trigger.get().busy)
                on_click=Callback::new(move |_| is_open.update(|open| *open = !*open))
            >
                {icon("download")}
                {move || trigger.get().label}
            </Button>
            <Show when=move || is_open.get()>
                <div class="export-menu__items" role="menu">
                    {move || {
                        export_menu_items(is_exporting.get())
                            .into_iter()
                            .map(|item| {
                                let disabled = item.disabled;
                                let label = item.label.clone();
                                view! {
                                    <button
                                        type="button"
                                        role="menuitem"
                                        class="export-menu__item"
                                        disabled=disabled
                                        on:click=move |_| {
                                            if select_export(&item, on_export) {
                                                log::debug!("export requested: {}", item.label);
                                                is_open.set(false);
                                            }
                                        }
                                    >
                                        {label}
                                    </button>
                                }
                            })
                            .collect_view()
                    }}
                </div>
            </Show>
            {move || {
                export_error
                    .get()
                    .map(|message| view! { <span class="export-menu__error" role="alert">{message}</span> })
            }}
        </div>
    }
}
