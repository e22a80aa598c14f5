use leptos::prelude::*;

/// Labelled checkbox reporting the new checked state
#[component]
pub fn Checkbox(
    #[prop(into)] label: String,
    #[prop(into)] checked: Signal<bool>,
    on_change: Callback<bool>,
    /// ID for the checkbox element
    #[prop(into)]
    id: String,
) -> impl IntoView {
    let label_for = id.clone();

    view! {
        <div class="form__checkbox-wrapper">
            <input
                id=id
                type="checkbox"
                class="form__checkbox"
                prop:checked=move || checked.get()
                on:change=move |ev| on_change.run(event_target_checked(&ev))
            />
            <label class="form__checkbox-label" for=label_for>
                {label}
            </label>
        </div>
    }
}
