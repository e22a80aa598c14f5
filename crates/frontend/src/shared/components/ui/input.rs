use leptos::prelude::*;

/// Input with an optional label and leading icon.
///
/// `on_input` fires on every keystroke; the value shown always comes from
/// `value`, so the owner decides what the field displays.
#[component]
pub fn Input(
    #[prop(optional, into)] label: MaybeProp<String>,
    #[prop(into)] value: Signal<String>,
    on_input: Callback<String>,
    #[prop(optional, into)] placeholder: MaybeProp<String>,
    /// "text" (default), "date", "number", ...
    #[prop(optional, into)]
    input_type: MaybeProp<String>,
    /// Icon shown inside the field on the left
    #[prop(optional)]
    leading_icon: Option<AnyView>,
    #[prop(optional, into)] id: MaybeProp<String>,
    #[prop(optional, into)] class: MaybeProp<String>,
) -> impl IntoView {
    let input_id = move || id.get().unwrap_or_default();
    let input_placeholder = move || placeholder.get().unwrap_or_default();
    let input_t = move || input_type.get().unwrap_or_else(|| "text".to_string());
    let has_icon = leading_icon.is_some();
    let input_class = move || {
        format!(
            "form__input {} {}",
            if has_icon { "form__input--with-icon" } else { "" },
            class.get().unwrap_or_default()
        )
    };

    view! {
        <div class="form__group">
            {move || label.get().map(|l| view! {
                <label class="form__label" for=input_id>
                    {l}
                </label>
            })}
            <div class="form__input-wrapper" style="position: relative;">
                {leading_icon.map(|icon| view! {
                    <span class="form__input-icon" style="position: absolute; left: 10px; top: 50%; transform: translateY(-50%);">
                        {icon}
                    </span>
                })}
                <input
                    id=input_id
                    class=input_class
                    type=input_t
                    prop:value=move || value.get()
                    placeholder=input_placeholder
                    on:input=move |ev| on_input.run(event_target_value(&ev))
                />
            </div>
        </div>
    }
}
