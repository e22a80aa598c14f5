use leptos::prelude::*;
use thaw::{Spinner, SpinnerSize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ButtonVariant {
    #[default]
    Primary,
    Outline,
    Ghost,
}

impl ButtonVariant {
    fn class(&self) -> &'static str {
        match self {
            ButtonVariant::Primary => "button--primary",
            ButtonVariant::Outline => "button--secondary",
            ButtonVariant::Ghost => "button--ghost",
        }
    }
}

/// Button with variants, an optional busy spinner and a reactive disabled state
#[component]
pub fn Button(
    #[prop(optional, into)] variant: MaybeProp<ButtonVariant>,
    /// Smaller padding for toolbars and menus
    #[prop(optional)]
    small: bool,
    /// Disabled state (reactive)
    #[prop(optional, into)]
    disabled: MaybeProp<bool>,
    /// Shows a spinner before the content
    #[prop(optional, into)]
    busy: MaybeProp<bool>,
    /// Click event handler
    #[prop(optional)]
    on_click: Option<Callback<leptos::ev::MouseEvent>>,
    children: Children,
) -> impl IntoView {
    let size_class = if small { "button--small" } else { "" };
    let variant_class = move || variant.get().unwrap_or_default().class();
    let is_busy = move || busy.get().unwrap_or(false);

    view! {
        <button
            type="button"
            class=move || format!("button {} {}", variant_class(), size_class)
            disabled=move || disabled.get().unwrap_or(false)
            aria-busy=move || is_busy().to_string()
            on:click=move |ev| {
                if let Some(handler) = on_click {
                    handler.run(ev);
                }
            }
        >
            <Show when=is_busy>
                <Spinner size=SpinnerSize::Small />
            </Show>
            {children()}
        </button>
    }
}
