use leptos::prelude::*;

/// Visual variants understood by the `.badge--*` styles
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BadgeVariant {
    Primary,
    Success,
    Warning,
    Error,
    #[default]
    Neutral,
}

impl BadgeVariant {
    pub fn class(&self) -> &'static str {
        match self {
            BadgeVariant::Primary => "badge--primary",
            BadgeVariant::Success => "badge--success",
            BadgeVariant::Warning => "badge--warning",
            BadgeVariant::Error => "badge--error",
            BadgeVariant::Neutral => "badge--neutral",
        }
    }
}

/// Badge component with different variants
#[component]
pub fn Badge(
    #[prop(optional, into)] variant: MaybeProp<BadgeVariant>,
    /// Badge content
    children: Children,
) -> impl IntoView {
    view! {
        <span class=move || format!("badge {}", variant.get().unwrap_or_default().class())>
            {children()}
        </span>
    }
}
