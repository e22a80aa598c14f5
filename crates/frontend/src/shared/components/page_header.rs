use leptos::prelude::*;

/// Title row of a list page with an optional record count and action slot
#[component]
pub fn PageHeader(
    #[prop(into)] title: String,
    /// Shown as a pill after the title once known
    #[prop(optional, into)]
    count: MaybeProp<usize>,
    #[prop(optional)] children: Option<Children>,
) -> impl IntoView {
    view! {
        <div class="page-header">
            <div class="page-header__text">
                <h1 class="page-header__title">
                    {title}
                    {move || count.get().map(|n| view! {
                        <span class="page-header__count">{n}</span>
                    })}
                </h1>
            </div>
            {children.map(|children| view! {
                <div class="page-header__actions">{children()}</div>
            })}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_header_without_actions() {
        let owner = Owner::new();
        owner.with(|| {
            let _header = view! { <PageHeader title="Orders" count=3usize /> };
            let _with_actions = view! {
                <PageHeader title="Orders">
                    <span>"New"</span>
                </PageHeader>
            };
        });
    }
}
