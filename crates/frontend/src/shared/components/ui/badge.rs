use leptos::prelude::*;

/// CSS modifier for a badge variant: "primary", "success", "warning",
/// "error", anything else is "neutral"
pub fn variant_class(variant: &str) -> &'static str {
    match variant {
        "primary" => "badge--primary",
        "success" => "badge--success",
        "warning" => "badge--warning",
        "error" => "badge--error",
        _ => "badge--neutral",
    }
}

#[component]
pub fn Badge(
    /// Badge variant, see `variant_class`
    #[prop(optional, into)]
    variant: MaybeProp<String>,
    children: Children,
) -> impl IntoView {
    let class = move || {
        format!(
            "badge {}",
            variant_class(variant.get().as_deref().unwrap_or("neutral"))
        )
    };

    view! { <span class=class>{children()}</span> }
}
