use leptos::prelude::*;

/// Thin wrapper over `<img>`. Resolving `src` and surfacing load failures
/// is the asset pipeline's job, not this component's.
#[component]
pub fn Image(
    #[prop(into)] src: String,
    #[prop(into)] alt: String,
    #[prop(optional, into)] width: Option<u32>,
    #[prop(optional, into)] height: Option<u32>,
    #[prop(optional, into)] sizes: String,
    #[prop(optional, into)] class: String,
) -> impl IntoView {
    let sizes = (!sizes.is_empty()).then_some(sizes);
    let class = (!class.is_empty()).then_some(class);
    view! {
        <img
            src=src
            alt=alt
            width=width.map(|w| w.to_string())
            height=height.map(|h| h.to_string())
            sizes=sizes
            class=class
            decoding="async"
        />
    }
}
