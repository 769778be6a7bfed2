use leptos::prelude::*;

#[component]
pub fn Input(
    #[prop(into, default = String::from("text"))] input_type: String,
    #[prop(optional, into)] placeholder: String,
) -> impl IntoView {
    let placeholder = (!placeholder.is_empty()).then_some(placeholder);
    view! {
        <input
            type=input_type
            placeholder=placeholder
            class="h-10 w-full max-w-sm rounded-md border border-gray-300 bg-transparent px-3 py-2 text-sm placeholder:text-gray-400 focus:outline-none focus:ring-2 focus:ring-violet-600"
        />
    }
}
