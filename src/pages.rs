use crate::components::{Button, Header, Image, Input};
use leptos::prelude::*;

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <Header />
        <div class="px-4">
            <Image
                src="/banner.png"
                alt="Agende com os melhores com a aparatus"
                sizes="100vw"
                class="h-auto w-full"
            />
        </div>
    }
}

/// Inert sample markup for eyeballing the primitives. Nothing here is wired
/// to state or handlers.
#[component]
pub fn DemoPage() -> impl IntoView {
    view! {
        <main class="flex flex-grow flex-col items-center justify-center gap-4 p-5">
            <Button>"FSW"</Button>
            <Input placeholder="Enter your name" />
        </main>
    }
}

#[cfg(all(test, feature = "ssr"))]
mod tests {
    use super::*;

    #[test]
    fn home_page_is_header_then_full_width_banner() {
        let html = view! { <HomePage /> }.to_html();
        assert_eq!(html.matches("<header").count(), 1);
        assert_eq!(html.matches(r#"src="/banner.png""#).count(), 1);
        assert!(html.contains("h-auto w-full"));

        let header = html.find("<header").unwrap();
        let banner = html.find(r#"src="/banner.png""#).unwrap();
        assert!(header < banner);
    }

    #[test]
    fn demo_page_has_one_inert_button_and_one_input() {
        let html = view! { <DemoPage /> }.to_html();
        assert_eq!(html.matches("<button").count(), 1);
        assert_eq!(html.matches("<input").count(), 1);
        assert!(html.contains("FSW"));
        assert!(html.contains(r#"placeholder="Enter your name""#));
        assert!(!html.contains("on:click"));
    }

    #[test]
    fn pages_render_identically_across_passes() {
        assert_eq!(
            view! { <HomePage /> }.to_html(),
            view! { <HomePage /> }.to_html()
        );
        assert_eq!(
            view! { <DemoPage /> }.to_html(),
            view! { <DemoPage /> }.to_html()
        );
    }
}
