use crate::components::button::{Button, ButtonSize, ButtonVariant};
use crate::components::image::Image;
use crate::components::menu_icon::MenuIcon;
use leptos::prelude::*;

#[component]
pub fn Header() -> impl IntoView {
    view! {
        <header class="flex w-full items-center justify-between border-b border-gray-200 bg-white px-5 py-6">
            <Image src="/logo.svg" alt="Aparatus" width=91u32 height=24u32 />
            <Button variant=ButtonVariant::Outline size=ButtonSize::Icon>
                <MenuIcon />
            </Button>
        </header>
    }
}
