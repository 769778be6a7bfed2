use leptos::prelude::*;

/// Visual variant tag for [`Button`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ButtonVariant {
    #[default]
    Default,
    Outline,
    Ghost,
}

/// Size tag for [`Button`]. `Icon` produces a square hit target for
/// icon-only triggers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ButtonSize {
    #[default]
    Default,
    Icon,
}

fn variant_classes(variant: ButtonVariant) -> &'static str {
    match variant {
        ButtonVariant::Default => "bg-violet-600 text-white hover:bg-violet-700",
        ButtonVariant::Outline => {
            "border border-gray-300 bg-transparent text-gray-900 hover:bg-gray-100"
        }
        ButtonVariant::Ghost => "bg-transparent text-gray-900 hover:bg-gray-100",
    }
}

fn size_classes(size: ButtonSize) -> &'static str {
    match size {
        ButtonSize::Default => "h-10 px-4 py-2",
        ButtonSize::Icon => "h-10 w-10",
    }
}

pub fn button_classes(variant: ButtonVariant, size: ButtonSize) -> String {
    format!(
        "inline-flex items-center justify-center rounded-md text-sm font-medium transition-colors {} {}",
        variant_classes(variant),
        size_classes(size)
    )
}

#[component]
pub fn Button(
    #[prop(optional)] variant: ButtonVariant,
    #[prop(optional)] size: ButtonSize,
    children: Children,
) -> impl IntoView {
    view! {
        <button type="button" class=button_classes(variant, size)>
            {children()}
        </button>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_button_fills_and_pads() {
        let classes = button_classes(ButtonVariant::Default, ButtonSize::Default);
        assert!(classes.contains("bg-violet-600"));
        assert!(classes.contains("px-4"));
        assert!(!classes.contains("border "));
    }

    #[test]
    fn outline_icon_button_is_square_and_bordered() {
        let classes = button_classes(ButtonVariant::Outline, ButtonSize::Icon);
        assert!(classes.contains("border"));
        assert!(classes.contains("h-10 w-10"));
        assert!(!classes.contains("px-4"));
    }

    #[test]
    fn every_combination_keeps_the_shared_base() {
        for variant in [
            ButtonVariant::Default,
            ButtonVariant::Outline,
            ButtonVariant::Ghost,
        ] {
            for size in [ButtonSize::Default, ButtonSize::Icon] {
                let classes = button_classes(variant, size);
                assert!(classes.starts_with("inline-flex items-center justify-center"));
                assert!(classes.contains("rounded-md"));
            }
        }
    }
}
