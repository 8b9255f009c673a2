use dioxus::prelude::*;

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum ButtonVariant {
    #[default]
    Primary,
    Destructive,
    Outline,
}

impl ButtonVariant {
    fn class(&self) -> &'static str {
        match self {
            ButtonVariant::Primary => "bg-neutral-900 text-white hover:bg-neutral-700",
            ButtonVariant::Destructive => "bg-red-600 text-white hover:bg-red-500",
            ButtonVariant::Outline => "border border-neutral-300 bg-white text-neutral-800 hover:bg-neutral-50",
        }
    }
}

#[component]
pub fn Button(
    #[props(default)] variant: ButtonVariant,
    #[props(default)] class: String,
    #[props(default = "button".to_string())] r#type: String,
    #[props(default)] disabled: bool,
    onclick: Option<EventHandler<MouseEvent>>,
    children: Element,
) -> Element {
    let variant_class = variant.class();

    rsx! {
        button {
            class: "inline-flex items-center justify-center rounded px-4 py-2 text-sm font-medium cursor-pointer disabled:opacity-50 disabled:cursor-not-allowed {variant_class} {class}",
            r#type: r#type.clone(),
            disabled,
            onclick: move |evt| {
                if let Some(handler) = &onclick {
                    handler.call(evt);
                }
            },
            {children}
        }
    }
}
