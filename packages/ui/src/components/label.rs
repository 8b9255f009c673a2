use dioxus::prelude::*;

#[component]
pub fn Label(
    #[props(default)] html_for: String,
    #[props(default)] class: String,
    children: Element,
) -> Element {
    rsx! {
        label {
            r#for: "{html_for}",
            class: "text-sm font-medium text-neutral-700 {class}",
            {children}
        }
    }
}
