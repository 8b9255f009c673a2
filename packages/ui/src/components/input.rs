use dioxus::prelude::*;

/// Controlled text input. The caller owns `value` and updates it from `oninput`.
#[component]
pub fn Input(
    #[props(default)] id: String,
    #[props(default)] name: String,
    #[props(default)] class: String,
    #[props(default = "text".to_string())] r#type: String,
    #[props(default)] placeholder: String,
    #[props(default)] value: String,
    oninput: Option<EventHandler<FormEvent>>,
) -> Element {
    rsx! {
        input {
            id: "{id}",
            name: "{name}",
            class: "bg-white border border-neutral-300 rounded px-3 py-2 text-sm text-neutral-800 outline-none focus:border-primary-500 {class}",
            r#type: r#type.clone(),
            placeholder: "{placeholder}",
            value: "{value}",
            oninput: move |evt| {
                if let Some(handler) = &oninput {
                    handler.call(evt);
                }
            },
        }
    }
}
