use dioxus::prelude::*;
use store::FormField;

use crate::components::{Button, ButtonVariant, Input};
use crate::users::{use_users, use_users_page};

use super::fields;

/// The "Create User" form at the top of the page.
#[component]
pub fn CreateUserForm() -> Element {
    let page = use_users_page();
    let mut users = use_users();

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        spawn(async move {
            let mut users = users;
            users.submit_create().await;
        });
    };

    rsx! {
        form {
            class: "flex flex-col gap-2",
            onsubmit: handle_submit,
            h1 { class: "text-xl font-bold mb-4", "Create User" }

            for field in FormField::ALL {
                Input {
                    key: "{field.column()}",
                    class: "w-full",
                    name: field.column().to_string(),
                    r#type: fields::input_type(field).to_string(),
                    placeholder: fields::label(field).to_string(),
                    value: page.read().form().get(field).to_string(),
                    oninput: move |evt: FormEvent| users.set_field(field, evt.value()),
                }
            }

            Button {
                variant: ButtonVariant::Primary,
                r#type: "submit",
                disabled: page.read().is_busy(),
                "Submit"
            }
        }
    }
}
