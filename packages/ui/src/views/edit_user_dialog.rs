use dioxus::prelude::*;
use store::FormField;

use crate::components::{
    AlertDialogActions, AlertDialogCancel, AlertDialogContent, AlertDialogDescription,
    AlertDialogRoot, AlertDialogTitle, Button, ButtonVariant, Input, Label,
};
use crate::users::{use_users, use_users_page};

use super::fields;

/// Edit dialog for the row whose key is the current editing target.
/// Open exactly while an edit is in progress; dismissing it clears the target.
#[component]
pub fn EditUserDialog() -> Element {
    let page = use_users_page();
    let mut users = use_users();
    let open = page.read().editing().is_some();

    let handle_save = move |evt: FormEvent| {
        evt.prevent_default();
        spawn(async move {
            let mut users = users;
            users.submit_update().await;
        });
    };

    rsx! {
        AlertDialogRoot {
            class: "alert-dialog-backdrop",
            open: Some(open),
            on_open_change: move |open: bool| {
                if !open {
                    users.cancel_edit();
                }
            },
            AlertDialogContent {
                class: "alert-dialog",
                AlertDialogTitle { "Edit Account" }
                AlertDialogDescription {
                    "Make changes to your profile here. Click save when you're done."
                }
                form {
                    onsubmit: handle_save,
                    div {
                        class: "grid gap-4 py-4",
                        for field in FormField::ALL {
                            div {
                                key: "{field.column()}",
                                class: "grid grid-cols-4 items-center gap-4",
                                Label {
                                    html_for: "edit-{field.column()}",
                                    class: "text-right",
                                    {fields::label(field)}
                                }
                                Input {
                                    id: "edit-{field.column()}",
                                    class: "col-span-3",
                                    name: field.column().to_string(),
                                    r#type: fields::input_type(field).to_string(),
                                    placeholder: fields::example(field).to_string(),
                                    value: page.read().update_form().get(field).to_string(),
                                    oninput: move |evt: FormEvent| {
                                        users.set_update_field(field, evt.value())
                                    },
                                }
                            }
                        }
                    }
                    AlertDialogActions {
                        class: "flex justify-end gap-2",
                        AlertDialogCancel { class: "alert-dialog-cancel", "Cancel" }
                        Button {
                            variant: ButtonVariant::Primary,
                            r#type: "submit",
                            disabled: page.read().is_busy(),
                            "Save Changes"
                        }
                    }
                }
            }
        }
    }
}
