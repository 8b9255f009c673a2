use dioxus::prelude::*;

use crate::components::{
    AlertDialogActions, AlertDialogCancel, AlertDialogContent, AlertDialogDescription,
    AlertDialogRoot, AlertDialogTitle, Button, ButtonVariant,
};
use crate::users::{use_users, use_users_page};

/// Confirmation prompt guarding a delete. Open once a row's Delete affordance
/// has been clicked; confirming takes the pending key and closes it.
#[component]
pub fn DeleteUserDialog() -> Element {
    let page = use_users_page();
    let mut users = use_users();
    let open = page.read().pending_delete().is_some();

    rsx! {
        AlertDialogRoot {
            class: "alert-dialog-backdrop",
            open: Some(open),
            on_open_change: move |open: bool| {
                if !open {
                    users.cancel_delete();
                }
            },
            AlertDialogContent {
                class: "alert-dialog",
                AlertDialogTitle { "Are you absolutely sure?" }
                AlertDialogDescription {
                    "This action cannot be undone. This will permanently delete the account "
                    "and remove its data from our servers."
                }
                AlertDialogActions {
                    class: "flex justify-end gap-2 mt-6",
                    AlertDialogCancel { class: "alert-dialog-cancel", "Cancel" }
                    Button {
                        variant: ButtonVariant::Destructive,
                        disabled: page.read().is_busy(),
                        onclick: move |_| {
                            spawn(async move {
                                let mut users = users;
                                users.confirm_delete().await;
                            });
                        },
                        "Confirm"
                    }
                }
            }
        }
    }
}
