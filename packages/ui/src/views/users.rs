use dioxus::prelude::*;
use store::UsersPage;

use crate::users::use_users;

use super::{CreateUserForm, DeleteUserDialog, EditUserDialog, UsersTable};

/// The user-management page: create form, listing, and the edit and delete
/// dialogs. Owns the page state for its lifetime and loads the table on mount.
#[component]
pub fn UsersView() -> Element {
    use_context_provider(|| Signal::new(UsersPage::new()));
    let users = use_users();

    use_hook(move || {
        spawn(async move {
            let mut users = users;
            users.mount().await;
        });
    });

    rsx! {
        div {
            class: "flex justify-center p-8",
            div {
                class: "flex flex-col gap-2 w-1/2",
                CreateUserForm {}
                UsersTable {}
            }
        }

        EditUserDialog {}
        DeleteUserDialog {}
    }
}
