use dioxus::prelude::*;
use store::UserRecord;

use crate::components::{Table, TableBody, TableCell, TableHead, TableHeader, TableRow};
use crate::icons::{FaPen, FaTrash};
use crate::users::{use_users, use_users_page};
use crate::Icon;

/// Listing of every user with per-row edit and delete affordances.
#[component]
pub fn UsersTable() -> Element {
    let users = use_users_page().read().users().to_vec();

    rsx! {
        Table {
            TableHeader {
                TableRow {
                    TableHead { "Name" }
                    TableHead { "Email" }
                    TableHead { "Password" }
                    TableHead { "Options" }
                }
            }
            TableBody {
                for user in users {
                    UserRow { key: "{user.user_id}", user: user.clone() }
                }
            }
        }
    }
}

#[component]
fn UserRow(user: UserRecord) -> Element {
    let mut users = use_users();
    let edit_target = user.clone();
    let delete_key = user.user_id.clone();

    rsx! {
        TableRow {
            TableCell { "{user.name}" }
            TableCell { "{user.email}" }
            TableCell { "{user.password}" }
            TableCell {
                class: "flex gap-2",
                button {
                    class: "inline-flex items-center gap-1 text-blue-500 cursor-pointer",
                    onclick: move |_| users.open_edit(&edit_target),
                    Icon { icon: FaPen, width: 12, height: 12 }
                    "Edit"
                }
                button {
                    class: "inline-flex items-center gap-1 text-red-500 cursor-pointer",
                    onclick: move |_| users.request_delete(delete_key.clone()),
                    Icon { icon: FaTrash, width: 12, height: 12 }
                    "Delete"
                }
            }
        }
    }
}
