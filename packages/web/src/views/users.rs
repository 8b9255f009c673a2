use dioxus::prelude::*;
use ui::views::UsersView;

/// `/`: the user-management page.
#[component]
pub fn Users() -> Element {
    rsx! {
        UsersView {}
    }
}
