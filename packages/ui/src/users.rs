//! Users page context and the controller behind its buttons.
//!
//! The page state lives in a single `Signal<UsersPage>` provided by
//! [`crate::views::UsersView`]. [`use_users`] binds that signal, the toast
//! stack and [`ApiTable`] into a [`UsersController`], so the buttons run the
//! same begin, call, finish, announce, refresh sequence the store tests cover.

use api::ApiTable;
use dioxus::prelude::*;
use store::{Notification, PageHandle, UsersController, UsersPage};

use crate::components::{use_toast, ToastOptions};

/// Controller for the mounted users page.
pub type Users = UsersController<ApiTable, PageSignal>;

/// Get the users page state provided by the enclosing view.
pub fn use_users_page() -> Signal<UsersPage> {
    use_context::<Signal<UsersPage>>()
}

/// [`PageHandle`] over the page signal. Announcements become success toasts.
#[derive(Clone, Copy)]
pub struct PageSignal {
    page: Signal<UsersPage>,
    announce: Callback<Notification>,
}

impl PageHandle for PageSignal {
    fn update<R>(&mut self, f: impl FnOnce(&mut UsersPage) -> R) -> R {
        let mut page = self.page.write();
        f(&mut page)
    }

    fn announce(&mut self, note: &Notification) {
        self.announce.call(note.clone());
    }
}

pub fn use_users() -> Users {
    let page = use_users_page();
    let toast = use_toast();
    let announce = use_callback(move |note: Notification| {
        toast.success(note.title, ToastOptions::new().description(note.description));
    });

    UsersController::attach(ApiTable, PageSignal { page, announce })
}
