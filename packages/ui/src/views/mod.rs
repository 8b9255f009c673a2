mod fields;

mod create_user_form;
pub use create_user_form::CreateUserForm;

mod users_table;
pub use users_table::UsersTable;

mod edit_user_dialog;
pub use edit_user_dialog::EditUserDialog;

mod delete_user_dialog;
pub use delete_user_dialog::DeleteUserDialog;

mod users;
pub use users::UsersView;
