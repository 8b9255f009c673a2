//! Small set of styled building blocks shared by every view.

mod button;
pub use button::{Button, ButtonVariant};

mod input;
pub use input::Input;

mod label;
pub use label::Label;

mod table;
pub use table::{Table, TableBody, TableCell, TableHead, TableHeader, TableRow};

pub use dioxus_primitives::alert_dialog::{
    AlertDialogActions, AlertDialogCancel, AlertDialogContent, AlertDialogDescription,
    AlertDialogRoot, AlertDialogTitle,
};
pub use dioxus_primitives::toast::{use_toast, ToastOptions, ToastProvider};
